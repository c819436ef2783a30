use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use meeting_room_server::backend::{create_router, initialize_backend};
use meeting_room_server::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Setting up backend");
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config.server)?;

    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
