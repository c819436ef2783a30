//! Server-rendered HTML pages.
//!
//! Each page is a yew function component rendered to a string with
//! [`ServerRenderer`], so every interpolated value is escaped by `html!`.
//! Views only format what the domain services hand them: calendar cells
//! arrive with their highlight already decided and schedule blocks arrive
//! with their pixel geometry already computed.

pub mod dashboard;
pub mod landing;
pub mod login;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use yew::prelude::{function_component, html, Properties};
use yew::{BaseComponent, ServerRenderer};

use crate::backend::AppState;

/// Create a router for the HTML pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing::landing_page))
        .route("/login", get(login::login_page).post(login::submit_login))
        .route("/dashboard", get(dashboard::dashboard_page))
        .route("/dashboard/floor", post(dashboard::select_floor))
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; background: #f7f5fb; color: #222; }
header { display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #5b2a86; color: #fff; }
main { padding: 24px; }
a { color: #5b2a86; }
.button { display: inline-block; padding: 8px 20px; border-radius: 999px; background: #5b2a86; color: #fff; text-decoration: none; border: none; }
.button[disabled] { opacity: 0.6; cursor: wait; }
.error { color: #b00020; }
.notice { color: #1b5e20; }
.layout { display: grid; grid-template-columns: 200px 1fr 1fr; gap: 24px; align-items: start; }
.floors ul { list-style: none; padding: 0; }
.floors li.selected button { font-weight: bold; background: #e6d9f2; }
table.calendar { border-collapse: collapse; }
table.calendar td, table.calendar th { width: 36px; height: 32px; text-align: center; }
td.selected { background: #5b2a86; color: #fff; border-radius: 50%; }
td.today { outline: 2px solid #5b2a86; border-radius: 50%; }
.schedule { position: relative; border-left: 1px solid #ccc; }
.slot { position: absolute; left: 0; right: 0; border-top: 1px solid #eee; font-size: 11px; color: #888; }
.block { position: absolute; background: #e6d9f2; border-left: 3px solid #5b2a86; font-size: 12px; overflow: hidden; }
.block.conflict { border-left-color: #b00020; }
"#;

/// Render a component to its HTML markup without hydration markers
pub(crate) async fn render_body<C>(props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send,
{
    ServerRenderer::<C>::with_props(move || props)
        .hydratable(false)
        .render()
        .await
}

/// Render a component inside the shared page chrome
pub(crate) async fn render_page<C>(
    status: StatusCode,
    title: &'static str,
    props: C::Properties,
) -> Response
where
    C: BaseComponent,
    C::Properties: Send,
{
    let body = render_body::<C>(props).await;
    let document = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Meeting Room Booking</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    );
    (status, Html(document)).into_response()
}

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> yew::Html {
    html! {
        <main>
            <p class="error">{ props.message.clone() }</p>
            <p><a href="/dashboard">{ "Back to dashboard" }</a></p>
        </main>
    }
}

/// Answer with an error page carrying `message`
pub(crate) async fn error_page(status: StatusCode, message: impl ToString) -> Response {
    let props = ErrorNoticeProps {
        message: message.to_string(),
    };
    render_page::<ErrorNotice>(status, "Error", props).await
}
