use axum::{http::StatusCode, response::Response};
use log::info;
use yew::prelude::*;

use super::render_page;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main>
            <h1>{ "Meeting Room Booking" }</h1>
            <p>{ "Book meeting rooms across every floor." }</p>
            <p>
                <a class="button" href="/dashboard">{ "Go to Dashboard" }</a>
                { " " }
                <a href="/login">{ "Login Page" }</a>
            </p>
        </main>
    }
}

pub async fn landing_page() -> Response {
    info!("GET /");

    render_page::<Landing>(StatusCode::OK, "Welcome", ()).await
}
