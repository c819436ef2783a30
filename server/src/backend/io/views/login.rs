use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Response,
};
use log::{info, warn};
use shared::LoginRequest;
use yew::prelude::*;

use super::render_page;
use crate::backend::io::rest::mappers::LoginMapper;
use crate::backend::AppState;

/// Result line shown above the form after a submission
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_default]
    pub account: String,
    pub is_loading: bool,
    #[prop_or_default]
    pub notice: Option<Notice>,
}

/// The sign-in form. The submit button is disabled while a submission is
/// pending.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let notice = match &props.notice {
        Some(Notice::Success(message)) => html! { <p class="notice">{ message.clone() }</p> },
        Some(Notice::Failure(message)) => html! { <p class="error">{ message.clone() }</p> },
        None => html! {},
    };
    let label = if props.is_loading { "Signing in..." } else { "Sign in" };

    html! {
        <main>
            <h1>{ "Sign in" }</h1>
            { notice }
            <form method="post" action="/login">
                <p>
                    <label>
                        { "Account " }
                        <input name="account" value={props.account.clone()} autocomplete="username" />
                    </label>
                </p>
                <p>
                    <label>
                        { "Password " }
                        <input name="password" type="password" autocomplete="current-password" />
                    </label>
                </p>
                <p>
                    <button class="button" type="submit" disabled={props.is_loading}>{ label }</button>
                </p>
            </form>
            <p><a href="/">{ "Back" }</a></p>
        </main>
    }
}

pub async fn login_page(State(state): State<AppState>) -> Response {
    info!("GET /login");

    let props = LoginFormProps {
        account: String::new(),
        is_loading: state.login_service.is_loading(),
        notice: None,
    };
    render_page::<LoginForm>(StatusCode::OK, "Login", props).await
}

/// Run a submission and re-render the form with its outcome
pub async fn submit_login(
    State(state): State<AppState>,
    Form(form): Form<LoginRequest>,
) -> Response {
    info!("POST /login - account: {}", form.account);

    match state.login_service.submit(&form.account, &form.password).await {
        Ok(outcome) => {
            let props = LoginFormProps {
                account: outcome.account,
                is_loading: false,
                notice: Some(Notice::Success(outcome.message)),
            };
            render_page::<LoginForm>(StatusCode::OK, "Login", props).await
        }
        Err(e) => {
            warn!("Login form submission failed: {}", e);
            let props = LoginFormProps {
                is_loading: state.login_service.is_loading(),
                notice: Some(Notice::Failure(e.to_string())),
                account: form.account,
            };
            render_page::<LoginForm>(LoginMapper::status_for(&e), "Login", props).await
        }
    }
}
