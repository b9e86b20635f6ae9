//! Request handlers
//!
//! Shared here: the uniform reaction to an unauthorized backend response
//! (clear the session, go to the login view) and the shell-wrapped page
//! renderer. Every handler funnels backend results through [`classify`], so
//! no call site hand-rolls its own 401 handling.

pub mod actions;
pub mod api;
pub mod pages;

use crate::components::Shell;
use crate::render;
use crate::state::AppState;
use axum::response::{IntoResponse, Redirect, Response};
use leptos::{IntoView, view};
use lms_state::SessionStore;

/// Outcome of an authenticated backend call after the 401 policy ran
pub(crate) enum Outcome<T> {
    /// The call succeeded
    Ok(T),
    /// The call failed; the message is ready for display
    Err(String),
    /// The backend said 401: the session has been invalidated
    SignedOut,
}

/// Apply the uniform 401 policy to a backend result.
pub(crate) fn classify<T>(result: lms_core::Result<T>, session: &SessionStore) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(err) if err.is_unauthorized() => {
            session.invalidate();
            Outcome::SignedOut
        }
        Err(err) => Outcome::Err(err.user_message()),
    }
}

/// Redirect to the login view (the terminal step of the 401 policy).
pub(crate) fn login_redirect() -> Response {
    Redirect::to("/login").into_response()
}

/// The session token, or the login redirect when there is none.
pub(crate) fn token_or_login(state: &AppState) -> Result<String, Response> {
    state.session.token().ok_or_else(login_redirect)
}

/// Build a redirect carrying query parameters, with values URL-encoded.
pub(crate) fn redirect_with(base: &str, params: &[(&str, &str)]) -> Response {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        Redirect::to(base).into_response()
    } else {
        Redirect::to(&format!("{base}?{query}")).into_response()
    }
}

/// Render a page inside the application shell.
pub(crate) fn shell_page<F, N>(
    state: &AppState,
    title: &str,
    active: &'static str,
    inner: F,
) -> Response
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let theme = state.theme().as_str().to_string();
    let user_name = state
        .session
        .snapshot()
        .user
        .map(|user| user.full_name());
    render::page(title, move || {
        view! {
            <Shell theme=theme active=active.to_string() user_name=user_name>
                {inner()}
            </Shell>
        }
    })
    .into_response()
}

/// Like [`shell_page`], with a delayed refresh to `target`.
pub(crate) fn shell_page_with_refresh<F, N>(
    state: &AppState,
    title: &str,
    active: &'static str,
    target: &str,
    seconds: u32,
    inner: F,
) -> Response
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let theme = state.theme().as_str().to_string();
    let user_name = state
        .session
        .snapshot()
        .user
        .map(|user| user.full_name());
    render::page_with_refresh(title, target, seconds, move || {
        view! {
            <Shell theme=theme active=active.to_string() user_name=user_name>
                {inner()}
            </Shell>
        }
    })
    .into_response()
}
