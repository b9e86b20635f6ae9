//! Non-HTML handlers: binary passthrough, health, panic fallback

use super::{Outcome, classify, login_redirect, redirect_with, token_or_login};
use crate::pages::not_found::SomethingWentWrong;
use crate::render;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use leptos::view;
use std::sync::Arc;
use tracing::error;

/// Stream a ticket's PDF to the browser.
///
/// The backend's body is passed through untouched; on failure the user lands
/// back on the ticket list with the error banner set.
pub async fn download_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    match classify(state.client.download_ticket(&token, &id).await, &state.session) {
        Outcome::Ok(bytes) => {
            let disposition = format!("attachment; filename=\"ticket-{id}.pdf\"");
            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Outcome::Err(message) => redirect_with("/tickets", &[("error", &message)]),
        Outcome::SignedOut => login_redirect(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Top-level fallback boundary: a rendering-time defect becomes a generic
/// failure screen instead of a dropped connection.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_page(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map_or_else(|| "non-string panic payload".to_string(), Clone::clone);
    error!("handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        render::page("Something went wrong", || view! { <SomethingWentWrong/> }),
    )
        .into_response()
}
