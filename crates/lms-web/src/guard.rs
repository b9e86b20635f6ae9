//! Route guard: gates every authenticated route on the session
//!
//! Re-evaluated on every request, never cached. While the initial restore is
//! still running the guard renders a placeholder instead of redirecting:
//! bouncing a logged-in admin to the login screen mid-restore would be
//! wrong. Once settled, anonymous requests are redirected to the login view.

use crate::components::Loading;
use crate::state::AppState;
use crate::render;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use leptos::view;
use std::sync::Arc;
use tracing::debug;

/// Middleware wrapped around every authenticated page and action route.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let session = state.session.snapshot();

    if session.loading {
        return render::page("Loading", || view! { <Loading/> }).into_response();
    }

    if !session.authenticated {
        debug!("unauthenticated request to {}, redirecting", request.uri().path());
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}
