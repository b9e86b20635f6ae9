//! Web application assembly

use crate::routes::build_routes;
use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

/// Build the complete web application with all routes and state.
///
/// The caller is expected to have run [`lms_state::SessionStore::restore`]
/// on `state.session` before serving traffic.
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes(Arc::clone(&state)).with_state(state)
}
