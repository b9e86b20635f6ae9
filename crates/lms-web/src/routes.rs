//! Route definitions for the admin console

use crate::handlers::{actions, api, pages};
use crate::{assets, guard, state::AppState};
use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Build the complete application router.
///
/// Everything except the login view, the health check, and static assets
/// sits behind the session guard.
pub fn build_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let protected = Router::new()
        // Page routes
        .route("/", get(pages::dashboard))
        .route("/instructors", get(pages::instructors))
        .route("/students", get(pages::students))
        .route("/courses", get(pages::courses))
        .route("/courses/new", get(pages::course_new))
        .route("/courses/:id", get(pages::course_editor))
        .route("/enrollments", get(pages::enrollments))
        .route("/tickets", get(pages::tickets))
        .route("/contacts", get(pages::contacts))
        .route("/reports/revenue", get(pages::revenue))
        .route("/activity", get(pages::activity))
        .route("/settings", get(pages::settings))
        // Action routes
        .route("/logout", post(actions::logout))
        .route("/instructors", post(actions::create_instructor))
        .route("/instructors/:id/toggle", post(actions::toggle_instructor))
        .route("/students", post(actions::create_student))
        .route("/students/:id/toggle", post(actions::toggle_student))
        .route("/courses", post(actions::create_course))
        .route("/courses/:id", post(actions::update_course))
        .route("/courses/:id/delete", post(actions::delete_course))
        .route("/courses/:id/thumbnail", post(actions::upload_thumbnail))
        .route("/courses/:id/promo-video", post(actions::upload_promo_video))
        .route("/tickets/:id/resolve", post(actions::resolve_ticket))
        .route("/settings/profile", post(actions::update_profile))
        .route("/settings/theme", post(actions::set_theme))
        // Binary passthrough
        .route("/tickets/:id/download", get(api::download_ticket))
        .layer(middleware::from_fn_with_state(state, guard::require_session));

    Router::new()
        .merge(protected)
        // Public routes
        .route("/login", get(pages::login).post(actions::login))
        .route("/healthz", get(api::health_check))
        .route("/assets/app.css", get(assets::stylesheet))
        .fallback(pages::not_found)
        // A rendering-time defect shows a generic failure screen instead of
        // taking the whole console down
        .layer(CatchPanicLayer::custom(api::panic_page))
        .layer(TraceLayer::new_for_http())
}
