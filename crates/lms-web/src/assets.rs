//! Embedded static assets

use axum::http::header;
use axum::response::IntoResponse;

/// The console stylesheet, embedded so the binary is self-contained
const STYLESHEET: &str = include_str!("../assets/app.css");

/// Serve the console stylesheet.
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
