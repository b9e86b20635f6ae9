//! LMS Admin Console
//!
//! A server-rendered web console for administering the learning-management
//! platform: roster and course management, support tickets, contact-form
//! submissions, and revenue/activity reporting, all over the backend's REST
//! API.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod assets;
pub mod components;
pub mod guard;
pub mod handlers;
pub mod pages;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main entry points
pub use server::build_app;
pub use state::AppState;
