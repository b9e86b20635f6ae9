//! Authenticated HTTP client for the LMS backend API
//!
//! One [`ApiClient`] instance serves the whole console. Every call goes
//! through a single transport/response-mapping path, so the policy decisions
//! (the fixed request timeout, bearer-header injection, and the uniform
//! translation of HTTP 401 into [`lms_core::Error::Unauthorized`]) live in
//! exactly one place instead of being repeated per call site.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod client;
pub mod endpoints;

pub use client::ApiClient;
