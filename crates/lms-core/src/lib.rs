//! Core types and utilities for the LMS admin console
//!
//! Everything in this crate is shared by the HTTP client, the controller
//! layer, and the web frontend: the error taxonomy, configuration loading,
//! the wire-level data model, and small validation helpers.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
