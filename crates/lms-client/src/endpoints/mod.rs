//! Typed endpoint methods, grouped by backend resource
//!
//! Paths are the backend's verbatim; changing one breaks compatibility.

pub mod analytics;
pub mod auth;
pub mod contacts;
pub mod courses;
pub mod tickets;
pub mod users;
