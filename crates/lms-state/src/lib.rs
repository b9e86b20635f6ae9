//! Controller layer for the LMS admin console
//!
//! Everything here is framework-independent state: the session lifecycle,
//! the list/detail/toggle controller that every management page instantiates,
//! the create/update form reducers, and the reporting fetch gate. The web
//! crate drives these per request; the tests drive them directly.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod form;
pub mod list;
pub mod notice;
pub mod reports;
pub mod session;
pub mod storage;

pub use list::{ListState, ResourceListController};
pub use session::{LoginOutcome, SessionState, SessionStore};
pub use storage::{KvStore, Theme};
