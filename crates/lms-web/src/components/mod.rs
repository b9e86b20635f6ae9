//! Shared view components

pub mod feedback;
pub mod loading;
pub mod shell;

pub use feedback::{Banner, StatusBadge};
pub use loading::Loading;
pub use shell::Shell;
