//! Shared UI components exported for routes and features.

pub mod icons;
pub mod layout;

pub use layout::{DashboardShell, Sidebar};
