//! Layout components shared across routes.

mod dashboard_shell;
mod sidebar;

pub use dashboard_shell::DashboardShell;
pub use sidebar::Sidebar;
