//! Navigation feature: the role-filtered destination list, the responsive
//! layout state machine and the viewport sources that drive it. Everything
//! here is plain Rust so it can be exercised without a browser; the Leptos
//! view lives in `components::layout::sidebar`.

pub mod dispatch;
pub mod menu;
pub mod state;
pub mod viewport;

pub use dispatch::{SidebarAction, SidebarOutputs, dispatch};
pub use menu::{MenuItem, is_active, menu_for_role};
pub use state::{Breakpoint, NavigationState, SidebarMode};
pub use viewport::{ManualViewport, ResizeSource, ResizeSubscription, Viewport};
