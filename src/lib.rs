//! Role-aware navigation sidebar for an admin dashboard, built with Leptos.
//!
//! The sidebar lists the destinations a role may visit, highlights the one the
//! parent marks active and adapts to the viewport: pinned with a collapsible
//! icon rail on wide screens, an overlay drawer on narrow ones. The layout
//! state machine, menu derivation and viewport sources are plain Rust in
//! [`features`]; the views are in [`components`].

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;

pub use app::App;
