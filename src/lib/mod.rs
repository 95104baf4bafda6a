//! Shared frontend utilities for configuration, errors, logging, styling and
//! build metadata. Keeping them here lets components stay focused on view code.

pub mod build_info;
pub mod config;
pub mod errors;
pub mod logging;
pub mod theme;

pub use errors::AppError;
