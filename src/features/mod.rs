//! Domain-level frontend features and their shared logic. Components import
//! these modules to keep view code focused.

pub mod navigation;
pub mod session;
