//! Session feature: the signed-in user's role, name and email, plus the
//! display helpers the navigation chrome derives from them.

pub mod state;
pub mod types;
