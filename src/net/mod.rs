//! Network layer: validated API types, REST helpers, and the session check.

pub mod api;
pub mod session;
pub mod types;
