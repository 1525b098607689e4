//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `loader`, `movies`, `notice`) so
//! individual components can depend on small focused models. Each struct is
//! provided to the tree as an `RwSignal` context by `app::App`; the session
//! guard is the only writer of the user slot.

pub mod auth;
pub mod loader;
pub mod movies;
pub mod notice;
