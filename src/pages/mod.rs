//! Route-level pages.

pub mod admin;
pub mod home;
pub mod login;
pub mod movie;
pub mod profile;
