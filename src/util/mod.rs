//! Browser utilities: token storage and show-date formatting.

pub mod dates;
pub mod token;
