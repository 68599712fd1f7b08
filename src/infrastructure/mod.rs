//! Settings and session storage.

pub mod config;
pub mod sessions;
pub mod traits;
