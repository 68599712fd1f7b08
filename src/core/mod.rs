//! Assistant domain: model handlers and the service that drives them.

pub mod assistant;
pub mod errors;
pub mod services;
pub mod traits;
