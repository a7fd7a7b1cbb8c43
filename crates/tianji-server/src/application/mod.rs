//! Application layer
//!
//! Use cases sitting between the HTTP routes and the tianji domain.

mod reading_service;

pub use reading_service::ReadingService;
