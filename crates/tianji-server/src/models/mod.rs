//! Request/Response DTOs for the Tianji API

mod bazi;
mod error;
mod hexagram;

pub use bazi::*;
pub use error::*;
pub use hexagram::*;
