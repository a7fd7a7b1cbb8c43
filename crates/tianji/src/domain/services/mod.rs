//! Domain Services
//!
//! Stateless calculations over the value objects.
//! - calendar: solar → lunar conversion and the four pillars
//! - divination: coin tosses and hexagram assembly
//! - format: plain-text rendering of charts and readings

mod calendar;
mod divination;
mod format;

pub use calendar::*;
pub use divination::*;
pub use format::*;
