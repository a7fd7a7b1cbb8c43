//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.
//! Every table here is a closed enumeration shared read-only across calls.

mod hexagram;
mod line_kind;
mod pillar;
mod trigram;

pub use hexagram::*;
pub use line_kind::*;
pub use pillar::*;
pub use trigram::*;
