//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! reaches outside itself. Only randomness crosses this boundary.

mod coin_source;

pub use coin_source::*;
