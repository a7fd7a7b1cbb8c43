//! Domain Entities
//!
//! Records produced once per request and never mutated.
//! - SolarDate / LunarDate: calendar inputs and conversions
//! - FourPillarsChart: the 八字 birth chart
//! - Line / HexagramResult: a 六爻 reading

mod chart;
mod date;
mod reading;

pub use chart::*;
pub use date::*;
pub use reading::*;
