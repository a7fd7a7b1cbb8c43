//! Tianji API Routes
//!
//! - /api/calculate_bazi - Four Pillars (八字) chart
//! - /api/generate_hexagram - Six-line (六爻) coin reading

pub mod bazi;
pub mod hexagram;
pub mod swagger;
