//! Tianji Domain Library
//!
//! Deterministic core of the Tianji fortune service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure calculation without I/O
//!   - `entities/`: Result records (SolarDate, LunarDate, FourPillarsChart, HexagramResult)
//!   - `value_objects/`: Closed enumerations (stems, branches, line kinds, trigrams, hexagrams)
//!   - `services/`: Calendar conversion, hexagram engine, text formatting
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces
//!   - `CoinSource`: randomness behind the coin toss
//!
//! # Usage
//!
//! ```rust
//! use tianji::{calculate_bazi, generate_hexagram_from_throws, year_pillar};
//!
//! let chart = calculate_bazi(1995, 5, 15, 10).unwrap();
//! assert_eq!(chart.full_bazi, "乙亥 庚巳 丙申 乙巳");
//! assert_eq!(year_pillar(1984).to_string(), "甲子");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    calculate_bazi, day_pillar, format_bazi, format_hexagram, generate_hexagram,
    generate_hexagram_from_throws, generate_random_hexagram, hour_pillar, month_pillar,
    solar_to_lunar, toss_coins, year_pillar, DomainError, EarthlyBranch, FourPillars,
    FourPillarsChart, HeavenlyStem, HexagramCode, HexagramInfo, HexagramResult, HexagramSummary,
    Line, LineKind, LunarDate, Pillar, SolarDate, Trigram, TrigramInfo, FIRST_LUNAR_YEAR,
    LAST_LUNAR_YEAR,
};
pub use ports::CoinSource;
