//! Domain Errors
//!
//! Error types for calendar and divination operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported date range: {year:04}-{month:02}-{day:02} is outside {first}-01-31 ..= {last}-12-31")]
    UnsupportedDateRange {
        year: i32,
        month: u32,
        day: u32,
        first: i32,
        last: i32,
    },
}

impl DomainError {
    pub fn invalid<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unsupported_date(year: i32, month: u32, day: u32) -> Self {
        Self::UnsupportedDateRange {
            year,
            month,
            day,
            first: crate::domain::services::FIRST_LUNAR_YEAR,
            last: crate::domain::services::LAST_LUNAR_YEAR,
        }
    }
}
