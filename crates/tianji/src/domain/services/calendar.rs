//! Calendar Service - Solar to lunar conversion and Four Pillars (八字)
//!
//! Lunar years are decoded from a bit-packed table, one entry per year from
//! 1900. For an entry `data`:
//!
//! - bits 0-3: leap month number (0 = no leap month)
//! - bits 15..4: months 1..12, set = 30 days, clear = 29 days
//!
//! The leap month's length is read from the bit of the regular month it
//! follows. Bit 16 is not consulted.

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::{FourPillars, FourPillarsChart, LunarDate, SolarDate};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Pillar;

/// Packed lunar year data, 1900-2049
const LUNAR_YEAR_DATA: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
];

/// First lunar year in the table
pub const FIRST_LUNAR_YEAR: i32 = 1900;
/// Last lunar year in the table
pub const LAST_LUNAR_YEAR: i32 = FIRST_LUNAR_YEAR + LUNAR_YEAR_DATA.len() as i32 - 1;

/// 1900-01-01 as days from the common era (day pillar reference, 甲子 day)
const SOLAR_EPOCH_DAYS: i64 = 693_596;
/// 1900-01-31 as days from the common era (lunar 1900-01-01)
const LUNAR_EPOCH_DAYS: i64 = 693_626;

fn year_data(lunar_year: i32) -> Option<u32> {
    let index = usize::try_from(lunar_year - FIRST_LUNAR_YEAR).ok()?;
    LUNAR_YEAR_DATA.get(index).copied()
}

fn month_days(data: u32, month: u32) -> u32 {
    if data & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn leap_month(data: u32) -> u32 {
    data & 0xf
}

fn leap_month_days(data: u32) -> u32 {
    match leap_month(data) {
        0 => 0,
        month => month_days(data, month),
    }
}

fn year_days(data: u32) -> u32 {
    let long_months = (4..16).filter(|bit| data & (1 << bit) != 0).count() as u32;
    348 + long_months + leap_month_days(data)
}

fn gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::invalid(format!(
            "{}-{}-{} is not a valid Gregorian date",
            year, month, day
        ))
    })
}

fn check_hour(hour: u32) -> Result<(), DomainError> {
    if hour > 23 {
        return Err(DomainError::invalid(format!(
            "hour must be within 0..=23, got {}",
            hour
        )));
    }
    Ok(())
}

fn check_month(month: u32) -> Result<(), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::invalid(format!(
            "lunar month must be within 1..=12, got {}",
            month
        )));
    }
    Ok(())
}

/// Convert a Gregorian date to the lunisolar calendar
///
/// Supported from 1900-01-31 (lunar 1900-01-01) through the end of
/// [`LAST_LUNAR_YEAR`]. Leap months are folded into the walk, so the
/// returned month is never flagged as leap.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, DomainError> {
    let date = gregorian(year, month, day)?;
    let out_of_range = || DomainError::unsupported_date(year, month, day);

    if year > LAST_LUNAR_YEAR {
        return Err(out_of_range());
    }
    let mut offset = i64::from(date.num_days_from_ce()) - LUNAR_EPOCH_DAYS;
    if offset < 0 {
        return Err(out_of_range());
    }

    let mut lunar_year = FIRST_LUNAR_YEAR;
    loop {
        let days = i64::from(year_days(year_data(lunar_year).ok_or_else(out_of_range)?));
        if offset < days {
            break;
        }
        offset -= days;
        lunar_year += 1;
    }

    // Months 1..12 only; leftover leap-month days roll into the next year
    let mut lunar_month = 1;
    loop {
        let data = year_data(lunar_year).ok_or_else(out_of_range)?;
        let days = i64::from(month_days(data, lunar_month));
        if offset < days {
            break;
        }
        offset -= days;
        lunar_month += 1;
        if lunar_month > 12 {
            lunar_month = 1;
            lunar_year += 1;
        }
    }

    Ok(LunarDate {
        year: lunar_year,
        month: lunar_month,
        day: offset as u32 + 1,
        is_leap: false,
    })
}

/// Year pillar: stem `(year - 4) mod 10`, branch `(year - 4) mod 12`
pub fn year_pillar(lunar_year: i32) -> Pillar {
    let cycle = i64::from(lunar_year) - 4;
    Pillar::from_cycles(cycle, cycle)
}

/// Month pillar: stem `(year stem * 2 + month) mod 10`, branch `(month + 1) mod 12`
pub fn month_pillar(lunar_year: i32, lunar_month: u32) -> Result<Pillar, DomainError> {
    check_month(lunar_month)?;
    let year_stem = year_pillar(lunar_year).stem.index();
    let month = i64::from(lunar_month);
    Ok(Pillar::from_cycles(i64::from(year_stem) * 2 + month, month + 1))
}

/// Day pillar counted in solar days from 1900-01-01
pub fn day_pillar(year: i32, month: u32, day: u32) -> Result<Pillar, DomainError> {
    let date = gregorian(year, month, day)?;
    let offset = i64::from(date.num_days_from_ce()) - SOLAR_EPOCH_DAYS;
    Ok(Pillar::from_cycles(offset, offset))
}

/// Hour pillar
///
/// The branch is the two-hour window (23:00-00:59 is 子). The stem is seeded
/// from `(year * 365 + month * 30 + day) mod 10` over the lunar date rather
/// than from the day pillar's stem; existing charts depend on this value.
pub fn hour_pillar(
    hour: u32,
    lunar_year: i32,
    lunar_month: u32,
    lunar_day: u32,
) -> Result<Pillar, DomainError> {
    check_hour(hour)?;
    let branch = i64::from((hour + 1) / 2 % 12);
    let day_stem = (i64::from(lunar_year) * 365 + i64::from(lunar_month) * 30 + i64::from(lunar_day))
        .rem_euclid(10);
    Ok(Pillar::from_cycles(day_stem * 2 + branch, branch))
}

/// Compute the Four Pillars chart for a Gregorian birth date and hour
pub fn calculate_bazi(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> Result<FourPillarsChart, DomainError> {
    check_hour(hour)?;
    let lunar = solar_to_lunar(year, month, day)?;

    let bazi = FourPillars {
        year_pillar: year_pillar(lunar.year),
        month_pillar: month_pillar(lunar.year, lunar.month)?,
        day_pillar: day_pillar(year, month, day)?,
        hour_pillar: hour_pillar(hour, lunar.year, lunar.month, lunar.day)?,
    };

    let solar = SolarDate {
        year,
        month,
        day,
        hour,
    };

    Ok(FourPillarsChart::new(solar, lunar, bazi))
}
