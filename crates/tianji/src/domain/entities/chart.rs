//! FourPillarsChart (八字) - Year, month, day and hour pillars

use serde::{Deserialize, Serialize};

use super::{LunarDate, SolarDate};
use crate::domain::value_objects::Pillar;

/// The four pillars of a birth chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FourPillars {
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
}

impl FourPillars {
    /// Pillars joined by single spaces (year month day hour)
    pub fn full_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.year_pillar, self.month_pillar, self.day_pillar, self.hour_pillar
        )
    }
}

/// Birth chart with both calendar dates echoed back
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FourPillarsChart {
    pub solar_date: SolarDate,
    pub lunar_date: LunarDate,
    pub bazi: FourPillars,
    pub full_bazi: String,
}

impl FourPillarsChart {
    pub fn new(solar_date: SolarDate, lunar_date: LunarDate, bazi: FourPillars) -> Self {
        Self {
            solar_date,
            lunar_date,
            full_bazi: bazi.full_text(),
            bazi,
        }
    }
}
