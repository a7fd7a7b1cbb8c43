//! Bazi (八字) - Four Pillars chart DTOs

use serde::{Deserialize, Serialize};
use tianji::FourPillarsChart;
use utoipa::ToSchema;

/// Calculate Four Pillars request (Gregorian birth date and hour)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculateBaziRequest {
    #[schema(example = 1995)]
    pub year: i32,
    #[schema(example = 5)]
    pub month: u32,
    #[schema(example = 15)]
    pub day: u32,
    /// Hour of day, 0-23
    #[schema(example = 10)]
    pub hour: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaziResponse {
    pub success: bool,
    /// solarDate, lunarDate, bazi (four pillars) and fullBazi
    #[schema(value_type = Object)]
    pub bazi_data: FourPillarsChart,
}
