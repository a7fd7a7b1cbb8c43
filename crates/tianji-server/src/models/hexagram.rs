//! Hexagram (六爻) reading DTOs

use serde::{Deserialize, Serialize};
use tianji::{HexagramResult, Line};
use utoipa::ToSchema;

/// Generate hexagram request
///
/// Omit `throwResults` (or send an empty body) to toss fresh coins.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHexagramRequest {
    /// Six lines, bottom (position 1) to top (position 6)
    #[schema(value_type = Option<Vec<Object>>)]
    pub throw_results: Option<Vec<Line>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HexagramResponse {
    pub success: bool,
    /// lines, changingLines, mainHexagram, changedHexagram, summary, timestamp
    #[schema(value_type = Object)]
    pub data: HexagramResult,
}
