//! HexagramResult (六爻卦象) - Six tossed lines and the hexagrams they form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{value_glyph, HexagramCode, LineKind, TrigramInfo};

/// Traditional position names, bottom to top
pub const LINE_NAMES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

/// One line of a reading
///
/// `name` and `symbol` are presentation fields and may be omitted by callers
/// supplying their own tosses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub value: u8,
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub is_changing: bool,
    /// 1 = bottom, 6 = top
    pub position: u8,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl Line {
    /// Create a fully populated line at a 1-indexed position (clamped to 1..=6)
    pub fn new(kind: LineKind, position: u8) -> Self {
        let position = position.clamp(1, 6);
        Self {
            value: kind.value(),
            kind,
            is_changing: kind.is_changing(),
            position,
            name: LINE_NAMES[usize::from(position - 1)].to_string(),
            symbol: kind.glyph().to_string(),
        }
    }
}

/// A resolved hexagram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HexagramInfo {
    /// Line values in position order (line 1 first)
    pub binary: String,
    pub name: String,
    pub upper_trigram: TrigramInfo,
    pub lower_trigram: TrigramInfo,
    /// Line glyphs from top to bottom, one per row
    pub symbol: String,
}

impl From<HexagramCode> for HexagramInfo {
    fn from(code: HexagramCode) -> Self {
        let symbol = (1..=6u8)
            .rev()
            .map(|position| value_glyph(code.line_value(position)))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            binary: code.binary(),
            name: code.name().to_string(),
            upper_trigram: code.upper().into(),
            lower_trigram: code.lower().into(),
            symbol,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HexagramSummary {
    pub total_changing_lines: usize,
    pub has_changes: bool,
}

/// Complete reading: primary hexagram, changed hexagram and the lines behind them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HexagramResult {
    pub lines: Vec<Line>,
    /// 1-indexed positions of changing lines, ascending
    pub changing_lines: Vec<u8>,
    pub main_hexagram: HexagramInfo,
    pub changed_hexagram: HexagramInfo,
    pub summary: HexagramSummary,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_fields_follow_kind() {
        let line = Line::new(LineKind::OldYin, 6);
        assert_eq!(line.value, 0);
        assert!(line.is_changing);
        assert_eq!(line.name, "上爻");
        assert_eq!(line.symbol, "━ ━");
    }

    #[test]
    fn test_line_wire_shape() {
        let json = serde_json::to_value(Line::new(LineKind::OldYang, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 1,
                "type": "老阳",
                "isChanging": true,
                "position": 1,
                "name": "初爻",
                "symbol": "━━━"
            })
        );
    }

    #[test]
    fn test_hexagram_symbol_is_top_down() {
        let info = HexagramInfo::from(HexagramCode::from_values([1, 1, 1, 0, 0, 0]));
        assert_eq!(info.symbol, "━ ━\n━ ━\n━ ━\n━━━\n━━━\n━━━");
        assert_eq!(info.lower_trigram.name, "乾");
        assert_eq!(info.upper_trigram.name, "坤");
    }
}
