//! LineKind (爻) - Classification of a single three-coin toss

use serde::{Deserialize, Serialize};

/// Glyph for a solid (yang) line
pub const YANG_GLYPH: &str = "━━━";
/// Glyph for a broken (yin) line
pub const YIN_GLYPH: &str = "━ ━";

/// Line type produced by one toss of three coins
///
/// Only the unanimous outcomes (all heads, all tails) are changing lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Three heads
    #[serde(rename = "老阳")]
    OldYang,
    /// Two heads
    #[serde(rename = "少阴")]
    YoungYin,
    /// One head
    #[serde(rename = "少阳")]
    YoungYang,
    /// No heads
    #[serde(rename = "老阴")]
    OldYin,
}

impl LineKind {
    /// Classify a toss by its head count
    pub fn from_coins(coins: [bool; 3]) -> Self {
        match coins.iter().filter(|heads| **heads).count() {
            3 => LineKind::OldYang,
            2 => LineKind::YoungYin,
            1 => LineKind::YoungYang,
            _ => LineKind::OldYin,
        }
    }

    /// 1 for yang, 0 for yin
    pub fn value(self) -> u8 {
        match self {
            LineKind::OldYang | LineKind::YoungYang => 1,
            LineKind::YoungYin | LineKind::OldYin => 0,
        }
    }

    pub fn is_changing(self) -> bool {
        matches!(self, LineKind::OldYang | LineKind::OldYin)
    }

    /// Value the line takes in the changed hexagram
    pub fn changed_value(self) -> u8 {
        if self.is_changing() {
            1 - self.value()
        } else {
            self.value()
        }
    }

    pub fn glyph(self) -> &'static str {
        value_glyph(self.value())
    }
}

/// Line glyph for a 0/1 value
pub fn value_glyph(value: u8) -> &'static str {
    if value == 1 {
        YANG_GLYPH
    } else {
        YIN_GLYPH
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::OldYang => write!(f, "老阳"),
            LineKind::YoungYin => write!(f, "少阴"),
            LineKind::YoungYang => write!(f, "少阳"),
            LineKind::OldYin => write!(f, "老阴"),
        }
    }
}

impl std::str::FromStr for LineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "老阳" => Ok(LineKind::OldYang),
            "少阴" => Ok(LineKind::YoungYin),
            "少阳" => Ok(LineKind::YoungYang),
            "老阴" => Ok(LineKind::OldYin),
            _ => Err(format!("Unknown line type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_count_classification() {
        assert_eq!(LineKind::from_coins([true, true, true]), LineKind::OldYang);
        assert_eq!(LineKind::from_coins([true, false, true]), LineKind::YoungYin);
        assert_eq!(LineKind::from_coins([false, false, true]), LineKind::YoungYang);
        assert_eq!(LineKind::from_coins([false, false, false]), LineKind::OldYin);
    }

    #[test]
    fn test_changing_lines_flip() {
        assert_eq!(LineKind::OldYang.changed_value(), 0);
        assert_eq!(LineKind::OldYin.changed_value(), 1);
        assert_eq!(LineKind::YoungYang.changed_value(), 1);
        assert_eq!(LineKind::YoungYin.changed_value(), 0);
    }

    #[test]
    fn test_serde_uses_chinese_names() {
        let json = serde_json::to_value(LineKind::YoungYin).unwrap();
        assert_eq!(json, serde_json::json!("少阴"));
        let kind: LineKind = serde_json::from_value(serde_json::json!("老阴")).unwrap();
        assert_eq!(kind, LineKind::OldYin);
        assert_eq!("老阳".parse::<LineKind>(), Ok(LineKind::OldYang));
    }
}
