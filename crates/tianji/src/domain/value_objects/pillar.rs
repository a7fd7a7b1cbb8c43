//! Pillar (柱) - One Heavenly Stem paired with one Earthly Branch

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 天干, in cycle order
pub const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支, in cycle order
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Heavenly Stem, a position in the 10-term cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeavenlyStem(u8);

/// Earthly Branch, a position in the 12-term cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EarthlyBranch(u8);

impl HeavenlyStem {
    /// Map any cycle count onto the stem sequence (Euclidean modulo, so negatives wrap)
    pub fn from_cycle(n: i64) -> Self {
        Self(n.rem_euclid(10) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn glyph(self) -> &'static str {
        HEAVENLY_STEMS[usize::from(self.0)]
    }
}

impl EarthlyBranch {
    /// Map any cycle count onto the branch sequence (Euclidean modulo, so negatives wrap)
    pub fn from_cycle(n: i64) -> Self {
        Self(n.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn glyph(self) -> &'static str {
        EARTHLY_BRANCHES[usize::from(self.0)]
    }
}

/// Stem + branch, rendered as two characters (e.g. 甲子)
///
/// Stem and branch are chosen independently, so a pillar may break the
/// classical parity pairing of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Build from raw cycle counts for stem and branch
    pub fn from_cycles(stem: i64, branch: i64) -> Self {
        Self::new(HeavenlyStem::from_cycle(stem), EarthlyBranch::from_cycle(branch))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl std::str::FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(format!("Pillar must be two characters: {}", s));
        };

        let position = |table: &[&str], c: char| {
            table
                .iter()
                .position(|glyph| glyph.chars().next() == Some(c))
        };

        let stem = position(&HEAVENLY_STEMS[..], stem)
            .ok_or_else(|| format!("Unknown heavenly stem: {}", stem))?;
        let branch = position(&EARTHLY_BRANCHES[..], branch)
            .ok_or_else(|| format!("Unknown earthly branch: {}", branch))?;

        Ok(Self::from_cycles(stem as i64, branch as i64))
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
