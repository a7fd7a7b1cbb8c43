//! Trigram (八卦) - Three stacked lines

use serde::{Deserialize, Serialize};

/// The eight trigrams
///
/// A trigram code is read like its binary key: the first character (the
/// most significant of the three bits) is the bottom line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    /// All trigrams in descending key order (111 … 000)
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Resolve a 3-bit code; higher bits are ignored
    pub fn from_code(code: u8) -> Self {
        match code & 0b111 {
            0b111 => Trigram::Qian,
            0b110 => Trigram::Dui,
            0b101 => Trigram::Li,
            0b100 => Trigram::Zhen,
            0b011 => Trigram::Xun,
            0b010 => Trigram::Kan,
            0b001 => Trigram::Gen,
            _ => Trigram::Kun,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Trigram::Qian => 0b111,
            Trigram::Dui => 0b110,
            Trigram::Li => 0b101,
            Trigram::Zhen => 0b100,
            Trigram::Xun => 0b011,
            Trigram::Kan => 0b010,
            Trigram::Gen => 0b001,
            Trigram::Kun => 0b000,
        }
    }

    /// Three-character binary key, bottom line first
    pub fn key(self) -> String {
        format!("{:03b}", self.code())
    }

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兑",
            Trigram::Li => "离",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Trigram::Qian => "☰",
            Trigram::Dui => "☱",
            Trigram::Li => "☲",
            Trigram::Zhen => "☳",
            Trigram::Xun => "☴",
            Trigram::Kan => "☵",
            Trigram::Gen => "☶",
            Trigram::Kun => "☷",
        }
    }

    /// Natural image (天, 泽, 火 …)
    pub fn nature(self) -> &'static str {
        match self {
            Trigram::Qian => "天",
            Trigram::Dui => "泽",
            Trigram::Li => "火",
            Trigram::Zhen => "雷",
            Trigram::Xun => "风",
            Trigram::Kan => "水",
            Trigram::Gen => "山",
            Trigram::Kun => "地",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Serialized trigram record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrigramInfo {
    pub name: String,
    pub symbol: String,
    pub nature: String,
}

impl From<Trigram> for TrigramInfo {
    fn from(trigram: Trigram) -> Self {
        Self {
            name: trigram.name().to_string(),
            symbol: trigram.symbol().to_string(),
            nature: trigram.nature().to_string(),
        }
    }
}
