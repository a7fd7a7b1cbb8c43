//! HexagramCode (卦) - Six stacked lines and the 64-name table

use super::Trigram;

/// Hexagram names keyed by six-character binary, in descending key order
///
/// Keys are looked up verbatim. The compound names read the first three
/// characters as the outer image and the last three as the inner one.
pub const HEXAGRAM_NAMES: [(&str, &str); 64] = [
    ("111111", "乾为天"), ("111110", "天泽履"), ("111101", "天火同人"), ("111100", "天雷无妄"),
    ("111011", "天风姤"), ("111010", "天水讼"), ("111001", "天山遁"), ("111000", "天地否"),
    ("110111", "泽天夬"), ("110110", "兑为泽"), ("110101", "泽火革"), ("110100", "泽雷随"),
    ("110011", "泽风大过"), ("110010", "泽水困"), ("110001", "泽山咸"), ("110000", "泽地萃"),
    ("101111", "火天大有"), ("101110", "火泽睽"), ("101101", "离为火"), ("101100", "火雷噬嗑"),
    ("101011", "火风鼎"), ("101010", "火水未济"), ("101001", "火山旅"), ("101000", "火地晋"),
    ("100111", "雷天大壮"), ("100110", "雷泽归妹"), ("100101", "雷火丰"), ("100100", "震为雷"),
    ("100011", "雷风恒"), ("100010", "雷水解"), ("100001", "雷山小过"), ("100000", "雷地豫"),
    ("011111", "风天小畜"), ("011110", "风泽中孚"), ("011101", "风火家人"), ("011100", "风雷益"),
    ("011011", "巽为风"), ("011010", "风水涣"), ("011001", "风山渐"), ("011000", "风地观"),
    ("010111", "水天需"), ("010110", "水泽节"), ("010101", "水火既济"), ("010100", "水雷屯"),
    ("010011", "水风井"), ("010010", "坎为水"), ("010001", "水山蹇"), ("010000", "水地比"),
    ("001111", "山天大畜"), ("001110", "山泽损"), ("001101", "山火贲"), ("001100", "山雷颐"),
    ("001011", "山风蛊"), ("001010", "山水蒙"), ("001001", "艮为山"), ("001000", "山地剥"),
    ("000111", "地天泰"), ("000110", "地泽临"), ("000101", "地火明夷"), ("000100", "地雷复"),
    ("000011", "地风升"), ("000010", "地水师"), ("000001", "地山谦"), ("000000", "坤为地"),
];

/// Six-bit hexagram code
///
/// Bit 5 holds line 1 (bottom) and bit 0 holds line 6 (top), so the code
/// printed as six binary digits is the line values in position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexagramCode(u8);

impl HexagramCode {
    /// Build from line values in position order (1 → 6); any non-zero value counts as yang
    pub fn from_values(values: [u8; 6]) -> Self {
        let code = values
            .iter()
            .fold(0u8, |acc, value| (acc << 1) | u8::from(*value != 0));
        Self(code)
    }

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11_1111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Six-character key, line 1 first
    pub fn binary(self) -> String {
        format!("{:06b}", self.0)
    }

    /// Lines 1-3
    pub fn lower(self) -> Trigram {
        Trigram::from_code(self.0 >> 3)
    }

    /// Lines 4-6
    pub fn upper(self) -> Trigram {
        Trigram::from_code(self.0)
    }

    pub fn name(self) -> &'static str {
        HEXAGRAM_NAMES[usize::from(0b11_1111 - self.0)].1
    }

    /// Value (0/1) of the line at a 1-indexed position
    pub fn line_value(self, position: u8) -> u8 {
        (self.0 >> (6 - position.clamp(1, 6))) & 1
    }
}

impl std::str::FromStr for HexagramCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(format!("Hexagram key must be six 0/1 characters: {}", s));
        }
        u8::from_str_radix(s, 2)
            .map(Self)
            .map_err(|e| format!("Invalid hexagram key {}: {}", s, e))
    }
}

impl std::fmt::Display for HexagramCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete_and_ordered() {
        for (i, (key, name)) in HEXAGRAM_NAMES.iter().enumerate() {
            let code: HexagramCode = key.parse().unwrap();
            assert_eq!(usize::from(code.bits()), 63 - i);
            assert_eq!(code.binary(), *key);
            assert_eq!(code.name(), *name);
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_every_code_has_a_name() {
        for bits in 0..64u8 {
            assert!(!HexagramCode::from_bits(bits).name().is_empty());
        }
    }

    #[test]
    fn test_from_values_is_position_ordered() {
        let code = HexagramCode::from_values([1, 0, 0, 0, 0, 1]);
        assert_eq!(code.binary(), "100001");
        assert_eq!(code.lower(), Trigram::Zhen);
        assert_eq!(code.upper(), Trigram::Gen);
        assert_eq!(code.name(), "雷山小过");
        assert_eq!(code.line_value(1), 1);
        assert_eq!(code.line_value(2), 0);
        assert_eq!(code.line_value(6), 1);
    }

    #[test]
    fn test_rejects_malformed_keys() {
        assert!("10101".parse::<HexagramCode>().is_err());
        assert!("1010102".parse::<HexagramCode>().is_err());
        assert!("10a010".parse::<HexagramCode>().is_err());
    }
}
