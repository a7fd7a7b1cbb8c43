//! Divination Service - Six three-coin tosses resolved into hexagrams (六爻)

use chrono::Utc;

use crate::domain::entities::{HexagramInfo, HexagramResult, HexagramSummary, Line};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{HexagramCode, LineKind};
use crate::ports::CoinSource;

/// Number of tosses (and lines) in a reading
pub const LINE_COUNT: usize = 6;

/// Toss three coins and classify the result
pub fn toss_coins<C: CoinSource + ?Sized>(coins: &mut C) -> LineKind {
    LineKind::from_coins([coins.flip(), coins.flip(), coins.flip()])
}

/// Generate a reading from six tosses, bottom line first
pub fn generate_hexagram<C: CoinSource + ?Sized>(coins: &mut C) -> HexagramResult {
    let kinds: [LineKind; LINE_COUNT] = std::array::from_fn(|_| toss_coins(&mut *coins));
    assemble(kinds)
}

/// Generate a reading with the thread-local RNG
pub fn generate_random_hexagram() -> HexagramResult {
    generate_hexagram(&mut rand::thread_rng())
}

/// Resolve a reading from six externally performed tosses
///
/// Each line must sit at `position == index + 1`, and its `value` and
/// `isChanging` must agree with its `type`. Presentation fields are rebuilt.
pub fn generate_hexagram_from_throws(throws: &[Line]) -> Result<HexagramResult, DomainError> {
    if throws.len() != LINE_COUNT {
        return Err(DomainError::invalid(format!(
            "expected {} throw results, got {}",
            LINE_COUNT,
            throws.len()
        )));
    }

    let mut kinds = [LineKind::YoungYang; LINE_COUNT];
    for (index, (slot, line)) in kinds.iter_mut().zip(throws).enumerate() {
        validate_throw(index, line)?;
        *slot = line.kind;
    }

    Ok(assemble(kinds))
}

fn validate_throw(index: usize, line: &Line) -> Result<(), DomainError> {
    let expected_position = index + 1;
    if usize::from(line.position) != expected_position {
        return Err(DomainError::invalid(format!(
            "throw {} has position {}, expected {}",
            expected_position, line.position, expected_position
        )));
    }
    if line.value > 1 {
        return Err(DomainError::invalid(format!(
            "throw {} has value {}, expected 0 or 1",
            expected_position, line.value
        )));
    }
    if line.value != line.kind.value() || line.is_changing != line.kind.is_changing() {
        return Err(DomainError::invalid(format!(
            "throw {} ({}) is inconsistent: value {}, isChanging {}",
            expected_position, line.kind, line.value, line.is_changing
        )));
    }
    Ok(())
}

fn assemble(kinds: [LineKind; LINE_COUNT]) -> HexagramResult {
    let main = HexagramCode::from_values(kinds.map(LineKind::value));
    let changed = HexagramCode::from_values(kinds.map(LineKind::changed_value));

    let lines: Vec<Line> = kinds
        .iter()
        .zip(1u8..)
        .map(|(kind, position)| Line::new(*kind, position))
        .collect();

    let changing_lines: Vec<u8> = lines
        .iter()
        .filter(|line| line.is_changing)
        .map(|line| line.position)
        .collect();

    let summary = HexagramSummary {
        total_changing_lines: changing_lines.len(),
        has_changes: !changing_lines.is_empty(),
    };

    HexagramResult {
        lines,
        changing_lines,
        main_hexagram: main.into(),
        changed_hexagram: HexagramInfo::from(changed),
        summary,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of flips
    struct ScriptedCoins(VecDeque<bool>);

    impl ScriptedCoins {
        /// Three flips per entry, producing the given head counts
        fn with_heads(heads: &[usize]) -> Self {
            let flips = heads
                .iter()
                .flat_map(|h| (0..3).map(move |i| i < *h))
                .collect();
            Self(flips)
        }
    }

    impl CoinSource for ScriptedCoins {
        fn flip(&mut self) -> bool {
            self.0.pop_front().unwrap_or(false)
        }
    }

    fn throws(kinds: [LineKind; LINE_COUNT]) -> Vec<Line> {
        kinds
            .iter()
            .zip(1u8..)
            .map(|(kind, position)| Line::new(*kind, position))
            .collect()
    }

    #[test]
    fn test_forced_head_counts() {
        let mut coins = ScriptedCoins::with_heads(&[3, 2, 1, 0]);
        let kinds: Vec<LineKind> = (0..4).map(|_| toss_coins(&mut coins)).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::OldYang,
                LineKind::YoungYin,
                LineKind::YoungYang,
                LineKind::OldYin
            ]
        );
        let changing: Vec<bool> = kinds.iter().map(|k| k.is_changing()).collect();
        assert_eq!(changing, vec![true, false, false, true]);
    }

    #[test]
    fn test_scripted_reading() {
        let mut coins = ScriptedCoins::with_heads(&[3, 2, 1, 0, 1, 2]);
        let result = generate_hexagram(&mut coins);

        assert_eq!(result.main_hexagram.binary, "101010");
        assert_eq!(result.changed_hexagram.binary, "001110");
        assert_eq!(result.changing_lines, vec![1, 4]);
        assert_eq!(result.main_hexagram.name, "火水未济");
        assert_eq!(result.changed_hexagram.name, "山泽损");
        assert_eq!(result.main_hexagram.lower_trigram.name, "离");
        assert_eq!(result.main_hexagram.upper_trigram.name, "坎");
        assert_eq!(result.summary.total_changing_lines, 2);
        assert!(result.summary.has_changes);
        assert_eq!(result.lines[0].name, "初爻");
        assert_eq!(result.lines[5].name, "上爻");
    }

    #[test]
    fn test_stable_reading_has_no_changes() {
        let result = generate_hexagram_from_throws(&throws([LineKind::YoungYang; 6])).unwrap();
        assert_eq!(result.main_hexagram.binary, "111111");
        assert_eq!(result.main_hexagram.name, "乾为天");
        assert_eq!(result.changed_hexagram, result.main_hexagram);
        assert!(result.changing_lines.is_empty());
        assert!(!result.summary.has_changes);
    }

    #[test]
    fn test_changed_differs_only_at_changing_lines() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let result = generate_hexagram(&mut rng);
            let main = result.main_hexagram.binary.as_bytes();
            let changed = result.changed_hexagram.binary.as_bytes();
            assert_eq!(main.len(), 6);
            assert!(main.iter().all(|b| *b == b'0' || *b == b'1'));

            let differing: Vec<u8> = (0..6)
                .filter(|i| main[*i] != changed[*i])
                .map(|i| i as u8 + 1)
                .collect();
            assert_eq!(differing, result.changing_lines);
            assert_eq!(result.summary.total_changing_lines, differing.len());
        }
    }

    #[test]
    fn test_round_trip_from_lines() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..50 {
            let original = generate_hexagram(&mut rng);
            let replayed = generate_hexagram_from_throws(&original.lines).unwrap();
            assert_eq!(replayed.main_hexagram, original.main_hexagram);
            assert_eq!(replayed.changed_hexagram, original.changed_hexagram);
            assert_eq!(replayed.changing_lines, original.changing_lines);
            assert_eq!(replayed.lines, original.lines);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        let mut lines = throws([LineKind::OldYin; 6]);
        lines.pop();
        assert!(matches!(
            generate_hexagram_from_throws(&lines),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(generate_hexagram_from_throws(&[]).is_err());
    }

    #[test]
    fn test_rejects_inconsistent_lines() {
        let mut lines = throws([LineKind::YoungYin; 6]);
        lines[2].value = 1;
        assert!(generate_hexagram_from_throws(&lines).is_err());

        let mut lines = throws([LineKind::OldYang; 6]);
        lines[0].is_changing = false;
        assert!(generate_hexagram_from_throws(&lines).is_err());

        let mut lines = throws([LineKind::YoungYang; 6]);
        lines[3].value = 7;
        assert!(generate_hexagram_from_throws(&lines).is_err());

        let mut lines = throws([LineKind::YoungYang; 6]);
        lines.swap(0, 1);
        assert!(generate_hexagram_from_throws(&lines).is_err());
    }

    #[test]
    fn test_presentation_fields_are_rebuilt() {
        let mut lines = throws([LineKind::OldYang; 6]);
        for line in &mut lines {
            line.name.clear();
            line.symbol.clear();
        }
        let result = generate_hexagram_from_throws(&lines).unwrap();
        assert_eq!(result.lines[2].name, "三爻");
        assert_eq!(result.lines[2].symbol, "━━━");
        assert_eq!(result.changed_hexagram.name, "坤为地");
    }
}
