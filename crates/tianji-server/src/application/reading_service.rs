//! Reading Service - chart and hexagram use cases

use std::sync::Mutex;

use rand::{rngs::StdRng, SeedableRng};
use tianji::{DomainError, FourPillarsChart, HexagramResult, Line};

/// Coin tosses come from the thread RNG unless a seed is configured,
/// in which case one seeded generator is shared by all requests.
pub struct ReadingService {
    seeded: Option<Mutex<StdRng>>,
}

impl ReadingService {
    pub fn new(coin_seed: Option<u64>) -> Self {
        Self {
            seeded: coin_seed.map(|seed| Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn calculate_bazi(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> Result<FourPillarsChart, DomainError> {
        let chart = tianji::calculate_bazi(year, month, day, hour)?;
        tracing::info!(
            "📅 {} → {} ({})",
            chart.solar_date,
            chart.full_bazi,
            chart.lunar_date
        );
        Ok(chart)
    }

    /// Interpret supplied throws, or toss six new lines when none are given
    pub fn generate_hexagram(
        &self,
        throws: Option<&[Line]>,
    ) -> Result<HexagramResult, DomainError> {
        let result = match (throws, &self.seeded) {
            (Some(throws), _) => tianji::generate_hexagram_from_throws(throws)?,
            (None, Some(rng)) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                tianji::generate_hexagram(&mut *rng)
            }
            (None, None) => tianji::generate_random_hexagram(),
        };

        tracing::info!(
            "☯️  {} → {} ({} changing)",
            result.main_hexagram.name,
            result.changed_hexagram.name,
            result.summary.total_changing_lines
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_service_is_reproducible() {
        let a = ReadingService::new(Some(42));
        let b = ReadingService::new(Some(42));

        for _ in 0..5 {
            let left = a.generate_hexagram(None).unwrap();
            let right = b.generate_hexagram(None).unwrap();
            assert_eq!(left.main_hexagram, right.main_hexagram);
            assert_eq!(left.changing_lines, right.changing_lines);
        }
    }

    #[test]
    fn test_supplied_throws_win_over_seed() {
        let service = ReadingService::new(Some(7));
        let original = service.generate_hexagram(None).unwrap();

        let replayed = service.generate_hexagram(Some(original.lines.as_slice())).unwrap();
        assert_eq!(replayed.main_hexagram, original.main_hexagram);
        assert_eq!(replayed.changed_hexagram, original.changed_hexagram);
    }

    #[test]
    fn test_calculate_bazi_delegates() {
        let service = ReadingService::new(None);
        let chart = service.calculate_bazi(1995, 5, 15, 10).unwrap();
        assert_eq!(chart.full_bazi, "乙亥 庚巳 丙申 乙巳");

        assert!(matches!(
            service.calculate_bazi(1995, 5, 15, 24),
            Err(DomainError::InvalidArgument(_))
        ));
    }
}
