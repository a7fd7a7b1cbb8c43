//! CoinSource - Randomness behind a coin toss

/// Source of fair coin flips
///
/// Every `rand::Rng` is a coin source. Tests and callers replaying physical
/// tosses can implement it directly.
pub trait CoinSource {
    /// Flip one coin; `true` is heads
    fn flip(&mut self) -> bool;
}

impl<R: rand::Rng> CoinSource for R {
    fn flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}
