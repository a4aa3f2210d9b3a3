//! RNG module - injectable randomness for tile spawns
//!
//! Spawning needs exactly two random decisions: which empty cell to fill
//! (uniform) and whether the new tile is a `2` or a `4` (weighted). Both are
//! behind [`TileRng`] so games can run on:
//!
//! - [`SimpleRng`]: a seedable LCG, the default, fully reproducible
//! - [`ScriptedRng`]: replays a fixed list of decisions, for tests
//! - `rand::rngs::SmallRng`: ecosystem generator, handy when seeding from entropy

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::Rng;

/// Source of the random decisions a spawn needs
pub trait TileRng {
    /// Uniform index in `0..n`. `n` is never zero.
    fn pick_uniform(&mut self, n: usize) -> usize;

    /// Weighted coin: `true` with probability `first / (first + second)`.
    fn pick_weighted(&mut self, first_weight: u32, second_weight: u32) -> bool;
}

/// Simple 64-bit LCG (Linear Congruential Generator) RNG
/// Uses Knuth's MMIX constants; outputs are taken from the high half, which
/// is far better distributed than the low bits of an LCG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // Avoid 0 seed so two "unset" seeds still diverge from the all-zero sequence
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRng for SimpleRng {
    fn pick_uniform(&mut self, n: usize) -> usize {
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        self.next_range(n) as usize
    }

    fn pick_weighted(&mut self, first_weight: u32, second_weight: u32) -> bool {
        let total = first_weight.saturating_add(second_weight);
        if total == 0 {
            return true;
        }
        self.next_range(total) < first_weight
    }
}

impl TileRng for SmallRng {
    fn pick_uniform(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }

    fn pick_weighted(&mut self, first_weight: u32, second_weight: u32) -> bool {
        let total = first_weight.saturating_add(second_weight);
        if total == 0 {
            return true;
        }
        self.gen_range(0..total) < first_weight
    }
}

/// Replays scripted decisions in order.
///
/// Uniform picks are reduced modulo `n`. Once a script runs dry the RNG keeps
/// answering `0` (first empty cell) and `true` (first outcome, i.e. a `2`).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    weighted: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        weighted: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            weighted: weighted.into_iter().collect(),
        }
    }

    /// Always the first empty cell, always a `2`
    pub fn first_cell_twos() -> Self {
        Self::default()
    }

    /// Scripted decisions not consumed yet (uniform, weighted)
    pub fn remaining(&self) -> (usize, usize) {
        (self.picks.len(), self.weighted.len())
    }
}

impl TileRng for ScriptedRng {
    fn pick_uniform(&mut self, n: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % n.max(1)
    }

    fn pick_weighted(&mut self, _first_weight: u32, _second_weight: u32) -> bool {
        self.weighted.pop_front().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn uniform_picks_stay_in_range() {
        let mut rng = SimpleRng::new(99);
        for n in 1..20 {
            for _ in 0..50 {
                assert!(rng.pick_uniform(n) < n);
            }
        }
    }

    #[test]
    fn uniform_picks_hit_every_slot() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 16];
        for _ in 0..1000 {
            seen[rng.pick_uniform(16)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn weighted_pick_is_roughly_nine_to_one() {
        let mut rng = SimpleRng::new(2048);
        let firsts = (0..10_000).filter(|_| rng.pick_weighted(9, 1)).count();
        assert!((8_500..9_500).contains(&firsts), "got {}", firsts);
    }

    #[test]
    fn weighted_pick_with_zero_weights_takes_first() {
        let mut rng = SimpleRng::new(5);
        assert!(rng.pick_weighted(0, 0));
        assert!(!rng.pick_weighted(0, 1));
    }

    #[test]
    fn small_rng_implements_tile_rng() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(rng.pick_uniform(5) < 5);
        }
        assert!(rng.pick_weighted(1, 0));
    }

    #[test]
    fn scripted_rng_replays_then_defaults() {
        let mut rng = ScriptedRng::new([3, 7], [false]);
        assert_eq!(rng.remaining(), (2, 1));
        assert_eq!(rng.pick_uniform(10), 3);
        assert_eq!(rng.pick_uniform(5), 2);
        assert!(!rng.pick_weighted(9, 1));
        assert_eq!(rng.pick_uniform(4), 0);
        assert!(rng.pick_weighted(9, 1));
        assert_eq!(rng.remaining(), (0, 0));
    }
}
