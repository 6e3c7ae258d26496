use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::WheelError;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> Result<f64, WheelError>;
}

/// Thread-local RNG, the default outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> Result<f64, WheelError> {
        Ok(rand::thread_rng().gen::<f64>())
    }
}

/// Reproducible source seeded from a `u64`.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> Result<f64, WheelError> {
        Ok(self.rng.gen::<f64>())
    }
}

/// Replays a fixed queue of draws and fails once it runs dry.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> Result<f64, WheelError> {
        self.draws
            .pop_front()
            .ok_or_else(|| WheelError::RandomSource("scripted draws exhausted".to_string()))
    }
}

fn checked_unit(source: &mut dyn RandomSource) -> Result<f64, WheelError> {
    let unit = source.next_unit()?;
    if !(0.0..1.0).contains(&unit) {
        return Err(WheelError::RandomSource(format!(
            "draw {} is outside [0, 1)",
            unit
        )));
    }
    Ok(unit)
}

/// Walks the cumulative weights and returns the first index whose running
/// sum reaches `draw`. Falls back to the last index when rounding leaves the
/// draw just above the total.
pub fn select_index_with_draw(weights: &[u32], draw: f64) -> Result<usize, WheelError> {
    if weights.is_empty() {
        return Err(WheelError::NoOptions);
    }

    let mut accumulated = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        accumulated += weight as f64;
        if draw <= accumulated {
            return Ok(index);
        }
    }

    Ok(weights.len() - 1)
}

/// Picks an index with probability proportional to its weight using a single draw.
pub fn select_weighted(
    weights: &[u32],
    source: &mut dyn RandomSource,
) -> Result<usize, WheelError> {
    if weights.is_empty() {
        return Err(WheelError::NoOptions);
    }

    let total: f64 = weights.iter().map(|&w| w as f64).sum();
    let draw = checked_unit(source)? * total;
    let index = select_index_with_draw(weights, draw)?;

    log::debug!(
        "Weighted draw {:.4} of total {} selected index {}",
        draw,
        total,
        index
    );
    Ok(index)
}

/// Draws the number of full turns for the spin flourish, inclusive of both ends.
pub fn draw_spin_count(
    min_spins: u32,
    max_spins: u32,
    source: &mut dyn RandomSource,
) -> Result<u32, WheelError> {
    let (low, high) = if min_spins <= max_spins {
        (min_spins, max_spins)
    } else {
        (max_spins, min_spins)
    };
    let span = (high - low) as f64 + 1.0;
    let offset = (checked_unit(source)? * span).floor() as u32;
    Ok(low + offset.min(high - low))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_walk() {
        let weights = [1, 1, 2];
        assert_eq!(select_index_with_draw(&weights, 0.0).unwrap(), 0);
        assert_eq!(select_index_with_draw(&weights, 1.0).unwrap(), 0);
        assert_eq!(select_index_with_draw(&weights, 1.5).unwrap(), 1);
        assert_eq!(select_index_with_draw(&weights, 2.0001).unwrap(), 2);
        // Past the total falls back to the last index
        assert_eq!(select_index_with_draw(&weights, 4.0000001).unwrap(), 2);
    }

    #[test]
    fn test_scaled_draw_scenario() {
        // 0.375 * total weight 4 = 1.5
        let mut source = ScriptedRandom::new([0.375]);
        assert_eq!(select_weighted(&[1, 1, 2], &mut source).unwrap(), 1);
    }

    #[test]
    fn test_empty_weights_rejected() {
        let mut source = ScriptedRandom::new([0.5]);
        assert_eq!(select_weighted(&[], &mut source), Err(WheelError::NoOptions));
        // Rejected before any draw is consumed
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_single_option_always_wins() {
        let mut source = ScriptedRandom::new([0.0, 0.25, 0.5, 0.999_999_999]);
        for _ in 0..4 {
            assert_eq!(select_weighted(&[5], &mut source).unwrap(), 0);
        }
    }

    #[test]
    fn test_source_failures() {
        let mut exhausted = ScriptedRandom::new(Vec::<f64>::new());
        assert!(matches!(
            select_weighted(&[1, 2], &mut exhausted),
            Err(WheelError::RandomSource(_))
        ));

        let mut out_of_range = ScriptedRandom::new([1.0]);
        assert!(matches!(
            select_weighted(&[1, 2], &mut out_of_range),
            Err(WheelError::RandomSource(_))
        ));
    }

    #[test]
    fn test_seeded_is_reproducible_and_in_range() {
        let weights = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..500 {
            let first = select_weighted(&weights, &mut a).unwrap();
            let second = select_weighted(&weights, &mut b).unwrap();
            assert_eq!(first, second);
            assert!(first < weights.len());
        }
    }

    #[test]
    fn test_equal_weights_converge_to_uniform() {
        let weights = [1, 1, 1, 1, 1];
        let trials = 100_000;
        let mut counts = [0usize; 5];
        let mut source = SeededRandom::new(7);
        for _ in 0..trials {
            counts[select_weighted(&weights, &mut source).unwrap()] += 1;
        }
        for count in counts {
            let frequency = count as f64 / trials as f64;
            assert!((frequency - 0.2).abs() < 0.01, "frequency {}", frequency);
        }
    }

    #[test]
    fn test_doubling_weight_doubles_frequency() {
        let trials = 200_000;
        let mut source = SeededRandom::new(1234);

        let mut base = 0usize;
        for _ in 0..trials {
            if select_weighted(&[1, 1, 1, 1], &mut source).unwrap() == 0 {
                base += 1;
            }
        }
        let mut doubled = 0usize;
        for _ in 0..trials {
            if select_weighted(&[2, 1, 1, 1], &mut source).unwrap() == 0 {
                doubled += 1;
            }
        }

        // 0.25 vs 0.4: not exactly double because the total grows too
        let base_freq = base as f64 / trials as f64;
        let doubled_freq = doubled as f64 / trials as f64;
        assert!((base_freq - 0.25).abs() < 0.01);
        assert!((doubled_freq - 0.4).abs() < 0.01);

        // Relative to an unchanged option, the odds ratio doubles
        let mut ratio_hits = [0usize; 4];
        for _ in 0..trials {
            ratio_hits[select_weighted(&[2, 1, 1, 1], &mut source).unwrap()] += 1;
        }
        let ratio = ratio_hits[0] as f64 / ratio_hits[1] as f64;
        assert!((ratio - 2.0).abs() < 0.1, "ratio {}", ratio);
    }

    #[test]
    fn test_spin_count_bounds() {
        let mut source = ScriptedRandom::new([0.0, 0.999_999, 0.5]);
        assert_eq!(draw_spin_count(5, 8, &mut source).unwrap(), 5);
        assert_eq!(draw_spin_count(5, 8, &mut source).unwrap(), 8);
        assert_eq!(draw_spin_count(6, 6, &mut source).unwrap(), 6);

        let mut full_range = ScriptedRandom::new([0.0, 0.999_999_999, 0.5]);
        assert_eq!(draw_spin_count(0, u32::MAX, &mut full_range).unwrap(), 0);
        assert_eq!(draw_spin_count(0, u32::MAX, &mut full_range).unwrap(), u32::MAX - 4);
        assert_eq!(draw_spin_count(u32::MAX, 0, &mut full_range).unwrap(), 2_147_483_648);

        let mut seeded = SeededRandom::new(99);
        for _ in 0..1000 {
            let spins = draw_spin_count(3, 7, &mut seeded).unwrap();
            assert!((3..=7).contains(&spins));
        }
    }
}
