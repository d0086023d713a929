//! Random sources and weighted sampling

use rand::{Rng, rngs::StdRng};

/// A source of uniform integers, injectable so tests can fix the draws.
pub trait RandomSource {
    /// Return a uniform value in `[0, upper)`. `upper` is never zero.
    fn draw(&mut self, upper: u64) -> u64;
}

impl RandomSource for StdRng {
    fn draw(&mut self, upper: u64) -> u64 {
        debug_assert!(upper > 0, "cannot draw from an empty range");
        self.random_range(0..upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self, upper: u64) -> u64 {
        (**self).draw(upper)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out.
///
/// Each value is reduced modulo the requested bound so it always lands in
/// range.
///
/// # Examples
///
/// ```
/// use hexapawn::utils::{RandomSource, ScriptedDraws};
///
/// let mut draws = ScriptedDraws::new(vec![4, 1]);
/// assert_eq!(draws.draw(9), 4);
/// assert_eq!(draws.draw(9), 1);
/// assert_eq!(draws.draw(3), 1); // 4 % 3
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: Vec<u64>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<u64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDraws {
    fn draw(&mut self, upper: u64) -> u64 {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value % upper
    }
}

/// Pick an index with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, total)` and walks the weights in order,
/// returning the first index whose cumulative weight exceeds `r`. When every
/// weight is zero the pick is uniform over all indices instead. The total is
/// accumulated as `u64`, so any slice of `u32` weights is summed exactly.
///
/// Returns `None` only for an empty slice.
pub fn weighted_index<R>(source: &mut R, weights: &[u32]) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    if weights.is_empty() {
        return None;
    }

    let total: u64 = weights.iter().copied().map(u64::from).sum();
    if total == 0 {
        return Some(source.draw(weights.len() as u64) as usize);
    }

    let mut remainder = source.draw(total);
    for (index, &weight) in weights.iter().enumerate() {
        let weight = u64::from(weight);
        if remainder < weight {
            return Some(index);
        }
        remainder -= weight;
    }

    Some(weights.len() - 1)
}
