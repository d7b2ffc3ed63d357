use super::*;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// A value in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn gen_inclusive(&mut self, lo: i64, hi: i64) -> i64;
}

/// [`RandomSource`] backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn gen_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        thread_rng().gen_range(lo..=hi)
    }
}

/// Replays a fixed list of values. Falls back to `lo` once the list runs out.
#[cfg(test)]
#[derive(Debug)]
pub struct ScriptedRandom {
    values: std::collections::VecDeque<i64>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn gen_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        let value = self.values.pop_front().unwrap_or(lo);
        debug_assert!(
            (lo..=hi).contains(&value),
            "scripted value {value} is outside of {lo}..={hi}"
        );
        value
    }
}
