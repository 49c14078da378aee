//! Injectable source of "pick one of N" choices and scene identifiers.
//!
//! Production uses [`ThreadPicker`]; `--seed` runs use [`SeededPicker`]; tests script exact
//! choices with [`ScriptedPicker`].

use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 8;

pub trait Picker {
    /// Index in `0..len`. Callers reduce out-of-range answers modulo `len`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fresh scene identifier. Uniqueness within a plan is enforced by the generator.
    fn next_id(&mut self) -> String;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Pick one entry from a fixed, non-empty pool.
pub fn pick<'a, T, const N: usize, P: Picker + ?Sized>(picker: &mut P, options: &'a [T; N]) -> &'a T {
    const { assert!(N > 0, "cannot pick from an empty pool") };
    &options[picker.pick_index(N) % N]
}

/// Picker backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

pub type ThreadPicker = RngPicker<ThreadRng>;
pub type SeededPicker = RngPicker<StdRng>;

impl<R> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngPicker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngPicker<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn next_id(&mut self) -> String {
        (0..ID_LEN)
            .map(|_| char::from(ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())]))
            .collect()
    }
}

/// Replays a fixed index sequence (cycling) and hands out `scene-1`, `scene-2`, ...
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    indices: Vec<usize>,
    cursor: usize,
    issued_ids: usize,
}

impl ScriptedPicker {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
            issued_ids: 0,
        }
    }

    /// Always answers `index`.
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// Number of `pick_index` calls answered so far.
    pub fn picks_made(&self) -> usize {
        self.cursor
    }
}

impl Picker for ScriptedPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        let answer = if self.indices.is_empty() {
            0
        } else {
            self.indices[self.cursor % self.indices.len()]
        };
        self.cursor += 1;
        answer
    }

    fn next_id(&mut self) -> String {
        self.issued_ids += 1;
        format!("scene-{}", self.issued_ids)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/picker.rs"]
mod tests;
