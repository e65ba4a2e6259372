//! Index sources for backend selection.

use rand::Rng;

use crate::resolver::IndexSource;

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl IndexSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded uniform draw; the same seed picks the same backend every run.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: fastrand::Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl IndexSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.usize(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    indices: Vec<usize>,
    position: usize,
}

impl FixedSequence {
    /// An empty sequence always yields index 0.
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl IndexSource for FixedSequence {
    fn next_index(&mut self, _len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index
    }
}
