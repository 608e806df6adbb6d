use crate::traits::*;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Asks every fact once per pass, in random order. When a pass is done the remaining questions
/// are refilled with a freshly shuffled copy of all facts.
#[derive(Debug)]
pub struct ShuffledSelector {
    combinations: Vec<Fact>,
    remaining: Vec<Fact>,
    passes: usize,
    rng: StdRng,
}

impl ShuffledSelector {
    /// Create a selector over the combinations, seeded for a reproducible order if a seed is
    /// provided.
    pub fn new(combinations: Vec<Fact>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ShuffledSelector {
            combinations,
            remaining: vec![],
            passes: 0,
            rng,
        }
    }

    /// Questions left in the current pass.
    pub fn remaining(&self) -> &[Fact] {
        &self.remaining
    }

    /// Number of passes started so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    fn refill(&mut self) {
        self.remaining = self.combinations.clone();
        self.remaining.shuffle(&mut self.rng);
        self.passes += 1;
        debug!(
            "starting pass {} over {} questions",
            self.passes,
            self.remaining.len()
        );
    }
}

impl Selector for ShuffledSelector {
    fn get_question(&mut self) -> Option<Fact> {
        if self.remaining.is_empty() {
            self.refill();
        }
        if self.remaining.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }
}
