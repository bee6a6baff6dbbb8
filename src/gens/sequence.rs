use tracing::{debug, instrument};

use super::*;
use crate::degree::DegreeSequence;

/// Rejection sampler for graphical degree sequences.
///
/// Draws `n` degrees independently and uniformly from `0..n` until the resulting sequence is
/// graphical. Sequences with `n = 0` are trivially graphical (and empty).
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomDegreeSequence {
    n: NumNodes,
    max_attempts: Option<usize>,
}

impl RandomDegreeSequence {
    /// Creates a new generator for the empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the number of drawn candidates. Without a bound, sampling continues until a
    /// graphical sequence is found.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Draws a single (not necessarily graphical) candidate
    fn candidate<R: Rng>(&self, rng: &mut R) -> Vec<NumNodes> {
        (0..self.n).map(|_| rng.random_range(0..self.n)).collect()
    }

    /// Returns a graphical sequence or `None` if `max_attempts` candidates were rejected
    #[instrument(level = "debug", skip_all, fields(n = self.n))]
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Option<DegreeSequence> {
        let mut attempts = 0;
        while self.max_attempts.is_none_or(|max| attempts < max) {
            attempts += 1;

            let Ok(sequence) = DegreeSequence::try_new(self.candidate(rng)) else {
                continue;
            };
            if sequence.is_graphical() {
                debug!(attempts, %sequence, "drew graphical sequence");
                return Some(sequence);
            }
        }

        debug!(attempts, "no graphical sequence found");
        None
    }
}

impl NumNodesGen for RandomDegreeSequence {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}
