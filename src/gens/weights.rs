use rand_distr::{Distribution, Uniform};

use super::*;

/// Assigns uniformly random integer weights from `lo..=hi` to edges.
#[derive(Debug, Clone)]
pub struct RandomWeights {
    lo: Weight,
    hi: Weight,
    distr: Uniform<Weight>,
}

impl RandomWeights {
    /// Creates a generator for weights in `lo..=hi`.
    /// Fails with [`GraphError::InvalidWeightRange`] if `lo > hi`.
    pub fn new(lo: Weight, hi: Weight) -> Result<Self, GraphError> {
        let distr =
            Uniform::new_inclusive(lo, hi).map_err(|_| GraphError::InvalidWeightRange { lo, hi })?;
        Ok(Self { lo, hi, distr })
    }

    /// Returns the inclusive weight range
    pub fn range(&self) -> (Weight, Weight) {
        (self.lo, self.hi)
    }

    /// Draws a single weight
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Weight {
        self.distr.sample(rng)
    }

    /// Sets a fresh random weight on every edge of `graph` (in edge order)
    pub fn assign<G, R>(&self, graph: &mut G, rng: &mut R)
    where
        G: AdjacencyList + EdgeWeights,
        R: Rng,
    {
        let edges = graph.ordered_edges(true).collect::<Vec<_>>();
        for Edge(u, v) in edges {
            graph.set_weight(u, v, self.sample(rng));
        }
    }
}

impl Default for RandomWeights {
    /// Weights in `1..=10`
    fn default() -> Self {
        Self {
            lo: 1,
            hi: 10,
            distr: Uniform::new_inclusive(1, 10).unwrap_or_else(|_| unreachable!()),
        }
    }
}
