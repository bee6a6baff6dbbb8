use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument};

use super::*;

/// Single-source shortest paths on graphs with non-negative integer edge weights
pub trait ShortestPaths: AdjacencyList + EdgeWeights {
    /// Runs Dijkstra's algorithm from `source` and returns the distance to every node, or `None`
    /// for nodes that cannot be reached. Edges without an assigned weight count as
    /// [`DEFAULT_WEIGHT`]. Distances that do not fit into [`Weight`] are treated as infinite.
    /// ** Panics if `source >= n` **
    ///
    /// # Examples
    /// ```
    /// use seqgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    /// g.set_weight(0, 2, 5);
    /// assert_eq!(g.shortest_path_lengths(0), vec![Some(0), Some(1), Some(2), None]);
    /// ```
    #[instrument(level = "debug", skip_all, fields(source = source))]
    fn shortest_path_lengths(&self, source: Node) -> Vec<Option<Weight>> {
        assert!(source < self.number_of_nodes(), "source {source} out of range");

        let mut dist: Vec<Option<Weight>> = vec![None; self.len()];
        let mut heap = BinaryHeap::new();

        dist[source as usize] = Some(0);
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            // stale entry
            if dist[u as usize].is_some_and(|best| best < d) {
                continue;
            }

            for v in self.neighbors_of(u) {
                let Some(candidate) = d.checked_add(self.weight_or_default(u, v)) else {
                    continue;
                };
                if dist[v as usize].is_none_or(|best| candidate < best) {
                    dist[v as usize] = Some(candidate);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        debug!(reached = dist.iter().flatten().count(), "dijkstra finished");
        dist
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList + EdgeWeights {}
