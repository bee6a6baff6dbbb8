use tracing::{debug, instrument};

use super::*;

/// Eulerian circuits of undirected graphs.
///
/// A graph is Eulerian if it has at least one edge, every node has even degree, and all nodes
/// with non-zero degree lie in the same connected component. Isolated nodes are ignored.
pub trait EulerianCircuit: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Clone {
    /// Returns *true* if the graph has an Eulerian circuit
    fn is_eulerian(&self) -> bool {
        !self.is_edgeless()
            && self.degrees().all(|d| d % 2 == 0)
            && self.is_connected_ignoring_isolated()
    }

    /// Returns an Eulerian circuit as a sequence of edges oriented along the walk, or an empty
    /// vector if the graph is not Eulerian.
    ///
    /// The walk starts at the smallest node with non-zero degree and always continues with the
    /// smallest unused neighbor (Hierholzer's algorithm on a private copy of the graph).
    ///
    /// # Examples
    /// ```
    /// use seqgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// assert_eq!(triangle.eulerian_circuit(), vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    ///
    /// let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(path.eulerian_circuit().is_empty());
    /// ```
    #[instrument(level = "debug", skip_all, fields(n = self.number_of_nodes(), m = self.number_of_edges()))]
    fn eulerian_circuit(&self) -> Vec<Edge> {
        if !self.is_eulerian() {
            debug!("graph is not eulerian");
            return Vec::new();
        }

        let Some(start) = self.vertices_with_neighbors().next() else {
            return Vec::new();
        };

        let mut work = self.clone();
        let mut stack = vec![start];
        let mut walk = Vec::with_capacity(self.number_of_edges() as usize + 1);

        while let Some(&u) = stack.last() {
            let next = work.neighbors_of(u).next();
            if let Some(v) = next {
                work.remove_edge(u, v);
                stack.push(v);
            } else {
                walk.push(u);
                stack.pop();
            }
        }
        walk.reverse();

        debug_assert_eq!(walk.len(), self.number_of_edges() as usize + 1);
        walk.windows(2).map(|w| Edge(w[0], w[1])).collect()
    }
}

impl<G> EulerianCircuit for G where G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Clone {}
