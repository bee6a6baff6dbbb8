use tracing::{debug, instrument};

use super::*;

/// Disjoint set union with path compression and union by rank
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<Node>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    pub(crate) fn find(&mut self, mut node: Node) -> Node {
        let mut root = node;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        while self.parent[node as usize] != node {
            let parent = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets of `left` and `right`; returns *false* if they were already merged
    pub(crate) fn union(&mut self, left: Node, right: Node) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left as usize];
        let right_rank = self.rank[right as usize];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right as usize] = left;
        if left_rank == right_rank {
            self.rank[left as usize] = left_rank.saturating_add(1);
        }
        true
    }
}

/// Minimum spanning trees and spanning-tree checks
pub trait SpanningTree: AdjacencyList + GraphEdgeOrder + EdgeWeights {
    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Edges are considered by ascending `(weight, normalized edge)`, so ties are broken
    /// deterministically. Chosen edges keep their weights. If the graph is disconnected, the
    /// result is a minimum spanning forest.
    ///
    /// # Examples
    /// ```
    /// use seqgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// g.set_weight(0, 1, 4);
    /// let tree = g.minimum_spanning_tree();
    /// assert_eq!(tree.ordered_edges(true).collect::<Vec<_>>(), vec![Edge(0, 2), Edge(1, 2)]);
    /// assert!(tree.is_spanning_tree_of(&g));
    /// ```
    #[instrument(level = "debug", skip_all, fields(n = self.number_of_nodes(), m = self.number_of_edges()))]
    fn minimum_spanning_tree(&self) -> Tree {
        let mut edges = self
            .edges(true)
            .map(|e| (self.weight_or_default(e.0, e.1), e))
            .collect_vec();
        edges.sort_unstable();

        let mut components = DisjointSet::new(self.number_of_nodes());
        let mut tree = Tree::new(self.number_of_nodes());
        let mut total: Weight = 0;

        for (weight, Edge(u, v)) in edges {
            if !components.union(u, v) {
                continue;
            }

            tree.add_edge(u, v);
            if let Some(w) = self.weight_of(u, v) {
                tree.set_weight(u, v, w);
            }
            total = total.saturating_add(weight);

            if tree.number_of_edges() + 1 == self.number_of_nodes() {
                break;
            }
        }

        debug!(edges = tree.number_of_edges(), total, "kruskal finished");
        tree
    }

    /// Checks that `tree` is a spanning tree of this graph: same node count, `n - 1` edges, all
    /// of them edges of this graph, and connected.
    fn verify_spanning_tree<T>(&self, tree: &T) -> Result<(), TreeDefect>
    where
        T: AdjacencyList + GraphEdgeOrder,
    {
        let n = self.number_of_nodes();
        if tree.number_of_nodes() != n {
            return Err(TreeDefect::NodeCountMismatch {
                graph: n,
                tree: tree.number_of_nodes(),
            });
        }

        let expected = n.saturating_sub(1) as NumEdges;
        if tree.number_of_edges() != expected {
            return Err(TreeDefect::EdgeCountMismatch {
                expected,
                found: tree.number_of_edges(),
            });
        }

        if let Some(e) = tree.edges(true).find(|e| !self.has_edge(e.0, e.1)) {
            return Err(TreeDefect::ForeignEdge(e));
        }

        if !tree.is_connected() {
            return Err(TreeDefect::Disconnected);
        }

        Ok(())
    }

    /// Returns *true* if `self` is a spanning tree of `graph`
    fn is_spanning_tree_of<G>(&self, graph: &G) -> bool
    where
        G: SpanningTree,
    {
        graph.verify_spanning_tree(self).is_ok()
    }
}

impl<G> SpanningTree for G where G: AdjacencyList + GraphEdgeOrder + EdgeWeights {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::GeneratorSubstructures, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn total_weight(graph: &Graph) -> Weight {
        graph
            .edges(true)
            .map(|Edge(u, v)| graph.weight_or_default(u, v))
            .sum()
    }

    #[test]
    fn disjoint_set() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(3, 4));
        assert!(!set.union(1, 0));
        assert!(set.union(1, 4));
        assert_eq!(set.find(0), set.find(3));
        assert_ne!(set.find(0), set.find(2));
    }

    #[test]
    fn spanning_forest() {
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (0, 2), (3, 4)]);
        let forest = graph.minimum_spanning_tree();
        assert_eq!(
            forest.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(3, 4)]
        );
        assert_eq!(
            graph.verify_spanning_tree(&forest),
            Err(TreeDefect::EdgeCountMismatch {
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn maximal_weights() {
        let mut graph = path_graph(3);
        graph.set_weight(0, 1, Weight::MAX);
        graph.set_weight(1, 2, Weight::MAX);

        let tree = graph.minimum_spanning_tree();
        assert_eq!(tree, graph);
        assert_eq!(tree.weight_of(1, 2), Some(Weight::MAX));
    }

    #[test]
    fn tree_defects() {
        let graph = cycle_graph(4);

        assert_eq!(
            graph.verify_spanning_tree(&path_graph(3)),
            Err(TreeDefect::NodeCountMismatch { graph: 4, tree: 3 })
        );
        assert_eq!(
            graph.verify_spanning_tree(&Graph::from_edges(4, [(0, 1), (1, 2), (0, 2)])),
            Err(TreeDefect::ForeignEdge(Edge(0, 2)))
        );
        assert_eq!(
            graph.verify_spanning_tree(&Graph::from_edges(4, [(0, 1), (1, 2)])),
            Err(TreeDefect::EdgeCountMismatch {
                expected: 3,
                found: 2
            })
        );
        assert!(path_graph(4).is_spanning_tree_of(&graph));

        let mut two_triangles = Graph::new(6);
        two_triangles.connect_clique(0..3);
        two_triangles.connect_clique(3..6);
        two_triangles.add_edge(2, 3);
        assert_eq!(
            two_triangles.verify_spanning_tree(&Graph::from_edges(
                6,
                [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5)]
            )),
            Err(TreeDefect::Disconnected)
        );

        assert_eq!(Graph::new(0).verify_spanning_tree(&Graph::new(0)), Ok(()));
        assert_eq!(Graph::new(1).verify_spanning_tree(&Graph::new(1)), Ok(()));
    }

    #[test]
    fn minimal_on_small_graphs() {
        let rng = &mut Pcg64::seed_from_u64(4);
        for _ in 0..100 {
            let n = rng.random_range(2..6);
            let graph = random_connected_graph(rng, n, 4);
            let graph = with_random_weights(rng, graph, 9);

            let tree = graph.minimum_spanning_tree();
            assert!(tree.is_spanning_tree_of(&graph));
            assert!(tree
                .edges(true)
                .all(|Edge(u, v)| tree.weight_of(u, v) == graph.weight_of(u, v)));

            // brute force over all edge subsets of size n - 1
            let best = graph
                .ordered_edges(true)
                .combinations(n as usize - 1)
                .map(|edges| {
                    let mut candidate = Graph::from_edges(n, edges.iter());
                    for Edge(u, v) in edges {
                        candidate.set_weight(u, v, graph.weight_or_default(u, v));
                    }
                    candidate
                })
                .filter(|candidate| candidate.is_spanning_tree_of(&graph))
                .map(|candidate| total_weight(&candidate))
                .min()
                .unwrap();

            assert_eq!(total_weight(&tree), best);
        }
    }

    #[test]
    fn no_heavier_than_bfs_tree() {
        let rng = &mut Pcg64::seed_from_u64(12);
        for _ in 0..100 {
            let n = rng.random_range(2..40);
            let graph = random_connected_graph(rng, n, 2 * n);
            let graph = with_random_weights(rng, graph, 50);

            let tree = graph.minimum_spanning_tree();
            assert_eq!(tree.number_of_edges(), n - 1);

            let mut parents = graph.vertices_range().collect_vec();
            graph.bfs_with_predecessor(0).parent_array_into(&mut parents);
            let bfs_weight: Weight = (1..n)
                .map(|u| graph.weight_or_default(u, parents[u as usize]))
                .sum();
            assert!(total_weight(&tree) <= bfs_weight);
        }
    }
}
