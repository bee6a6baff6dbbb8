use fxhash::FxHashMap;

use super::*;

/// An undirected simple graph representation with optional edge weights
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
    weights: FxHashMap<Edge, Weight>,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

/// The default graph representation
pub type Graph = SparseAdjArrayUndir;

/// A spanning tree is stored like any other graph; see [`crate::algo::verify_spanning_tree`]
pub type Tree = Graph;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::default(); n as usize],
            num_edges: 0,
            weights: FxHashMap::default(),
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(!Edge(u, v).is_loop(), "self-loops are not supported");
        assert!(v < self.number_of_nodes());

        if self.nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            assert!(!self.nbs[v as usize].try_add_neighbor(u));
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());

        if self.nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
            self.weights.remove(&Edge(u, v).normalized());
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<Nbs: Neighborhood> EdgeWeights for UndirectedGraph<Nbs> {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.weights.get(&Edge(u, v).normalized()).copied()
    }

    fn set_weight(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight> {
        assert!(self.has_edge(u, v), "cannot weight missing edge {}", Edge(u, v));
        self.weights.insert(Edge(u, v).normalized(), weight)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Creates a list of at most `m_ub` random normalized, loop-free edges for nodes `0..n`
    fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
        let mut edges = (0..m_ub)
            .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
            .filter(|e| !e.is_loop())
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    fn adjacency_list<G>()
    where
        G: GraphFromScratch + AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, m_ub);
                    let graph = G::from_edges(n, edges.iter());

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.ordered_edges(true).collect_vec(), edges);

                    let degree_sum: NumNodes = graph.degrees().sum();
                    assert_eq!(degree_sum, 2 * edges.len() as NumNodes);

                    for &Edge(u, v) in &edges {
                        assert!(graph.has_edge(u, v));
                        assert!(graph.has_edge(v, u));
                    }

                    for u in graph.vertices() {
                        assert!(graph.neighbors_of(u).tuple_windows().all(|(a, b)| a < b));
                    }
                }
            }
        }
    }

    fn edge_editing<G>()
    where
        G: GraphEdgeEditing + AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [10 as NumNodes, 20] {
            for _ in 0..10 {
                let edges = random_edges(rng, n, n * 4);
                let mut graph = G::new(n);
                for &Edge(u, v) in &edges {
                    assert!(!graph.try_add_edge(v, u));
                    assert!(graph.try_add_edge(u, v));
                }

                let mut m = graph.number_of_edges();
                for Edge(u, v) in edges.into_iter().step_by(2) {
                    assert!(graph.try_remove_edge(u, v));
                    assert!(!graph.try_remove_edge(v, u));
                    m -= 1;
                    assert_eq!(m, graph.number_of_edges());
                }
            }
        }
    }

    #[test]
    fn adj_array_adjacency_list() {
        adjacency_list::<AdjArrayUndir>();
    }

    #[test]
    fn sparse_adj_array_adjacency_list() {
        adjacency_list::<SparseAdjArrayUndir>();
    }

    #[test]
    fn adj_array_edge_editing() {
        edge_editing::<AdjArrayUndir>();
    }

    #[test]
    fn sparse_adj_array_edge_editing() {
        edge_editing::<SparseAdjArrayUndir>();
    }

    #[test]
    fn weights_follow_edges() {
        let mut graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.weight_of(0, 1), None);
        assert_eq!(graph.weight_or_default(0, 1), DEFAULT_WEIGHT);

        assert_eq!(graph.set_weight(1, 0, 7), None);
        assert_eq!(graph.weight_of(0, 1), Some(7));
        assert_eq!(graph.set_weight(0, 1, 3), Some(7));

        graph.remove_edge(1, 0);
        graph.add_edge(0, 1);
        assert_eq!(graph.weight_of(0, 1), None);
    }

    #[test]
    #[should_panic]
    fn self_loops_are_rejected() {
        let mut graph = Graph::new(3);
        graph.add_edge(1, 1);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new(0);
        assert!(graph.is_empty());
        assert!(graph.is_edgeless());
        assert_eq!(graph.min_degree(), 0);
        assert_eq!(graph.edges(true).count(), 0);
    }
}
