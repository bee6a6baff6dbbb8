/*!
# Disjoint Paths via Edmonds–Karp

Counting **edge-disjoint** and **internally vertex-disjoint** paths between two nodes of an
undirected graph, which is the basis for the edge- and vertex-connectivity measures.

## Core concepts
- A [`ResidualNetwork`] stores integral arc capacities. Every undirected edge `{u, v}` becomes the
  two arcs `u -> v` and `v -> u` of capacity one each.
- For vertex-disjoint paths every node `v` other than source and target is split into `v_in = v`
  and `v_out = n + v` joined by an arc of capacity one. Labels map both copies back to `v`.
- [`EdmondsKarp`] repeatedly finds a shortest augmenting path by BFS and pushes one unit of flow
  along it. It is an iterator over the (labeled) paths it finds.
*/

use std::collections::BTreeMap;

use super::{traversal::*, *};

/// Residual network with integral capacities.
///
/// Implements [`AdjacencyList`] where the neighbors of `u` are all `v` with positive residual
/// capacity on `u -> v`, so the generic traversals of this crate apply directly.
#[derive(Clone, Debug)]
pub struct ResidualNetwork {
    s: Node,
    t: Node,
    capacity: Vec<BTreeMap<Node, NumNodes>>,
    labels: Vec<Node>,
}

impl GraphNodeOrder for ResidualNetwork {
    fn number_of_nodes(&self) -> NumNodes {
        self.capacity.len() as NumNodes
    }
}

impl AdjacencyList for ResidualNetwork {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.capacity[u as usize].keys().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.capacity[u as usize].len() as NumNodes
    }
}

impl ResidualNetwork {
    /// Constructs a residual network to compute **edge-disjoint paths** between `s` and `t`.
    /// ** Panics if `s >= n || t >= n` **
    pub fn edge_disjoint<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: AdjacencyList,
    {
        assert!(s < graph.number_of_nodes() && t < graph.number_of_nodes());
        Self {
            s,
            t,
            capacity: graph
                .vertices()
                .map(|u| graph.neighbors_of(u).map(|v| (v, 1)).collect())
                .collect(),
            labels: graph.vertices().collect(),
        }
    }

    /// Constructs a residual network to compute **internally vertex-disjoint paths**.
    /// Each vertex `v` is split into `v_in` and `v_out` with an arc between them,
    /// except for `s` and `t` which keep a single copy.
    /// ** Panics if `s >= n || t >= n` **
    pub fn vertex_disjoint<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: AdjacencyList,
    {
        let n = graph.number_of_nodes();
        assert!(s < n && t < n);

        let labels: Vec<_> = graph.vertices().chain(graph.vertices()).collect();
        let out = |v: Node| if v == s || v == t { v } else { n + v };

        let mut capacity = vec![BTreeMap::new(); 2 * n as usize];
        for v in graph.vertices() {
            if v != s && v != t {
                // from v_in to v_out
                capacity[v as usize].insert(n + v, 1);
            }

            for u in graph.neighbors_of(v) {
                // from v_out to u_in; the opposite direction is added when visiting u
                capacity[out(v) as usize].insert(u, 1);
            }
        }

        Self {
            s,
            t,
            capacity,
            labels,
        }
    }

    /// Returns the source node
    pub fn source(&self) -> Node {
        self.s
    }

    /// Returns the target node
    pub fn target(&self) -> Node {
        self.t
    }

    /// Returns the node of the original graph that `u` was derived from
    pub fn label(&self, u: Node) -> Node {
        self.labels[u as usize]
    }

    /// Returns the residual capacity of the arc `u -> v`
    pub fn residual_capacity(&self, u: Node, v: Node) -> NumNodes {
        self.capacity[u as usize].get(&v).copied().unwrap_or(0)
    }

    /// Pushes one unit of flow over the arc `u -> v`.
    /// ** Panics if `u -> v` has no residual capacity **
    pub fn reverse(&mut self, u: Node, v: Node) {
        match self.residual_capacity(u, v) {
            0 => panic!("arc {u} -> {v} has no residual capacity"),
            1 => {
                self.capacity[u as usize].remove(&v);
            }
            c => {
                self.capacity[u as usize].insert(v, c - 1);
            }
        }
        *self.capacity[v as usize].entry(u).or_insert(0) += 1;
    }
}

/// Implementation of the Edmonds–Karp algorithm for finding edge-disjoint (or vertex-disjoint,
/// depending on the network construction) paths between source and target.
pub struct EdmondsKarp {
    residual_network: ResidualNetwork,
    predecessor: Vec<Node>,
}

impl EdmondsKarp {
    /// Creates a new Edmonds–Karp solver from a given residual network.
    pub fn new(residual_network: ResidualNetwork) -> Self {
        let n = residual_network.len();
        Self {
            residual_network,
            predecessor: vec![0; n],
        }
    }

    /// Performs BFS to find an augmenting path from source to target.
    /// Updates the predecessor array and returns whether the target was reached.
    fn bfs(&mut self) -> bool {
        let s = self.residual_network.source();
        let t = self.residual_network.target();

        let mut bfs = self.residual_network.bfs_with_predecessor(s).stop_at(t);
        bfs.parent_array_into(self.predecessor.as_mut_slice());
        bfs.did_visit_node(t)
    }

    /// Returns the number of disjoint paths found, but stops early once
    /// `k` disjoint paths are reached.
    pub fn count_num_disjoint_upto(&mut self, k: NumNodes) -> NumNodes {
        self.take(k as usize).count() as NumNodes
    }
}

/// Iterates over disjoint paths found by the Edmonds–Karp algorithm.
/// Each iteration returns a path from source to target as a vector of original nodes.
impl Iterator for EdmondsKarp {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.residual_network.source();
        let t = self.residual_network.target();
        if s == t || !self.bfs() {
            return None;
        }

        let mut path = vec![t];
        let mut v = t;
        while v != s {
            let u = self.predecessor[v as usize];
            // skips arcs inside split-vertex gadgets
            if self.residual_network.label(u) != self.residual_network.label(v) {
                path.push(u);
            }
            self.residual_network.reverse(u, v);
            v = u;
        }

        Some(
            path.iter()
                .map(|&v| self.residual_network.label(v))
                .rev()
                .collect(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EDGES: [(Node, Node); 13] = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 2),
        (2, 3),
        (2, 6),
        (3, 6),
        (4, 2),
        (4, 7),
        (5, 1),
        (5, 7),
        (6, 7),
        (6, 5),
    ];

    #[test]
    fn edmonds_karp_edge_disjoint() {
        let g = Graph::from_edges(8, EDGES);
        let ek = EdmondsKarp::new(ResidualNetwork::edge_disjoint(&g, 0, 7));
        assert_eq!(ek.count(), 3);
    }

    #[test]
    fn edmonds_karp_vertex_disjoint() {
        let g = Graph::from_edges(8, EDGES);
        let paths = EdmondsKarp::new(ResidualNetwork::vertex_disjoint(&g, 0, 7)).collect_vec();
        assert_eq!(paths.len(), 3);

        // internal nodes are pairwise distinct
        let mut internal = paths
            .iter()
            .flat_map(|p| p[1..p.len() - 1].iter().copied())
            .collect_vec();
        let len = internal.len();
        internal.sort_unstable();
        internal.dedup();
        assert_eq!(internal.len(), len);

        for path in &paths {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&7));
            assert!(path.windows(2).all(|w| g.has_edge(w[0], w[1])));
        }
    }

    #[test]
    fn bottleneck_vertex() {
        // two triangles sharing node 2
        let g = Graph::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)]);
        let ek = EdmondsKarp::new(ResidualNetwork::edge_disjoint(&g, 0, 4));
        assert_eq!(ek.count(), 2);

        let ek = EdmondsKarp::new(ResidualNetwork::vertex_disjoint(&g, 0, 4));
        assert_eq!(ek.collect_vec(), vec![vec![0, 2, 4]]);
    }

    #[test]
    fn count_num_disjoint_upto() {
        let g = Graph::from_edges(8, EDGES);
        for k in 0..5 {
            let mut ek = EdmondsKarp::new(ResidualNetwork::edge_disjoint(&g, 0, 7));
            assert_eq!(ek.count_num_disjoint_upto(k), k.min(3));
        }
    }

    #[test]
    fn residual_capacities() {
        let g = Graph::from_edges(2, [(0, 1)]);
        let mut net = ResidualNetwork::edge_disjoint(&g, 0, 1);
        assert_eq!(net.residual_capacity(0, 1), 1);
        assert_eq!(net.residual_capacity(1, 0), 1);

        net.reverse(0, 1);
        assert_eq!(net.residual_capacity(0, 1), 0);
        assert_eq!(net.residual_capacity(1, 0), 2);
        assert_eq!(net.neighbors_of(0).count(), 0);
    }

    #[test]
    fn unreachable_target() {
        let g = Graph::from_edges(4, [(0, 1), (2, 3)]);
        let ek = EdmondsKarp::new(ResidualNetwork::edge_disjoint(&g, 0, 3));
        assert_eq!(ek.count(), 0);
        let ek = EdmondsKarp::new(ResidualNetwork::vertex_disjoint(&g, 0, 3));
        assert_eq!(ek.count(), 0);
    }
}
