//! Shared fixtures for unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::{gens::*, prelude::*};

/// Creates a graph on `n` nodes with at most `m_ub` random edges (loops and duplicates dropped)
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Graph {
    let edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .sorted_unstable()
        .dedup()
        .collect_vec();
    Graph::from_edges(n, edges)
}

/// Creates a connected graph: a random spanning path plus up to `extra` random edges
pub(crate) fn random_connected_graph<R: Rng>(rng: &mut R, n: NumNodes, extra: NumEdges) -> Graph {
    let mut graph = Graph::new(n);
    graph.connect_path(0..n);
    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            graph.try_add_edge(u, v);
        }
    }
    graph
}

/// Assigns random weights from `1..=max` to every edge
pub(crate) fn with_random_weights<R: Rng>(rng: &mut R, mut graph: Graph, max: Weight) -> Graph {
    let edges = graph.ordered_edges(true).collect_vec();
    for Edge(u, v) in edges {
        graph.set_weight(u, v, rng.random_range(1..=max));
    }
    graph
}

pub(crate) fn path_graph(n: NumNodes) -> Graph {
    let mut graph = Graph::new(n);
    graph.connect_path(0..n);
    graph
}

pub(crate) fn cycle_graph(n: NumNodes) -> Graph {
    let mut graph = Graph::new(n);
    graph.connect_cycle(0..n);
    graph
}

pub(crate) fn complete_graph(n: NumNodes) -> Graph {
    let mut graph = Graph::new(n);
    graph.connect_clique(0..n);
    graph
}

/// Outer 5-cycle, inner pentagram, and spokes `i - (i + 5)`
pub(crate) fn petersen_graph() -> Graph {
    let mut graph = Graph::new(10);
    graph.connect_cycle(0..5);
    graph.connect_cycle([5, 7, 9, 6, 8]);
    for i in 0..5 {
        graph.add_edge(i, i + 5);
    }
    graph
}
