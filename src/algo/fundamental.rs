/*!
# Fundamental Circuits and Cutsets

Given a spanning tree `T` of a connected graph `G`, every non-tree edge `e = (u, v)` closes exactly
one cycle in `T + e`: its **fundamental circuit**. Removing the tree edge `(u, x)` on that cycle
next to `u` splits `T` into two sides; the graph edges crossing between them form the
**fundamental cutset** of `(u, x)`, which always contains `e`.

```rust
use seqgraphs::{prelude::*, algo::*};

let graph = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2)]);
let tree = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);

let sets = graph.fundamental_structures(&tree).unwrap();
assert_eq!(sets.non_tree_edges, vec![Edge(1, 2)]);
assert_eq!(sets.circuits[0].iter().copied().collect::<Vec<_>>(), vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]);
assert_eq!(sets.cutsets[0].iter().copied().collect::<Vec<_>>(), vec![Edge(0, 1), Edge(1, 2)]);
```
*/

use std::{collections::BTreeSet, ops::Deref};

use tracing::{debug, instrument, trace};

use super::*;
use crate::error::Result;

/// Fundamental circuits and cutsets, one entry per non-tree edge (in ascending order).
/// All edges are normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FundamentalSets {
    /// Graph edges that are not part of the spanning tree
    pub non_tree_edges: Vec<Edge>,
    /// `cutsets[i]` is the fundamental cutset associated with `non_tree_edges[i]`
    pub cutsets: Vec<BTreeSet<Edge>>,
    /// `circuits[i]` is the fundamental circuit closed by `non_tree_edges[i]`
    pub circuits: Vec<BTreeSet<Edge>>,
}

impl FundamentalSets {
    /// Number of non-tree edges, i.e. the cyclomatic number `m - n + 1`
    pub fn len(&self) -> usize {
        self.non_tree_edges.len()
    }

    /// Returns *true* if the graph is a tree itself
    pub fn is_empty(&self) -> bool {
        self.non_tree_edges.is_empty()
    }

    /// Iterates over `(non-tree edge, cutset, circuit)` triples
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &BTreeSet<Edge>, &BTreeSet<Edge>)> + '_ {
        self.non_tree_edges
            .iter()
            .zip(&self.cutsets)
            .zip(&self.circuits)
            .map(|((&e, cutset), circuit)| (e, cutset, circuit))
    }
}

/// Inserts an edge into a graph for the lifetime of the guard and removes it again on drop.
pub struct TransientEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    graph: &'a mut G,
    edge: Edge,
}

impl<'a, G> TransientEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    /// ** Panics if the edge is already present **
    pub fn new(graph: &'a mut G, u: Node, v: Node) -> Self {
        graph.add_edge(u, v);
        Self {
            graph,
            edge: Edge(u, v),
        }
    }
}

impl<G> Deref for TransientEdge<'_, G>
where
    G: GraphEdgeEditing,
{
    type Target = G;

    fn deref(&self) -> &G {
        self.graph
    }
}

impl<G> Drop for TransientEdge<'_, G>
where
    G: GraphEdgeEditing,
{
    fn drop(&mut self) {
        self.graph.remove_edge(self.edge.0, self.edge.1);
    }
}

/// Returns the edges of the unique cycle of a connected unicyclic graph by repeatedly pruning
/// leaves (the 2-core).
fn unique_cycle<G: AdjacencyList>(graph: &G) -> BTreeSet<Edge> {
    let mut degrees = graph.degrees().collect_vec();
    let mut removed = NodeBitSet::new(graph.number_of_nodes());
    let mut leaves = graph
        .vertices()
        .filter(|&u| degrees[u as usize] <= 1)
        .collect_vec();

    while let Some(u) = leaves.pop() {
        removed.set_bit(u);
        for v in graph.neighbors_of(u) {
            if removed.get_bit(v) {
                continue;
            }
            degrees[v as usize] -= 1;
            if degrees[v as usize] == 1 {
                leaves.push(v);
            }
        }
    }

    graph
        .edges(true)
        .filter(|e| !removed.get_bit(e.0) && !removed.get_bit(e.1))
        .collect()
}

/// Fundamental circuits and cutsets relative to a spanning tree
pub trait FundamentalStructures: SpanningTree {
    /// Computes the fundamental cutset and circuit of every non-tree edge.
    ///
    /// The tree is verified first; if it is not a spanning tree of this graph the error is
    /// [`GraphError::PreconditionViolation`]. The caller's tree is left untouched.
    #[instrument(level = "debug", skip_all, fields(n = self.number_of_nodes(), m = self.number_of_edges()))]
    fn fundamental_structures(&self, tree: &Tree) -> Result<FundamentalSets> {
        self.verify_spanning_tree(tree)?;

        let non_tree_edges = self
            .ordered_edges(true)
            .filter(|e| !tree.has_edge(e.0, e.1))
            .collect_vec();

        let mut work = tree.clone();
        let mut cutsets = Vec::with_capacity(non_tree_edges.len());
        let mut circuits = Vec::with_capacity(non_tree_edges.len());

        for &Edge(u, v) in &non_tree_edges {
            let with_edge = TransientEdge::new(&mut work, u, v);

            let circuit = unique_cycle(&*with_edge);
            debug_assert!(circuit.contains(&Edge(u, v)));

            // u's neighbor on the cycle other than v
            let x = with_edge
                .neighbors_of(u)
                .find(|&w| w != v && circuit.contains(&Edge(u, w).normalized()))
                .unwrap_or(u);
            debug_assert_ne!(x, u);

            let mut side = NodeBitSet::new(self.number_of_nodes());
            side.set_bits(with_edge.bfs(u).with_nodes_excluded([x, v]));

            let cutset: BTreeSet<Edge> = self
                .edges(true)
                .filter(|e| side.get_bit(e.0) != side.get_bit(e.1))
                .collect();

            trace!(edge = %Edge(u, v), cutset = cutset.len(), circuit = circuit.len(), "fundamental sets");
            cutsets.push(cutset);
            circuits.push(circuit);
        }

        debug!(non_tree_edges = non_tree_edges.len(), "computed fundamental sets");
        Ok(FundamentalSets {
            non_tree_edges,
            cutsets,
            circuits,
        })
    }
}

impl<G> FundamentalStructures for G where G: SpanningTree {}
