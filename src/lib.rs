/*!
`seqgraphs` turns degree sequences into simple undirected graphs and analyzes them with classical
graph-theory constructions.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. All graphs are undirected and simple:
`Edge(u, v)` is equivalent to `Edge(v, u)` and edges are normalized (smaller endpoint first) before
they are compared. Edges may carry an integer weight.

See the [`repr`] module for the storage backends. [`Graph`](crate::repr::Graph) is the default and is
also used to store spanning trees.

# Pipeline

1. [`degree`] decides whether a sequence is graphical (Erdős–Gallai) and realizes it as a graph
   (Havel–Hakimi).
2. [`algo`] analyzes the realized graph: Eulerian circuits, Dijkstra shortest paths, Kruskal
   minimum spanning trees, fundamental cutsets and circuits relative to a spanning tree, and edge-,
   vertex- and k-connectivity.
3. [`gens`] provides the random parts: graphical sequences, edge weights, and deterministic
   substructures (paths, cycles, cliques).

```rust
use seqgraphs::{prelude::*, algo::*, degree::*};

let graph = realize(&[2, 2, 2, 2]).unwrap();
assert_eq!(graph.eulerian_circuit().len(), 4);
assert_eq!(graph.k_connectivity(), 2);
```

# Design

All algorithms are provided as traits implemented on the graph itself (`graph.eulerian_circuit()`,
`graph.edge_connectivity()`, ...), generic over the basic operation traits in [`ops`].
Generators use the *Builder* / *Setter* pattern before being run with a caller-provided random
number generator.

In most use-cases, `use seqgraphs::{prelude::*, algo::*, degree::*};` suffices for your needs.
*/

pub mod algo;
pub mod degree;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, RealizationFailure, SequenceError, TreeDefect};
pub use node::*;

/// `seqgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as
/// well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, RealizationFailure, SequenceError, TreeDefect},
        node::*,
        ops::*,
        repr::*,
    };
}
