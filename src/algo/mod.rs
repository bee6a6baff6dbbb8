/*!
# Graph Algorithms

The analyses run on realized graphs. All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use seqgraphs::algo::*;
```
and gain access to traversals, connectivity measures, Eulerian circuits, shortest paths, minimum
spanning trees and fundamental circuits/cutsets. Every algorithm is a trait with a blanket
implementation over the basic operation traits, so it is called directly on the graph.
Traversals and disjoint path searches are provided as **iterators**.
*/

mod connectivity;
mod eulerian;
mod fundamental;
mod network_flow;
mod shortest_paths;
mod spanning_tree;
pub mod traversal;

use itertools::Itertools;

use crate::prelude::*;

pub use connectivity::*;
pub use eulerian::*;
pub use fundamental::*;
pub use network_flow::*;
pub use shortest_paths::*;
pub use spanning_tree::*;
pub use traversal::*;
