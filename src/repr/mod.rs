/*!
# Graph Representations

Every graph in this crate is a simple undirected graph: an array of sorted adjacency sets indexed
by node id, plus an optional integer weight per edge. The storage of a single adjacency set is
abstracted by [`Neighborhood`]:

- [`ArrNeighborhood`] stores neighbors in a sorted `Vec<Node>`,
- [`SparseNeighborhood`] stores neighbors in a sorted `SmallVec` and avoids allocations for
  low-degree nodes.

[`Graph`] is the default representation and is used for both graphs and their spanning trees.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
