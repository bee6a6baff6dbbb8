/*!
# Node Representation

We choose `Node = u32` as degree sequences (and thus graphs) in this crate stay far below `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly index per-node arrays
with `u as usize` without abstracting over node handles.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, used for visited and membership marks
pub type NodeBitSet = BitSetImpl<Node>;

/// Integer weight attached to an edge
pub type Weight = u64;

/// Weight assumed for edges that never had a weight assigned
pub const DEFAULT_WEIGHT: Weight = 1;
