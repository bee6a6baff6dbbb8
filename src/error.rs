//! Error types for the crate.
//!
//! Rejected inputs are reported as explicit values, never as panics. The only panics left in the
//! library guard per-node accessors against out-of-range ids and internal invariants.

use thiserror::Error;

use crate::{Edge, Node, NumEdges, NumNodes, Weight};

/// Reasons a raw sequence of integers is not an acceptable (or not a graphical) degree sequence.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SequenceError {
    /// A degree was negative.
    #[error("degree {degree} of node {index} is negative")]
    NegativeDegree {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        degree: i64,
    },
    /// A degree exceeds the number of other nodes.
    #[error("degree {degree} of node {index} exceeds the maximum degree {max}")]
    DegreeTooLarge {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        degree: i64,
        /// Largest admissible degree, i.e. `n - 1`.
        max: i64,
    },
    /// The sequence has more entries than there are node ids.
    #[error("sequence of length {len} exceeds the supported number of nodes")]
    TooManyNodes {
        /// Length of the rejected sequence.
        len: usize,
    },
    /// The degree sum is odd, so no graph can realize the sequence.
    #[error("degree sum {sum} is odd")]
    OddSum {
        /// Sum of all degrees.
        sum: u64,
    },
    /// The Erdős–Gallai inequality fails for the prefix of length `k`.
    #[error("Erdős–Gallai inequality violated for the {k} largest degrees")]
    NotGraphical {
        /// Length of the first violating prefix (1-indexed).
        k: NumNodes,
    },
}

/// Infeasibility detected by Havel–Hakimi while constructing a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RealizationFailure {
    /// The node with the largest remaining degree needs more partners than nodes are left.
    #[error("node {node} needs {required} more neighbours but only {available} nodes remain")]
    InsufficientPartners {
        /// Node being connected.
        node: Node,
        /// Its remaining degree.
        required: NumNodes,
        /// Number of nodes still available as partners.
        available: NumNodes,
    },
    /// A chosen partner has no remaining degree left to give.
    #[error("node {node} cannot be connected to node {partner} whose degree is already exhausted")]
    ExhaustedPartner {
        /// Node being connected.
        node: Node,
        /// Partner whose remaining degree would drop below zero.
        partner: Node,
    },
}

/// Reasons a graph is not a spanning tree of another graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeDefect {
    /// Tree and graph have different node sets.
    #[error("tree has {tree} nodes but the graph has {graph}")]
    NodeCountMismatch {
        /// Number of nodes of the graph.
        graph: NumNodes,
        /// Number of nodes of the tree.
        tree: NumNodes,
    },
    /// A spanning tree on `n` nodes has exactly `n - 1` edges.
    #[error("tree has {found} edges but a spanning tree needs {expected}")]
    EdgeCountMismatch {
        /// Required number of edges.
        expected: NumEdges,
        /// Actual number of edges.
        found: NumEdges,
    },
    /// The tree uses an edge the graph does not have.
    #[error("tree edge {0} is not an edge of the graph")]
    ForeignEdge(Edge),
    /// The tree does not reach every node.
    #[error("tree is not connected")]
    Disconnected,
}

/// The error type of all fallible operations of this crate.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The input is not a (graphical) degree sequence.
    #[error("invalid degree sequence: {0}")]
    InvalidSequence(#[from] SequenceError),
    /// Havel–Hakimi ran into an infeasible state.
    #[error("realization failed: {0}")]
    RealizationFailure(#[from] RealizationFailure),
    /// A caller-supplied tree does not span the graph.
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] TreeDefect),
    /// Random weights were requested from an empty range.
    #[error("invalid weight range {lo}..={hi}")]
    InvalidWeightRange {
        /// Lower bound (inclusive).
        lo: Weight,
        /// Upper bound (inclusive).
        hi: Weight,
    },
}

/// Convenient result alias for this crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
