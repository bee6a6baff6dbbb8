/*!
# Degree Sequences

A degree sequence assigns every node `0..n` the number of edges it should be incident to. This module
decides whether such a sequence is *graphical* (realizable by a simple graph) via the Erdős–Gallai
inequalities and realizes graphical sequences via the Havel–Hakimi procedure.

```rust
use seqgraphs::{prelude::*, degree::*};

assert!(is_graphical(&[3, 3, 2, 2, 2]));
assert!(!is_graphical(&[3, 3, 3, 2, 2])); // odd sum
assert!(!is_graphical(&[-1, 1]));

let graph = realize(&[3, 3, 2, 2, 2]).unwrap();
assert_eq!(graph.degrees().collect::<Vec<_>>(), vec![3, 3, 2, 2, 2]);
```
*/

use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::{error::Result, ops::*, repr::Graph, *};

mod erdos_gallai;
mod havel_hakimi;

/// An ordered sequence of degrees, one per node `0..n`, each in `0..n`.
///
/// The domain is checked on construction; whether the sequence is graphical is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DegreeSequence(Vec<NumNodes>);

impl DegreeSequence {
    /// Wraps `degrees` after checking that every degree is at most `n - 1`
    pub fn try_new(degrees: Vec<NumNodes>) -> Result<Self, SequenceError> {
        if degrees.len() > NumNodes::MAX as usize {
            return Err(SequenceError::TooManyNodes { len: degrees.len() });
        }

        let n = degrees.len() as NumNodes;
        if let Some((index, &degree)) = degrees.iter().find_position(|&&d| d >= n) {
            return Err(SequenceError::DegreeTooLarge {
                index,
                degree: degree as i64,
                max: n as i64 - 1,
            });
        }

        Ok(Self(degrees))
    }

    /// Converts raw (possibly negative) integers into a degree sequence
    pub fn try_from_degrees(degrees: &[i64]) -> Result<Self, SequenceError> {
        let max = degrees.len() as i64 - 1;
        let degrees = degrees
            .iter()
            .enumerate()
            .map(|(index, &degree)| {
                if degree < 0 {
                    Err(SequenceError::NegativeDegree { index, degree })
                } else if degree > max || degree > NumNodes::MAX as i64 {
                    Err(SequenceError::DegreeTooLarge { index, degree, max })
                } else {
                    Ok(degree as NumNodes)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_new(degrees)
    }

    /// Returns the degree sequence of an existing graph in node order
    pub fn of_graph<G: AdjacencyList>(graph: &G) -> Self {
        Self(graph.degrees().collect())
    }

    /// Returns the degrees as a slice
    pub fn degrees(&self) -> &[NumNodes] {
        &self.0
    }

    /// Consumes the sequence and returns the degrees
    pub fn into_inner(self) -> Vec<NumNodes> {
        self.0
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if the sequence describes the graph without nodes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all degrees, i.e. twice the number of edges of any realization
    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&d| d as u64).sum()
    }

    /// Returns the degrees sorted in non-increasing order
    pub fn sorted(&self) -> Vec<NumNodes> {
        self.0.iter().copied().sorted_unstable_by(|a, b| b.cmp(a)).collect()
    }

    /// Checks the Erdős–Gallai conditions and reports the first violated one
    pub fn validate(&self) -> Result<(), SequenceError> {
        erdos_gallai::check(&self.0)
    }

    /// Returns *true* if some simple graph realizes this sequence
    pub fn is_graphical(&self) -> bool {
        self.validate().is_ok()
    }

    /// Realizes the sequence as a simple graph with the Havel–Hakimi procedure.
    ///
    /// Node `i` of the returned graph has degree `self.degrees()[i]`. The sequence is not validated
    /// upfront; an infeasible sequence is detected during construction and reported as
    /// [`GraphError::RealizationFailure`].
    #[instrument(level = "debug", skip_all, fields(n = self.len()))]
    pub fn realize<G>(&self) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing + GraphEdgeOrder,
    {
        let graph: G = havel_hakimi::realize(&self.0)?;
        debug!(edges = graph.number_of_edges(), "realized degree sequence");
        Ok(graph)
    }
}

impl Display for DegreeSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

impl AsRef<[NumNodes]> for DegreeSequence {
    fn as_ref(&self) -> &[NumNodes] {
        &self.0
    }
}

/// Returns *true* if `sequence` is the degree sequence of some simple graph.
///
/// Negative entries and entries `>= sequence.len()` are out of domain and yield *false*. The empty
/// sequence is (vacuously) graphical.
pub fn is_graphical(sequence: &[i64]) -> bool {
    DegreeSequence::try_from_degrees(sequence).is_ok_and(|seq| seq.is_graphical())
}

/// Realizes `sequence` as a [`Graph`] where node `i` has degree `sequence[i]`.
///
/// Out-of-domain entries yield [`GraphError::InvalidSequence`]; infeasible sequences yield
/// [`GraphError::RealizationFailure`].
pub fn realize(sequence: &[i64]) -> Result<Graph> {
    DegreeSequence::try_from_degrees(sequence)?.realize()
}
