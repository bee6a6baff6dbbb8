use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// Neighborhoods are kept sorted in increasing order, so that iteration over neighbors (and thus
/// over edges) is deterministic and membership queries run in logarithmic time.
pub trait Neighborhood: Clone + Default {
    /// Returns the sorted neighbors as a slice
    fn as_slice(&self) -> &[Node];

    /// Inserts `u` at position `pos` without checking the sorting invariant
    fn insert_at(&mut self, pos: usize, u: Node);

    /// Removes the neighbor at position `pos`
    fn remove_at(&mut self, pos: usize);

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes {
        self.as_slice().len() as NumNodes
    }

    /// Returns an iterator over all neighbors in increasing order
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.as_slice().iter().copied()
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.as_slice().binary_search(&v).is_ok()
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.as_slice().binary_search(&u) {
            Ok(_) => true,
            Err(pos) => {
                self.insert_at(pos, u);
                false
            }
        }
    }

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        match self.as_slice().binary_search(&u) {
            Ok(pos) => {
                self.remove_at(pos);
                true
            }
            Err(_) => false,
        }
    }
}

/// Basic Neighborhood-Impl. using a sorted `Vec<Node>`
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ArrNeighborhood(Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn as_slice(&self) -> &[Node] {
        &self.0
    }

    fn insert_at(&mut self, pos: usize, u: Node) {
        self.0.insert(pos, u);
    }

    fn remove_at(&mut self, pos: usize) {
        self.0.remove(pos);
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse (which realized degree sequences usually are).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SparseNeighborhood<const N: usize = 8>(SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn as_slice(&self) -> &[Node] {
        &self.0
    }

    fn insert_at(&mut self, pos: usize, u: Node) {
        self.0.insert(pos, u);
    }

    fn remove_at(&mut self, pos: usize) {
        self.0.remove(pos);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted_insertion<Nbs: Neighborhood>() {
        let mut nbs = Nbs::default();
        for u in [5, 1, 9, 3, 7] {
            assert!(!nbs.try_add_neighbor(u));
        }
        assert!(nbs.try_add_neighbor(3));
        assert_eq!(nbs.as_slice(), &[1, 3, 5, 7, 9]);
        assert_eq!(nbs.num_of_neighbors(), 5);

        assert!(nbs.try_remove_neighbor(5));
        assert!(!nbs.try_remove_neighbor(5));
        assert!(nbs.has_neighbor(7));
        assert!(!nbs.has_neighbor(5));
        assert_eq!(nbs.neighbors().collect::<Vec<_>>(), vec![1, 3, 7, 9]);
    }

    #[test]
    fn arr_neighborhood() {
        sorted_insertion::<ArrNeighborhood>();
    }

    #[test]
    fn sparse_neighborhood() {
        sorted_insertion::<SparseNeighborhood>();
        sorted_insertion::<SparseNeighborhood<2>>();
    }
}
