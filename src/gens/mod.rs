/*!
# Generators

Random and deterministic building blocks for instances:

- [`RandomDegreeSequence`] draws uniformly random sequences until one is graphical.
- [`RandomWeights`] assigns uniformly random integer weights to all edges of a graph.
- [`GeneratorSubstructures`] adds paths, cycles and cliques to an existing graph.

Random generators follow a builder pattern: create an instance with `new()`, set parameters via
setters (e.g. `.nodes(n)`), then run it with a caller-provided random number generator. Passing a
seeded generator such as `rand_pcg::Pcg64` makes every run reproducible.

```rust
use rand::SeedableRng;
use rand_pcg::Pcg64;
use seqgraphs::{prelude::*, gens::*};

let rng = &mut Pcg64::seed_from_u64(3);
let sequence = RandomDegreeSequence::new().nodes(8).generate(rng).unwrap();
assert!(sequence.is_graphical());

let mut graph: Graph = sequence.realize().unwrap();
RandomWeights::new(1, 10).unwrap().assign(&mut graph, rng);
assert!(graph.edges(true).all(|Edge(u, v)| graph.weight_of(u, v).is_some()));
```
*/

use rand::Rng;

use crate::prelude::*;

mod sequence;
mod substructures;
mod weights;

pub use sequence::*;
pub use substructures::*;
pub use weights::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes of the generated instance.
    fn nodes(self, n: NumNodes) -> Self;
}
