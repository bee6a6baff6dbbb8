use tracing::{debug, instrument, trace};

use super::{network_flow::*, *};

/// Connected components of undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components; each component is listed in BFS order
    /// starting from its smallest node
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, false)
    }

    /// Same as [`Connectivity::connected_components`] but skips isolated nodes
    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, true)
    }

    /// Returns *true* if every node can reach every other node.
    /// Graphs with at most one node are connected.
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }

    /// Returns *true* if all nodes with non-zero degree lie in the same component
    fn is_connected_ignoring_isolated(&self) -> bool {
        self.connected_components_no_singletons().nth(1).is_none()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of a graph
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// If `skip_trivial` is set, isolated nodes are not reported as components
    pub fn new(graph: &'a G, skip_trivial: bool) -> Self {
        let start = if skip_trivial {
            graph.vertices_with_neighbors().next()
        } else {
            graph.vertices_range().next()
        };

        let bfs = start.map(|s| {
            let mut bfs = graph.bfs(s);
            if skip_trivial {
                bfs.exclude_nodes(graph.vertices().filter(|&u| graph.is_isolated(u)));
            }
            bfs
        });

        Self { bfs }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Edge-, vertex- and k-connectivity of undirected graphs, computed via disjoint path counts.
///
/// All measures are `0` for graphs with fewer than two nodes and for disconnected graphs.
pub trait ConnectivityMeasures: AdjacencyList + AdjacencyTest + Sized {
    /// Returns the minimum number of edges whose removal disconnects the graph.
    ///
    /// Every minimum edge cut separates node `0` from some other node `t`, so the minimum over all
    /// `t` of the number of edge-disjoint `0`-`t` paths is the edge connectivity.
    ///
    /// # Examples
    /// ```
    /// use seqgraphs::{prelude::*, algo::*};
    ///
    /// let cycle = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// assert_eq!(cycle.edge_connectivity(), 2);
    /// ```
    #[instrument(level = "debug", skip_all, fields(n = self.number_of_nodes()))]
    fn edge_connectivity(&self) -> NumNodes {
        if self.number_of_nodes() < 2 || !self.is_connected() {
            return 0;
        }

        let mut best = self.min_degree();
        for t in 1..self.number_of_nodes() {
            if best == 0 {
                break;
            }

            let flow = EdmondsKarp::new(ResidualNetwork::edge_disjoint(self, 0, t))
                .count_num_disjoint_upto(best);
            trace!(t, flow, "edge-disjoint paths");
            best = best.min(flow);
        }

        debug!(edge_connectivity = best);
        best
    }

    /// Returns the minimum number of nodes whose removal disconnects the graph (or leaves a
    /// single node). A complete graph on `n` nodes has vertex connectivity `n - 1`.
    ///
    /// # Examples
    /// ```
    /// use seqgraphs::{prelude::*, algo::*};
    ///
    /// // two triangles sharing node 2
    /// let bowtie = Graph::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)]);
    /// assert_eq!(bowtie.vertex_connectivity(), 1);
    /// assert_eq!(bowtie.edge_connectivity(), 2);
    /// ```
    #[instrument(level = "debug", skip_all, fields(n = self.number_of_nodes()))]
    fn vertex_connectivity(&self) -> NumNodes {
        let n = self.number_of_nodes();
        if n < 2 || !self.is_connected() {
            return 0;
        }

        if self.degrees().all(|d| d == n - 1) {
            debug!(vertex_connectivity = n - 1, "complete graph");
            return n - 1;
        }

        let mut best = self.min_degree();
        'outer: for s in self.vertices_range() {
            for t in (s + 1)..n {
                if best == 0 {
                    break 'outer;
                }
                if self.has_edge(s, t) {
                    continue;
                }

                let flow = EdmondsKarp::new(ResidualNetwork::vertex_disjoint(self, s, t))
                    .count_num_disjoint_upto(best);
                trace!(s, t, flow, "vertex-disjoint paths");
                best = best.min(flow);
            }
        }

        debug!(vertex_connectivity = best);
        best
    }

    /// Returns the largest `k` such that the graph is both k-edge- and k-vertex-connected.
    fn k_connectivity(&self) -> NumNodes {
        self.edge_connectivity().min(self.vertex_connectivity())
    }
}

impl<G> ConnectivityMeasures for G where G: AdjacencyList + AdjacencyTest + Sized {}
