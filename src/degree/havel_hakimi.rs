use tracing::trace;

use super::*;

/// Havel–Hakimi: repeatedly connect the node with the largest remaining degree to the next
/// `d` nodes with the largest remaining degrees.
///
/// Ties are broken by node id (smaller first) so the result is deterministic.
pub(super) fn realize<G>(degrees: &[NumNodes]) -> Result<G, RealizationFailure>
where
    G: GraphNew + GraphEdgeEditing,
{
    let mut graph = G::new(degrees.len() as NumNodes);

    // (remaining degree, node)
    let mut remaining = degrees
        .iter()
        .enumerate()
        .map(|(u, &d)| (d, u as Node))
        .collect_vec();

    loop {
        remaining.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let Some(&(required, node)) = remaining.first() else {
            break;
        };
        if required == 0 {
            break;
        }

        remaining.remove(0);
        let available = remaining.len() as NumNodes;
        if required > available {
            return Err(RealizationFailure::InsufficientPartners {
                node,
                required,
                available,
            });
        }

        for (d, partner) in remaining.iter_mut().take(required as usize) {
            if *d == 0 {
                return Err(RealizationFailure::ExhaustedPartner {
                    node,
                    partner: *partner,
                });
            }

            *d -= 1;
            trace!(u = node, v = *partner, "connect");
            graph.add_edge(node, *partner);
        }
    }

    Ok(graph)
}
