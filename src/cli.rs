//! Argument parsing and the analysis pipeline of the `seqgraphs` binary.

use std::io::{self, Write};

use clap::Parser;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use thiserror::Error;
use tracing::{info, instrument};

use seqgraphs::{algo::*, degree::DegreeSequence, gens::*, prelude::*};

const DEFAULT_MIN_WEIGHT: Weight = 1;
const DEFAULT_MAX_WEIGHT: Weight = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "seqgraphs",
    version,
    about = "Realize a degree sequence as a graph and analyze it."
)]
pub struct Cli {
    /// Comma-separated degree sequence, e.g. `3,3,2,2,2`. A random graphical sequence is drawn
    /// if omitted.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub sequence: Option<Vec<i64>>,

    /// Length of the random sequence (default: uniform in 5..=10).
    #[arg(long, conflicts_with = "sequence")]
    pub nodes: Option<NumNodes>,

    /// Seed of the random number generator (default: drawn from the OS).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest random edge weight.
    #[arg(long, default_value_t = DEFAULT_MIN_WEIGHT)]
    pub min_weight: Weight,

    /// Largest random edge weight.
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: Weight,

    /// Source node of the shortest path computation (default: random node).
    #[arg(long)]
    pub source: Option<Node>,
}

/// Errors raised by the pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// The user-supplied sequence is not graphical.
    #[error("sequence [{sequence}] is not graphical: {reason}")]
    NotGraphical {
        /// The sequence as entered.
        sequence: String,
        /// Why it was rejected.
        #[source]
        reason: SequenceError,
    },
    /// The requested shortest path source does not exist.
    #[error("source node {node} does not exist in a graph with {n} nodes")]
    SourceOutOfRange {
        /// The requested node.
        node: Node,
        /// Number of nodes of the graph.
        n: NumNodes,
    },
    /// The sampler gave up without finding a graphical sequence.
    #[error("no graphical sequence was found")]
    SamplingExhausted,
    /// A library operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Everything the pipeline computes, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Seed used for all random choices.
    pub seed: u64,
    /// The realized sequence.
    pub sequence: DegreeSequence,
    /// Edges of the realized graph with their random weights.
    pub edges: Vec<(Edge, Weight)>,
    /// Eulerian circuit; empty if the graph is not Eulerian.
    pub eulerian_circuit: Vec<Edge>,
    /// Source of the shortest path computation (absent for the empty graph).
    pub source: Option<Node>,
    /// Weighted distances from `source`.
    pub distances: Vec<Option<Weight>>,
    /// Edges of the minimum spanning tree (or forest) with their weights.
    pub spanning_tree: Vec<(Edge, Weight)>,
    /// Fundamental sets, or why the spanning tree could not be used.
    pub fundamental: Result<FundamentalSets, TreeDefect>,
    /// Edge connectivity.
    pub edge_connectivity: NumNodes,
    /// Vertex connectivity.
    pub vertex_connectivity: NumNodes,
    /// Minimum of edge and vertex connectivity.
    pub k_connectivity: NumNodes,
}

fn weighted_edges(graph: &Graph) -> Vec<(Edge, Weight)> {
    graph
        .ordered_edges(true)
        .map(|e| (e, graph.weight_or_default(e.0, e.1)))
        .collect()
}

fn parse_sequence(raw: &[i64]) -> Result<DegreeSequence, CliError> {
    let not_graphical = |reason| CliError::NotGraphical {
        sequence: raw.iter().join(", "),
        reason,
    };

    let sequence = DegreeSequence::try_from_degrees(raw).map_err(not_graphical)?;
    sequence.validate().map_err(not_graphical)?;
    Ok(sequence)
}

/// Runs the full pipeline described by `cli`.
///
/// # Errors
/// Returns [`CliError`] if the sequence is not graphical, the source node does not exist, or the
/// weight range is empty.
#[instrument(level = "debug", skip_all)]
pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let rng = &mut Pcg64::seed_from_u64(seed);

    let sequence = match &cli.sequence {
        Some(raw) => parse_sequence(raw)?,
        None => {
            let n = cli.nodes.unwrap_or_else(|| rng.random_range(5..=10));
            RandomDegreeSequence::new()
                .nodes(n)
                .generate(rng)
                .ok_or(CliError::SamplingExhausted)?
        }
    };
    info!(%sequence, seed, "realizing degree sequence");

    let mut graph: Graph = sequence.realize()?;
    let eulerian_circuit = graph.eulerian_circuit();

    RandomWeights::new(cli.min_weight, cli.max_weight)?.assign(&mut graph, rng);

    let n = graph.number_of_nodes();
    let source = match cli.source {
        Some(node) if node >= n => return Err(CliError::SourceOutOfRange { node, n }),
        Some(node) => Some(node),
        None if n == 0 => None,
        None => Some(rng.random_range(0..n)),
    };
    let distances = source
        .map(|s| graph.shortest_path_lengths(s))
        .unwrap_or_default();

    let tree = graph.minimum_spanning_tree();
    let fundamental = match graph.fundamental_structures(&tree) {
        Ok(sets) => Ok(sets),
        Err(GraphError::PreconditionViolation(defect)) => Err(defect),
        Err(err) => return Err(err.into()),
    };

    let edge_connectivity = graph.edge_connectivity();
    let vertex_connectivity = graph.vertex_connectivity();

    Ok(Report {
        seed,
        sequence,
        edges: weighted_edges(&graph),
        eulerian_circuit,
        source,
        distances,
        spanning_tree: weighted_edges(&tree),
        fundamental,
        edge_connectivity,
        vertex_connectivity,
        k_connectivity: edge_connectivity.min(vertex_connectivity),
    })
}

fn format_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> String {
    edges.into_iter().join(" ")
}

fn format_weighted(edges: &[(Edge, Weight)]) -> String {
    edges.iter().map(|(e, w)| format!("{e}:{w}")).join(" ")
}

/// Writes a human-readable rendering of `report`.
///
/// # Errors
/// Propagates write failures.
pub fn render_report(report: &Report, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "seed: {}", report.seed)?;
    writeln!(w, "degree sequence: {}", report.sequence)?;
    writeln!(w, "edges (edge:weight): {}", format_weighted(&report.edges))?;

    if report.eulerian_circuit.is_empty() {
        writeln!(w, "eulerian: no")?;
    } else {
        writeln!(w, "eulerian: yes")?;
        writeln!(w, "eulerian circuit: {}", format_edges(&report.eulerian_circuit))?;
    }

    if let Some(source) = report.source {
        writeln!(w, "shortest path lengths from node {source}:")?;
        for (u, d) in report.distances.iter().enumerate() {
            match d {
                Some(d) => writeln!(w, "  {u}: {d}")?,
                None => writeln!(w, "  {u}: unreachable")?,
            }
        }
    }

    writeln!(
        w,
        "minimum spanning tree (edge:weight): {}",
        format_weighted(&report.spanning_tree)
    )?;

    match &report.fundamental {
        Ok(sets) if sets.is_empty() => writeln!(w, "fundamental sets: none (graph is a tree)")?,
        Ok(sets) => {
            writeln!(w, "fundamental sets:")?;
            for (e, cutset, circuit) in sets.iter() {
                writeln!(w, "  {e}")?;
                writeln!(w, "    cutset:  {}", format_edges(cutset))?;
                writeln!(w, "    circuit: {}", format_edges(circuit))?;
            }
        }
        Err(defect) => writeln!(w, "fundamental sets: skipped ({defect})")?,
    }

    writeln!(w, "edge connectivity: {}", report.edge_connectivity)?;
    writeln!(w, "vertex connectivity: {}", report.vertex_connectivity)?;
    writeln!(w, "k-connectivity: {}", report.k_connectivity)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seqgraphs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_flags() {
        let cli = parse(&["--sequence", "3,3,2,2,2", "--seed", "7", "--source", "1"]);
        assert_eq!(cli.sequence, Some(vec![3, 3, 2, 2, 2]));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.source, Some(1));
        assert_eq!((cli.min_weight, cli.max_weight), (1, 10));

        let cli = parse(&["--sequence", "-1,1"]);
        assert_eq!(cli.sequence, Some(vec![-1, 1]));

        assert!(
            Cli::try_parse_from(["seqgraphs", "--sequence", "1,1", "--nodes", "4"]).is_err()
        );
    }

    #[test]
    fn cycle_report() {
        let report = run(&parse(&["--sequence", "2,2,2,2", "--seed", "1", "--source", "0"])).unwrap();

        assert_eq!(report.sequence.degrees(), &[2, 2, 2, 2]);
        assert_eq!(report.edges.len(), 4);
        assert_eq!(report.eulerian_circuit.len(), 4);
        assert_eq!(report.source, Some(0));
        assert!(report.distances.iter().all(Option::is_some));
        assert_eq!(report.spanning_tree.len(), 3);
        assert_eq!(report.fundamental.as_ref().map(|s| s.len()), Ok(1));
        assert_eq!(
            (
                report.edge_connectivity,
                report.vertex_connectivity,
                report.k_connectivity
            ),
            (2, 2, 2)
        );

        let mut out = Vec::new();
        render_report(&report, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("degree sequence: [2, 2, 2, 2]"));
        assert!(out.contains("eulerian: yes"));
        assert!(out.contains("k-connectivity: 2"));
    }

    #[test]
    fn disconnected_graph_skips_fundamental_sets() {
        let report = run(&parse(&["--sequence", "1,1,1,1", "--seed", "3"])).unwrap();
        assert!(report.eulerian_circuit.is_empty());
        assert!(matches!(
            report.fundamental,
            Err(TreeDefect::EdgeCountMismatch { .. })
        ));
        assert_eq!(report.k_connectivity, 0);

        let mut out = Vec::new();
        render_report(&report, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("eulerian: no"));
        assert!(out.contains("fundamental sets: skipped"));
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(
            run(&parse(&["--sequence", "3,3,3,2,2"])),
            Err(CliError::NotGraphical {
                reason: SequenceError::OddSum { sum: 13 },
                ..
            })
        ));
        assert!(matches!(
            run(&parse(&["--sequence", "2,-1,1"])),
            Err(CliError::NotGraphical {
                reason: SequenceError::NegativeDegree { index: 1, .. },
                ..
            })
        ));
        assert!(matches!(
            run(&parse(&["--sequence", "1,1", "--source", "2"])),
            Err(CliError::SourceOutOfRange { node: 2, n: 2 })
        ));
        assert!(matches!(
            run(&parse(&["--sequence", "1,1", "--min-weight", "5", "--max-weight", "2"])),
            Err(CliError::Graph(GraphError::InvalidWeightRange { lo: 5, hi: 2 }))
        ));
    }

    #[test]
    fn maximal_weights_do_not_overflow() {
        let max = Weight::MAX.to_string();
        let report = run(&parse(&[
            "--sequence",
            "1,2,1",
            "--min-weight",
            &max,
            "--max-weight",
            &max,
            "--source",
            "0",
        ]))
        .unwrap();

        assert_eq!(report.distances, vec![Some(0), Some(Weight::MAX), None]);
        assert_eq!(report.spanning_tree.len(), 2);
        assert_eq!(report.k_connectivity, 1);
    }

    #[test]
    fn random_runs_are_reproducible() {
        let cli = parse(&["--seed", "42"]);
        let first = run(&cli).unwrap();
        assert_eq!(first, run(&cli).unwrap());
        assert!((5..=10).contains(&first.sequence.len()));
        assert!(first.sequence.is_graphical());

        let report = run(&parse(&["--seed", "42", "--nodes", "12"])).unwrap();
        assert_eq!(report.sequence.len(), 12);
    }
}
