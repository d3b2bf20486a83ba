//! Command implementations and argument parsing for the spanning CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spanning_core::{
    LabeledGraph, MstAlgorithm, MstError, SpanningTree, SpanningTreeBuilder, WeightedGraph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanning",
    about = "Compute minimum spanning trees of weighted undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning tree of an edge-list file.
    Mst(MstCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Edge-list file: one `<u> <v> <weight>` triple per line.
    pub path: PathBuf,

    /// Algorithm used to build the tree.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Kruskal)]
    pub algorithm: AlgorithmArg,

    /// Disable path compression in Kruskal's union-find.
    #[arg(long)]
    pub no_path_compression: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Prim's algorithm.
    Prim,
    /// Kruskal's algorithm.
    Kruskal,
}

impl From<AlgorithmArg> for MstAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::Kruskal => Self::Kruskal,
        }
    }
}

/// Report rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header lines followed by one tab-separated edge per line.
    Human,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file is not a valid edge list.
    #[error("failed to parse `{path}`: {source}")]
    EdgeList {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: EdgeListError,
    },
    /// The spanning tree computation failed.
    #[error(transparent)]
    Mst(#[from] MstError<String>),
}

/// One tree edge as rendered in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEdge {
    /// Smaller endpoint.
    pub u: String,
    /// Larger endpoint.
    pub v: String,
    /// Edge weight.
    pub weight: u64,
}

/// Result of one `mst` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstReport {
    /// Name derived from the input file stem.
    pub source: String,
    /// Algorithm that produced the tree.
    pub algorithm: &'static str,
    /// Number of vertices in the input graph.
    pub vertices: usize,
    /// Number of connected components; `1` means the tree spans the graph.
    pub components: usize,
    /// Sum of the tree's edge weights.
    pub total_weight: u128,
    /// Tree edges in endpoint order.
    pub edges: Vec<ReportEdge>,
}

impl MstReport {
    /// Builds a report from a computed tree.
    #[must_use]
    pub fn new(
        source: String,
        algorithm: MstAlgorithm,
        graph: &LabeledGraph<String, u64>,
        tree: &SpanningTree<String, u64>,
    ) -> Self {
        let vertices = graph.vertex_count();
        let edges: Vec<ReportEdge> = tree
            .iter()
            .map(|(edge, weight)| ReportEdge {
                u: edge.first().clone(),
                v: edge.second().clone(),
                weight,
            })
            .collect();
        Self {
            source,
            algorithm: algorithm.as_str(),
            vertices,
            components: vertices.saturating_sub(edges.len()),
            total_weight: tree.total_weight_as::<u128>(),
            edges,
        }
    }
}

/// Report paired with the format it should be rendered in.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Requested output format.
    pub format: OutputFormat,
    /// Computed report.
    pub report: MstReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or the computation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanning_cli::cli::{AlgorithmArg, Cli, Command, MstCommand, OutputFormat, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 1\nb c 2\na c 5\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         algorithm: AlgorithmArg::Prim,
///         no_path_compression: false,
///         format: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.total_weight, 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Mst(command) => {
            Span::current().record("command", field::display("mst"));
            run_mst(command)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = field::Empty, algorithm = field::Empty, path_compression = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let MstCommand {
        path,
        algorithm,
        no_path_compression,
        format,
    } = command;
    let algorithm = MstAlgorithm::from(algorithm);

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("algorithm", field::display(algorithm));
    span.record("path_compression", !no_path_compression);

    let graph = load_graph(&path)?;
    let tree = SpanningTreeBuilder::new()
        .with_algorithm(algorithm)
        .with_path_compression(!no_path_compression)
        .build()
        .run(&graph)?;

    let report = MstReport::new(derive_source_name(&path), algorithm, &graph, &tree);
    info!(
        source = report.source.as_str(),
        vertices = report.vertices,
        tree_edges = report.edges.len(),
        components = report.components,
        "mst command completed"
    );
    Ok(ExecutionSummary { format, report })
}

#[instrument(name = "cli.load_graph", err)]
pub(super) fn load_graph(path: &Path) -> Result<LabeledGraph<String, u64>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(BufReader::new(file)).map_err(|source| CliError::EdgeList {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in the format it requests.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanning_cli::cli::{ExecutionSummary, MstReport, OutputFormat, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     format: OutputFormat::Json,
///     report: MstReport {
///         source: "demo".into(),
///         algorithm: "prim",
///         vertices: 1,
///         components: 1,
///         total_weight: 0,
///         edges: Vec::new(),
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("{\"source\":\"demo\""));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = &summary.report;
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, report)?;
            writeln!(writer)
        }
        OutputFormat::Human => {
            writeln!(writer, "source: {}", report.source)?;
            writeln!(writer, "algorithm: {}", report.algorithm)?;
            writeln!(writer, "vertices: {}", report.vertices)?;
            writeln!(writer, "components: {}", report.components)?;
            writeln!(writer, "total weight: {}", report.total_weight)?;
            for edge in &report.edges {
                writeln!(writer, "{}\t{}\t{}", edge.u, edge.v, edge.weight)?;
            }
            Ok(())
        }
    }
}
