//! Command-line interface for computing minimum spanning trees.
//!
//! The `mst` command reads a whitespace-separated edge list, runs the chosen
//! algorithm and renders the resulting tree.

mod commands;
mod edge_list;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, MstCommand, MstReport, OutputFormat,
    ReportEdge, render_summary, run_cli,
};
pub use edge_list::{EdgeListError, parse_edge_list};
