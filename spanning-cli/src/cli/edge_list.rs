//! Parser for the whitespace-separated edge-list format.
//!
//! Each non-blank line that does not start with `#` is either `<u> <v>
//! <weight>`, declaring a labelled edge, or a lone `<u>`, declaring an
//! isolated vertex. Weights are unsigned 64-bit integers.

use std::io::{self, BufRead};
use std::num::ParseIntError;

use spanning_core::{LabeledGraph, WeightedGraph};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while parsing an edge list. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading the input failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the failure occurred.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// An edge line named two vertices but no weight.
    #[error("line {line}: edge `{left} {right}` is missing a weight")]
    MissingWeight {
        /// Offending line.
        line: usize,
        /// First endpoint.
        left: String,
        /// Second endpoint.
        right: String,
    },
    /// The weight token was not an unsigned 64-bit integer.
    #[error("line {line}: invalid weight `{raw}`: {source}")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Token that failed to parse.
        raw: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The line carried more than three tokens.
    #[error("line {line}: expected `<u> <v> <weight>`, found {tokens} tokens")]
    TooManyTokens {
        /// Offending line.
        line: usize,
        /// Number of tokens found.
        tokens: usize,
    },
    /// The same undirected edge appeared twice.
    #[error("line {line}: edge `{left} {right}` is already labelled")]
    DuplicateEdge {
        /// Line of the second occurrence.
        line: usize,
        /// First endpoint.
        left: String,
        /// Second endpoint.
        right: String,
    },
}

impl EdgeListError {
    /// Returns the 1-based line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Read { line, .. }
            | Self::MissingWeight { line, .. }
            | Self::InvalidWeight { line, .. }
            | Self::TooManyTokens { line, .. }
            | Self::DuplicateEdge { line, .. } => *line,
        }
    }
}

/// Parses an edge list into a graph keyed by vertex token.
///
/// # Errors
/// Returns [`EdgeListError`] for unreadable input, malformed lines, and
/// repeated edges.
///
/// # Examples
/// ```
/// use spanning_cli::cli::parse_edge_list;
/// use spanning_core::WeightedGraph;
///
/// let input = "# city links\nams ber 6\nber prg 3\n\nvie\n";
/// let graph = parse_edge_list(input.as_bytes())?;
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), spanning_cli::cli::EdgeListError>(())
/// ```
#[instrument(level = "debug", err, skip(reader))]
pub fn parse_edge_list(reader: impl BufRead) -> Result<LabeledGraph<String, u64>, EdgeListError> {
    let mut graph = LabeledGraph::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| EdgeListError::Read {
            line: line_number,
            source,
        })?;
        parse_line(&mut graph, line_number, &line)?;
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list parsed"
    );
    Ok(graph)
}

fn parse_line(
    graph: &mut LabeledGraph<String, u64>,
    line: usize,
    text: &str,
) -> Result<(), EdgeListError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens.as_slice() {
        [vertex] => {
            graph.add_vertex((*vertex).to_owned());
            Ok(())
        }
        [left, right] => Err(EdgeListError::MissingWeight {
            line,
            left: (*left).to_owned(),
            right: (*right).to_owned(),
        }),
        [left, right, raw] => {
            let weight = raw.parse::<u64>().map_err(|source| EdgeListError::InvalidWeight {
                line,
                raw: (*raw).to_owned(),
                source,
            })?;
            let (left, right) = ((*left).to_owned(), (*right).to_owned());
            if graph.label(&left, &right).is_some() {
                return Err(EdgeListError::DuplicateEdge { line, left, right });
            }
            graph.add_labeled_edge(left, right, weight);
            Ok(())
        }
        _ => Err(EdgeListError::TooManyTokens {
            line,
            tokens: tokens.len(),
        }),
    }
}
