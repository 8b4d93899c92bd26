//! Plain-text edge lists.
//!
//! One edge per line, whitespace-separated: `<source> <target> [weight]`.
//! Vertices are non-negative integers and weights are `i32`. Blank lines and
//! lines starting with `#` are ignored.
//!
//! ```text
//! # a weighted triangle
//! 0 1 4
//! 1 2
//! 2 0 7
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{Graph, GraphError, GraphMut, Result, SimpleGraph, WeightedGraphMut};

/// Weight given to edges whose line has no weight field.
pub const DEFAULT_WEIGHT: i32 = 1;

/// One edge read from an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    /// Source vertex.
    pub source: usize,
    /// Target vertex.
    pub target: usize,
    /// Weight, if the line carried one.
    pub weight: Option<i32>,
    /// 1-based line the record was read from.
    pub line: usize,
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads edge records from any buffered reader.
///
/// # Errors
///
/// - [`GraphError::EdgeList`] for a malformed line.
/// - [`GraphError::Io`] if the reader fails.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>> {
    read_labelled(reader, "<input>")
}

/// Reads edge records from the file at `path`.
///
/// # Errors
///
/// - [`GraphError::Io`] if the file cannot be opened or read.
/// - [`GraphError::EdgeList`] for a malformed line.
pub fn parse_edge_list(path: impl AsRef<Path>) -> Result<Vec<EdgeRecord>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = File::open(path).map_err(|e| GraphError::Io {
        path: label.clone(),
        message: e.to_string(),
    })?;
    let records = read_labelled(BufReader::new(file), &label)?;
    info!(path = %label, records = records.len(), "read edge list");
    Ok(records)
}

fn read_labelled<R: BufRead>(reader: R, label: &str) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GraphError::Io {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        if let Some(record) = parse_line(&line, index + 1)? {
            records.push(record);
        }
    }
    debug!(source = label, records = records.len(), "parsed edge list");
    Ok(records)
}

fn parse_line(line: &str, number: usize) -> Result<Option<EdgeRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let (source, target, weight) = match fields.as_slice() {
        [source, target] => (source, target, None),
        [source, target, weight] => (source, target, Some(weight)),
        [_] => {
            return Err(GraphError::edge_list(
                number,
                format!("expected '<source> <target> [weight]', got '{trimmed}'"),
            ))
        }
        _ => {
            return Err(GraphError::edge_list(
                number,
                format!("expected at most three fields, got {}", fields.len()),
            ))
        }
    };

    let vertex = |field: &str| {
        field
            .parse::<usize>()
            .map_err(|_| GraphError::edge_list(number, format!("invalid vertex '{field}'")))
    };
    let weight = weight
        .map(|field| {
            field
                .parse::<i32>()
                .map_err(|_| GraphError::edge_list(number, format!("invalid weight '{field}'")))
        })
        .transpose()?;

    Ok(Some(EdgeRecord {
        source: vertex(*source)?,
        target: vertex(*target)?,
        weight,
        line: number,
    }))
}

// ---------------------------------------------------------------------------
// Graph construction and output
// ---------------------------------------------------------------------------

/// Builds a weighted graph from edge records.
///
/// Vertices are added the first time they appear. A record for an edge that
/// already exists overwrites its weight, so the last record wins. Records
/// without a weight get [`DEFAULT_WEIGHT`].
///
/// # Errors
///
/// [`GraphError::EdgeList`] for a self-loop record, carrying the record's line.
pub fn build_graph(records: &[EdgeRecord], directed: bool) -> Result<SimpleGraph<usize, i32>> {
    let mut graph: SimpleGraph<usize, i32> = SimpleGraph::with_capacity(directed, records.len());
    for record in records {
        for v in [record.source, record.target] {
            if !graph.contains_vertex(&v) {
                graph.add_vertex(v)?;
            }
        }
        graph
            .set_edge_weight(
                &record.source,
                &record.target,
                record.weight.unwrap_or(DEFAULT_WEIGHT),
            )
            .map_err(|e| match e {
                GraphError::InvalidOperation(reason) => GraphError::edge_list(record.line, reason),
                other => other,
            })?;
    }
    info!(
        vertices = graph.order(),
        edges = graph.edge_count(),
        directed,
        "built graph from edge list"
    );
    Ok(graph)
}

/// Reads the file at `path` and builds a graph from it.
///
/// # Errors
///
/// See [`parse_edge_list`] and [`build_graph`].
pub fn load_graph(path: impl AsRef<Path>, directed: bool) -> Result<SimpleGraph<usize, i32>> {
    build_graph(&parse_edge_list(path)?, directed)
}

/// Writes every edge of `graph` as a `<source> <target> <weight>` line.
///
/// Isolated vertices have no line and are not written.
///
/// # Errors
///
/// [`GraphError::Io`] if the writer fails.
pub fn write_edge_list<W: Write>(graph: &SimpleGraph<usize, i32>, mut writer: W) -> Result<()> {
    let io = |e: std::io::Error| GraphError::Io {
        path: "<output>".to_string(),
        message: e.to_string(),
    };
    for (u, v, w) in graph.edges() {
        writeln!(writer, "{u} {v} {w}").map_err(io)?;
    }
    writer.flush().map_err(io)
}
