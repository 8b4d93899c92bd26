//! Command implementations.
//!
//! Each command loads the edge list, runs one query from `kambo_graph`, and
//! renders the result in the selected [`OutputFormat`]. Results go to stdout;
//! diagnostics go through `tracing` to stderr.

use std::{
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use kambo_graph::{algorithms, load_graph, GraphSummary, SimpleGraph};
use serde::Serialize;
use tracing::info;

use crate::{Cli, Command, OutputFormat};

/// A path found by the `path` command.
#[derive(Debug, Serialize)]
struct PathReport {
    path: Vec<usize>,
    hops: usize,
    /// Total weight; only present for `--weighted` queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<i32>,
}

/// Runs the selected command and returns the process exit code.
///
/// An unreachable target in `path` is not an error but exits with status 1.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Stats { file } => {
            let graph = load(file, cli.directed)?;
            let summary = GraphSummary::of(&graph);
            info!(order = summary.order, edges = summary.edge_count, "computed summary");
            emit(&mut out, cli.format, &summary, |w| writeln!(w, "{summary}"))?;
        }
        Command::Bfs { file, start } => {
            let graph = load(file, cli.directed)?;
            let order = algorithms::bfs(&graph, start)
                .with_context(|| format!("vertex {start} is not in the graph"))?;
            emit(&mut out, cli.format, &order, |w| {
                writeln!(w, "{}", join(&order, " "))
            })?;
        }
        Command::Path {
            file,
            from,
            to,
            weighted,
        } => {
            let graph = load(file, cli.directed)?;
            let Some(report) = find_path(&graph, *from, *to, *weighted)? else {
                eprintln!("no path from {from} to {to}");
                return Ok(ExitCode::FAILURE);
            };
            emit(&mut out, cli.format, &report, |w| match report.cost {
                Some(cost) => writeln!(w, "{} (cost {cost})", join(&report.path, " -> ")),
                None => writeln!(w, "{}", join(&report.path, " -> ")),
            })?;
        }
        Command::Components { file } => {
            let graph = load(file, cli.directed)?;
            let components = algorithms::connected_components(&graph);
            emit(&mut out, cli.format, &components, |w| {
                components
                    .iter()
                    .try_for_each(|c| writeln!(w, "{}", join(c, " ")))
            })?;
        }
        Command::Toposort { file } => {
            let graph = load(file, cli.directed)?;
            let order = algorithms::topological_sort(&graph)
                .context("cannot order vertices topologically")?;
            emit(&mut out, cli.format, &order, |w| {
                writeln!(w, "{}", join(&order, " "))
            })?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load(file: &Path, directed: bool) -> Result<SimpleGraph<usize, i32>> {
    load_graph(file, directed).with_context(|| format!("failed to load '{}'", file.display()))
}

fn find_path(
    graph: &SimpleGraph<usize, i32>,
    from: usize,
    to: usize,
    weighted: bool,
) -> Result<Option<PathReport>> {
    let context = || format!("cannot search for a path from {from} to {to}");
    let found = if weighted {
        algorithms::shortest_weighted_path(graph, &from, &to)
            .with_context(context)?
            .map(|(cost, path)| (Some(cost), path))
    } else {
        algorithms::shortest_path(graph, &from, &to)
            .with_context(context)?
            .map(|path| (None, path))
    };
    Ok(found.map(|(cost, path)| PathReport {
        hops: path.len().saturating_sub(1),
        path,
        cost,
    }))
}

/// Writes `value` as JSON, or calls `text` to write the human-readable form.
fn emit<T, F>(out: &mut impl Write, format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Text => text(&mut *out)?,
    }
    out.flush()?;
    Ok(())
}

fn join(vertices: &[usize], separator: &str) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
