//! Edge-list text loading.
//!
//! ```text
//! # comments and blank lines are skipped
//! 4        vertex count
//! 2        edge count
//! 0 1
//! 2 3
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, VertexId};

/// Parse an edge list: vertex count, edge count, then one `v w` pair per line.
pub fn parse_edge_list(input: &str) -> GraphResult<Graph> {
    let start = Instant::now();
    let eof = input.lines().count() + 1;

    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'));

    let (count_line, text) = lines
        .next()
        .ok_or_else(|| parse_error(eof, "missing vertex count"))?;
    let vertex_count = parse_single(count_line, text, "vertex count")?;

    let (line, text) = lines
        .next()
        .ok_or_else(|| parse_error(eof, "missing edge count"))?;
    let declared_edges = parse_single(line, text, "edge count")?;

    let mut graph = Graph::new(vertex_count).map_err(|e| match e {
        GraphError::TooLarge { .. } => parse_error(count_line, e.to_string()),
        other => other,
    })?;
    for (line, text) in lines {
        if graph.edge_count() == declared_edges {
            return Err(parse_error(
                line,
                format!("more edges than the declared {}", declared_edges),
            ));
        }
        let (v, w) = parse_pair(line, text)?;
        graph.add_edge(v, w)?;
    }

    if graph.edge_count() != declared_edges {
        return Err(parse_error(
            eof,
            format!(
                "expected {} edges, found {}",
                declared_edges,
                graph.edge_count()
            ),
        ));
    }

    log::debug!(
        "parsed edge list: {} vertices, {} edges in {:.2}ms",
        graph.vertex_count(),
        graph.edge_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(graph)
}

/// Read and parse an edge-list file.
pub fn read_edge_list(path: impl AsRef<Path>) -> GraphResult<Graph> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)?;
    log::debug!("loading edge list from {}", path.display());
    parse_edge_list(&input)
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_edge_list(s)
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_number(line: usize, token: &str) -> GraphResult<usize> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("'{}' is not a non-negative integer", token)))
}

fn parse_single(line: usize, text: &str, what: &str) -> GraphResult<usize> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => parse_number(line, token),
        _ => Err(parse_error(line, format!("expected a single {}", what))),
    }
}

fn parse_pair(line: usize, text: &str) -> GraphResult<(VertexId, VertexId)> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(v), Some(w), None) => Ok((parse_number(line, v)?, parse_number(line, w)?)),
        _ => Err(parse_error(line, "expected an edge as two vertex ids")),
    }
}
