//! Reading graphs from text files.
//!
//! File format:
//!
//! ```text
//! <vertices> <edges>
//! <source> <sink> <weight>
//! ...
//! ```
//!
//! Vertices are numbered from 1, weights are integers and may be negative.
//! Lines after the header which do not look like an edge are skipped.

use std::path::Path;

use crate::{
    error::{Error, Result},
    graph::{Edge, Graph, IndexBase},
};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub vertices: usize,
    /// Declared number of edges, may differ from the number of edge lines.
    pub edges: usize,
}

/// Parsed input file.
#[derive(Clone, Debug)]
pub struct Input {
    pub header: Header,
    pub graph: Graph,
    /// Number of lines accepted as edges.
    pub edge_lines: usize,
}

////////////////////////////////////////////////////////////////////////////////

pub fn read(path: impl AsRef<Path>) -> Result<Input> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<Input> {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let header = parse_header(first).ok_or_else(|| Error::MalformedHeader {
        line: first.to_string(),
    })?;

    let mut graph = Graph::new(header.vertices);
    let mut edge_lines = 0;
    for edge in lines.filter_map(parse_edge) {
        graph.set_edge(edge, IndexBase::One)?;
        edge_lines += 1;
    }

    Ok(Input {
        header,
        graph,
        edge_lines,
    })
}

////////////////////////////////////////////////////////////////////////////////

fn parse_header(line: &str) -> Option<Header> {
    let mut tokens = line.split_whitespace();
    let vertices = unsigned(tokens.next()?)?;
    let edges = unsigned(tokens.next()?)?;
    Some(Header { vertices, edges })
}

fn parse_edge(line: &str) -> Option<Edge> {
    let mut tokens = line.split_whitespace();
    let source = vertex(tokens.next()?)?;
    let sink = vertex(tokens.next()?)?;
    let weight = weight(tokens.next()?)?;
    Some(Edge::new(source, sink, weight))
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn unsigned(token: &str) -> Option<usize> {
    if !is_digits(token) {
        return None;
    }
    token.parse().ok()
}

// too large indices are still edges, they are rejected as out of range later
fn vertex(token: &str) -> Option<usize> {
    is_digits(token).then(|| token.parse().unwrap_or(usize::MAX))
}

fn weight(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if !is_digits(digits) {
        return None;
    }
    token.parse().ok()
}

////////////////////////////////////////////////////////////////////////////////
