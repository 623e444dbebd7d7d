use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{pair, preceded};
use thiserror::Error;
use tracing::{info, warn};

use crate::graph::{Graph, GraphError};
use crate::vertex_set::VertexId;

/** errors raised while reading a DIMACS instance */
#[derive(Debug, Error)]
pub enum DimacsError {
    /// the file could not be read
    #[error("unable to read {filename}: {source}")]
    Io {
        /// file being read
        filename: String,
        /// underlying error
        #[source]
        source: std::io::Error,
    },
    /// no `p edge N M` line before the first edge
    #[error("missing `p edge` header")]
    MissingHeader,
    /// a line is neither a comment, a header nor an edge
    #[error("line {line}: unable to parse `{content}`")]
    Syntax {
        /// line number (starting at 1)
        line: usize,
        /// content of the line
        content: String,
    },
    /// an edge is not valid for the declared number of vertices
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// reads a non-negative integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers, each preceded by spaces
fn two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    pair(preceded(space1, integer), preceded(space1, integer))(s)
}

/// true iff the line is a comment
pub fn is_comment(s:&str) -> bool {
    tag::<&str, &str, nom::error::Error<&str>>("c")(s).is_ok()
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(preceded(alt((tag("p edge"), tag("p col"))), two_integers))(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(preceded(tag("e"), two_integers))(s)
}

/** parses a DIMACS graph, returns the graph (vertices renumbered from 0) */
pub fn parse_dimacs(content:&str) -> Result<Graph, DimacsError> {
    let mut header:Option<(usize,usize)> = None;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || is_comment(line) { continue; }
        let syntax_error = || DimacsError::Syntax { line: i+1, content: line.to_string() };
        if header.is_none() {
            if read_edge(line).is_ok() { return Err(DimacsError::MissingHeader); }
            header = Some(read_header(line).map_err(|_| syntax_error())?.1);
            continue;
        }
        let (a,b) = read_edge(line).map_err(|_| syntax_error())?.1;
        if a == 0 || b == 0 { return Err(syntax_error()); }
        edges.push((a-1, b-1));
    }
    let (n,m) = header.ok_or(DimacsError::MissingHeader)?;
    let graph = Graph::try_from_edges(n, &edges)?;
    // some instances list every edge twice
    if edges.len() != m && 2*edges.len() != m && graph.nb_edges() != m {
        warn!(declared = m, listed = edges.len(), distinct = graph.nb_edges(), "edge count differs from the header");
    }
    Ok(graph)
}

/// reads a DIMACS instance from a file
pub fn read_from_file(filename:&str) -> Result<Graph, DimacsError> {
    let content = fs::read_to_string(filename)
        .map_err(|source| DimacsError::Io { filename: filename.to_string(), source })?;
    let graph = parse_dimacs(&content)?;
    info!(filename, "instance read");
    Ok(graph)
}
