use std::fs;
use std::path::Path;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res, rest};
use nom::sequence::{preceded, tuple};
use tracing::{debug, warn};

use crate::color::{Coloring, Graph, Solution, VertexId, MAX_VERTICES};
use crate::error::{InputResult, MalformedInputError};


/** content of a DIMACS file, before the graph is built.
Edges keep their 1-based ids and the line they were read from.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsInstance {
    /// declared number of vertices
    pub nb_vertices: usize,
    /// declared number of edges
    pub declared_edges: usize,
    /// (line, a, b) for each `e a b` line
    pub edges: Vec<(usize, usize, usize)>,
}

impl DimacsInstance {
    /// builds the graph (fails if an edge endpoint is not in [1, n])
    pub fn into_graph(self) -> InputResult<Graph> {
        Graph::build(self.nb_vertices, self.edges)
    }
}

impl Graph {
    /// creates an instance from a DIMACS file
    pub fn from_file<P: AsRef<Path>>(filename:P) -> InputResult<Self> {
        read_from_file(filename)?.into_graph()
    }

    /// creates an instance from the content of a DIMACS file
    pub fn from_dimacs_str(s:&str) -> InputResult<Self> {
        read_from_str(s)?.into_graph()
    }
}


/// a line of a DIMACS file
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Comment,
    Header(usize, usize),
    Edge(usize, usize),
}

/// reads a non-negative integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(s)
}

/// skips a comment line
fn comment(s:&str) -> IResult<&str, Line> {
    map(preceded(char('c'), rest), |_| Line::Comment)(s)
}

/// reads header containing (n,m)
fn header(s:&str) -> IResult<&str, Line> {
    map(
        tuple((
            char('p'), space1, alt((tag("edge"), tag("col"))),
            space1, integer, space1, integer, space0
        )),
        |(_, _, _, _, n, _, m, _)| Line::Header(n, m)
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
fn edge(s:&str) -> IResult<&str, Line> {
    map(
        tuple((char('e'), space1, integer, space1, integer, space0)),
        |(_, _, a, _, b, _)| Line::Edge(a, b)
    )(s)
}

fn parse_line(s:&str) -> IResult<&str, Line> {
    alt((comment, all_consuming(header), all_consuming(edge)))(s)
}

/// reads an instance from a string
pub fn read_from_str(s:&str) -> InputResult<DimacsInstance> {
    let mut dims:Option<(usize,usize)> = None;
    let mut edges = Vec::new();
    for (i, raw) in s.lines().enumerate() {
        let line = i+1;
        let content = raw.trim();
        if content.is_empty() { continue; }
        let invalid = || MalformedInputError::InvalidLine { line, content: content.to_string() };
        match parse_line(content) {
            Ok((_, Line::Comment)) => {},
            Ok((_, Line::Header(n, m))) => {
                if dims.is_some() { return Err(invalid()); } // second problem line
                if n > MAX_VERTICES {
                    return Err(MalformedInputError::TooManyVertices { line, nb_vertices: n, max: MAX_VERTICES });
                }
                dims = Some((n, m));
            },
            Ok((_, Line::Edge(a, b))) => {
                if dims.is_none() { return Err(invalid()); } // edge before the problem line
                edges.push((line, a, b));
            },
            Err(_) if content.starts_with('p') => {
                return Err(MalformedInputError::TruncatedHeader { line, content: content.to_string() });
            },
            Err(_) => return Err(invalid()),
        }
    }
    let (nb_vertices, declared_edges) = dims.ok_or(MalformedInputError::MissingHeader)?;
    // some files list each edge twice
    if edges.len() != declared_edges && 2*edges.len() != declared_edges {
        warn!(declared = declared_edges, read = edges.len(), "number of edges differs from the problem line");
    }
    debug!(nb_vertices, nb_edges = edges.len(), "read DIMACS instance");
    Ok(DimacsInstance { nb_vertices, declared_edges, edges })
}

/// reads an instance from file
pub fn read_from_file<P: AsRef<Path>>(filename:P) -> InputResult<DimacsInstance> {
    let path = filename.as_ref();
    let s = fs::read_to_string(path).map_err(|source| MalformedInputError::Io {
        path: path.display().to_string(), source
    })?;
    read_from_str(&s)
}


/** writes a string encoding the coloring (use this to export the solution).
Each line corresponds to a color, vertices are 1-based.
*/
pub fn coloring_to_string(coloring:&Coloring) -> String {
    let mut res = String::default();
    for class in coloring.to_solution() {
        let vertices:Vec<String> = class.iter().map(|v| (v+1).to_string()).collect();
        res += &vertices.join(" ");
        res += "\n";
    }
    res
}

/** writes a coloring into a file. each line corresponds to a color. */
pub fn write_coloring<P: AsRef<Path>>(filename:P, coloring:&Coloring) -> std::io::Result<()> {
    fs::write(filename, coloring_to_string(coloring))
}

/// reads a solution written by `coloring_to_string` (back to 0-based ids)
pub fn read_solution_from_str(s:&str) -> InputResult<Solution> {
    let mut res = Vec::new();
    for (i, raw) in s.lines().enumerate() {
        let content = raw.trim();
        if content.is_empty() { continue; }
        let class:Option<Vec<VertexId>> = content.split_whitespace()
            .map(|tok| tok.parse::<usize>().ok().filter(|v| *v > 0).map(|v| v-1))
            .collect();
        match class {
            Some(class) => res.push(class),
            None => return Err(MalformedInputError::InvalidLine { line: i+1, content: content.to_string() }),
        }
    }
    Ok(res)
}

/// reads a solution file
pub fn read_solution_from_file<P: AsRef<Path>>(filename:P) -> InputResult<Solution> {
    let path = filename.as_ref();
    let s = fs::read_to_string(path).map_err(|source| MalformedInputError::Io {
        path: path.display().to_string(), source
    })?;
    read_solution_from_str(&s)
}
