use std::fmt;

use bit_set::BitSet;
use tracing::info;

use crate::error::{InputResult, MalformedInputError};

/** Vertex Id (0-based) */
pub type VertexId = usize;

/** largest number of vertices a graph may declare */
pub const MAX_VERTICES:usize = u32::MAX as usize;

/** Solution of a graph coloring problem
(represented as a partition, one vector of vertices per color).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** graph coloring instance. Colorers and the checker only see the graph through this trait. */
pub trait ColoringInstance: fmt::Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of edges
    fn nb_edges(&self) -> usize;

    /// neighbors of u (sorted, no duplicates)
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v share an edge
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (u < v)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// iterates over the vertices
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// logs some statistics about the instance
    fn display_statistics(&self) {
        let min_degree = self.vertices().map(|u| self.degree(u)).min().unwrap_or(0);
        let max_degree = self.vertices().map(|u| self.degree(u)).max().unwrap_or(0);
        info!(
            vertices = self.nb_vertices(),
            edges = self.nb_edges(),
            min_degree,
            max_degree,
            "instance statistics"
        );
    }
}


/** models a Graph Coloring instance.
Immutable once built: adjacency lists are symmetric, sorted and without duplicates.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// edges of the graph (u < v)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl ColoringInstance for Graph {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.edges.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, search the list
            None => { self.adj_list[u].binary_search(&v).is_ok() },
            Some(matrix) => { matrix[u].contains(v) }
        }
    }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}

impl Graph {

    /** constructor using an adjacency list (0-based).
    Missing reverse arcs are added and duplicates removed.
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> InputResult<Self> {
        let n = adj_list.len();
        let arcs = adj_list.into_iter().enumerate()
            .flat_map(|(u, l)| l.into_iter().map(move |v| (0, u+1, v+1)));
        Self::build(n, arcs)
    }

    /** builds a graph from n and a list of edges given with 1-based ids (DIMACS numbering).
    Fails if an endpoint is outside [1, n] or if an edge is a self-loop.
    */
    pub fn from_edges(n:usize, edges:&[(usize,usize)]) -> InputResult<Self> {
        Self::build(n, edges.iter().map(|(a,b)| (0, *a, *b)))
    }

    /** builds the graph from (line, a, b) triples, a and b being 1-based.
    Nothing is returned unless every edge is valid.
    */
    pub(crate) fn build<I>(n:usize, edges:I) -> InputResult<Self>
    where I: IntoIterator<Item=(usize, usize, usize)> {
        let too_many = MalformedInputError::TooManyVertices { line:0, nb_vertices:n, max:MAX_VERTICES };
        if n > MAX_VERTICES { return Err(too_many); }
        let mut adj_list:Vec<Vec<VertexId>> = Vec::new();
        if adj_list.try_reserve_exact(n).is_err() { return Err(too_many); }
        adj_list.resize(n, Vec::new());
        for (line, a, b) in edges {
            for vertex in [a, b].iter().copied() {
                if vertex == 0 || vertex > n {
                    return Err(MalformedInputError::VertexOutOfRange { line, vertex, nb_vertices: n });
                }
            }
            if a == b {
                return Err(MalformedInputError::SelfLoop { line, vertex: a });
            }
            adj_list[a-1].push(b-1);
            adj_list[b-1].push(a-1);
        }
        for l in adj_list.iter_mut() { // duplicate edges collapse
            l.sort_unstable();
            l.dedup();
        }
        let edges = Self::build_edges(&adj_list);
        Ok(Self { n, edges, adj_list, adj_matrix:None })
    }

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** if called, populates the adj_matrix (n bitsets of n bits).
    `are_adjacent` then answers in constant time instead of searching the adjacency list.
    */
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::with_capacity(self.n); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }
}


/** color assignment of a graph.
`None` marks an uncolored vertex. Colors form a dense range starting at 0,
so the number of distinct colors is the largest color + 1.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// colors[v]: color of vertex v
    colors: Vec<Option<usize>>,
    /// number of distinct colors used
    nb_colors: usize,
}

impl Coloring {
    /// every vertex uncolored
    pub fn new(n:usize) -> Self {
        Self { colors: vec![None ; n], nb_colors: 0 }
    }

    /// number of vertices
    pub fn len(&self) -> usize { self.colors.len() }

    /// true if the coloring is over an empty graph
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// number of distinct colors used
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// color of v (None if v is uncolored or not a vertex)
    pub fn color(&self, v:VertexId) -> Option<usize> {
        self.colors.get(v).copied().flatten()
    }

    /// per-vertex colors
    pub fn colors(&self) -> &[Option<usize>] { &self.colors }

    /** assigns color c to v. Only the colorers of this crate build colorings this way:
    c must not skip a color (c <= nb_colors) and v must not be colored yet,
    otherwise nb_colors no longer counts the distinct colors.
    */
    pub(crate) fn assign(&mut self, v:VertexId, c:usize) {
        debug_assert!(c <= self.nb_colors, "color {} skips colors (nb colors: {})", c, self.nb_colors);
        self.colors[v] = Some(c);
        if c >= self.nb_colors {
            self.nb_colors = c+1;
        }
    }

    /// true if every vertex has a color
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }

    /// partition view (color classes). uncolored vertices are left out.
    pub fn to_solution(&self) -> Solution {
        let mut res = vec![vec![] ; self.nb_colors];
        for (v,c) in self.colors.iter().enumerate() {
            if let Some(c) = c {
                res[*c].push(v);
            }
        }
        res
    }

    /** builds a coloring over n vertices from a partition.
    Empty classes are skipped so that colors stay dense.
    A vertex appearing in several classes keeps its last one.
    */
    pub fn from_solution(n:usize, solution:&[Vec<VertexId>]) -> Self {
        let mut res = Self::new(n);
        for class in solution.iter().filter(|class| !class.is_empty()) {
            let c = res.nb_colors;
            for v in class.iter().filter(|v| **v < n) {
                res.assign(*v, c);
            }
        }
        res
    }

    /// user-facing colors (1-based, 0 for uncolored vertices)
    pub fn to_one_based(&self) -> Vec<usize> {
        self.colors.iter().map(|c| c.map_or(0, |c| c+1)).collect()
    }
}


/// result of the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is proper, contains the number of colors
    Ok(usize),
    /// a vertex appears in two color classes
    VertexAddedTwice(VertexId),
    /// a color class contains a vertex that does not exist
    UnknownVertex(VertexId),
    /// a vertex has no color
    VertexNotColored(VertexId),
    /// two adjacent vertices have the same color
    ConflictingEdge(VertexId, VertexId),
}

impl CheckerResult {
    /// true iff the coloring is proper and complete
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckerResult::Ok(_))
    }

    /// number of colors if the coloring is valid
    pub fn nb_colors(&self) -> Option<usize> {
        match self {
            CheckerResult::Ok(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CheckerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerResult::Ok(n) => write!(f, "valid coloring with {} colors", n),
            CheckerResult::VertexAddedTwice(v) => write!(f, "vertex {} is colored twice", v+1),
            CheckerResult::UnknownVertex(v) => write!(f, "vertex {} does not exist", v+1),
            CheckerResult::VertexNotColored(v) => write!(f, "vertex {} is not colored", v+1),
            CheckerResult::ConflictingEdge(a,b) => {
                write!(f, "neighbor vertices {}, {} have the same color", a+1, b+1)
            },
        }
    }
}

/**
checks a coloring. Stops at the first violation found
(scanning vertices by increasing id), does not modify the coloring.
*/
pub fn checker(inst:&dyn ColoringInstance, coloring:&Coloring) -> CheckerResult {
    for u in inst.vertices() {
        let cu = match coloring.color(u) {
            None => return CheckerResult::VertexNotColored(u),
            Some(c) => c,
        };
        for v in inst.neighbors(u) {
            if coloring.color(*v) == Some(cu) {
                return CheckerResult::ConflictingEdge(u, *v);
            }
        }
    }
    CheckerResult::Ok(coloring.nb_colors())
}

/**
checks a solution given as a partition (for instance read from a solution file).
*/
pub fn checker_solution(inst:&dyn ColoringInstance, sol:&[Vec<VertexId>]) -> CheckerResult {
    let n = inst.nb_vertices();
    let mut visited = BitSet::with_capacity(n);
    for c in sol {
        for v in c {
            if *v >= n {
                return CheckerResult::UnknownVertex(*v);
            }
            if !visited.insert(*v) {
                return CheckerResult::VertexAddedTwice(*v);
            }
        }
    }
    checker(inst, &Coloring::from_solution(n, sol))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(1,2), (2,3), (1,3)]).unwrap()
    }

    #[test]
    fn test_build_graph() {
        let inst = Graph::from_edges(4, &[(1,2), (2,3), (3,4), (4,1), (2,1)]).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1,3]);
        assert_eq!(inst.degree(1), 2);
        assert!(inst.are_adjacent(0, 3));
        assert!(inst.are_adjacent(3, 0));
        assert!(!inst.are_adjacent(0, 2));
        assert_eq!(inst.edges(), &[(0,1), (0,3), (1,2), (2,3)]);
    }

    #[test]
    fn test_new_symmetrizes() {
        let inst = Graph::new(vec![vec![1,2], vec![], vec![]]).unwrap();
        assert_eq!(inst.neighbors(1), &[0]);
        assert_eq!(inst.neighbors(2), &[0]);
        assert_eq!(inst.nb_edges(), 2);
    }

    #[test]
    fn test_adj_matrix_opt_in() {
        let mut inst = Graph::from_edges(5, &[(1,2), (2,3), (3,4), (4,5), (5,1), (1,3)]).unwrap();
        assert!(inst.adj_matrix.is_none());
        let from_lists:Vec<bool> = (0..5).flat_map(|u| (0..5).map(move |v| (u,v)))
            .map(|(u,v)| inst.are_adjacent(u, v)).collect();
        inst.populate_adj_matrix();
        assert!(inst.adj_matrix.is_some());
        let from_matrix:Vec<bool> = (0..5).flat_map(|u| (0..5).map(move |v| (u,v)))
            .map(|(u,v)| inst.are_adjacent(u, v)).collect();
        assert_eq!(from_lists, from_matrix);
        assert_eq!(from_lists.iter().filter(|b| **b).count(), 12);
    }

    #[test]
    fn test_too_many_vertices() {
        match Graph::from_edges(usize::MAX, &[]) {
            Err(MalformedInputError::TooManyVertices { line, nb_vertices, max }) => {
                assert_eq!(line, 0);
                assert_eq!(nb_vertices, usize::MAX);
                assert_eq!(max, MAX_VERTICES);
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_vertex_out_of_range() {
        match Graph::from_edges(3, &[(1,2), (2,4)]) {
            Err(MalformedInputError::VertexOutOfRange { vertex, nb_vertices, .. }) => {
                assert_eq!(vertex, 4);
                assert_eq!(nb_vertices, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(Graph::from_edges(3, &[(0,1)]).is_err());
    }

    #[test]
    fn test_self_loop() {
        assert!(matches!(
            Graph::from_edges(3, &[(2,2)]),
            Err(MalformedInputError::SelfLoop { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_empty_graph() {
        let inst = Graph::from_edges(0, &[]).unwrap();
        assert_eq!(inst.nb_vertices(), 0);
        let coloring = Coloring::new(0);
        assert_eq!(checker(&inst, &coloring), CheckerResult::Ok(0));
        inst.display_statistics();
    }

    #[test]
    fn test_coloring_counts() {
        let mut coloring = Coloring::new(3);
        assert_eq!(coloring.nb_colors(), 0);
        assert!(!coloring.is_complete());
        coloring.assign(0, 0);
        coloring.assign(1, 1);
        coloring.assign(2, 0);
        assert_eq!(coloring.nb_colors(), 2);
        assert!(coloring.is_complete());
        assert_eq!(coloring.to_solution(), vec![vec![0,2], vec![1]]);
        assert_eq!(coloring.to_one_based(), vec![1,2,1]);
        assert_eq!(Coloring::from_solution(3, &coloring.to_solution()), coloring);
    }

    #[test]
    fn test_checker_ok() {
        let inst = triangle();
        let coloring = Coloring::from_solution(3, &[vec![0], vec![1], vec![2]]);
        assert_eq!(checker(&inst, &coloring), CheckerResult::Ok(3));
        assert!(checker(&inst, &coloring).is_ok());
    }

    #[test]
    fn test_checker_not_colored() {
        let inst = triangle();
        let mut coloring = Coloring::new(3);
        coloring.assign(0, 0);
        coloring.assign(2, 1);
        let res = checker(&inst, &coloring);
        assert_eq!(res, CheckerResult::VertexNotColored(1));
        assert_eq!(res.to_string(), "vertex 2 is not colored");
        assert_eq!(res.nb_colors(), None);
    }

    #[test]
    fn test_checker_conflict_reports_first() {
        let inst = triangle();
        let coloring = Coloring::from_solution(3, &[vec![0,1,2]]);
        let res = checker(&inst, &coloring);
        assert_eq!(res, CheckerResult::ConflictingEdge(0, 1));
        assert_eq!(res.to_string(), "neighbor vertices 1, 2 have the same color");
    }

    #[test]
    fn test_checker_solution() {
        let inst = triangle();
        assert_eq!(checker_solution(&inst, &[vec![0], vec![1,0], vec![2]]), CheckerResult::VertexAddedTwice(0));
        assert_eq!(checker_solution(&inst, &[vec![0], vec![5]]), CheckerResult::UnknownVertex(5));
        assert_eq!(checker_solution(&inst, &[vec![0], vec![1]]), CheckerResult::VertexNotColored(2));
        assert_eq!(checker_solution(&inst, &[vec![2], vec![], vec![0], vec![1]]), CheckerResult::Ok(3));
    }
}
