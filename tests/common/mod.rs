#![allow(dead_code)]

use greedy_color::color::Graph;

/// myciel3.col (Grötzsch graph, chromatic number 4)
pub const MYCIEL3: &str = "c FILE: myciel3.col
c SOURCE: Michael Trick (trick@cmu.edu)
c DESCRIPTION: Graph based on Mycielski transformation.
c              Triangle free (clique number 2) but increasing
c              coloring number
p edge 11 20
e 1 2
e 1 4
e 1 7
e 1 9
e 2 3
e 2 6
e 2 8
e 3 5
e 3 7
e 3 10
e 4 5
e 4 6
e 4 10
e 5 8
e 5 9
e 6 11
e 7 11
e 8 11
e 9 11
e 10 11
";

pub fn complete_graph(n:usize) -> Graph {
    let mut edges = Vec::new();
    for a in 1..=n {
        for b in a+1..=n {
            edges.push((a,b));
        }
    }
    Graph::from_edges(n, &edges).unwrap()
}

/// cycle 1-2-...-n-1
pub fn cycle(n:usize) -> Graph {
    let edges:Vec<(usize,usize)> = (1..=n).map(|i| (i, i % n + 1)).collect();
    Graph::from_edges(n, &edges).unwrap()
}

/// rows x cols grid
pub fn grid(rows:usize, cols:usize) -> Graph {
    let id = |r:usize, c:usize| r*cols + c + 1;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c+1 < cols { edges.push((id(r,c), id(r,c+1))); }
            if r+1 < rows { edges.push((id(r,c), id(r+1,c))); }
        }
    }
    Graph::from_edges(rows*cols, &edges).unwrap()
}

/// queen graph on a n x n board (two squares are adjacent if a queen attacks from one to the other)
pub fn queen(n:usize) -> Graph {
    let mut edges = Vec::new();
    for a in 0..n*n {
        for b in a+1..n*n {
            let (ra, ca) = ((a / n) as i64, (a % n) as i64);
            let (rb, cb) = ((b / n) as i64, (b % n) as i64);
            if ra == rb || ca == cb || (ra-rb).abs() == (ca-cb).abs() {
                edges.push((a+1, b+1));
            }
        }
    }
    Graph::from_edges(n*n, &edges).unwrap()
}
