use std::cmp::{Ordering, Ord};

use priority_queue::PriorityQueue;
use bit_set::BitSet;
use tracing::{debug, trace};

use crate::color::{ColoringInstance, Coloring, VertexId};

/** priority of an uncolored vertex: saturation first, then uncolored degree, then id
(strict total order, the largest is colored first).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DSatInfo {
    /// number of distinct colors among the colored neighbors
    dsat: usize,
    /// number of uncolored neighbors
    degree: usize,
    /// vertex id (last tie-break)
    id: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.id.cmp(&other.id))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colors
       (break ties by the largest uncolored degree, then by the largest id)
    2. assign it the first color none of its neighbors use
    3. mark all its uncolored neighbors seeing this color, and decrease their uncolored degree
    4. repeat until every vertex is colored

The uncolored vertices are kept in an indexed priority queue: updating a neighbor
changes its priority in place.
*/
pub fn greedy_dsatur(inst:&dyn ColoringInstance) -> Coloring {
    dsatur_with_order(inst).0
}

/// DSATUR, also returns the order in which vertices were colored
fn dsatur_with_order(inst:&dyn ColoringInstance) -> (Coloring, Vec<VertexId>) {
    let n:usize = inst.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::with_capacity(n);
    for i in inst.vertices() {
        remaining_vertices.push(i, DSatInfo { dsat:0, degree:inst.degree(i), id:i });
    }
    let mut coloring = Coloring::new(n);
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[v] -> colors v sees
    let mut order:Vec<VertexId> = Vec::with_capacity(n);
    while let Some((current_vertex, info)) = remaining_vertices.pop() {
        // first color not used by a colored neighbor
        let mut color:usize = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        coloring.assign(current_vertex, color);
        order.push(current_vertex);
        trace!(vertex = current_vertex, dsat = info.dsat, color, "colored");
        if order.len() % 1000 == 0 { debug!("colored {} / {}...", order.len(), n); }
        // update saturation degree information
        for neighbor in inst.neighbors(current_vertex).iter()
        .filter(|neighbor| coloring.color(**neighbor).is_none()) {
            let is_new_color = adj_colors[*neighbor].insert(color);
            remaining_vertices.change_priority_by(neighbor, |p| {
                if is_new_color { p.dsat += 1; }
                p.degree -= 1;
            });
        }
    }
    debug!(nb_colors = coloring.nb_colors(), "DSATUR done");
    (coloring, order)
}
