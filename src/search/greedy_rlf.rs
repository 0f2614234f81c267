use bit_set::BitSet;
use priority_queue::PriorityQueue;
use tracing::{debug, trace};

use crate::color::{ColoringInstance, Coloring, VertexId};

/** implements a greedy RLF algorithm. That colors vertices one color at a time
    1. selects the uncolored vertex with the largest degree in the graph (ties: largest id)
       and gives it the current color
    2. its neighbors (colored or not) become excluded, the other uncolored vertices are candidates
    3. select the candidate with the most excluded neighbors (ties: fewest candidate neighbors)
       color it, all its neighbors become excluded
    4. when there are no candidates left, start over with a new color
Each color class is a maximal independent set of the uncolored vertices.
*/
pub fn greedy_rlf(inst:&dyn ColoringInstance) -> Coloring {
    let n:usize = inst.nb_vertices();
    let mut coloring = Coloring::new(n);
    // vertices by (degree, id), only used to pick the first vertex of each class
    let mut queue:PriorityQueue<VertexId, (usize, VertexId)> = PriorityQueue::with_capacity(n);
    for v in inst.vertices() {
        queue.push(v, (inst.degree(v), v));
    }
    let mut current_color:usize = 0;
    while let Some((seed, _)) = queue.pop() {
        coloring.assign(seed, current_color);
        let mut excluded:BitSet = inst.neighbors(seed).iter().copied().collect();
        let mut candidates:BitSet = inst.vertices()
            .filter(|v| coloring.color(*v).is_none() && !excluded.contains(*v))
            .collect();
        let mut class_size:usize = 1;
        while let Some(y) = select_candidate(inst, &excluded, &candidates) {
            queue.remove(&y);
            coloring.assign(y, current_color);
            candidates.remove(y);
            for u in inst.neighbors(y) {
                candidates.remove(*u);
                excluded.insert(*u);
            }
            class_size += 1;
        }
        trace!(color = current_color, class_size, "color class built");
        current_color += 1;
        if current_color % 100 == 0 { debug!("built {} classes, {} vertices left", current_color, queue.len()); }
    }
    debug!(nb_colors = coloring.nb_colors(), "RLF done");
    coloring
}

/** returns the candidate with the most neighbors in the excluded set,
breaking ties by the fewest neighbors in the candidate set, then by the smallest id.
*/
fn select_candidate(inst:&dyn ColoringInstance, excluded:&BitSet, candidates:&BitSet) -> Option<VertexId> {
    let mut best:Option<(VertexId, usize, usize)> = None;
    for v in candidates.iter() {
        let mut adj_excluded:usize = 0;
        let mut adj_candidates:usize = 0;
        for u in inst.neighbors(v) {
            if excluded.contains(*u) {
                adj_excluded += 1;
            } else if candidates.contains(*u) {
                adj_candidates += 1;
            }
        }
        let is_better = match best {
            None => true,
            Some((_, best_excluded, best_candidates)) => {
                adj_excluded > best_excluded
                    || (adj_excluded == best_excluded && adj_candidates < best_candidates)
            }
        };
        if is_better {
            best = Some((v, adj_excluded, adj_candidates));
        }
    }
    best.map(|(v,_,_)| v)
}
