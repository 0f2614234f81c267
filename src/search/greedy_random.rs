use rand::Rng;
use tracing::debug;

use crate::color::{ColoringInstance, Coloring, VertexId};

/** implements the random greedy baseline. It colors vertices in a random order:
    1. pick a random uncolored vertex
    2. pick a random color among the colors already used
    3. if a neighbor already has this color, open a new color instead
       (other existing colors are not tried)
    4. repeat until every vertex is colored

The generator is given by the caller: a seeded generator gives reproducible colorings.
*/
pub fn greedy_random<R:Rng>(inst:&dyn ColoringInstance, rng:&mut R) -> Coloring {
    let n:usize = inst.nb_vertices();
    let mut coloring = Coloring::new(n);
    let mut uncolored:Vec<VertexId> = inst.vertices().collect();
    let mut max_color:usize = 0;
    while !uncolored.is_empty() {
        let index = rng.gen_range(0..uncolored.len());
        let vertex = uncolored[index];
        let mut color = rng.gen_range(0..=max_color);
        if inst.neighbors(vertex).iter().any(|u| coloring.color(*u) == Some(color)) {
            max_color += 1;
            color = max_color;
        }
        coloring.assign(vertex, color);
        uncolored.swap_remove(index);
    }
    debug!(nb_colors = coloring.nb_colors(), "random greedy done");
    coloring
}
