mod common;

use proptest::prelude::*;

use greedy_color::color::{ColoringInstance, Graph, checker};
use greedy_color::search::Algorithm;

/// random graph: (n, edges) with 1-based endpoints, no self-loops
fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..40).prop_flat_map(|n| {
        prop::collection::vec((1..=n, 1..=n), 0..(3*n))
            .prop_map(move |edges| {
                let edges:Vec<(usize,usize)> = edges.into_iter().filter(|(a,b)| a != b).collect();
                Graph::from_edges(n, &edges).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn every_coloring_is_proper_and_complete(inst in arb_graph(), seed in any::<u64>()) {
        for algo in Algorithm::ALL.iter() {
            let coloring = algo.run(&inst, seed);
            prop_assert!(coloring.is_complete());
            let res = checker(&inst, &coloring);
            prop_assert!(res.is_ok(), "{}: {}", algo, res);
            prop_assert!(coloring.nb_colors() <= inst.nb_vertices());
            prop_assert!(coloring.nb_colors() >= 1);
            if inst.nb_edges() > 0 {
                prop_assert!(coloring.nb_colors() >= 2);
            }
        }
    }

    #[test]
    fn colors_are_dense(inst in arb_graph(), seed in any::<u64>()) {
        for algo in Algorithm::ALL.iter() {
            let coloring = algo.run(&inst, seed);
            prop_assert!(coloring.to_solution().iter().all(|class| !class.is_empty()));
        }
    }

    #[test]
    fn dsatur_and_rlf_use_at_most_max_degree_plus_one(inst in arb_graph()) {
        let max_degree = inst.vertices().map(|u| inst.degree(u)).max().unwrap_or(0);
        for algo in [Algorithm::Dsatur, Algorithm::Rlf].iter() {
            prop_assert!(algo.run(&inst, 0).nb_colors() <= max_degree + 1);
        }
    }

    #[test]
    fn runs_are_reproducible(inst in arb_graph(), seed in any::<u64>()) {
        for algo in Algorithm::ALL.iter() {
            prop_assert_eq!(algo.run(&inst, seed), algo.run(&inst, seed));
        }
    }
}
