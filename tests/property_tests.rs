//! Property-based tests using proptest

use linkrank_core::graph::GraphBuilder;
use linkrank_core::input::MemorySource;
use linkrank_core::rank::{Execution, PageRankSolver};
use proptest::prelude::*;

fn edges_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..60)
}

fn source(edges: &[(u8, u8)]) -> MemorySource {
    MemorySource::new(edges.iter().map(|(s, t)| format!("p{s}\tp{t}")).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_scores_sum_to_one(edges in edges_strategy(), lambda in 0.05f64..0.95) {
        let graph = GraphBuilder::build(&source(&edges)).unwrap();
        let result = PageRankSolver::new(lambda, 1e-9).solve(&graph).unwrap();
        prop_assert_eq!(result.ranks.len(), graph.node_count());
        if !graph.is_empty() {
            prop_assert!((result.mass() - 1.0).abs() < 1e-9, "mass {}", result.mass());
            prop_assert!(result.ranks.iter().all(|&r| r > 0.0));
        }
    }

    #[test]
    fn test_ids_are_dense_and_stable(edges in edges_strategy()) {
        let first = GraphBuilder::build(&source(&edges)).unwrap();
        let second = GraphBuilder::build(&source(&edges)).unwrap();
        prop_assert_eq!(&first, &second);
        for (id, name) in first.index().iter() {
            prop_assert_eq!(first.index().id(name), Some(id));
        }
        prop_assert_eq!(first.edge_count(), edges.len());
    }

    #[test]
    fn test_execution_modes_agree(edges in edges_strategy()) {
        let graph = GraphBuilder::build(&source(&edges)).unwrap();
        let seq = PageRankSolver::new(0.15, 1e-10)
            .with_execution(Execution::Sequential)
            .solve(&graph)
            .unwrap();
        let par = PageRankSolver::new(0.15, 1e-10)
            .with_execution(Execution::Parallel)
            .solve(&graph)
            .unwrap();
        for (s, p) in seq.ranks.iter().zip(&par.ranks) {
            prop_assert!((s - p).abs() < 1e-12);
        }
    }
}
