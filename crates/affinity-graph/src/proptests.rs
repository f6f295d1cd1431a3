//! Property-based tests: both backends behave identically.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{render, same_graph, AdjacencyGraph, EdgeListGraph, Weight, WeightedGraph};
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Add(u8),
        Set(u8, u8, Weight),
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        // A small label space so operations collide often.
        prop_oneof![
            (0u8..6).prop_map(Op::Add),
            (0u8..6, 0u8..6, -3i32..10).prop_map(|(s, t, w)| Op::Set(s, t, w)),
            (0u8..6).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn test_backends_agree(ops in prop::collection::vec(op(), 0..60)) {
            let mut edges = EdgeListGraph::new();
            let mut adjacency = AdjacencyGraph::new();

            for op in ops {
                match op {
                    Op::Add(v) => prop_assert_eq!(edges.add(v), adjacency.add(v)),
                    Op::Set(s, t, w) => prop_assert_eq!(edges.set(s, t, w), adjacency.set(s, t, w)),
                    Op::Remove(v) => prop_assert_eq!(edges.remove(&v), adjacency.remove(&v)),
                }
                prop_assert!(same_graph(&edges, &adjacency));
                prop_assert_eq!(edges.edge_count(), adjacency.edge_count());
            }
            prop_assert_eq!(render(&edges), render(&adjacency));
        }

        #[test]
        fn test_set_is_visible_from_both_ends(s in 0u8..20, t in 0u8..20, w in 1i32..1000) {
            let mut graph = AdjacencyGraph::new();
            graph.set(s, t, w);
            prop_assert_eq!(graph.sources(&t).get(&s).copied(), Some(w));
            prop_assert_eq!(graph.targets(&s).get(&t).copied(), Some(w));
            prop_assert!(graph.contains(&s) && graph.contains(&t));
        }

        #[test]
        fn test_set_returns_previous(s in 0u8..5, t in 0u8..5, first in 1i32..100, second in -5i32..100) {
            let mut graph = EdgeListGraph::new();
            prop_assert_eq!(graph.set(s, t, first), 0);
            prop_assert_eq!(graph.set(s, t, second), first);
            prop_assert_eq!(graph.weight(&s, &t), second.max(0));
        }

        #[test]
        fn test_set_is_idempotent(s in 0u8..5, t in 0u8..5, w in -5i32..100) {
            let mut once = AdjacencyGraph::new();
            let mut twice = AdjacencyGraph::new();
            once.set(s, t, w);
            twice.set(s, t, w);
            twice.set(s, t, w);
            prop_assert!(same_graph(&once, &twice));
        }
    }
}
