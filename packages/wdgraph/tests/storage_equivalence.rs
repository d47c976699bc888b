use proptest::prelude::*;
use wdgraph::{AdjacencyMap, EdgeList, MutableStorage, WeightedDirectedGraph};

type ByVertex = WeightedDirectedGraph<u8, i32, AdjacencyMap<u8, i32>>;
type ByEdge = WeightedDirectedGraph<u8, i32, EdgeList<u8, i32>>;

#[derive(Clone, Debug)]
enum Op {
    Add(u8),
    Set(u8, u8, i32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(Op::Add),
        (0u8..6, 0u8..6, 0i32..4).prop_map(|(a, b, w)| Op::Set(a, b, w)),
        (0u8..6).prop_map(Op::Remove),
    ]
}

fn apply<S>(graph: &mut WeightedDirectedGraph<u8, i32, S>, ops: Vec<Op>)
where
    S: MutableStorage<Label = u8, Weight = i32>,
{
    for op in ops {
        match op {
            Op::Add(v) => {
                graph.add(v);
            }
            Op::Set(x, y, weight) => {
                graph.set(x, y, weight).unwrap();
            }
            Op::Remove(v) => {
                graph.remove(&v);
            }
        }
    }
}

proptest! {
    #[test]
    fn edge_list_and_adjacency_map_agree(ops in prop::collection::vec(op(), 0..64)) {
        let mut by_vertex = ByVertex::new();
        let mut by_edge = ByEdge::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    prop_assert_eq!(by_vertex.add(v), by_edge.add(v));
                }
                Op::Set(a, b, w) => {
                    prop_assert_eq!(by_vertex.set(a, b, w), by_edge.set(a, b, w));
                }
                Op::Remove(v) => {
                    prop_assert_eq!(by_vertex.remove(&v), by_edge.remove(&v));
                }
            }
        }

        prop_assert_eq!(by_vertex.vertices(), by_edge.vertices());
        for v in by_vertex.vertices() {
            prop_assert_eq!(by_vertex.sources(&v), by_edge.sources(&v));
            prop_assert_eq!(by_vertex.targets(&v), by_edge.targets(&v));
        }
        prop_assert_eq!(by_vertex.to_string(), by_edge.to_string());
        prop_assert!(by_vertex == by_edge);
        prop_assert!(by_vertex.validate().is_ok());
        prop_assert!(by_edge.validate().is_ok());
    }

    #[test]
    fn positive_set_is_visible_from_both_ends(
        ops in prop::collection::vec(op(), 0..32),
        a in 0u8..6,
        b in 0u8..6,
        w in 1i32..1000,
    ) {
        let mut graph = ByVertex::new();
        apply(&mut graph, ops);

        graph.set(a, b, w).unwrap();

        prop_assert_eq!(graph.targets(&a).get(&b).copied(), Some(w));
        prop_assert_eq!(graph.sources(&b).get(&a).copied(), Some(w));
        prop_assert!(graph.vertices().contains(&a));
        prop_assert!(graph.vertices().contains(&b));
    }

    #[test]
    fn set_returns_the_weight_it_replaces(
        a in 0u8..6,
        b in 0u8..6,
        first in 1i32..1000,
        second in 0i32..1000,
    ) {
        let mut graph = ByEdge::new();

        prop_assert_eq!(graph.set(a, b, first), Ok(0));
        prop_assert_eq!(graph.set(a, b, second), Ok(first));
        prop_assert_eq!(graph.weight(&a, &b), (second > 0).then_some(second));
    }

    #[test]
    fn conversion_round_trip_preserves_graph(ops in prop::collection::vec(op(), 0..48)) {
        let mut graph = ByEdge::new();
        apply(&mut graph, ops);

        let converted: ByVertex = graph.clone().into_storage();

        prop_assert!(converted == graph);
        prop_assert!(converted.validate().is_ok());
    }
}
