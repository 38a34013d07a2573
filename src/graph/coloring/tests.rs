use super::*;
use crate::error::GraphError;
use crate::graph::Edge;

fn undirected(n: usize, edges: &[(usize, usize)]) -> (Graph<()>, Vec<VertexId>) {
    let mut graph = Graph::undirected();
    let v: Vec<_> = (0..n).map(|_| graph.add_vertex(None)).collect();
    for &(x, y) in edges {
        graph.add_edge(v[x], v[y]).unwrap();
    }
    (graph, v)
}

fn triangle() -> (Graph<()>, Vec<VertexId>) {
    undirected(3, &[(0, 1), (1, 2), (2, 0)])
}

/// a - b - c - d
fn path4() -> (Graph<()>, Vec<VertexId>) {
    undirected(4, &[(0, 1), (1, 2), (2, 3)])
}

fn colors_of(coloring: &Coloring, v: &[VertexId]) -> Vec<i64> {
    v.iter().map(|&id| coloring.get(id).number()).collect()
}

#[test]
fn triangle_needs_three_colors_everywhere() {
    let (graph, v) = triangle();
    for heuristic in Heuristic::ALL {
        let coloring = color(&graph, heuristic).unwrap();
        assert_eq!(coloring.color_count(), 3, "{}", heuristic.name());
        assert!(coloring.is_proper(&graph), "{}", heuristic.name());
    }
    let greedy = Greedy::new(VertexOrder::AscendingDegree).color(&graph).unwrap();
    assert_eq!(colors_of(&greedy, &v), vec![1, 2, 3]);
}

#[test]
fn greedy_ascending_can_open_an_extra_color() {
    let (graph, v) = path4();
    // Order a, d, b, c: c sees b=2 and d=1.
    let coloring = Greedy::new(VertexOrder::AscendingDegree).color(&graph).unwrap();
    assert_eq!(colors_of(&coloring, &v), vec![1, 2, 3, 1]);
    assert_eq!(coloring.max_color(), Color::new(3).unwrap());

    let coloring = Greedy::new(VertexOrder::DescendingDegree).color(&graph).unwrap();
    assert_eq!(colors_of(&coloring, &v), vec![2, 1, 2, 1]);
}

#[test]
fn welsh_powell_builds_classes_in_degree_order() {
    let (graph, v) = path4();
    let coloring = WelshPowell.color(&graph).unwrap();
    assert_eq!(colors_of(&coloring, &v), vec![2, 1, 2, 1]);
    let classes = coloring.classes();
    assert_eq!(classes[&Color::FIRST], vec![v[1], v[3]]);
    assert_eq!(classes[&Color::FIRST.next()], vec![v[0], v[2]]);
}

#[test]
fn dsatur_prefers_saturation_then_degree() {
    let (graph, v) = path4();
    // b first (degree 2), then c (saturation 1, degree 2), then a, then d.
    let coloring = Dsatur.color(&graph).unwrap();
    assert_eq!(colors_of(&coloring, &v), vec![2, 1, 2, 1]);
}

#[test]
fn dsatur_colors_wheel_with_four_colors() {
    // Hub 0 joined to an odd rim 1..=5.
    let (graph, _) = undirected(
        6,
        &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 2), (2, 3), (3, 4), (4, 5), (5, 1)],
    );
    let coloring = Dsatur.color(&graph).unwrap();
    assert!(coloring.is_proper(&graph));
    assert_eq!(coloring.color_count(), 4);
}

#[test]
fn self_loops_are_exempt() {
    let (graph, v) = undirected(2, &[(0, 0), (0, 1)]);
    for heuristic in Heuristic::ALL {
        let coloring = color(&graph, heuristic).unwrap();
        assert!(coloring.is_proper(&graph), "{}", heuristic.name());
        assert_ne!(coloring.get(v[0]), coloring.get(v[1]));
        assert_eq!(coloring.color_count(), 2);
    }
}

#[test]
fn oriented_edges_constrain_both_endpoints() {
    let mut graph: Graph<()> = Graph::oriented();
    let v: Vec<_> = (0..3).map(|_| graph.add_vertex(None)).collect();
    graph.add_edge(v[0], v[1]).unwrap();
    graph.add_edge(v[2], v[1]).unwrap();
    graph.add_edge(v[2], v[0]).unwrap();
    for heuristic in Heuristic::ALL {
        assert!(color(&graph, heuristic).unwrap().is_proper(&graph));
    }
}

#[test]
fn seeded_random_order_is_reproducible() {
    let (graph, _) = undirected(8, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 0)]);
    let config = AlgorithmConfig::new().with_seed(11);
    let greedy = Greedy::new(VertexOrder::Random);
    let a = greedy.color_with(&graph, &config).unwrap();
    let b = greedy.color_with(&graph, &config).unwrap();
    assert_eq!(a, b);
    assert!(a.is_proper(&graph));
}

#[test]
fn empty_graph_yields_empty_coloring() {
    let graph: Graph<()> = Graph::undirected();
    for heuristic in Heuristic::ALL {
        let coloring = color(&graph, heuristic).unwrap();
        assert!(coloring.is_empty());
        assert_eq!(coloring.max_color(), Color::UNCOLORED);
    }
}

#[test]
fn budget_aborts_long_runs() {
    let (graph, _) = path4();
    let config = AlgorithmConfig::new().with_iteration_limit(1);
    for heuristic in [Heuristic::Greedy(VertexOrder::AscendingDegree), Heuristic::Dsatur] {
        assert_eq!(
            heuristic.color_with(&graph, &config),
            Err(GraphError::IterationLimitExceeded { limit: 1 })
        );
    }
    // Welsh-Powell closes both classes of a path in two passes.
    let config = AlgorithmConfig::new().with_iteration_limit(2);
    assert!(WelshPowell.color_with(&graph, &config).is_ok());
}

#[test]
fn conflicts_and_edge_marking() {
    let (mut graph, v) = triangle();
    let mut coloring = Coloring::new();
    coloring.assign(v[0], Color::FIRST);
    coloring.assign(v[1], Color::FIRST);
    assert_eq!(coloring.assign(v[2], Color::FIRST.next()), Color::UNCOLORED);

    let conflicts = coloring.conflicts(&graph);
    assert_eq!(conflicts.len(), 1);
    assert!(!coloring.is_proper(&graph));

    assert_eq!(coloring.apply_to_edges(&mut graph), Ok(1));
    let marked = graph.edge(conflicts[0]).and_then(Edge::color);
    assert_eq!(marked, Some(Color::FIRST));
    let clean = graph
        .edges()
        .iter()
        .filter(|edge| edge.color() == Some(Color::UNCOLORED))
        .count();
    assert_eq!(clean, 2);
}

#[test]
fn an_uncolored_endpoint_on_either_side_is_a_conflict() {
    let (graph, v) = undirected(2, &[(0, 1)]);
    let edge = graph.edges()[0].id();

    let mut tail_only = Coloring::new();
    tail_only.assign(v[0], Color::FIRST);
    assert_eq!(tail_only.conflicts(&graph), vec![edge]);

    let mut head_only = Coloring::new();
    head_only.assign(v[1], Color::FIRST);
    assert_eq!(head_only.conflicts(&graph), vec![edge]);
    assert!(!head_only.is_proper(&graph));

    head_only.assign(v[0], Color::FIRST.next());
    assert!(head_only.conflicts(&graph).is_empty());
    assert!(head_only.is_proper(&graph));
}
