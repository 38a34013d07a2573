use chromagraph::{
    color, AlgorithmConfig, ColoringHeuristic, Distance, Graph, GraphError, Heuristic,
    TraversalOrder, VertexId, WelshPowell,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Vertices 1..=4 (index 0 is unused padding) and the edges
/// 1->2, 1->3, 2->4, 4->3, 3->2, 3->2, 4->4.
fn scenario() -> (Graph<u32>, Vec<VertexId>) {
    let mut graph = Graph::oriented();
    let v: Vec<_> = (0..=4u32)
        .map(|n| graph.add_labeled_vertex(n.to_string(), n))
        .collect();
    for (x, y) in [(1, 2), (1, 3), (2, 4), (4, 3), (3, 2), (3, 2), (4, 4)] {
        graph.add_edge(v[x], v[y]).unwrap();
    }
    (graph, v)
}

#[test]
fn test_oriented_scenario_queries() {
    init_tracing();
    let (graph, v) = scenario();

    assert_eq!(graph.successors(v[1]).as_slice(), &[v[2], v[3]]);
    assert_eq!(graph.in_degree(v[2]), 3);
    assert_eq!(graph.out_degree(v[1]), 2);
    assert!(!graph.are_adjacent(v[1], v[4]));
    assert!(graph.are_adjacent(v[4], v[4]));
    assert_eq!(graph.vertex(v[3]).map(|vertex| vertex.label()), Some("3"));
}

#[test]
fn test_traversals_on_scenario() {
    init_tracing();
    let (graph, v) = scenario();

    let mut labels = Vec::new();
    let bfs = graph
        .breadth_first_search(v[1], |vertex, _| labels.push(vertex.label().to_string()))
        .unwrap();
    assert_eq!(labels, ["1", "2", "3", "4"]);
    assert!(!bfs.is_reached(v[0]));

    let dfs = graph
        .traverse(v[1], TraversalOrder::DepthFirst, &AlgorithmConfig::default(), |_, _| {})
        .unwrap();
    assert_eq!(dfs.order(), &[v[1], v[3], v[2], v[4]]);
}

#[test]
fn test_shortest_paths_on_scenario() {
    init_tracing();
    let (graph, v) = scenario();

    let paths = graph.dijkstra(v[1]).unwrap();
    assert_eq!(paths.distance(v[4]), Some(Distance::Finite(2)));
    assert_eq!(paths.distance(v[0]), Some(Distance::Infinite));
    assert_eq!(graph.path(v[1], v[4]).unwrap().as_slice(), &[v[1], v[2], v[4]]);
    assert_eq!(
        graph.path(v[2], v[1]),
        Err(GraphError::Unreachable {
            start: v[2],
            destination: v[1],
        })
    );
}

#[test]
fn test_triangle_colorings() {
    init_tracing();
    let mut graph: Graph<()> = Graph::undirected();
    let v: Vec<_> = (0..3).map(|_| graph.add_vertex(None)).collect();
    graph.add_edge(v[0], v[1]).unwrap();
    graph.add_edge(v[1], v[2]).unwrap();
    graph.add_edge(v[2], v[0]).unwrap();

    let greedy = color(&graph, Heuristic::Greedy(chromagraph::VertexOrder::AscendingDegree)).unwrap();
    assert_eq!(greedy.color_count(), 3);
    let welsh_powell = WelshPowell.color(&graph).unwrap();
    assert_eq!(welsh_powell.color_count(), 3);
}

#[test]
fn test_coloring_scenario_and_marking_edges() {
    init_tracing();
    let (mut graph, v) = scenario();

    for heuristic in Heuristic::ALL {
        let config = AlgorithmConfig::new().with_seed(7);
        let coloring = heuristic.color_with(&graph, &config).unwrap();
        assert!(coloring.is_proper(&graph), "{}", heuristic.name());
        assert!(coloring.color_count() <= graph.max_degree() + 1);
    }

    let coloring = color(&graph, Heuristic::Dsatur).unwrap();
    // Only the 4->4 loop lies inside a color class.
    assert_eq!(coloring.apply_to_edges(&mut graph), Ok(1));
    let looped = graph
        .edges()
        .iter()
        .find(|edge| edge.is_loop())
        .and_then(|edge| edge.color());
    assert_eq!(looped, Some(coloring.get(v[4])));
}

#[test]
fn test_removing_a_vertex_detaches_its_edges() {
    init_tracing();
    let (mut graph, v) = scenario();
    let removed = graph.remove_vertex(v[3]).unwrap();
    assert_eq!(removed.data(), Some(&3));
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.in_degree(v[2]), 1);
    assert_eq!(graph.add_edge(v[1], v[3]), Err(GraphError::VertexNotFound(v[3])));
}
