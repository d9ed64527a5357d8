use rand::{rngs::StdRng, Rng, SeedableRng};
use sketch_paths::{
    graphs::{
        graph_functions::validate_path,
        path::{PathFinding, SearchError, ShortestPathRequest},
        sketch_graph::SketchGraph,
        VertexId, Weight,
    },
    queue::radix_queue::RadixQueue,
    search::{
        dijkstra::{run_search, shortest_path, shortest_path_dense, Dijkstra},
        dijkstra_data::{SearchState, SearchStateMap},
    },
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Four vertices in a diamond: the cheap route 0-1-2-3 beats the direct 0-2.
fn diamond_graph() -> SketchGraph {
    let mut graph = SketchGraph::new();
    for vertex in 0..4 {
        graph.add_vertex(vertex).unwrap();
    }
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(0, 2, 5).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    graph
}

/// Eleven vertices with plenty of alternative routes.
fn lecture_graph() -> SketchGraph {
    let edges = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ];

    let mut graph = SketchGraph::new();
    for vertex in 0..11 {
        graph.add_vertex(vertex).unwrap();
    }
    for (tail, head, weight) in edges {
        graph.add_edge(tail, head, weight).unwrap();
    }
    graph
}

/// Cheapest simple path by exhaustive enumeration. Ground truth for small
/// graphs only.
fn brute_force_distance(
    graph: &SketchGraph,
    source: VertexId,
    target: VertexId,
) -> Option<Weight> {
    fn explore(
        graph: &SketchGraph,
        current: VertexId,
        target: VertexId,
        visited: &mut Vec<VertexId>,
        spent: Weight,
        best: &mut Option<Weight>,
    ) {
        if current == target {
            if best.map_or(true, |known| spent < known) {
                *best = Some(spent);
            }
            return;
        }

        for entry in graph.adjacency(current).unwrap() {
            if !visited.contains(&entry.head) {
                visited.push(entry.head);
                explore(graph, entry.head, target, visited, spent + entry.weight, best);
                visited.pop();
            }
        }
    }

    let mut best = None;
    explore(graph, source, target, &mut vec![source], 0, &mut best);
    best
}

#[test]
fn finds_the_minimum_weight_route() {
    init_tracing();
    let graph = diamond_graph();

    let path = shortest_path(&graph.snapshot(), 0, 3).unwrap();
    assert_eq!(path.vertices, vec![0, 1, 2, 3]);
    assert_eq!(path.weight, 4);
}

#[test]
fn removing_the_last_edge_disconnects_the_target() {
    let mut graph = diamond_graph();
    graph.remove_last_edge().unwrap();

    assert_eq!(
        shortest_path(&graph.snapshot(), 0, 3),
        Err(SearchError::NoPathFound { source: 0, target: 3 })
    );
}

#[test]
fn equal_endpoints_are_rejected_before_searching() {
    let graph = diamond_graph();
    assert_eq!(
        shortest_path(&graph.snapshot(), 2, 2),
        Err(SearchError::InvalidEndpoints(2))
    );
}

#[test]
fn unknown_endpoints_are_rejected() {
    let graph = diamond_graph();
    let snapshot = graph.snapshot();

    assert_eq!(
        shortest_path(&snapshot, 99, 0),
        Err(SearchError::UnknownVertex(99))
    );
    assert_eq!(
        shortest_path(&snapshot, 0, 99),
        Err(SearchError::UnknownVertex(99))
    );
}

#[test]
fn parallel_edges_resolve_to_the_cheapest() {
    let mut graph = SketchGraph::new();
    graph.add_vertex(0).unwrap();
    graph.add_vertex(1).unwrap();
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(0, 1, 2).unwrap();

    let path = shortest_path(&graph.snapshot(), 0, 1).unwrap();
    assert_eq!(path.vertices, vec![0, 1]);
    assert_eq!(path.weight, 2);
}

#[test]
fn self_loops_never_shorten_anything() {
    let mut graph = diamond_graph();
    let reference = shortest_path(&graph.snapshot(), 0, 3).unwrap();

    graph.add_edge(1, 1, 1).unwrap();
    graph.add_edge(2, 2, 1).unwrap();
    let with_loops = shortest_path(&graph.snapshot(), 0, 3).unwrap();

    assert_eq!(with_loops, reference);

    // the loop at 1 also never touches 1's own label
    let request = ShortestPathRequest::new(0, 1).unwrap();
    let mut state = SearchStateMap::new(0);
    run_search(&graph.snapshot(), &mut state, request).unwrap();
    assert_eq!(state.distance(1), Some(1));
}

#[test]
fn isolated_vertices_are_reachable_by_nobody() {
    let mut graph = diamond_graph();
    graph.add_vertex(4).unwrap();
    let snapshot = graph.snapshot();

    assert_eq!(
        shortest_path(&snapshot, 0, 4),
        Err(SearchError::NoPathFound { source: 0, target: 4 })
    );
    assert_eq!(
        shortest_path(&snapshot, 4, 3),
        Err(SearchError::NoPathFound { source: 4, target: 3 })
    );
}

#[test]
fn repeated_queries_return_identical_results() {
    let graph = lecture_graph();
    let pathfinder = Dijkstra {
        graph: Box::new(graph.snapshot()),
    };

    let first = pathfinder.shortest_path(0, 6);
    let second = pathfinder.shortest_path(0, 6);
    assert_eq!(first, second);
    assert_eq!(pathfinder.shortest_path_distance(0, 9), Ok(6));
}

#[test]
fn every_result_on_the_lecture_graph_is_optimal_and_well_formed() {
    init_tracing();
    let graph = lecture_graph();
    let snapshot = graph.snapshot();

    for source in 0..11 {
        for target in 0..11 {
            if source == target {
                continue;
            }

            let path = shortest_path(&snapshot, source, target).unwrap();
            assert_eq!(
                Some(path.weight),
                brute_force_distance(&graph, source, target),
                "wrong distance between {} and {}",
                source,
                target
            );
            validate_path(&snapshot, source, target, &path).unwrap();
        }
    }
}

#[test]
fn heap_and_radix_frontiers_agree() {
    let graph = lecture_graph();
    let snapshot = graph.snapshot();

    for source in 0..11 {
        for target in 0..11 {
            if source == target {
                continue;
            }

            let request = ShortestPathRequest::new(source, target).unwrap();
            let mut state = SearchStateMap::with_queue(source, Box::new(RadixQueue::new()));
            let radix = run_search(&snapshot, &mut state, request).unwrap();
            let heap = shortest_path(&snapshot, source, target).unwrap();

            assert_eq!(radix.weight, heap.weight);
        }
    }
}

#[test]
fn matrix_and_adjacency_snapshots_agree() {
    let mut graph = SketchGraph::new();
    for vertex in [10, 20, 30, 40] {
        graph.add_vertex(vertex).unwrap();
    }
    graph.add_edge(10, 20, 1).unwrap();
    graph.add_edge(20, 30, 2).unwrap();
    graph.add_edge(10, 30, 5).unwrap();
    graph.add_edge(30, 40, 1).unwrap();

    let matrix = graph.snapshot_matrix();
    let source = matrix.index_of(10).unwrap();
    let target = matrix.index_of(40).unwrap();

    let dense = shortest_path_dense(&matrix, source, target).unwrap();
    let translated = matrix.translate_path(&dense).unwrap();
    let direct = shortest_path(&graph.snapshot(), 10, 40).unwrap();

    assert_eq!(translated, direct);
    assert_eq!(translated.vertices, vec![10, 20, 30, 40]);
}

#[test]
fn random_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..30 {
        let number_of_vertices: u32 = rng.gen_range(2..=8);
        let mut graph = SketchGraph::new();
        for vertex in 0..number_of_vertices {
            // sparse, non-contiguous ids
            graph.add_vertex(vertex * 3 + 1).unwrap();
        }

        let number_of_edges = rng.gen_range(0..=2 * number_of_vertices);
        for _ in 0..number_of_edges {
            let tail = graph.vertices()[rng.gen_range(0..number_of_vertices) as usize];
            let head = graph.vertices()[rng.gen_range(0..number_of_vertices) as usize];
            let weight = rng.gen_range(1..=9);
            graph.add_edge(tail, head, weight).unwrap();
        }

        let snapshot = graph.snapshot();
        for &source in graph.vertices() {
            for &target in graph.vertices() {
                if source == target {
                    continue;
                }

                let expected = brute_force_distance(&graph, source, target);
                match shortest_path(&snapshot, source, target) {
                    Ok(path) => {
                        assert_eq!(Some(path.weight), expected);
                        validate_path(&snapshot, source, target, &path).unwrap();
                    }
                    Err(SearchError::NoPathFound { .. }) => assert_eq!(expected, None),
                    Err(other) => panic!("unexpected search error: {}", other),
                }
            }
        }
    }
}
