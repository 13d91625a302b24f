use algotrace::{
    bfs, dfs, dijkstra, Graph, GraphError, InspectStatus, NullObserver, Recorder, RelaxOutcome,
    TraceEvent,
};

#[test]
fn bfs_visits_sample_graph_in_level_order() {
    let graph = Graph::sample();
    let mut recorder = Recorder::new();
    let order = bfs(&graph, 0, &mut recorder).unwrap();

    assert_eq!(order, vec![0, 1, 2, 3, 4]);

    // Dequeue order is non-decreasing in distance from the start
    let distance = [0, 1, 1, 2, 2];
    let dequeued: Vec<usize> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Dequeued { vertex, .. } => Some(*vertex),
            _ => None,
        })
        .collect();
    assert_eq!(dequeued, order);
    for pair in dequeued.windows(2) {
        assert!(distance[pair[0]] <= distance[pair[1]]);
    }
}

#[test]
fn bfs_marks_on_enqueue_and_annotates_inspections() {
    let graph = Graph::sample();
    let mut recorder = Recorder::new();
    bfs(&graph, 0, &mut recorder).unwrap();

    let added: Vec<usize> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Inspected {
                neighbor,
                status: InspectStatus::Added,
                ..
            } => Some(*neighbor),
            _ => None,
        })
        .collect();
    // Each non-start vertex is added exactly once, never re-enqueued
    assert_eq!(added, vec![1, 2, 3, 4]);

    // Vertex 2 is inspected again from vertex 1 after being enqueued from 0
    assert!(recorder.events().contains(&TraceEvent::Inspected {
        vertex: 1,
        neighbor: 2,
        status: InspectStatus::AlreadyVisited,
    }));
}

#[test]
fn dfs_preserves_iterative_push_order_semantics() {
    let graph = Graph::sample();
    let mut recorder = Recorder::new();
    let order = dfs(&graph, 0, &mut recorder).unwrap();

    // The iterative form pushes unvisited neighbors before the visited
    // check, so vertex 3 (pushed early from 1) is shadowed by the later
    // push of 3 from 4 and visited last.
    assert_eq!(order, vec![0, 1, 2, 4, 3]);

    // Every reachable vertex is visited exactly once despite multiple pushes
    let mut visited = order.clone();
    visited.sort_unstable();
    visited.dedup();
    assert_eq!(visited.len(), graph.vertex_count());

    // The stale pop of the earlier entry for 3 produces no Visited event
    let visit_events = recorder
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::Visited { .. }))
        .count();
    assert_eq!(visit_events, graph.vertex_count());
}

#[test]
fn dfs_stack_snapshots_follow_the_pop() {
    let graph = Graph::sample();
    let mut recorder = Recorder::new();
    dfs(&graph, 0, &mut recorder).unwrap();

    // First visit pops the lone start entry, leaving an empty stack
    assert_eq!(
        recorder.events()[1],
        TraceEvent::Visited {
            vertex: 0,
            stack: vec![],
        }
    );
}

#[test]
fn dijkstra_sample_graph_distances_and_paths() {
    let graph = Graph::sample_weighted();
    let paths = dijkstra(&graph, 0, &mut NullObserver).unwrap();

    assert_eq!(
        paths.dist,
        vec![Some(0), Some(3), Some(1), Some(8), Some(10)]
    );
    assert_eq!(
        paths.parent,
        vec![None, Some(2), Some(0), Some(1), Some(3)]
    );
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 1, 3]));
    assert_eq!(paths.path_to(4), Some(vec![0, 2, 1, 3, 4]));
    assert_eq!(paths.path_to(0), Some(vec![0]));
}

#[test]
fn dijkstra_finalizes_in_distance_order() {
    let graph = Graph::sample_weighted();
    let mut recorder = Recorder::new();
    dijkstra(&graph, 0, &mut recorder).unwrap();

    let finalized: Vec<(usize, u64)> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Finalized {
                vertex, distance, ..
            } => Some((*vertex, *distance)),
            _ => None,
        })
        .collect();
    assert_eq!(finalized, vec![(0, 0), (2, 1), (1, 3), (3, 8), (4, 10)]);
}

#[test]
fn dijkstra_tie_keeps_first_found_parent() {
    // 0 -- 1 (1), 0 -- 2 (5), 1 -- 2 (4): the detour through 1 ties the
    // direct edge at distance 5 and must not displace the earlier parent.
    let mut graph = Graph::new(3).unwrap();
    graph.add_weighted_edge(0, 1, 1).unwrap();
    graph.add_weighted_edge(0, 2, 5).unwrap();
    graph.add_weighted_edge(1, 2, 4).unwrap();

    let mut recorder = Recorder::new();
    let paths = dijkstra(&graph, 0, &mut recorder).unwrap();

    assert_eq!(paths.dist[2], Some(5));
    assert_eq!(paths.parent[2], Some(0));
    assert!(recorder.events().contains(&TraceEvent::Relaxed {
        vertex: 1,
        neighbor: 2,
        weight: 4,
        outcome: RelaxOutcome::NoImprovement { current: 5 },
    }));
}

#[test]
fn dijkstra_relaxations_classify_finalized_neighbors() {
    let graph = Graph::sample_weighted();
    let mut recorder = Recorder::new();
    dijkstra(&graph, 0, &mut recorder).unwrap();

    // Once 0 is finalized, the back-edge from 2 reports it as visited
    assert!(recorder.events().contains(&TraceEvent::Relaxed {
        vertex: 2,
        neighbor: 0,
        weight: 1,
        outcome: RelaxOutcome::AlreadyVisited,
    }));
}

#[test]
fn unreachable_vertices_have_no_distance_parent_or_path() {
    // Vertex 3 has no edges at all
    let mut graph = Graph::new(4).unwrap();
    graph.add_weighted_edge(0, 1, 2).unwrap();
    graph.add_weighted_edge(1, 2, 3).unwrap();

    let paths = dijkstra(&graph, 0, &mut NullObserver).unwrap();
    assert_eq!(paths.dist[3], None);
    assert_eq!(paths.parent[3], None);
    assert_eq!(paths.path_to(3), None);

    // BFS and DFS over the unweighted lists likewise never reach it
    let mut unweighted = Graph::new(4).unwrap();
    unweighted.add_edge(0, 1).unwrap();
    unweighted.add_edge(1, 2).unwrap();
    assert_eq!(bfs(&unweighted, 0, &mut NullObserver).unwrap(), vec![0, 1, 2]);
    assert_eq!(dfs(&unweighted, 0, &mut NullObserver).unwrap(), vec![0, 1, 2]);
}

#[test]
fn invalid_start_emits_no_events() {
    let graph = Graph::sample();
    let weighted = Graph::sample_weighted();
    let err = GraphError::VertexOutOfRange {
        vertex: 9,
        vertex_count: 5,
    };

    let mut recorder = Recorder::new();
    assert_eq!(bfs(&graph, 9, &mut recorder), Err(err.clone()));
    assert_eq!(dfs(&graph, 9, &mut recorder), Err(err.clone()));
    assert_eq!(dijkstra(&weighted, 9, &mut recorder).unwrap_err(), err);
    assert!(recorder.events().is_empty());
}

#[test]
fn traversal_traces_replay_deterministically() {
    let graph = Graph::sample();
    let weighted = Graph::sample_weighted();

    let mut first = Recorder::new();
    let mut second = Recorder::new();
    bfs(&graph, 0, &mut first).unwrap();
    bfs(&graph, 0, &mut second).unwrap();
    assert_eq!(first.events(), second.events());

    let mut first = Recorder::new();
    let mut second = Recorder::new();
    dijkstra(&weighted, 0, &mut first).unwrap();
    dijkstra(&weighted, 0, &mut second).unwrap();
    assert_eq!(first.events(), second.events());
}
