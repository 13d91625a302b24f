//! Graph traversal engine
//!
//! BFS, DFS, and Dijkstra shortest paths over the undirected [`Graph`]
//! model, each reporting its frontier and decisions to an [`Observer`]. The
//! graph is immutable for the duration of a call.
//!
//! DFS is deliberately the iterative, explicit-stack formulation: neighbors
//! are pushed (in reverse insertion order) before they are visited, so a
//! vertex can sit on the stack more than once and the visited check on pop
//! governs. The resulting order differs from recursive DFS and is part of
//! the observable contract.

use crate::graph::{Graph, GraphError, GraphResult};
use crate::trace::{Algorithm, InspectStatus, Observer, RelaxOutcome, TraceEvent};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use tracing::debug;

fn check_start(graph: &Graph, start: usize) -> GraphResult<()> {
    if start >= graph.vertex_count() {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

/// Breadth-first search from `start` over the unweighted adjacency.
///
/// Vertices are marked visited when enqueued, so each reachable vertex is
/// dequeued exactly once. Returns the dequeue (visitation) order.
pub fn bfs(graph: &Graph, start: usize, observer: &mut dyn Observer) -> GraphResult<Vec<usize>> {
    check_start(graph, start)?;
    debug!(algorithm = %Algorithm::Bfs, start, "starting traversal");
    observer.on_event(&TraceEvent::Started {
        algorithm: Algorithm::Bfs,
    });

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        observer.on_event(&TraceEvent::Dequeued {
            vertex,
            queue: queue.iter().copied().collect(),
        });

        for &neighbor in graph.neighbors(vertex) {
            let status = if visited[neighbor] {
                InspectStatus::AlreadyVisited
            } else {
                visited[neighbor] = true;
                queue.push_back(neighbor);
                InspectStatus::Added
            };
            observer.on_event(&TraceEvent::Inspected {
                vertex,
                neighbor,
                status,
            });
        }
    }

    observer.on_event(&TraceEvent::Finished {
        algorithm: Algorithm::Bfs,
        steps: order.len(),
    });
    debug!(algorithm = %Algorithm::Bfs, visited = order.len(), "traversal finished");
    Ok(order)
}

/// Iterative depth-first search from `start` over the unweighted adjacency.
///
/// Neighbors are pushed in reverse insertion order so the first-stored
/// neighbor is processed first. Stale stack entries (already visited on pop)
/// are skipped without an event. Returns the visitation order.
pub fn dfs(graph: &Graph, start: usize, observer: &mut dyn Observer) -> GraphResult<Vec<usize>> {
    check_start(graph, start)?;
    debug!(algorithm = %Algorithm::Dfs, start, "starting traversal");
    observer.on_event(&TraceEvent::Started {
        algorithm: Algorithm::Dfs,
    });

    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(vertex) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        order.push(vertex);
        observer.on_event(&TraceEvent::Visited {
            vertex,
            stack: stack.clone(),
        });

        for &neighbor in graph.neighbors(vertex).iter().rev() {
            let status = if visited[neighbor] {
                InspectStatus::AlreadyVisited
            } else {
                stack.push(neighbor);
                InspectStatus::Added
            };
            observer.on_event(&TraceEvent::Inspected {
                vertex,
                neighbor,
                status,
            });
        }
    }

    observer.on_event(&TraceEvent::Finished {
        algorithm: Algorithm::Dfs,
        steps: order.len(),
    });
    debug!(algorithm = %Algorithm::Dfs, visited = order.len(), "traversal finished");
    Ok(order)
}

/// Distances and parent pointers produced by [`dijkstra`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: usize,
    /// Final distance per vertex; `None` = unreachable.
    pub dist: Vec<Option<u64>>,
    /// Predecessor on the shortest path; `None` for the start and for
    /// unreachable vertices.
    pub parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Reconstruct the path from the start to `target`, in start-to-target
    /// order. `None` if `target` is unreachable or out of range; the start
    /// itself yields `[start]`.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.dist.get(target).copied().flatten()?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Priority-queue entry for Dijkstra.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct State {
    distance: u64,
    vertex: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior on BinaryHeap; vertex index breaks
        // distance ties so the pop order is fully specified
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm from `start` over the weighted adjacency.
///
/// Stale heap entries are discarded lazily when popped. Relaxation uses a
/// strict `<`, so when two paths tie the first one applied keeps the parent
/// pointer.
pub fn dijkstra(
    graph: &Graph,
    start: usize,
    observer: &mut dyn Observer,
) -> GraphResult<ShortestPaths> {
    check_start(graph, start)?;
    debug!(algorithm = %Algorithm::Dijkstra, start, "starting traversal");
    observer.on_event(&TraceEvent::Started {
        algorithm: Algorithm::Dijkstra,
    });

    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut steps = 0;

    dist[start] = Some(0);
    heap.push(State {
        distance: 0,
        vertex: start,
    });

    while let Some(State { distance, vertex }) = heap.pop() {
        if finalized[vertex] {
            // Lazy deletion of a stale entry
            continue;
        }
        finalized[vertex] = true;
        steps += 1;
        observer.on_event(&TraceEvent::Finalized {
            step: steps,
            vertex,
            distance,
            distances: dist.clone(),
        });

        for &(neighbor, weight) in graph.weighted_neighbors(vertex) {
            let outcome = if finalized[neighbor] {
                RelaxOutcome::AlreadyVisited
            } else {
                let candidate = distance + weight;
                match dist[neighbor] {
                    Some(current) if candidate >= current => {
                        RelaxOutcome::NoImprovement { current }
                    }
                    _ => {
                        dist[neighbor] = Some(candidate);
                        parent[neighbor] = Some(vertex);
                        heap.push(State {
                            distance: candidate,
                            vertex: neighbor,
                        });
                        RelaxOutcome::Updated {
                            distance: candidate,
                        }
                    }
                }
            };
            observer.on_event(&TraceEvent::Relaxed {
                vertex,
                neighbor,
                weight,
                outcome,
            });
        }
    }

    observer.on_event(&TraceEvent::Finished {
        algorithm: Algorithm::Dijkstra,
        steps,
    });
    debug!(algorithm = %Algorithm::Dijkstra, finalized = steps, "traversal finished");
    Ok(ShortestPaths {
        start,
        dist,
        parent,
    })
}
