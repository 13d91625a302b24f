//! Step-observable classic algorithms
//!
//! This crate implements four sorting algorithms (bubble, quick, merge, heap)
//! and three graph traversals (BFS, DFS, Dijkstra shortest paths), each
//! instrumented so that every state-mutating step is reported to an
//! [`Observer`] as an ordered stream of [`TraceEvent`]s. The engines never
//! perform presentation I/O themselves; a console renderer is one possible
//! observer, a test recorder another.
//!
//! Traces are deterministic: identical inputs produce identical event
//! sequences, so a run can be replayed or diffed.

pub mod graph;
pub mod sort;
pub mod trace;
pub mod traverse;

// Re-export main types
pub use graph::{Graph, GraphError, GraphResult};
pub use sort::{bubble_sort, heap_sort, merge_sort, quick_sort, sort, SortAlgorithm};
pub use trace::{
    Algorithm, InspectStatus, NullObserver, Observer, Recorder, RelaxOutcome, TraceEvent,
};
pub use traverse::{bfs, dfs, dijkstra, ShortestPaths};
