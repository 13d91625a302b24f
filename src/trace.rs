//! Trace contract between the algorithm engines and their observers
//!
//! Engines push events synchronously, in execution order, as they mutate
//! state. An observer may render, record, or discard them, but it cannot
//! influence the run: events are passed by shared reference and carry owned
//! snapshots of the relevant structures.

use serde::Serialize;
use std::fmt;

/// Which algorithm produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    BubbleSort,
    QuickSort,
    MergeSort,
    HeapSort,
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of inspecting one neighbor during BFS or DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectStatus {
    /// The neighbor was unvisited and joined the frontier.
    Added,
    AlreadyVisited,
}

/// Outcome of one relaxation attempt during Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxOutcome {
    /// A shorter path was found; the tentative distance became `distance`.
    Updated { distance: u64 },
    /// The neighbor is already finalized.
    AlreadyVisited,
    /// The candidate path is not strictly shorter than `current`.
    NoImprovement { current: u64 },
}

/// One observable step of an algorithm run.
///
/// Events are emitted in the exact order the algorithm performs them;
/// identical inputs always produce identical sequences. Array and frontier
/// snapshots reflect the state immediately after the step they describe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// First event of every run.
    Started { algorithm: Algorithm },
    /// Last event of every run; `steps` is the final step-counter value.
    Finished { algorithm: Algorithm, steps: usize },

    // --- Sorting ---
    /// Bubble sort begins pass `pass` (1-based).
    PassStarted { pass: usize },
    /// Bubble sort swapped the adjacent pair at `left`/`right`; values are
    /// the post-swap occupants of those positions.
    Swapped {
        step: usize,
        left: usize,
        right: usize,
        left_value: i64,
        right_value: i64,
        array: Vec<i64>,
    },
    /// Quick sort finished partitioning `low..=high`, placing the pivot at
    /// `pivot_index`.
    Partitioned {
        step: usize,
        low: usize,
        high: usize,
        pivot_index: usize,
        pivot_value: i64,
        array: Vec<i64>,
    },
    /// Merge sort combined `left..=mid` and `mid+1..=right`; `merged` is the
    /// resulting range.
    Merged {
        step: usize,
        left: usize,
        mid: usize,
        right: usize,
        merged: Vec<i64>,
    },
    /// Heap sort finished the bottom-up heapify of the whole array.
    HeapBuilt { step: usize, array: Vec<i64> },
    /// Heap sort moved the root (current maximum) to `position`.
    MaxExtracted {
        step: usize,
        value: i64,
        position: usize,
        array: Vec<i64>,
    },
    /// Heap sort restored the heap property; `heap` is the live region.
    Heapified { step: usize, heap: Vec<i64> },

    // --- Traversal ---
    /// BFS dequeued `vertex`; `queue` is the frontier after the dequeue.
    Dequeued { vertex: usize, queue: Vec<usize> },
    /// BFS or DFS inspected one neighbor of `vertex`.
    Inspected {
        vertex: usize,
        neighbor: usize,
        status: InspectStatus,
    },
    /// DFS popped `vertex` and visited it; `stack` is the stack after the
    /// pop, bottom first.
    Visited { vertex: usize, stack: Vec<usize> },
    /// Dijkstra finalized `vertex` at `distance`; `distances` is the
    /// tentative-distance table at that moment (`None` = infinity).
    Finalized {
        step: usize,
        vertex: usize,
        distance: u64,
        distances: Vec<Option<u64>>,
    },
    /// Dijkstra attempted to relax the edge `vertex -- neighbor`.
    Relaxed {
        vertex: usize,
        neighbor: usize,
        weight: u64,
        outcome: RelaxOutcome,
    },
}

/// Consumer of trace events.
///
/// Called synchronously from inside the running algorithm. Implementations
/// must not assume anything beyond the per-algorithm event orderings; they
/// cannot affect engine state or control flow.
pub trait Observer {
    fn on_event(&mut self, event: &TraceEvent);
}

/// Observer that discards every event. Useful for headless runs and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &TraceEvent) {}
}

/// Observer that records every event for later inspection.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<TraceEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl Observer for Recorder {
    fn on_event(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}
