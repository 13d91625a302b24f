//! Sorting engine
//!
//! Four classic in-place sorts over `&mut [i64]`, each reporting every
//! meaningful mutation to an [`Observer`]. Each invocation owns its own step
//! counter; the counter labels trace events and never drives control flow.

use crate::trace::{Algorithm, Observer, TraceEvent};
use serde::Serialize;
use tracing::debug;

/// Selects one of the four sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Merge,
    Heap,
}

impl SortAlgorithm {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortAlgorithm::Bubble => Algorithm::BubbleSort,
            SortAlgorithm::Quick => Algorithm::QuickSort,
            SortAlgorithm::Merge => Algorithm::MergeSort,
            SortAlgorithm::Heap => Algorithm::HeapSort,
        }
    }
}

/// Sort `arr` ascending in place with the chosen algorithm, reporting every
/// step to `observer`. Returns the number of recorded steps.
pub fn sort(algorithm: SortAlgorithm, arr: &mut [i64], observer: &mut dyn Observer) -> usize {
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(arr, observer),
        SortAlgorithm::Quick => quick_sort(arr, observer),
        SortAlgorithm::Merge => merge_sort(arr, observer),
        SortAlgorithm::Heap => heap_sort(arr, observer),
    }
}

/// Per-invocation trace state: the observer plus the step counter.
struct SortRun<'a> {
    algorithm: Algorithm,
    observer: &'a mut dyn Observer,
    steps: usize,
}

impl<'a> SortRun<'a> {
    fn start(algorithm: Algorithm, len: usize, observer: &'a mut dyn Observer) -> Self {
        debug!(%algorithm, len, "starting sort");
        observer.on_event(&TraceEvent::Started { algorithm });
        Self {
            algorithm,
            observer,
            steps: 0,
        }
    }

    fn emit(&mut self, event: TraceEvent) {
        self.observer.on_event(&event);
    }

    /// Advance the step counter and return the new step number.
    fn step(&mut self) -> usize {
        self.steps += 1;
        self.steps
    }

    fn finish(mut self) -> usize {
        let steps = self.steps;
        self.emit(TraceEvent::Finished {
            algorithm: self.algorithm,
            steps,
        });
        debug!(algorithm = %self.algorithm, steps, "sort finished");
        steps
    }
}

/// Bubble sort: adjacent-pair passes over a shrinking suffix.
///
/// Only strictly out-of-order pairs are swapped, so equal elements keep
/// their relative order. A pass with zero swaps terminates the run early.
pub fn bubble_sort(arr: &mut [i64], observer: &mut dyn Observer) -> usize {
    let mut run = SortRun::start(Algorithm::BubbleSort, arr.len(), observer);
    let n = arr.len();
    if n > 1 {
        for i in 0..n - 1 {
            run.emit(TraceEvent::PassStarted { pass: i + 1 });
            let mut swapped = false;
            for j in 0..n - i - 1 {
                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                    swapped = true;
                    let step = run.step();
                    run.emit(TraceEvent::Swapped {
                        step,
                        left: j,
                        right: j + 1,
                        left_value: arr[j],
                        right_value: arr[j + 1],
                        array: arr.to_vec(),
                    });
                }
            }
            if !swapped {
                break;
            }
        }
    }
    run.finish()
}

/// Quick sort: recursive, in-place, Lomuto partition with the last element
/// as pivot.
///
/// The pivot is never randomized; already-sorted and strictly descending
/// inputs hit the O(n²) worst case, and the trace documents it.
pub fn quick_sort(arr: &mut [i64], observer: &mut dyn Observer) -> usize {
    let mut run = SortRun::start(Algorithm::QuickSort, arr.len(), observer);
    if arr.len() > 1 {
        quick_sort_range(arr, 0, arr.len() - 1, &mut run);
    }
    run.finish()
}

fn quick_sort_range(arr: &mut [i64], low: usize, high: usize, run: &mut SortRun<'_>) {
    if low >= high {
        return;
    }
    let pivot_index = partition(arr, low, high);
    let step = run.step();
    run.emit(TraceEvent::Partitioned {
        step,
        low,
        high,
        pivot_index,
        pivot_value: arr[pivot_index],
        array: arr.to_vec(),
    });
    if pivot_index > low {
        quick_sort_range(arr, low, pivot_index - 1, run);
    }
    if pivot_index < high {
        quick_sort_range(arr, pivot_index + 1, high, run);
    }
}

/// Lomuto partition of `low..=high` around `arr[high]`.
///
/// Elements strictly less than the pivot are moved before the boundary; the
/// final swap puts the pivot at the boundary and its index is returned.
fn partition(arr: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut boundary = low;
    for j in low..high {
        if arr[j] < pivot {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, high);
    boundary
}

/// Merge sort: recursive midpoint divide with a stable, left-biased merge.
pub fn merge_sort(arr: &mut [i64], observer: &mut dyn Observer) -> usize {
    let mut run = SortRun::start(Algorithm::MergeSort, arr.len(), observer);
    if arr.len() > 1 {
        merge_sort_range(arr, 0, arr.len() - 1, &mut run);
    }
    run.finish()
}

fn merge_sort_range(arr: &mut [i64], left: usize, right: usize, run: &mut SortRun<'_>) {
    if left >= right {
        return;
    }
    // Midpoint form avoids overflow on large ranges
    let mid = left + (right - left) / 2;
    merge_sort_range(arr, left, mid, run);
    merge_sort_range(arr, mid + 1, right, run);
    merge(arr, left, mid, right);
    let step = run.step();
    run.emit(TraceEvent::Merged {
        step,
        left,
        mid,
        right,
        merged: arr[left..=right].to_vec(),
    });
}

fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize) {
    let left_half = arr[left..=mid].to_vec();
    let right_half = arr[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_half.len() && j < right_half.len() {
        // <= keeps the merge stable (left element wins ties)
        if left_half[i] <= right_half[j] {
            arr[k] = left_half[i];
            i += 1;
        } else {
            arr[k] = right_half[j];
            j += 1;
        }
        k += 1;
    }
    while i < left_half.len() {
        arr[k] = left_half[i];
        i += 1;
        k += 1;
    }
    while j < right_half.len() {
        arr[k] = right_half[j];
        j += 1;
        k += 1;
    }
}

/// Heap sort: bottom-up max-heap construction, then repeated root extraction
/// into the shrinking tail.
pub fn heap_sort(arr: &mut [i64], observer: &mut dyn Observer) -> usize {
    let mut run = SortRun::start(Algorithm::HeapSort, arr.len(), observer);
    let n = arr.len();
    if n > 1 {
        // Heapify from the last non-leaf index down to the root
        for i in (0..n / 2).rev() {
            sift_down(arr, n, i);
        }
        let step = run.step();
        run.emit(TraceEvent::HeapBuilt {
            step,
            array: arr.to_vec(),
        });

        for i in (1..n).rev() {
            arr.swap(0, i);
            let step = run.step();
            run.emit(TraceEvent::MaxExtracted {
                step,
                value: arr[i],
                position: i,
                array: arr.to_vec(),
            });

            sift_down(arr, i, 0);
            if i > 1 {
                let step = run.step();
                run.emit(TraceEvent::Heapified {
                    step,
                    heap: arr[..i].to_vec(),
                });
            }
        }
    }
    run.finish()
}

fn sift_down(arr: &mut [i64], n: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && arr[left] > arr[largest] {
        largest = left;
    }
    if right < n && arr[right] > arr[largest] {
        largest = right;
    }
    if largest != i {
        arr.swap(i, largest);
        sift_down(arr, n, largest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{NullObserver, Recorder};

    fn assert_sorts(algorithm: SortAlgorithm, input: &[i64]) {
        let mut arr = input.to_vec();
        let mut expected = input.to_vec();
        expected.sort_unstable();
        sort(algorithm, &mut arr, &mut NullObserver);
        assert_eq!(arr, expected, "{algorithm:?} failed on {input:?}");
    }

    #[test]
    fn all_algorithms_sort() {
        let inputs: &[&[i64]] = &[
            &[],
            &[7],
            &[2, 1],
            &[5, 2, 9, 1, 5, 6],
            &[3, 3, 3],
            &[-4, 10, 0, -4, 7, 2],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1],
        ];
        for algorithm in [
            SortAlgorithm::Bubble,
            SortAlgorithm::Quick,
            SortAlgorithm::Merge,
            SortAlgorithm::Heap,
        ] {
            for input in inputs {
                assert_sorts(algorithm, input);
            }
        }
    }

    #[test]
    fn partition_places_pivot() {
        let mut arr = vec![8, 3, 5, 1, 4];
        let idx = partition(&mut arr, 0, 4);
        assert_eq!(arr[idx], 4);
        assert!(arr[..idx].iter().all(|&x| x < 4));
        assert!(arr[idx + 1..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn empty_and_singleton_emit_only_markers() {
        for algorithm in [
            SortAlgorithm::Bubble,
            SortAlgorithm::Quick,
            SortAlgorithm::Merge,
            SortAlgorithm::Heap,
        ] {
            for input in [vec![], vec![42]] {
                let mut arr = input.clone();
                let mut recorder = Recorder::new();
                let steps = sort(algorithm, &mut arr, &mut recorder);
                assert_eq!(steps, 0);
                assert_eq!(
                    recorder.into_events(),
                    vec![
                        TraceEvent::Started {
                            algorithm: algorithm.algorithm()
                        },
                        TraceEvent::Finished {
                            algorithm: algorithm.algorithm(),
                            steps: 0
                        },
                    ],
                    "{algorithm:?} on {input:?}"
                );
            }
        }
    }

    #[test]
    fn bubble_swap_events_snapshot_post_swap_state() {
        let mut arr = vec![2, 1];
        let mut recorder = Recorder::new();
        let steps = bubble_sort(&mut arr, &mut recorder);
        assert_eq!(steps, 1);

        let events = recorder.into_events();
        assert_eq!(
            events[2],
            TraceEvent::Swapped {
                step: 1,
                left: 0,
                right: 1,
                left_value: 1,
                right_value: 2,
                array: vec![1, 2],
            }
        );
    }

    #[test]
    fn heap_sort_trace_shape() {
        let mut arr = vec![4, 10, 3, 5, 1];
        let mut recorder = Recorder::new();
        heap_sort(&mut arr, &mut recorder);

        let events = recorder.into_events();
        assert!(matches!(events[1], TraceEvent::HeapBuilt { step: 1, .. }));
        let extractions = events
            .iter()
            .filter(|e| matches!(e, TraceEvent::MaxExtracted { .. }))
            .count();
        assert_eq!(extractions, 4);
        // Heapified reports the live region only while it holds > 1 element
        let heapified: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Heapified { heap, .. } => Some(heap.len()),
                _ => None,
            })
            .collect();
        assert_eq!(heapified, vec![4, 3, 2]);
    }
}
