//! Trace-generating sorting engines.
//!
//! Each engine copies its input into a working array, sorts it ascending and records one
//! [`SortStep`] per primitive operation. Every step carries a snapshot of the complete working
//! array as it is *after* the operation, so the final step always holds the sorted array.
//!
//! # Available Algorithms
//!
//! | Algorithm | Function | Step tags |
//! |-----------|----------|-----------|
//! | Bubble | [`bubble_sort`] | `start`, `compare`, `swap`, `complete` |
//! | Selection | [`selection_sort`] | `start`, `compare`, `swap`, `complete` |
//! | Insertion | [`insertion_sort`] | `start`, `compare`, `swap`, `complete` |
//! | Merge | [`merge_sort`] | `start`, `divide`, `mergeStart`, `compare`, `mergeMove`, `sorted`, `complete` |
//! | Quick | [`quick_sort`] | `start`, `pivot`, `compare`, `swap`, `pivotPlace`, `complete` |
//! | Heap | [`heap_sort`] | `start`, `compare`, `swap`, `sorted`, `complete` |
//!
//! Inputs with fewer than two elements produce a single `complete` step.
//!
//! # Examples
//!
//! ```rust
//! use algoscope::sorting::{bubble_sort, SortStep};
//!
//! let trace = bubble_sort(&[3, 1, 2]);
//! let last = trace.last().unwrap();
//! assert_eq!(last.kind().array(), &[1, 2, 3]);
//! assert!(matches!(last.kind(), SortStep::Complete { .. }));
//! ```

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::fmt;

use serde::Serialize;
use strum::IntoStaticStr;

use crate::trace::{StepKind, Trace};

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

/// Values the sorting engines can order and describe.
pub trait SortValue: Copy + PartialOrd + fmt::Display {}

impl<T: Copy + PartialOrd + fmt::Display> SortValue for T {}

/// One step of a sorting trace. `array` is always the full working array after the step.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortStep<T> {
    /// Initial state, before any operation
    Start {
        /// Working array
        array: Vec<T>,
    },
    /// Two positions are compared
    Compare {
        /// Compared positions
        indices: [usize; 2],
        /// Working array
        array: Vec<T>,
    },
    /// Two positions were exchanged
    Swap {
        /// Exchanged positions
        indices: [usize; 2],
        /// Working array after the exchange
        array: Vec<T>,
    },
    /// Merge sort splits `low..=high` at `mid`
    Divide {
        /// First index of the range
        low: usize,
        /// Last index of the left half
        mid: usize,
        /// Last index of the range
        high: usize,
        /// Working array
        array: Vec<T>,
    },
    /// Merge sort starts merging `low..=mid` with `mid+1..=high`
    MergeStart {
        /// First index of the left run
        low: usize,
        /// Last index of the left run
        mid: usize,
        /// Last index of the right run
        high: usize,
        /// Working array
        array: Vec<T>,
    },
    /// Merge sort wrote a merged element into its position
    MergeMove {
        /// Position written
        index: usize,
        /// Working array after the write
        array: Vec<T>,
    },
    /// Quick sort picked the pivot at `index`
    Pivot {
        /// Pivot position (always the last element of the sub-range)
        index: usize,
        /// Working array
        array: Vec<T>,
    },
    /// Quick sort moved the pivot from `indices[1]` to its final position `indices[0]`
    PivotPlace {
        /// Final pivot position and the position it came from
        indices: [usize; 2],
        /// Working array after the move
        array: Vec<T>,
    },
    /// The inclusive range `range[0]..=range[1]` holds its final values
    Sorted {
        /// Inclusive range of finalized positions
        range: [usize; 2],
        /// Working array
        array: Vec<T>,
    },
    /// The array is sorted
    Complete {
        /// Sorted array
        array: Vec<T>,
    },
}

impl<T> SortStep<T> {
    /// The array snapshot carried by every sorting step.
    #[must_use]
    pub fn array(&self) -> &[T] {
        match self {
            SortStep::Start { array }
            | SortStep::Compare { array, .. }
            | SortStep::Swap { array, .. }
            | SortStep::Divide { array, .. }
            | SortStep::MergeStart { array, .. }
            | SortStep::MergeMove { array, .. }
            | SortStep::Pivot { array, .. }
            | SortStep::PivotPlace { array, .. }
            | SortStep::Sorted { array, .. }
            | SortStep::Complete { array } => array,
        }
    }
}

impl<T> StepKind for SortStep<T> {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_comparison(&self) -> bool {
        matches!(self, SortStep::Compare { .. })
    }

    fn is_swap(&self) -> bool {
        matches!(self, SortStep::Swap { .. } | SortStep::PivotPlace { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, SortStep::Complete { .. })
    }
}

/// Working state threaded through the sorting engines: the array being sorted and the trace
/// recorded so far.
pub(crate) struct SortContext<T> {
    array: Vec<T>,
    trace: Trace<SortStep<T>>,
}

impl<T: SortValue> SortContext<T> {
    fn new(input: &[T]) -> Self {
        SortContext {
            array: input.to_vec(),
            trace: Trace::new(),
        }
    }

    fn len(&self) -> usize {
        self.array.len()
    }

    fn value(&self, index: usize) -> T {
        self.array[index]
    }

    fn snapshot(&self) -> Vec<T> {
        self.array.clone()
    }

    /// Records a comparison of positions `i` and `j`. The caller decides on the outcome.
    fn compare(&mut self, i: usize, j: usize, description: String) {
        let step = SortStep::Compare {
            indices: [i, j],
            array: self.snapshot(),
        };
        self.trace.record(step, description);
    }

    /// Exchanges positions `i` and `j` and records the result.
    fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        let description = format!(
            "Swapping {} and {} (positions {} and {})",
            self.array[j], self.array[i], i, j
        );
        let step = SortStep::Swap {
            indices: [i, j],
            array: self.snapshot(),
        };
        self.trace.record(step, description);
    }

    /// Overwrites position `index` without recording a step.
    fn set(&mut self, index: usize, value: T) {
        self.array[index] = value;
    }

    fn record(&mut self, step: SortStep<T>, description: impl Into<String>) {
        self.trace.record(step, description);
    }

    fn sorted(&mut self, low: usize, high: usize, description: String) {
        let step = SortStep::Sorted {
            range: [low, high],
            array: self.snapshot(),
        };
        self.trace.record(step, description);
    }
}

/// Runs `body` between a `start` and a `complete` step.
///
/// Arrays shorter than two elements are already sorted: `body` is skipped and the trace holds
/// only the `complete` step.
fn run_sort<T: SortValue>(
    name: &str,
    input: &[T],
    body: impl FnOnce(&mut SortContext<T>),
) -> Trace<SortStep<T>> {
    let mut ctx = SortContext::new(input);

    if ctx.len() >= 2 {
        let start = SortStep::Start {
            array: ctx.snapshot(),
        };
        ctx.record(start, format!("Starting {name} on {} elements", input.len()));
        body(&mut ctx);
    }

    let description = if ctx.len() < 2 {
        format!("{name}: array with {} element(s) is already sorted", ctx.len())
    } else {
        format!("{name} complete")
    };
    let complete = SortStep::Complete {
        array: ctx.snapshot(),
    };
    ctx.record(complete, description);
    ctx.trace
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SortStep;
    use crate::trace::Trace;

    /// Arrays exercised by every sorting engine's tests.
    pub fn corpus() -> Vec<Vec<i32>> {
        vec![
            vec![],
            vec![7],
            vec![2, 1],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
            vec![4, 4, 4, 4],
            vec![-3, 10, 0, -7, 2],
        ]
    }

    /// Asserts the final snapshot is the ascending permutation of `input`.
    pub fn assert_sorted(input: &[i32], trace: &Trace<SortStep<i32>>) {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        let last = trace.last().expect("trace is never empty");
        assert!(matches!(last.kind(), SortStep::Complete { .. }));
        assert_eq!(last.kind().array(), expected.as_slice());
    }

    /// Asserts every swap changes exactly its two indices relative to the previous snapshot and
    /// every comparison stays in bounds.
    pub fn assert_steps_valid(input: &[i32], trace: &Trace<SortStep<i32>>) {
        let mut previous = input.to_vec();
        for step in trace {
            let array = step.kind().array();
            assert_eq!(array.len(), input.len());
            match step.kind() {
                SortStep::Compare { indices, .. } => {
                    assert!(indices[0] < input.len() && indices[1] < input.len());
                }
                SortStep::Swap { indices, .. } => {
                    let [i, j] = *indices;
                    for (k, (&before, &after)) in previous.iter().zip(array).enumerate() {
                        if k == i {
                            assert_eq!(after, previous[j]);
                        } else if k == j {
                            assert_eq!(after, previous[i]);
                        } else {
                            assert_eq!(before, after, "swap touched position {k}");
                        }
                    }
                }
                _ => {}
            }
            previous = array.to_vec();
        }
    }
}
