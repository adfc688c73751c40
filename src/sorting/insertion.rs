use crate::{
    sorting::{run_sort, SortStep, SortValue},
    trace::Trace,
};

/// Insertion sort: grows a sorted prefix by sinking each new element leftwards with adjacent
/// swaps.
///
/// Each step of the sink compares the element with its left neighbor; the sink stops at the
/// first neighbor that is not larger, so already-sorted input costs `n - 1` comparisons.
#[must_use]
pub fn insertion_sort<T: SortValue>(input: &[T]) -> Trace<SortStep<T>> {
    run_sort("Insertion Sort", input, |ctx| {
        for i in 1..ctx.len() {
            let mut j = i;
            while j > 0 {
                let (left, current) = (ctx.value(j - 1), ctx.value(j));
                ctx.compare(
                    j - 1,
                    j,
                    format!("Comparing {current} with its left neighbor {left}"),
                );
                if left <= current {
                    break;
                }
                ctx.swap(j - 1, j);
                j -= 1;
            }
        }
    })
}
