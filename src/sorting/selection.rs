use crate::{
    sorting::{run_sort, SortStep, SortValue},
    trace::Trace,
};

/// Selection sort: for each position, scans the rest of the array for the minimum and swaps it
/// into place.
///
/// A `swap` is recorded only when the minimum is not already at the position.
#[must_use]
pub fn selection_sort<T: SortValue>(input: &[T]) -> Trace<SortStep<T>> {
    run_sort("Selection Sort", input, |ctx| {
        let n = ctx.len();
        for i in 0..n {
            let mut min_idx = i;
            for j in i + 1..n {
                let (current_min, candidate) = (ctx.value(min_idx), ctx.value(j));
                ctx.compare(
                    min_idx,
                    j,
                    format!("Comparing current minimum {current_min} with {candidate}"),
                );
                if candidate < current_min {
                    min_idx = j;
                }
            }
            if min_idx != i {
                ctx.swap(i, min_idx);
            }
        }
    })
}
