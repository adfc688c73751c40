use crate::{
    sorting::{run_sort, SortStep, SortValue},
    trace::Trace,
};

/// Bubble sort: repeatedly compares adjacent pairs and swaps those out of order.
///
/// After pass `i` the largest `i + 1` values sit at the end of the array. Every adjacent pair
/// of the unsorted prefix is compared on every pass; there is no early exit.
#[must_use]
pub fn bubble_sort<T: SortValue>(input: &[T]) -> Trace<SortStep<T>> {
    run_sort("Bubble Sort", input, |ctx| {
        let n = ctx.len();
        for pass in 0..n - 1 {
            for j in 0..n - pass - 1 {
                let (left, right) = (ctx.value(j), ctx.value(j + 1));
                ctx.compare(j, j + 1, format!("Comparing {left} and {right}"));
                if left > right {
                    ctx.swap(j, j + 1);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::{assert_sorted, assert_steps_valid, corpus};

    #[test]
    fn test_bubble_sorts_corpus() {
        for input in corpus() {
            let trace = bubble_sort(&input);
            assert_sorted(&input, &trace);
            assert_steps_valid(&input, &trace);
        }
    }

    #[test]
    fn test_bubble_step_sequence() {
        let trace = bubble_sort(&[2, 1, 3]);
        assert_eq!(
            trace.tags(),
            vec!["start", "compare", "swap", "compare", "compare", "complete"]
        );
        assert_eq!(trace[2].kind().array(), &[1, 2, 3]);
    }

    #[test]
    fn test_bubble_comparison_count_is_quadratic() {
        let trace = bubble_sort(&[1, 2, 3, 4, 5]);
        let stats = trace.stats();
        assert_eq!(stats.comparisons, 10);
        assert_eq!(stats.swaps, 0);
    }
}
