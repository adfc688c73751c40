use crate::{
    sorting::{run_sort, SortContext, SortStep, SortValue},
    trace::Trace,
};

/// Quick sort with the Lomuto partition scheme.
///
/// The pivot is always the last element of the current sub-range. Elements strictly smaller
/// than the pivot are swapped to the front of the range (a `swap` is recorded only when the two
/// positions differ), and `pivotPlace` records the pivot moving to its final position.
#[must_use]
pub fn quick_sort<T: SortValue>(input: &[T]) -> Trace<SortStep<T>> {
    run_sort("Quick Sort", input, |ctx| {
        let high = ctx.len() - 1;
        sort_range(ctx, 0, high);
    })
}

fn sort_range<T: SortValue>(ctx: &mut SortContext<T>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(ctx, low, high);
    if pivot > low {
        sort_range(ctx, low, pivot - 1);
    }
    sort_range(ctx, pivot + 1, high);
}

/// Partitions `low..=high` around `array[high]` and returns the pivot's final index.
fn partition<T: SortValue>(ctx: &mut SortContext<T>, low: usize, high: usize) -> usize {
    let pivot = ctx.value(high);
    let step = SortStep::Pivot {
        index: high,
        array: ctx.snapshot(),
    };
    ctx.record(step, format!("Choosing {pivot} as pivot"));

    // Next slot for an element smaller than the pivot
    let mut boundary = low;
    for j in low..high {
        let value = ctx.value(j);
        ctx.compare(j, high, format!("Comparing {value} with pivot {pivot}"));
        if value < pivot {
            if boundary != j {
                ctx.swap(boundary, j);
            }
            boundary += 1;
        }
    }

    let displaced = ctx.value(boundary);
    ctx.set(high, displaced);
    ctx.set(boundary, pivot);
    let step = SortStep::PivotPlace {
        indices: [boundary, high],
        array: ctx.snapshot(),
    };
    ctx.record(step, format!("Placing pivot {pivot} at position {boundary}"));

    boundary
}
