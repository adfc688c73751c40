use crate::{
    sorting::{run_sort, SortContext, SortStep, SortValue},
    trace::Trace,
};

/// Top-down merge sort.
///
/// Every split of `low..=high` at `mid = (low + high) / 2` records a `divide` step. Merging
/// records `mergeStart`, one `compare` per head-to-head comparison of the two runs, one
/// `mergeMove` per element written back and finally `sorted` for the merged range. Ties take
/// from the left run, so the sort is stable.
#[must_use]
pub fn merge_sort<T: SortValue>(input: &[T]) -> Trace<SortStep<T>> {
    run_sort("Merge Sort", input, |ctx| {
        let high = ctx.len() - 1;
        sort_range(ctx, 0, high);
    })
}

fn sort_range<T: SortValue>(ctx: &mut SortContext<T>, low: usize, high: usize) {
    if low >= high {
        return;
    }

    let mid = low + (high - low) / 2;
    let step = SortStep::Divide {
        low,
        mid,
        high,
        array: ctx.snapshot(),
    };
    ctx.record(step, format!("Dividing [{low}-{high}] at index {mid}"));

    sort_range(ctx, low, mid);
    sort_range(ctx, mid + 1, high);
    merge(ctx, low, mid, high);
}

fn merge<T: SortValue>(ctx: &mut SortContext<T>, low: usize, mid: usize, high: usize) {
    let step = SortStep::MergeStart {
        low,
        mid,
        high,
        array: ctx.snapshot(),
    };
    ctx.record(
        step,
        format!("Merging [{low}-{mid}] and [{}-{high}]", mid + 1),
    );

    let mut merged = Vec::with_capacity(high - low + 1);
    let (mut i, mut j) = (low, mid + 1);
    while i <= mid && j <= high {
        let (left, right) = (ctx.value(i), ctx.value(j));
        ctx.compare(i, j, format!("Comparing {left} and {right} for merge"));
        if left <= right {
            merged.push(left);
            i += 1;
        } else {
            merged.push(right);
            j += 1;
        }
    }
    merged.extend((i..=mid).map(|k| ctx.value(k)));
    merged.extend((j..=high).map(|k| ctx.value(k)));

    for (offset, value) in merged.into_iter().enumerate() {
        let index = low + offset;
        ctx.set(index, value);
        let step = SortStep::MergeMove {
            index,
            array: ctx.snapshot(),
        };
        ctx.record(step, format!("Placing {value} at position {index}"));
    }

    ctx.sorted(low, high, format!("Range [{low}-{high}] is now sorted"));
}
