use crate::{
    sorting::{run_sort, SortContext, SortStep, SortValue},
    trace::Trace,
};

/// Heap sort over an implicit binary max-heap.
///
/// The heap is built bottom-up from the last parent. Extraction then swaps the root with the
/// last unsorted position, records that position as `sorted` and sifts the new root down. The
/// remaining position 0 is recorded as `sorted` once the heap shrinks to one element.
#[must_use]
pub fn heap_sort<T: SortValue>(input: &[T]) -> Trace<SortStep<T>> {
    run_sort("Heap Sort", input, |ctx| {
        let n = ctx.len();
        for root in (0..n / 2).rev() {
            sift_down(ctx, n, root);
        }

        for end in (1..n).rev() {
            ctx.swap(0, end);
            ctx.sorted(end, end, format!("Position {end} is now sorted"));
            sift_down(ctx, end, 0);
        }
        ctx.sorted(0, 0, "Position 0 is now sorted".to_string());
    })
}

/// Restores the max-heap property for the subtree at `root` within the first `size` elements.
fn sift_down<T: SortValue>(ctx: &mut SortContext<T>, size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child >= size {
                break;
            }
            let (parent, value) = (ctx.value(largest), ctx.value(child));
            ctx.compare(
                largest,
                child,
                format!("Comparing {parent} and {value} in heap"),
            );
            if value > parent {
                largest = child;
            }
        }

        if largest == root {
            return;
        }
        ctx.swap(root, largest);
        root = largest;
    }
}
