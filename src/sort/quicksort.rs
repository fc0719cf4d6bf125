//! Partition-based permutation sort

use std::cmp::Ordering;

/// Sort `items` in place with Lomuto partitioning.
///
/// The pivot is the last element of each subrange and elements strictly less
/// than it move to its left. Not stable; already ordered input is quadratic.
/// Subranges live on an explicit stack, so deep partitions cannot overflow
/// the call stack.
pub fn quick_sort<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(T, T) -> Ordering,
{
    let mut pending = vec![(0, items.len())];

    while let Some((start, end)) = pending.pop() {
        if end - start < 2 {
            continue;
        }
        let pivot = partition(&mut items[start..end], &mut compare) + start;
        pending.push((pivot + 1, end));
        pending.push((start, pivot));
    }
}

/// Returns the pivot's final position within `items`
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    T: Copy,
    F: FnMut(T, T) -> Ordering,
{
    let last = items.len() - 1;
    let pivot = items[last];
    let mut store = 0;

    for j in 0..last {
        if compare(items[j], pivot) == Ordering::Less {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, last);
    store
}
