//! In-place quicksort.

/// Sort `arr` ascending in place and return it.
///
/// Quicksort with the last element as pivot: everything strictly less than
/// the pivot ends up on its left, everything greater or equal on its right.
/// The sort is not stable. Average cost is O(n log n); already sorted input
/// or long runs of equal values hit the O(n²) worst case. Recursion only
/// ever descends into the smaller partition, so stack depth stays
/// logarithmic even then.
pub fn sort_by_asc<T: PartialOrd>(arr: &mut [T]) -> &mut [T] {
    quick_sort(arr);
    arr
}

fn quick_sort<T: PartialOrd>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

fn partition<T: PartialOrd>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if arr[i] < arr[pivot] {
            arr.swap(store, i);
            store += 1;
        }
    }
    arr.swap(store, pivot);
    store
}
