//! Insertion sort

use std::cmp::Ordering;

/// Sort a copy of `input` by insertion.
///
/// O(n²) in the worst case, O(n) on already sorted input.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    insertion_sort_by(input, T::cmp)
}

/// Insertion sort with a custom comparator. Stable.
pub fn insertion_sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut a = input.to_vec();
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && compare(&a[j - 1], &a[i]) == Ordering::Greater {
            j -= 1;
        }
        // Shift the greater predecessors right by one, drop a[i] into the gap
        a[j..=i].rotate_right(1);
    }
    a
}
