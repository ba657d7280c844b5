//! Merge sort
//!
//! Bottom-up: runs of width 1, 2, 4, ... are merged pairwise between two
//! buffers until one run covers the whole input. Produces the same order as
//! the recursive midpoint split and needs no call stack proportional to n.

use std::cmp::Ordering;

/// Sort a copy of `input` with merge sort. O(n log n), stable.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    merge_sort_by(input, T::cmp)
}

/// Merge sort with a custom comparator.
///
/// On ties the element from the left run is taken first, which keeps
/// equal keys in input order.
pub fn merge_sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }

    let mut src = input.to_vec();
    let mut dst = Vec::with_capacity(n);
    let mut width = 1;

    while width < n {
        dst.clear();
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            merge_into(&src[start..mid], &src[mid..end], &mut dst, &mut compare);
            start = end;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    src
}

/// Append the merge of two sorted runs to `out`.
fn merge_into<T, F>(left: &[T], right: &[T], out: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // left <= right takes left
        if compare(&left[i], &right[j]) != Ordering::Greater {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
