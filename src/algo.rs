//! Instrumented sorting kernels (Insertion, Merge and LSD Radix sort).
//!
//! Every kernel implements [`Kernel`] and charges its work to a shared [`Counters`]:
//! - **Insertion sort**: one comparison per predecessor examined, one move per shift.
//! - **Merge sort**: one comparison per head-to-head check, one move per element merged.
//! - **Radix sort**: one comparison per digit extraction, one move per element placed.
//!
//! The free functions [`insertion_sort`], [`merge_sort`] and [`radix_sort`] sort an
//! independent copy of their input and return a [`SortResult`].

use crate::core::{Counters, Kernel, SortKey, SortResult};
use crate::policy::Strategy;
use cuneiform::cuneiform;

/// Sorts a copy of `data` with insertion sort.
///
/// # Examples
///
/// ```
/// use smartsort::algo::insertion_sort;
///
/// let result = insertion_sort(&[5, 3, 1, 4, 2]);
/// assert_eq!(result.sorted, vec![1, 2, 3, 4, 5]);
/// assert_eq!((result.comparisons, result.moves), (9, 7));
/// ```
pub fn insertion_sort<T: SortKey + Clone>(data: &[T]) -> SortResult<T> {
    InsertionSort.sort(data)
}

/// Sorts a copy of `data` with top-down merge sort.
pub fn merge_sort<T: SortKey + Clone>(data: &[T]) -> SortResult<T> {
    MergeSort.sort(data)
}

/// Sorts a copy of `data` with LSD radix sort on decimal digits.
///
/// All keys must be non-negative. The adaptive dispatcher only routes non-negative
/// inputs here; calling this directly with negative keys yields an unspecified order
/// (and trips a debug assertion).
///
/// # Examples
///
/// ```
/// use smartsort::algo::radix_sort;
///
/// let result = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]);
/// assert_eq!(result.sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort<T: SortKey + Clone>(data: &[T]) -> SortResult<T> {
    RadixSort.sort(data)
}

/// Classic insertion sort. Stable; O(n) on sorted input, O(n²) worst case.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl Kernel for InsertionSort {
    fn strategy(&self) -> Strategy {
        Strategy::Insertion
    }

    fn sort_counted<T: SortKey + Clone>(&self, data: &mut [T], counters: &mut Counters) {
        for i in 1..data.len() {
            let key = data[i].sort_key();

            // Every examined predecessor is charged, including the one that stops
            // the scan. Running off the left edge charges nothing extra.
            let mut j = i;
            while j > 0 {
                counters.comparisons += 1;
                if data[j - 1].sort_key() <= key {
                    break;
                }
                j -= 1;
            }

            data[j..=i].rotate_right(1);
            counters.moves += (i - j) as u64;
        }
    }
}

/// Top-down merge sort. Stable; O(n log n) regardless of input order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl Kernel for MergeSort {
    fn strategy(&self) -> Strategy {
        Strategy::Merge
    }

    fn sort_counted<T: SortKey + Clone>(&self, data: &mut [T], counters: &mut Counters) {
        let mut scratch = Vec::with_capacity(data.len());
        merge_sort_rec(data, &mut scratch, counters);
    }
}

fn merge_sort_rec<T: SortKey + Clone>(
    data: &mut [T],
    scratch: &mut Vec<T>,
    counters: &mut Counters,
) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_rec(&mut data[..mid], scratch, counters);
    merge_sort_rec(&mut data[mid..], scratch, counters);
    merge(data, mid, scratch, counters);
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]`.
///
/// Ties take the left element, which keeps the sort stable. Draining the leftover
/// run charges moves but no comparisons.
fn merge<T: SortKey + Clone>(
    data: &mut [T],
    mid: usize,
    scratch: &mut Vec<T>,
    counters: &mut Counters,
) {
    scratch.clear();
    let (left, right) = data.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        counters.comparisons += 1;
        if left[i].sort_key() <= right[j].sort_key() {
            scratch.push(left[i].clone());
            i += 1;
        } else {
            scratch.push(right[j].clone());
            j += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    counters.moves += scratch.len() as u64;

    data.clone_from_slice(scratch.as_slice());
}

/// Number of buckets per pass (one per decimal digit).
const RADIX_BUCKETS: usize = 10;

const RADIX: u64 = RADIX_BUCKETS as u64;

// Cache-aligned digit histogram.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Least-significant-digit radix sort over base-10 digits.
///
/// Runs one stable bucket distribution per decimal digit of the largest key, so it
/// is linear in `len * digits(max)`. Keys must be non-negative.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadixSort;

impl Kernel for RadixSort {
    fn strategy(&self) -> Strategy {
        Strategy::Radix
    }

    fn sort_counted<T: SortKey + Clone>(&self, data: &mut [T], counters: &mut Counters) {
        let Some(max) = data.iter().map(SortKey::sort_key).max() else {
            return;
        };
        debug_assert!(
            data.iter().all(|item| item.sort_key() >= 0),
            "radix sort requires non-negative keys"
        );

        let max = max.max(0) as u64;
        let mut buffer = Vec::with_capacity(data.len());
        let mut exp: u64 = 1;

        while max / exp > 0 {
            distribute(data, &mut buffer, exp, counters);
            match exp.checked_mul(RADIX) {
                Some(next) => exp = next,
                None => break,
            }
        }
    }
}

#[inline(always)]
fn digit(key: i64, exp: u64) -> usize {
    ((key as u64 / exp) % RADIX) as usize
}

/// One stable distribution pass on the digit selected by `exp`.
///
/// 1. Counts digit frequencies.
/// 2. Computes prefix sums to find each bucket's start.
/// 3. Copies the elements aside and writes them back in bucket order 0..9.
fn distribute<T: SortKey + Clone>(
    data: &mut [T],
    buffer: &mut Vec<T>,
    exp: u64,
    counters: &mut Counters,
) {
    let mut counts = DigitCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    data.iter().for_each(|item| {
        counts[digit(item.sort_key(), exp)] += 1;
        counters.comparisons += 1;
    });

    let mut offsets = [0usize; RADIX_BUCKETS];
    let mut sum = 0;
    offsets
        .iter_mut()
        .zip(counts.iter())
        .for_each(|(offset, &count)| {
            *offset = sum;
            sum += count;
        });

    buffer.clear();
    buffer.extend_from_slice(data);
    buffer.iter().for_each(|item| {
        let d = digit(item.sort_key(), exp);
        data[offsets[d]] = item.clone();
        offsets[d] += 1;
        counters.moves += 1;
    });
}
