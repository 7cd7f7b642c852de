//! Statistical profiling of an input sequence.
//!
//! [`profile`] computes everything the selector looks at in a single pass over a
//! sorted copy of the keys:
//! - **Presortedness**: `1 - inversions / (n * (n - 1) / 2)`, 1.0 for `n <= 1`.
//! - **Range density**: distinct values over the width of the closed range `[min, max]`.
//! - **Duplicates**, **range** and a coarse quartile-based **distribution** shape.
//!
//! Inversions are counted while merge-sorting the key copy, so profiling costs
//! O(n log n) and yields the same count an exhaustive pairwise scan would.

use crate::core::SortKey;
use serde::Serialize;
use std::fmt;

/// Inputs with fewer elements than this are classified [`Distribution::Small`].
const SMALL_SAMPLE: usize = 10;

/// Quartile-skew ratio below which the distribution counts as [`Distribution::Normal`].
const NORMAL_SKEW: f64 = 0.2;

/// Quartile-skew ratio below which the distribution counts as [`Distribution::SlightlySkewed`].
const SLIGHT_SKEW: f64 = 0.5;

/// Coarse shape of the value distribution, judged from the quartiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Empty input, or too few elements to judge.
    Small,
    /// A single distinct value, or a zero interquartile range.
    Uniform,
    Normal,
    SlightlySkewed,
    HighlySkewed,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Distribution::Small => "small",
            Distribution::Uniform => "uniform",
            Distribution::Normal => "normal",
            Distribution::SlightlySkewed => "slightly_skewed",
            Distribution::HighlySkewed => "highly_skewed",
        })
    }
}

/// Statistical descriptors of a sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Profile {
    pub size: usize,
    /// In `[0, 1]`; 1.0 is ascending, 0.0 is strictly descending.
    pub presortedness: f64,
    /// In `[0, 1]`; 0.0 for empty input, 1.0 when all values are equal.
    pub range_density: f64,
    pub has_duplicates: bool,
    /// Number of distinct keys.
    pub distinct: usize,
    /// `(min, max)`, absent for empty input.
    pub range: Option<(i64, i64)>,
    pub distribution: Distribution,
}

impl Profile {
    pub fn min(&self) -> Option<i64> {
        self.range.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<i64> {
        self.range.map(|(_, max)| max)
    }

    /// Returns `true` if the profiled sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profile(size={}, presortedness={:.2}, range_density={:.2}, \
             distribution={}, duplicates={})",
            self.size,
            self.presortedness,
            self.range_density,
            self.distribution,
            self.has_duplicates
        )
    }
}

/// Profiles `data` by key. The input is not modified.
///
/// # Examples
///
/// ```
/// use smartsort::profile::profile;
///
/// let p = profile(&[5, 4, 3, 2, 1]);
/// assert_eq!(p.presortedness, 0.0);
/// assert_eq!(p.range, Some((1, 5)));
/// assert!(!p.has_duplicates);
///
/// let p = profile(&[1, 5]);
/// assert_eq!(p.range_density, 0.4);
/// ```
pub fn profile<T: SortKey>(data: &[T]) -> Profile {
    let mut keys: Vec<i64> = data.iter().map(SortKey::sort_key).collect();
    let size = keys.len();

    let mut scratch = Vec::with_capacity(size);
    let inversions = count_inversions(&mut keys, &mut scratch);
    // `keys` is now sorted ascending.

    let presortedness = if size <= 1 {
        1.0
    } else {
        let max_inversions = size as u64 * (size as u64 - 1) / 2;
        1.0 - inversions as f64 / max_inversions as f64
    };

    let distinct = count_distinct(&keys);
    let range = keys.first().copied().zip(keys.last().copied());

    let range_density = match range {
        None => 0.0,
        Some((min, max)) if min == max => 1.0,
        Some((min, max)) => {
            let width = i128::from(max) - i128::from(min) + 1;
            distinct as f64 / width as f64
        }
    };

    Profile {
        size,
        presortedness,
        range_density,
        has_duplicates: distinct < size,
        distinct,
        range,
        distribution: classify(&keys, distinct),
    }
}

/// Merge-sorts `keys` ascending and returns the number of inversions it had.
fn count_inversions(keys: &mut [i64], scratch: &mut Vec<i64>) -> u64 {
    let len = keys.len();
    if len <= 1 {
        return 0;
    }

    let mid = len / 2;
    let mut inversions =
        count_inversions(&mut keys[..mid], scratch) + count_inversions(&mut keys[mid..], scratch);

    scratch.clear();
    let (left, right) = keys.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            scratch.push(left[i]);
            i += 1;
        } else {
            // right[j] is smaller than every remaining left element.
            inversions += (left.len() - i) as u64;
            scratch.push(right[j]);
            j += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);

    keys.copy_from_slice(scratch.as_slice());
    inversions
}

fn count_distinct(sorted: &[i64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}

fn classify(sorted: &[i64], distinct: usize) -> Distribution {
    let n = sorted.len();
    if n == 0 {
        return Distribution::Small;
    }
    if distinct == 1 {
        return Distribution::Uniform;
    }
    if n < SMALL_SAMPLE {
        return Distribution::Small;
    }

    let q1 = i128::from(sorted[n / 4]);
    let q2 = i128::from(sorted[n / 2]);
    let q3 = i128::from(sorted[3 * n / 4]);

    let iqr = q3 - q1;
    if iqr == 0 {
        return Distribution::Uniform;
    }

    let lower_spread = q2 - q1;
    let upper_spread = q3 - q2;
    let skew = (lower_spread - upper_spread).abs() as f64 / iqr as f64;

    if skew < NORMAL_SKEW {
        Distribution::Normal
    } else if skew < SLIGHT_SKEW {
        Distribution::SlightlySkewed
    } else {
        Distribution::HighlySkewed
    }
}
