//! Strategy selection policy.
//!
//! The selector is a pure function from a [`Profile`] to a [`Strategy`]. Rules are
//! tried in order and the first match wins:
//!
//! 1. `size <= INSERTION_THRESHOLD` selects insertion sort.
//! 2. `presortedness >= PRESORTED_THRESHOLD` selects insertion sort.
//! 3. Non-negative, dense, narrow-span data selects radix sort:
//!    `range_density >= RADIX_DENSITY_THRESHOLD`, `max - min < size * RADIX_SPAN_FACTOR`
//!    and `min >= RADIX_MIN_VALUE`.
//! 4. Everything else selects merge sort.

use crate::algo::{InsertionSort, MergeSort, RadixSort};
use crate::core::{Counters, Kernel, SortKey};
use crate::profile::Profile;
use serde::Serialize;
use std::fmt;

/// Inputs at or below this size always use insertion sort.
pub const INSERTION_THRESHOLD: usize = 20;

/// Presortedness at or above this score selects insertion sort.
pub const PRESORTED_THRESHOLD: f64 = 0.7;

/// Minimum range density for the radix path.
pub const RADIX_DENSITY_THRESHOLD: f64 = 0.01;

/// The value span must stay strictly below `size * RADIX_SPAN_FACTOR` for the radix path.
pub const RADIX_SPAN_FACTOR: usize = 10;

/// Smallest value the radix kernel accepts.
pub const RADIX_MIN_VALUE: i64 = 0;

/// The sorting algorithm chosen for an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    #[serde(rename = "InsertionSort")]
    Insertion,
    #[serde(rename = "MergeSort")]
    Merge,
    #[serde(rename = "RadixSort")]
    Radix,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Insertion, Strategy::Merge, Strategy::Radix];

    /// Display tag of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Insertion => "InsertionSort",
            Strategy::Merge => "MergeSort",
            Strategy::Radix => "RadixSort",
        }
    }

    /// Runs the kernel behind this tag on `data` in place.
    ///
    /// Selecting [`Strategy::Radix`] for negative keys breaks the radix precondition;
    /// [`Policy::select`] never does.
    pub fn sort_counted<T: SortKey + Clone>(self, data: &mut [T], counters: &mut Counters) {
        match self {
            Strategy::Insertion => InsertionSort.sort_counted(data, counters),
            Strategy::Merge => MergeSort.sort_counted(data, counters),
            Strategy::Radix => RadixSort.sort_counted(data, counters),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Thresholds driving strategy selection.
///
/// [`Policy::default`] carries the module constants. The setters exist for callers
/// that want to tune the decision; the rule order never changes.
///
/// # Examples
///
/// ```
/// use smartsort::policy::{Policy, Strategy};
/// use smartsort::profile::profile;
///
/// let data: Vec<i64> = (0..30).rev().collect();
/// let p = profile(&data);
///
/// assert_eq!(Policy::default().select(&p), Strategy::Radix);
/// assert_eq!(Policy::default().insertion_threshold(50).select(&p), Strategy::Insertion);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Policy {
    pub insertion_threshold: usize,
    pub presorted_threshold: f64,
    pub radix_density_threshold: f64,
    pub radix_span_factor: usize,
    pub radix_min_value: i64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            insertion_threshold: INSERTION_THRESHOLD,
            presorted_threshold: PRESORTED_THRESHOLD,
            radix_density_threshold: RADIX_DENSITY_THRESHOLD,
            radix_span_factor: RADIX_SPAN_FACTOR,
            radix_min_value: RADIX_MIN_VALUE,
        }
    }
}

impl Policy {
    pub fn insertion_threshold(mut self, size: usize) -> Self {
        self.insertion_threshold = size;
        self
    }

    pub fn presorted_threshold(mut self, score: f64) -> Self {
        self.presorted_threshold = score;
        self
    }

    pub fn radix_density_threshold(mut self, density: f64) -> Self {
        self.radix_density_threshold = density;
        self
    }

    pub fn radix_span_factor(mut self, factor: usize) -> Self {
        self.radix_span_factor = factor;
        self
    }

    /// Raising this above zero narrows the radix path. Values below zero are clamped
    /// here, and [`Policy::select`] applies the same floor to struct literals.
    pub fn radix_min_value(mut self, min: i64) -> Self {
        self.radix_min_value = min.max(RADIX_MIN_VALUE);
        self
    }

    /// Picks the strategy for `profile`. Deterministic and side-effect free.
    pub fn select(&self, profile: &Profile) -> Strategy {
        if profile.size <= self.insertion_threshold {
            return Strategy::Insertion;
        }

        if profile.presortedness >= self.presorted_threshold {
            return Strategy::Insertion;
        }

        if let Some((min, max)) = profile.range {
            let span = i128::from(max) - i128::from(min);
            let span_limit = profile.size as i128 * self.radix_span_factor as i128;
            // The radix kernel only handles non-negative keys, whatever the field says.
            let radix_floor = self.radix_min_value.max(RADIX_MIN_VALUE);
            if profile.range_density >= self.radix_density_threshold
                && span < span_limit
                && min >= radix_floor
            {
                return Strategy::Radix;
            }
        }

        Strategy::Merge
    }
}

/// Picks the strategy for `profile` under the default [`Policy`].
pub fn select(profile: &Profile) -> Strategy {
    Policy::default().select(profile)
}
