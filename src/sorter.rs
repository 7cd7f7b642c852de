//! The adaptive sort orchestrator.
//!
//! [`SmartSorter`] profiles the input once, asks its [`Policy`] for a [`Strategy`],
//! runs the matching kernel on an independent copy and packages a [`Report`].
//! The whole profile + select + sort sequence is timed with a monotonic clock.
//!
//! Inputs of length 0 or 1 are already sorted: they are profiled but never reach
//! the selector, so their report carries no strategy and zero counters.

use crate::core::{Counters, SortKey};
use crate::error::SortError;
use crate::policy::{Policy, Strategy};
use crate::profile::{Profile, profile};
use log::{debug, trace};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{Duration, Instant};

/// Outcome of one adaptive sort.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report<T = i64> {
    pub sorted: Vec<T>,
    /// `None` when the input had fewer than two elements.
    pub strategy: Option<Strategy>,
    pub comparisons: u64,
    pub moves: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    /// Presortedness × 100, rounded to one decimal place.
    pub presortedness_pct: f64,
    /// Range density × 100, rounded to one decimal place.
    pub range_density_pct: f64,
    pub profile: Profile,
}

impl<T> Report<T> {
    fn new(
        sorted: Vec<T>,
        strategy: Option<Strategy>,
        counters: Counters,
        elapsed: Duration,
        profile: Profile,
    ) -> Self {
        Self {
            sorted,
            strategy,
            comparisons: counters.comparisons,
            moves: counters.moves,
            elapsed,
            presortedness_pct: to_percent(profile.presortedness),
            range_density_pct: to_percent(profile.range_density),
            profile,
        }
    }

    /// Wall-clock time of the profile + select + sort sequence, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn counters(&self) -> Counters {
        Counters {
            comparisons: self.comparisons,
            moves: self.moves,
        }
    }
}

impl<T> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SmartSort Statistics ===")?;
        match self.strategy {
            Some(strategy) => writeln!(f, "Strategy:       {strategy}")?,
            None => writeln!(f, "Strategy:       none (trivially sorted)")?,
        }
        writeln!(f, "Execution Time: {:.4} ms", self.elapsed_ms())?;
        writeln!(f, "Comparisons:    {}", self.comparisons)?;
        writeln!(f, "Moves:          {}", self.moves)?;
        writeln!(f, "Presortedness:  {:.1}%", self.presortedness_pct)?;
        write!(f, "Range Density:  {:.1}%", self.range_density_pct)
    }
}

/// Scales a `[0, 1]` score to a percentage rounded to one decimal place.
///
/// The score is scaled by 1000 and rounded once, half away from zero. Scores are
/// non-negative, so an exact half (e.g. 6.25%) rounds up, as a decimal
/// `toFixed(1)` does. The results can differ only when `score * 1000` itself is
/// inexact and the product lands on the other side of a .5 boundary.
fn to_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

fn serialize_millis<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Configured adaptive sorter.
///
/// # Examples
///
/// ```
/// use smartsort::{SmartSorter, SortError, Strategy};
///
/// let sorter = SmartSorter::new().with_max_len(1_000);
///
/// let report = sorter.sort(&[5, 3, 1, 4, 2])?;
/// assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
/// assert_eq!(report.strategy, Some(Strategy::Insertion));
///
/// let too_big = vec![0u8; 1_001];
/// assert!(matches!(sorter.sort(&too_big), Err(SortError::InputTooLarge { .. })));
/// # Ok::<(), SortError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmartSorter {
    policy: Policy,
    max_len: Option<usize>,
}

impl SmartSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection thresholds.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Rejects inputs longer than `max_len` with [`SortError::InputTooLarge`].
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Profiles `data` and reports the strategy a sort would use, without sorting.
    pub fn preview<T: SortKey>(&self, data: &[T]) -> (Profile, Option<Strategy>) {
        let profile = profile(data);
        let strategy = (profile.size > 1).then(|| self.policy.select(&profile));
        (profile, strategy)
    }

    /// Sorts an independent copy of `data` and reports how it was done.
    pub fn sort<T: SortKey + Clone>(&self, data: &[T]) -> Result<Report<T>, SortError> {
        self.check_len(data.len())?;
        Ok(self.run(data))
    }

    /// Validates floating-point input as integers, then sorts it.
    ///
    /// Fails with [`SortError::InvalidInput`] on the first NaN, infinite, fractional
    /// or out-of-range value.
    pub fn sort_f64(&self, data: &[f64]) -> Result<Report<i64>, SortError> {
        self.check_len(data.len())?;
        let values = data
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                to_integer(value).ok_or(SortError::InvalidInput { index, value })
            })
            .collect::<Result<Vec<i64>, SortError>>()?;
        Ok(self.run(&values))
    }

    fn check_len(&self, len: usize) -> Result<(), SortError> {
        match self.max_len {
            Some(max) if len > max => Err(SortError::InputTooLarge { len, max }),
            _ => Ok(()),
        }
    }

    fn run<T: SortKey + Clone>(&self, data: &[T]) -> Report<T> {
        let start = Instant::now();
        let profile = profile(data);

        let mut sorted = data.to_vec();
        let mut counters = Counters::default();
        let strategy = if profile.size <= 1 {
            None
        } else {
            let strategy = self.policy.select(&profile);
            debug!("{profile} -> {strategy}");
            strategy.sort_counted(&mut sorted, &mut counters);
            trace!(
                "{strategy} on {} elements: {} comparisons, {} moves",
                profile.size, counters.comparisons, counters.moves
            );
            Some(strategy)
        };

        Report::new(sorted, strategy, counters, start.elapsed(), profile)
    }
}

fn to_integer(value: f64) -> Option<i64> {
    // i64::MAX is not representable; 2^63 is the first float past it.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if !value.is_finite() || value.fract() != 0.0 || value < i64::MIN as f64 || value >= UPPER {
        return None;
    }
    Some(value as i64)
}

/// Sorts a copy of `data` with the default policy and no size ceiling.
///
/// # Examples
///
/// ```
/// use smartsort::{smart_sort, Strategy};
///
/// let report = smart_sort(&[5, 3, 1, 4, 2]);
/// assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
/// assert_eq!(report.strategy, Some(Strategy::Insertion));
/// assert_eq!(report.presortedness_pct, 30.0);
/// ```
pub fn smart_sort<T: SortKey + Clone>(data: &[T]) -> Report<T> {
    SmartSorter::default().run(data)
}

/// Validates and sorts floating-point input with the default policy.
pub fn smart_sort_f64(data: &[f64]) -> Result<Report<i64>, SortError> {
    SmartSorter::default().sort_f64(data)
}
