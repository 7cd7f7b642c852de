//! Error types for the adaptive sorter.
//!
//! Sorting a slice of [`SortKey`](crate::core::SortKey) values cannot fail on its own.
//! Errors come from the two checked surfaces:
//! - converting floating-point input with
//!   [`SmartSorter::sort_f64`](crate::sorter::SmartSorter::sort_f64),
//! - a configured size ceiling on [`SmartSorter`](crate::sorter::SmartSorter).
//!
//! Both are raised before any profiling happens, so no partial report exists.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SortError {
    /// A value is NaN, infinite, fractional or outside the `i64` range.
    #[error("invalid input: value {value} at index {index} is not a finite integer")]
    InvalidInput { index: usize, value: f64 },

    /// The input exceeds the sorter's configured `max_len`.
    #[error("input too large: {len} elements exceeds the limit of {max}")]
    InputTooLarge { len: usize, max: usize },
}
