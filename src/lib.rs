//! # SmartSort
//!
//! `smartsort` is an adaptive integer sorter. It profiles its input, picks the sorting
//! algorithm best suited to the input's shape, runs it with full cost accounting and
//! returns the sorted data together with what it decided and what it cost.
//!
//! ## Key Features
//!
//! - **Input Profiling**: [`profile()`] measures presortedness (normalized inversion count),
//!   range density, duplicates, min/max and a coarse distribution shape.
//! - **Deterministic Selection**: A fixed rule order maps a profile to Insertion, Merge or
//!   Radix sort. Every threshold is a named constant in [`policy`] and can be tuned through
//!   [`Policy`].
//! - **Instrumented Kernels**: All three algorithms share one [`Counters`] contract, so their
//!   comparison and move counts are directly comparable.
//! - **Keyed Elements**: The [`SortKey`] trait lets records be sorted by an integer field;
//!   insertion, merge and radix sort are all stable on equal keys.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use smartsort::{smart_sort, Strategy};
//!
//! let report = smart_sort(&[64, 34, 25, 12, 22, 11, 90]);
//!
//! assert_eq!(report.sorted, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(report.strategy, Some(Strategy::Insertion));
//! println!("{report}");
//! ```
//!
//! ### Previewing the decision
//!
//! ```rust
//! use smartsort::{profile, select, Strategy};
//!
//! // 100 values covering 0..=49: dense, narrow and non-negative.
//! let data: Vec<i64> = (0..100).map(|i| (i * 37) % 50).collect();
//! let p = profile(&data);
//!
//! assert_eq!(select(&p), Strategy::Radix);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Profiling**: O(N log N); inversions are counted during a merge sort of the keys.
//! - **Insertion Sort**: O(N) on sorted input, O(N²) worst case; chosen for small or
//!   nearly-sorted inputs only.
//! - **Merge Sort**: O(N log N) regardless of order.
//! - **Radix Sort**: O(N × digits(max)) for non-negative keys in a narrow range.
//! - **Memory Overhead**: One copy of the input plus one scratch buffer of the same size.

pub mod algo;
pub mod core;
pub mod error;
pub mod policy;
pub mod profile;
pub mod sorter;

pub use crate::algo::{insertion_sort, merge_sort, radix_sort};
pub use crate::core::{Counters, Kernel, SortKey, SortResult};
pub use crate::error::SortError;
pub use crate::policy::{Policy, Strategy, select};
pub use crate::profile::{Distribution, Profile, profile};
pub use crate::sorter::{Report, SmartSorter, smart_sort, smart_sort_f64};

pub mod prelude {
    pub use crate::algo::{
        InsertionSort, MergeSort, RadixSort, insertion_sort, merge_sort, radix_sort,
    };
    pub use crate::core::{Counters, Kernel, SortKey, SortResult};
    pub use crate::error::SortError;
    pub use crate::policy::{Policy, Strategy, select};
    pub use crate::profile::{Distribution, Profile, profile};
    pub use crate::sorter::{Report, SmartSorter, smart_sort, smart_sort_f64};
}
