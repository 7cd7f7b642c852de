//! Core traits and types shared by every sorting kernel.
//!
//! This module defines:
//! - [`SortKey`]: The trait elements implement to expose their integer sort key.
//! - [`Counters`]: The comparison/move accounting every kernel charges.
//! - [`SortResult`]: A kernel's sorted output plus its counters.
//! - [`Kernel`]: The instrumented sorter capability the orchestrator dispatches on.

use crate::policy::Strategy;

/// A trait for reading the integer key an element is ordered by.
///
/// Kernels never compare elements directly; they compare `sort_key()` values.
/// Elements with equal keys are "ties", and stable kernels keep their relative order.
///
/// # Examples
///
/// Sorting records by one of their fields:
///
/// ```
/// use smartsort::core::SortKey;
///
/// #[derive(Clone)]
/// struct Reading {
///     celsius: i64,
///     station: &'static str,
/// }
///
/// impl SortKey for Reading {
///     fn sort_key(&self) -> i64 {
///         self.celsius
///     }
/// }
///
/// let readings = vec![
///     Reading { celsius: 21, station: "north" },
///     Reading { celsius: -3, station: "south" },
/// ];
/// let report = smartsort::smart_sort(&readings);
/// assert_eq!(report.sorted[0].station, "south");
/// ```
pub trait SortKey {
    /// Returns the key this element is ordered by.
    fn sort_key(&self) -> i64;
}

macro_rules! impl_sort_key {
    ($($t:ty),*) => {
        $(
            impl SortKey for $t {
                #[inline(always)]
                fn sort_key(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

// Lossless widenings only; u64 and usize do not fit.
impl_sort_key!(i8, i16, i32, i64, u8, u16, u32);

impl<T: SortKey + ?Sized> SortKey for &T {
    #[inline(always)]
    fn sort_key(&self) -> i64 {
        (**self).sort_key()
    }
}

/// Cost accounting charged by a kernel while it sorts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub moves: u64,
}

/// Output of a single kernel run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortResult<T = i64> {
    /// Same multiset as the input, non-decreasing by key.
    pub sorted: Vec<T>,
    pub comparisons: u64,
    pub moves: u64,
}

impl<T> SortResult<T> {
    pub(crate) fn new(sorted: Vec<T>, counters: Counters) -> Self {
        Self {
            sorted,
            comparisons: counters.comparisons,
            moves: counters.moves,
        }
    }

    /// Returns the counters of this run.
    pub fn counters(&self) -> Counters {
        Counters {
            comparisons: self.comparisons,
            moves: self.moves,
        }
    }
}

/// An instrumented sorting algorithm.
///
/// Implementors sort in place and charge their work to the supplied [`Counters`].
/// The provided [`Kernel::sort`] never touches the caller's slice.
pub trait Kernel {
    /// The strategy tag this kernel implements.
    fn strategy(&self) -> Strategy;

    /// Sorts `data` in place, adding its cost to `counters`.
    fn sort_counted<T: SortKey + Clone>(&self, data: &mut [T], counters: &mut Counters);

    /// Sorts an independent copy of `data`.
    fn sort<T: SortKey + Clone>(&self, data: &[T]) -> SortResult<T> {
        let mut work = data.to_vec();
        let mut counters = Counters::default();
        self.sort_counted(&mut work, &mut counters);
        SortResult::new(work, counters)
    }
}
