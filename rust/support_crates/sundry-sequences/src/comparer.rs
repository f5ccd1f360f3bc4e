//! Reusable ordering strategies.
//!
//! A [`Comparer`] is a value that orders two elements. Unlike a closure passed
//! straight to `sort_by`, a comparer can be named, stored, reversed and chained.
//! Plain closures of the form `Fn(&T, &T) -> Ordering` are comparers too.
//!
//! ```
//! use sundry_sequences::{KeyComparer, ReverseComparer, SliceSortExt, ThenComparer};
//!
//! let mut words = vec!["pear", "fig", "apple", "kiwi"];
//! let by_len_desc = ReverseComparer::new(KeyComparer::new(|w: &&str| w.len()));
//! words.sort_by_comparer(&ThenComparer::new(by_len_desc, |a: &&str, b: &&str| a.cmp(b)));
//! assert_eq!(words, vec!["apple", "kiwi", "pear", "fig"]);
//! ```

use std::cmp::Ordering;

/// Orders two values of type `T`.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalComparer;

impl<T: Ord + ?Sized> Comparer<T> for NaturalComparer {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the ordering of another comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseComparer<C>(C);

impl<C> ReverseComparer<C> {
    pub fn new(inner: C) -> Self {
        ReverseComparer(inner)
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for ReverseComparer<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders values by a key projected from each of them.
#[derive(Debug, Clone, Copy)]
pub struct KeyComparer<F>(F);

impl<F> KeyComparer<F> {
    pub fn new(key: F) -> Self {
        KeyComparer(key)
    }
}

impl<T: ?Sized, K: Ord, F> Comparer<T> for KeyComparer<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Orders by `first`, breaking ties with `second`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThenComparer<A, B> {
    first: A,
    second: B,
}

impl<A, B> ThenComparer<A, B> {
    pub fn new(first: A, second: B) -> Self {
        ThenComparer { first, second }
    }
}

impl<T: ?Sized, A: Comparer<T>, B: Comparer<T>> Comparer<T> for ThenComparer<A, B> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.second.compare(a, b))
    }
}

/// Extension trait for sorting slices with a [`Comparer`].
pub trait SliceSortExt<T> {
    /// Sorts the slice with `comparer`. The sort is stable.
    fn sort_by_comparer<C: Comparer<T> + ?Sized>(&mut self, comparer: &C);

    /// Checks whether the slice is sorted according to `comparer`.
    fn is_sorted_by_comparer<C: Comparer<T> + ?Sized>(&self, comparer: &C) -> bool;
}

impl<T> SliceSortExt<T> for [T] {
    fn sort_by_comparer<C: Comparer<T> + ?Sized>(&mut self, comparer: &C) {
        self.sort_by(|a, b| comparer.compare(a, b));
    }

    fn is_sorted_by_comparer<C: Comparer<T> + ?Sized>(&self, comparer: &C) -> bool {
        self.windows(2)
            .all(|pair| comparer.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}
