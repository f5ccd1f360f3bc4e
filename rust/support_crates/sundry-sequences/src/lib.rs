//! Sequence utilities: separator-based splitting and joining, slice shifting,
//! maps from key/value pairs, and comparers.
//!
//! # Key Types
//!
//! - [`split_by_separators`] - Single-pass split of a sequence of nullable
//!   elements into runs, driven into a caller-supplied [`SplitSink`]
//! - [`Join`] - Lazy concatenation of runs with an optional separator between them
//! - [`SliceShiftExt`] - Shift slice contents left or right, filling the vacated slots
//! - [`map_from_pairs`] - Build a hash map from pairs, rejecting duplicate keys
//! - [`Comparer`] - Reusable ordering strategies for sorting

pub mod comparer;
pub mod join;
pub mod pairs;
pub mod shift;
pub mod split;

#[cfg(test)]
mod tests;

pub use comparer::{
    Comparer, KeyComparer, NaturalComparer, ReverseComparer, SliceSortExt, ThenComparer,
};
pub use join::{IteratorJoinExt, Join};
pub use pairs::{map_from_nullable_pairs, map_from_pairs};
pub use shift::SliceShiftExt;
pub use split::{
    IteratorSplitExt, SplitSink, VecSplitSink, split_by_separator_set, split_by_separators,
};
