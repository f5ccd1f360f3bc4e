//! Shifting the contents of a slice in place.
//!
//! This module provides the [`SliceShiftExt`] trait, which moves the elements
//! of a slice (or a `Vec`) towards one end and fills the positions left behind
//! with a given value. The length never changes.

use sundry_common::{Result, verify_range};

/// Extension trait adding in-place shifting to slices.
pub trait SliceShiftExt<T> {
    /// Moves every element `count` positions towards the start. The first
    /// `count` elements are dropped and the last `count` slots receive clones
    /// of `fill`.
    ///
    /// Fails with an out-of-range error when `count` exceeds the length.
    ///
    /// ```
    /// use sundry_sequences::SliceShiftExt;
    ///
    /// let mut v = [1, 2, 3, 4, 5];
    /// v.shift_left_fill(2, 0).unwrap();
    /// assert_eq!(v, [3, 4, 5, 0, 0]);
    /// ```
    fn shift_left_fill(&mut self, count: usize, fill: T) -> Result<()>;

    /// Moves every element `count` positions towards the end. The last `count`
    /// elements are dropped and the first `count` slots receive clones of
    /// `fill`.
    ///
    /// Fails with an out-of-range error when `count` exceeds the length.
    fn shift_right_fill(&mut self, count: usize, fill: T) -> Result<()>;
}

impl<T: Clone> SliceShiftExt<T> for [T] {
    fn shift_left_fill(&mut self, count: usize, fill: T) -> Result<()> {
        verify_range!(count, count <= self.len());
        self.rotate_left(count);
        let len = self.len();
        self[len - count..].fill(fill);
        Ok(())
    }

    fn shift_right_fill(&mut self, count: usize, fill: T) -> Result<()> {
        verify_range!(count, count <= self.len());
        self.rotate_right(count);
        self[..count].fill(fill);
        Ok(())
    }
}

impl<T: Clone> SliceShiftExt<T> for Vec<T> {
    fn shift_left_fill(&mut self, count: usize, fill: T) -> Result<()> {
        self.as_mut_slice().shift_left_fill(count, fill)
    }

    fn shift_right_fill(&mut self, count: usize, fill: T) -> Result<()> {
        self.as_mut_slice().shift_right_fill(count, fill)
    }
}
