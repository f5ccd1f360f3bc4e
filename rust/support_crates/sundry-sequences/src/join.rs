//! Lazy concatenation of runs, the inverse of splitting.
//!
//! [`Join`] flattens an iterator of runs into a single sequence, optionally
//! placing a separator between consecutive runs and optionally dropping runs
//! that turn out to be empty. Runs are pulled one at a time, so the outer
//! iterator is consumed no faster than the output.

use std::iter::{Fuse, FusedIterator};

type RunItem<I> = <<I as Iterator>::Item as IntoIterator>::Item;
type RunIter<I> = <<I as Iterator>::Item as IntoIterator>::IntoIter;

/// Iterator adapter concatenating runs with an optional separator.
///
/// This struct is created by [`Join::new`] or [`IteratorJoinExt::join_runs`].
pub struct Join<I>
where
    I: Iterator<Item: IntoIterator>,
{
    /// The outer iterator of runs.
    runs: Fuse<I>,
    /// The run currently being drained.
    current: Option<RunIter<I>>,
    /// First element of a run, held back while its separator is returned.
    pending: Option<RunItem<I>>,
    separator: Option<RunItem<I>>,
    skip_empty: bool,
    /// Whether any run has been accepted yet.
    started: bool,
}

impl<I> Join<I>
where
    I: Iterator<Item: IntoIterator>,
{
    /// Creates a new `Join`.
    ///
    /// # Arguments
    ///
    /// * `runs` - The runs to concatenate.
    /// * `separator` - Inserted between every two consecutive runs when present.
    /// * `skip_empty` - Drops empty runs entirely, so they neither appear nor
    ///   cause a separator to be emitted.
    pub fn new(runs: I, separator: Option<RunItem<I>>, skip_empty: bool) -> Self {
        Join {
            runs: runs.fuse(),
            current: None,
            pending: None,
            separator,
            skip_empty,
            started: false,
        }
    }
}

impl<I> Iterator for Join<I>
where
    I: Iterator<Item: IntoIterator>,
    RunItem<I>: Clone,
{
    type Item = RunItem<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }

            let mut run = self.runs.next()?.into_iter();
            let first = run.next();
            if first.is_none() && self.skip_empty {
                continue;
            }
            let needs_separator = self.started;
            self.started = true;
            if first.is_some() {
                self.current = Some(run);
            }

            match (&self.separator, first) {
                (Some(separator), first) if needs_separator => {
                    self.pending = first;
                    return Some(separator.clone());
                }
                (_, Some(item)) => return Some(item),
                (_, None) => {}
            }
        }
    }
}

impl<I> FusedIterator for Join<I>
where
    I: Iterator<Item: IntoIterator>,
    RunItem<I>: Clone,
{
}

/// Extension trait for joining an iterator of runs.
pub trait IteratorJoinExt: Iterator<Item: IntoIterator> + Sized {
    /// Adapts an iterator of runs into the concatenation of those runs.
    ///
    /// See [`Join::new`] for the meaning of `separator` and `skip_empty`.
    fn join_runs(self, separator: Option<RunItem<Self>>, skip_empty: bool) -> Join<Self> {
        Join::new(self, separator, skip_empty)
    }
}

impl<I: Iterator<Item: IntoIterator>> IteratorJoinExt for I {}
