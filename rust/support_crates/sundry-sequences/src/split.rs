//! Single-pass splitting of a sequence at separator values.
//!
//! The splitter walks its input exactly once and drives a [`SplitSink`], which
//! owns the output. Elements are nullable (`Option<T>`), and `None` may itself
//! be a separator.
//!
//! Empty runs are either dropped (`skip_empty = true`, so consecutive,
//! leading and trailing separators collapse) or kept. A kept empty run is
//! materialized as a run holding a single `None` placeholder; an empty input
//! therefore produces one placeholder run, and a lone separator produces two.
//!
//! # Example
//!
//! ```
//! use sundry_sequences::IteratorSplitExt;
//!
//! let items = ["a", "-", "b", "-", "c"].map(Some);
//! let runs = items.into_iter().split_on(false, &[Some("-")]).unwrap();
//! assert_eq!(runs, vec![vec![Some("a")], vec![Some("b")], vec![Some("c")]]);
//! ```

use std::hash::Hash;

use ahash::AHashSet;
use sundry_common::{Result, verify_arg};

/// Receives the runs produced by [`split_by_separators`].
///
/// The splitter only observes the length of the current run; it never reads
/// back the elements it appended.
pub trait SplitSink<T> {
    /// Number of elements appended to the current run so far.
    fn run_len(&self) -> usize;

    /// Called before the first element of each run is appended.
    fn begin_run(&mut self) {}

    /// Appends an element to the current run.
    fn append_to_run(&mut self, value: Option<T>);

    /// Materializes the current run and appends it to the output.
    fn end_run(&mut self);

    /// Discards the elements of the current run.
    fn clear_run(&mut self);
}

/// A [`SplitSink`] collecting runs into vectors.
#[derive(Debug, Clone)]
pub struct VecSplitSink<T> {
    runs: Vec<Vec<Option<T>>>,
    current: Vec<Option<T>>,
}

impl<T> VecSplitSink<T> {
    pub fn new() -> VecSplitSink<T> {
        VecSplitSink {
            runs: Vec::new(),
            current: Vec::new(),
        }
    }

    /// The runs completed so far.
    pub fn runs(&self) -> &[Vec<Option<T>>] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Vec<Option<T>>> {
        self.runs
    }
}

impl<T> Default for VecSplitSink<T> {
    fn default() -> Self {
        VecSplitSink::new()
    }
}

impl<T> SplitSink<T> for VecSplitSink<T> {
    fn run_len(&self) -> usize {
        self.current.len()
    }

    fn append_to_run(&mut self, value: Option<T>) {
        self.current.push(value);
    }

    fn end_run(&mut self) {
        self.runs.push(std::mem::take(&mut self.current));
    }

    fn clear_run(&mut self) {
        self.current.clear();
    }
}

/// Splits `items` at every occurrence of any of `separators`, feeding the
/// resulting runs into `sink`.
///
/// `items` is consumed in a single forward pass. With `skip_empty`, runs with
/// no elements are not emitted at all; otherwise each one is emitted as a run
/// containing a single `None` placeholder.
///
/// Separators are matched by equality against each entry of `separators`.
/// For long separator lists over hashable elements, prefer
/// [`split_by_separator_set`].
///
/// Fails with an invalid-argument error, before touching `sink`, when
/// `separators` is empty.
pub fn split_by_separators<T, I, S>(
    items: I,
    skip_empty: bool,
    sink: &mut S,
    separators: &[Option<T>],
) -> Result<()>
where
    I: IntoIterator<Item = Option<T>>,
    T: Eq,
    S: SplitSink<T> + ?Sized,
{
    verify_arg!(separators, !separators.is_empty());
    match separators {
        [single] => split_with(items, skip_empty, sink, |item| item == single),
        _ => split_with(items, skip_empty, sink, |item| separators.contains(item)),
    }
    Ok(())
}

/// Same as [`split_by_separators`], with membership tested against a hash set.
pub fn split_by_separator_set<T, I, S>(
    items: I,
    skip_empty: bool,
    sink: &mut S,
    separators: &AHashSet<Option<T>>,
) -> Result<()>
where
    I: IntoIterator<Item = Option<T>>,
    T: Eq + Hash,
    S: SplitSink<T> + ?Sized,
{
    verify_arg!(separators, !separators.is_empty());
    split_with(items, skip_empty, sink, |item| separators.contains(item));
    Ok(())
}

fn split_with<T, I, S, P>(items: I, skip_empty: bool, sink: &mut S, is_separator: P)
where
    I: IntoIterator<Item = Option<T>>,
    S: SplitSink<T> + ?Sized,
    P: Fn(&Option<T>) -> bool,
{
    let mut emitted = 0usize;
    for item in items {
        if is_separator(&item) {
            if flush_run(sink, skip_empty) {
                emitted += 1;
            }
        } else {
            append(sink, item);
        }
    }
    if flush_run(sink, skip_empty) {
        emitted += 1;
    }

    log::trace!("split emitted {emitted} runs (skip_empty: {skip_empty})");
}

#[inline]
fn append<T, S: SplitSink<T> + ?Sized>(sink: &mut S, value: Option<T>) {
    if sink.run_len() == 0 {
        sink.begin_run();
    }
    sink.append_to_run(value);
}

/// Emits the current run, substituting the empty-run placeholder when needed.
/// Returns whether a run was emitted.
fn flush_run<T, S: SplitSink<T> + ?Sized>(sink: &mut S, skip_empty: bool) -> bool {
    if sink.run_len() == 0 {
        if skip_empty {
            return false;
        }
        append(sink, None);
    }
    sink.end_run();
    sink.clear_run();
    true
}

/// Extension trait exposing the splitter on iterators of nullable elements.
pub trait IteratorSplitExt<T>: Iterator<Item = Option<T>> + Sized {
    /// Splits this iterator at `separators` and collects the runs.
    ///
    /// See [`split_by_separators`] for the handling of empty runs.
    fn split_on(self, skip_empty: bool, separators: &[Option<T>]) -> Result<Vec<Vec<Option<T>>>>
    where
        T: Eq,
    {
        let mut sink = VecSplitSink::new();
        split_by_separators(self, skip_empty, &mut sink, separators)?;
        Ok(sink.into_runs())
    }

    /// Splits this iterator at `separators` into a caller-supplied sink.
    fn split_into<S>(self, skip_empty: bool, sink: &mut S, separators: &[Option<T>]) -> Result<()>
    where
        T: Eq,
        S: SplitSink<T> + ?Sized,
    {
        split_by_separators(self, skip_empty, sink, separators)
    }
}

impl<T, I: Iterator<Item = Option<T>>> IteratorSplitExt<T> for I {}
