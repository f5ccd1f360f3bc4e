use ahash::AHashSet;
use itertools::Itertools;

use crate::split::{
    IteratorSplitExt, SplitSink, VecSplitSink, split_by_separator_set, split_by_separators,
};

fn strs(items: &[&'static str]) -> Vec<Option<&'static str>> {
    items.iter().copied().map(Some).collect()
}

fn split(
    items: &[&'static str],
    skip_empty: bool,
    separators: &[Option<&'static str>],
) -> Vec<Vec<Option<&'static str>>> {
    strs(items)
        .into_iter()
        .split_on(skip_empty, separators)
        .unwrap()
}

/// Reference split: standard separator semantics, then the empty-run policy.
fn naive_split(
    items: &[Option<u8>],
    separators: &[Option<u8>],
    skip_empty: bool,
) -> Vec<Vec<Option<u8>>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for item in items {
        if separators.contains(item) {
            runs.push(std::mem::take(&mut current));
        } else {
            current.push(*item);
        }
    }
    runs.push(current);
    if skip_empty {
        runs.retain(|run| !run.is_empty());
    } else {
        for run in runs.iter_mut().filter(|run| run.is_empty()) {
            run.push(None);
        }
    }
    runs
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Begin,
    Append(Option<char>),
    End,
    Clear,
}

#[derive(Default)]
struct RecordingSink {
    calls: Vec<Call>,
    len: usize,
}

impl SplitSink<char> for RecordingSink {
    fn run_len(&self) -> usize {
        self.len
    }

    fn begin_run(&mut self) {
        self.calls.push(Call::Begin);
    }

    fn append_to_run(&mut self, value: Option<char>) {
        self.len += 1;
        self.calls.push(Call::Append(value));
    }

    fn end_run(&mut self) {
        self.calls.push(Call::End);
    }

    fn clear_run(&mut self) {
        self.len = 0;
        self.calls.push(Call::Clear);
    }
}

#[test]
fn test_split_single_separator() {
    let runs = split(&["a", "-", "b", "-", "c"], false, &[Some("-")]);
    assert_eq!(runs, vec![strs(&["a"]), strs(&["b"]), strs(&["c"])]);
}

#[test]
fn test_split_skip_empty_collapses_separators() {
    let runs = split(&["a", "-", "-", "b"], true, &[Some("-")]);
    assert_eq!(runs, vec![strs(&["a"]), strs(&["b"])]);
}

#[test]
fn test_split_keep_empty_between_separators() {
    let runs = split(&["a", "-", "-", "b"], false, &[Some("-")]);
    assert_eq!(runs, vec![strs(&["a"]), vec![None], strs(&["b"])]);
}

#[test]
fn test_split_only_separators() {
    let runs = split(&["-", "-"], false, &[Some("-")]);
    assert_eq!(runs, vec![vec![None], vec![None], vec![None]]);

    let runs = split(&["-", "-"], true, &[Some("-")]);
    assert!(runs.is_empty());
}

#[test]
fn test_split_empty_input() {
    let runs = split(&[], true, &[Some("-")]);
    assert!(runs.is_empty());

    let runs = split(&[], false, &[Some("-")]);
    assert_eq!(runs, vec![vec![None]]);
}

#[test]
fn test_split_single_element() {
    assert!(split(&["-"], true, &[Some("-")]).is_empty());
    assert_eq!(
        split(&["-"], false, &[Some("-")]),
        vec![vec![None], vec![None]]
    );
    assert_eq!(split(&["x"], true, &[Some("-")]), vec![strs(&["x"])]);
    assert_eq!(split(&["x"], false, &[Some("-")]), vec![strs(&["x"])]);
}

#[test]
fn test_split_leading_and_trailing_separators() {
    let runs = split(&["-", "a", "b", "-"], false, &[Some("-")]);
    assert_eq!(runs, vec![vec![None], strs(&["a", "b"]), vec![None]]);

    let runs = split(&["-", "a", "b", "-"], true, &[Some("-")]);
    assert_eq!(runs, vec![strs(&["a", "b"])]);
}

#[test]
fn test_split_multiple_separators() {
    let runs = split(
        &["a", ",", "b", ";", "c", ",", ";"],
        false,
        &[Some(","), Some(";")],
    );
    assert_eq!(
        runs,
        vec![strs(&["a"]), strs(&["b"]), strs(&["c"]), vec![None], vec![None]]
    );
}

#[test]
fn test_split_null_separator() {
    let items = vec![Some("a"), None, Some("b"), None, None];
    let runs = items.into_iter().split_on(true, &[None]).unwrap();
    assert_eq!(runs, vec![strs(&["a"]), strs(&["b"])]);
}

#[test]
fn test_split_null_element_is_kept() {
    let items = vec![Some("a"), None, Some("-"), None];
    let runs = items.into_iter().split_on(false, &[Some("-")]).unwrap();
    assert_eq!(runs, vec![vec![Some("a"), None], vec![None]]);
}

#[test]
fn test_split_no_separators_fails() {
    let mut sink = RecordingSink::default();
    let err = split_by_separators("ab".chars().map(Some), false, &mut sink, &[]).unwrap_err();
    assert!(err.is_invalid_arg());
    assert!(sink.calls.is_empty());
}

#[test]
fn test_split_sink_protocol() {
    let mut sink = RecordingSink::default();
    "a-".chars()
        .map(Some)
        .split_into(false, &mut sink, &[Some('-')])
        .unwrap();
    assert_eq!(
        sink.calls,
        vec![
            Call::Begin,
            Call::Append(Some('a')),
            Call::End,
            Call::Clear,
            Call::Begin,
            Call::Append(None),
            Call::End,
            Call::Clear,
        ]
    );
}

#[test]
fn test_split_sink_protocol_skip_empty() {
    let mut sink = RecordingSink::default();
    split_by_separators("--ab-".chars().map(Some), true, &mut sink, &[Some('-')]).unwrap();
    assert_eq!(
        sink.calls,
        vec![
            Call::Begin,
            Call::Append(Some('a')),
            Call::Append(Some('b')),
            Call::End,
            Call::Clear,
        ]
    );
}

#[test]
fn test_split_consumes_input_once() {
    let mut pulled = 0;
    let items = std::iter::from_fn(|| {
        pulled += 1;
        match pulled {
            1 => Some(Some('x')),
            2 => Some(Some(',')),
            3 => Some(Some('y')),
            _ => None,
        }
    });
    let mut sink = VecSplitSink::new();
    split_by_separators(items, false, &mut sink, &[Some(',')]).unwrap();
    assert_eq!(pulled, 4);
    assert_eq!(sink.runs(), &[vec![Some('x')], vec![Some('y')]]);
}

#[test]
fn test_split_dyn_sink() {
    let mut sink = VecSplitSink::new();
    let dyn_sink: &mut dyn SplitSink<u8> = &mut sink;
    split_by_separators([1, 0, 2].map(Some), false, dyn_sink, &[Some(0)]).unwrap();
    assert_eq!(sink.into_runs(), vec![vec![Some(1)], vec![Some(2)]]);
}

#[test]
fn test_split_runs_render() {
    let runs = split(&["a", "b", "-", "c"], false, &[Some("-")]);
    let rendered = runs
        .iter()
        .map(|run| run.iter().map(|v| v.unwrap_or("<null>")).join(""))
        .join("|");
    assert_eq!(rendered, "ab|c");
}

#[test]
fn test_split_random_against_reference() {
    fastrand::seed(4_021_977);
    for _ in 0..500 {
        let len = fastrand::usize(0..30);
        let items = (0..len)
            .map(|_| {
                let v = fastrand::u8(0..6);
                (v != 5).then_some(v)
            })
            .collect::<Vec<_>>();
        let separators = match fastrand::u8(0..3) {
            0 => vec![Some(0)],
            1 => vec![Some(0), Some(1)],
            _ => vec![None, Some(2)],
        };
        let skip_empty = fastrand::bool();

        let actual = items
            .iter()
            .copied()
            .split_on(skip_empty, &separators)
            .unwrap();
        let expected = naive_split(&items, &separators, skip_empty);
        assert_eq!(
            actual, expected,
            "items: {items:?}, separators: {separators:?}, skip_empty: {skip_empty}"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token(u8);

#[test]
fn test_split_elements_without_hash() {
    let items = [Token(1), Token(0), Token(2), Token(3)].map(Some);
    let runs = items.into_iter().split_on(false, &[Some(Token(0))]).unwrap();
    assert_eq!(
        runs,
        vec![vec![Some(Token(1))], vec![Some(Token(2)), Some(Token(3))]]
    );

    let items = [Token(1), Token(0), Token(2), Token(4), Token(3)].map(Some);
    let runs = items
        .into_iter()
        .split_on(true, &[Some(Token(0)), Some(Token(4))])
        .unwrap();
    assert_eq!(
        runs,
        vec![vec![Some(Token(1))], vec![Some(Token(2))], vec![Some(Token(3))]]
    );
}

#[test]
fn test_split_by_separator_set_matches_slice_split() {
    fastrand::seed(77_310);
    for _ in 0..200 {
        let len = fastrand::usize(0..25);
        let items = (0..len)
            .map(|_| {
                let v = fastrand::u8(0..6);
                (v != 5).then_some(v)
            })
            .collect::<Vec<_>>();
        let separators = vec![None, Some(fastrand::u8(0..5)), Some(fastrand::u8(0..5))];
        let set = separators.iter().copied().collect::<AHashSet<_>>();
        let skip_empty = fastrand::bool();

        let mut from_set = VecSplitSink::new();
        split_by_separator_set(items.iter().copied(), skip_empty, &mut from_set, &set).unwrap();
        let from_slice = items
            .iter()
            .copied()
            .split_on(skip_empty, &separators)
            .unwrap();
        assert_eq!(from_set.into_runs(), from_slice, "items: {items:?}");
    }
}

#[test]
fn test_split_by_empty_separator_set_fails() {
    let mut sink = VecSplitSink::<u8>::new();
    let err = split_by_separator_set([Some(1)], false, &mut sink, &AHashSet::new()).unwrap_err();
    assert!(err.is_invalid_arg());
    assert!(sink.runs().is_empty());
}
