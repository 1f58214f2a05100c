//! Grouping of edit scripts into context-padded hunks

use std::ops::{Range, RangeInclusive};

use serde::Serialize;

use crate::op::DiffOp;

/// A contiguous slice of an edit script rendered as one unit in unified
/// output, together with its `@@` header numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk<'a> {
    /// First old line covered (or the old line preceding an empty range)
    pub start_a: usize,
    /// Number of old lines covered (equal + deleted)
    pub count_a: usize,
    /// First new line covered (or the new line preceding an empty range)
    pub start_b: usize,
    /// Number of new lines covered (equal + inserted)
    pub count_b: usize,
    /// Index range of this hunk within the edit script
    pub range: Range<usize>,
    /// The ops themselves, borrowed from the edit script
    pub ops: &'a [DiffOp],
}

impl<'a> Hunk<'a> {
    fn new(script: &'a [DiffOp], range: Range<usize>) -> Self {
        let ops = &script[range.clone()];
        let before = &script[..range.start];
        let (start_a, count_a) = side(ops, before, DiffOp::pos_a);
        let (start_b, count_b) = side(ops, before, DiffOp::pos_b);
        Self {
            start_a,
            count_a,
            start_b,
            count_b,
            range,
            ops,
        }
    }

    /// The `@@ -a,b +c,d @@` line
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.start_a, self.count_a, self.start_b, self.count_b
        )
    }

    /// Get the number of ops in this hunk
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn insertions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Insert { .. }))
            .count()
    }

    pub fn deletions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Delete { .. }))
            .count()
    }
}

/// Start and count for one side of a hunk. An untouched side starts at the
/// last line of that side preceding the hunk, 0 at the top of the file.
fn side(
    ops: &[DiffOp],
    before: &[DiffOp],
    pos: impl Fn(&DiffOp) -> Option<usize>,
) -> (usize, usize) {
    let count = ops.iter().filter(|op| pos(*op).is_some()).count();
    let start = ops
        .iter()
        .find_map(&pos)
        .or_else(|| before.iter().rev().find_map(&pos))
        .unwrap_or(0);
    (start, count)
}

/// Index ranges of maximal runs of non-equal ops
fn change_runs(ops: &[DiffOp]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut current: Option<usize> = None;

    for (i, op) in ops.iter().enumerate() {
        match (op.is_change(), current) {
            (true, None) => current = Some(i),
            (false, Some(start)) => {
                runs.push(start..i);
                current = None;
            }
            _ => {}
        }
    }
    if let Some(start) = current {
        runs.push(start..ops.len());
    }

    runs
}

/// Partition the changes of `ops` into hunks with up to `context` equal ops
/// on each side. Runs whose context windows overlap or touch share a hunk.
pub fn group(ops: &[DiffOp], context: usize) -> Vec<Hunk<'_>> {
    let mut hunks = Vec::new();
    let mut runs = change_runs(ops).into_iter();
    let Some(first) = runs.next() else {
        return hunks;
    };

    let join_gap = context.saturating_mul(2);
    let close = |end: usize| end.saturating_add(context).min(ops.len());

    let mut start = first.start.saturating_sub(context);
    let mut end = first.end;
    for run in runs {
        if run.start - end <= join_gap {
            end = run.end;
        } else {
            hunks.push(Hunk::new(ops, start..close(end)));
            start = run.start - context;
            end = run.end;
        }
    }
    hunks.push(Hunk::new(ops, start..close(end)));

    log::debug!("{} hunks with context {}", hunks.len(), context);
    hunks
}

/// Old and new line ranges touched by one run of changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRange {
    /// Deleted old lines, if any
    pub a: Option<RangeInclusive<usize>>,
    /// Inserted new lines, if any
    pub b: Option<RangeInclusive<usize>>,
}

impl From<&Hunk<'_>> for ChangeRange {
    fn from(hunk: &Hunk<'_>) -> Self {
        let span = |start: usize, count: usize| (count > 0).then(|| start..=start + count - 1);
        Self {
            a: span(hunk.start_a, hunk.count_a),
            b: span(hunk.start_b, hunk.count_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use crate::line::Sequence;
    use crate::op::EditScript;
    use pretty_assertions::assert_eq;

    fn script(a: &[&str], b: &[&str]) -> EditScript {
        diff(
            &Sequence::new(a.iter().copied()),
            &Sequence::new(b.iter().copied()),
        )
        .unwrap()
    }

    fn headers(hunks: &[Hunk<'_>]) -> Vec<(usize, usize, usize, usize)> {
        hunks
            .iter()
            .map(|h| (h.start_a, h.count_a, h.start_b, h.count_b))
            .collect()
    }

    fn numbered() -> (Vec<String>, Vec<String>) {
        let old: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        let mut new = old.clone();
        new[0] = "X".to_string();
        new[9] = "Y".to_string();
        (old, new)
    }

    fn numbered_script() -> EditScript {
        let (old, new) = numbered();
        diff(&Sequence::new(old), &Sequence::new(new)).unwrap()
    }

    #[test]
    fn test_no_changes_no_hunks() {
        let s = script(&["a", "b"], &["a", "b"]);
        assert!(s.hunks(3).is_empty());
        assert!(s.change_ranges().is_empty());
    }

    #[test]
    fn test_far_apart_changes_split() {
        let s = numbered_script();
        let hunks = s.hunks(3);
        assert_eq!(headers(&hunks), vec![(1, 4, 1, 4), (7, 4, 7, 4)]);
        assert_eq!(hunks[0].range, 0..5);
        assert_eq!(hunks[1].range, 7..12);
        assert_eq!(hunks[0].header(), "@@ -1,4 +1,4 @@");
    }

    #[test]
    fn test_overlapping_windows_merge() {
        let s = numbered_script();
        let hunks = s.hunks(4);
        assert_eq!(headers(&hunks), vec![(1, 10, 1, 10)]);
        assert_eq!(hunks[0].len(), s.len());
    }

    #[test]
    fn test_touching_windows_merge() {
        // Two equal lines between the changes, one line of context each
        let s = script(
            &["a", "b", "c", "d", "e", "f", "g"],
            &["a", "X", "c", "d", "Y", "f", "g"],
        );
        let hunks = s.hunks(1);
        assert_eq!(hunks.len(), 1);
        assert_eq!(headers(&hunks), vec![(1, 6, 1, 6)]);
    }

    #[test]
    fn test_gap_wider_than_context_splits() {
        let s = script(
            &["a", "b", "c", "d", "e", "f", "g", "h"],
            &["a", "b", "X", "d", "e", "f", "Y", "h"],
        );
        assert_eq!(headers(&s.hunks(1)), vec![(2, 3, 2, 3), (6, 3, 6, 3)]);
        assert_eq!(headers(&s.hunks(2)), vec![(1, 8, 1, 8)]);
    }

    #[test]
    fn test_zero_context_is_bare_runs() {
        let s = numbered_script();
        let hunks = s.hunks(0);
        assert_eq!(headers(&hunks), vec![(1, 1, 1, 1), (10, 1, 10, 1)]);
        assert!(hunks
            .iter()
            .all(|h| h.ops.iter().all(DiffOp::is_change)));
        assert_eq!(hunks[1].deletions(), 1);
        assert_eq!(hunks[1].insertions(), 1);
    }

    #[test]
    fn test_pure_insert_into_empty_file_starts_at_zero() {
        let s = script(&[], &["a", "b"]);
        assert_eq!(headers(&s.hunks(3)), vec![(0, 0, 1, 2)]);
    }

    #[test]
    fn test_pure_delete_of_whole_file() {
        let s = script(&["a", "b"], &[]);
        assert_eq!(headers(&s.hunks(3)), vec![(1, 2, 0, 0)]);
    }

    #[test]
    fn test_empty_side_uses_preceding_line() {
        let s = script(&["a", "b", "c", "d", "e"], &["a", "b", "X", "c", "d", "e"]);
        assert_eq!(headers(&s.hunks(0)), vec![(2, 0, 3, 1)]);
    }

    #[test]
    fn test_trailing_context_clipped_at_end() {
        let s = script(&["a", "b", "c"], &["a", "b", "c", "d"]);
        assert_eq!(headers(&s.hunks(1)), vec![(3, 1, 3, 2)]);
    }

    #[test]
    fn test_huge_context_does_not_overflow() {
        let s = numbered_script();
        assert_eq!(headers(&s.hunks(usize::MAX)), vec![(1, 10, 1, 10)]);
    }

    #[test]
    fn test_change_ranges() {
        let s = script(&["a", "b", "c", "d"], &["a", "x", "c", "d", "e"]);
        assert_eq!(
            s.change_ranges(),
            vec![
                ChangeRange {
                    a: Some(2..=2),
                    b: Some(2..=2),
                },
                ChangeRange {
                    a: None,
                    b: Some(5..=5),
                },
            ]
        );
    }
}
