//! Counts derived from an edit script

use serde::Serialize;

use crate::op::DiffOp;

/// Line counts of an edit script. Only obtainable from the script itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    equal: usize,
    inserted: usize,
    deleted: usize,
}

impl Statistics {
    pub(crate) fn from_ops(ops: &[DiffOp]) -> Self {
        ops.iter().fold(Self::default(), |mut stats, op| {
            match op {
                DiffOp::Equal { .. } => stats.equal += 1,
                DiffOp::Insert { .. } => stats.inserted += 1,
                DiffOp::Delete { .. } => stats.deleted += 1,
            }
            stats
        })
    }

    pub fn equal(&self) -> usize {
        self.equal
    }

    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn deleted(&self) -> usize {
        self.deleted
    }

    pub fn total_changes(&self) -> usize {
        self.inserted + self.deleted
    }

    /// Lines in the old sequence
    pub fn lines_a(&self) -> usize {
        self.equal + self.deleted
    }

    /// Lines in the new sequence
    pub fn lines_b(&self) -> usize {
        self.equal + self.inserted
    }

    /// Share of equal ops among all ops; two empty inputs are identical (1.0)
    pub fn similarity(&self) -> f64 {
        let total = self.equal + self.inserted + self.deleted;
        if total == 0 {
            return 1.0;
        }
        self.equal as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use crate::line::Sequence;

    fn stats(a: &[&str], b: &[&str]) -> Statistics {
        diff(
            &Sequence::new(a.iter().copied()),
            &Sequence::new(b.iter().copied()),
        )
        .unwrap()
        .stats()
    }

    #[test]
    fn test_single_replacement() {
        let s = stats(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!((s.equal(), s.inserted(), s.deleted()), (2, 1, 1));
        assert_eq!(s.total_changes(), 2);
        assert_eq!(s.similarity(), 0.5);
        assert_eq!((s.lines_a(), s.lines_b()), (3, 3));
    }

    #[test]
    fn test_identical() {
        let s = stats(&["a", "b"], &["a", "b"]);
        assert_eq!(s.total_changes(), 0);
        assert_eq!(s.similarity(), 1.0);
    }

    #[test]
    fn test_both_empty_is_fully_similar() {
        let s = stats(&[], &[]);
        assert_eq!(s, Statistics::default());
        assert_eq!(s.similarity(), 1.0);
    }

    #[test]
    fn test_nothing_in_common() {
        let s = stats(&["a"], &["b", "c"]);
        assert_eq!(s.similarity(), 0.0);
        assert_eq!((s.lines_a(), s.lines_b()), (1, 2));
    }
}
