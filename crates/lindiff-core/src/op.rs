//! Diff operations and the edit script they form

use serde::{Deserialize, Serialize};

use crate::hunk::{self, ChangeRange, Hunk};
use crate::stats::Statistics;

/// The kind of a diff operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Line present in both sequences
    Equal,
    /// Line present only in the old sequence
    Delete,
    /// Line present only in the new sequence
    Insert,
}

impl OpKind {
    /// Unified-diff line prefix
    pub fn prefix(self) -> char {
        match self {
            OpKind::Equal => ' ',
            OpKind::Delete => '-',
            OpKind::Insert => '+',
        }
    }
}

/// One record of an edit script. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DiffOp {
    Equal {
        pos_a: usize,
        pos_b: usize,
        text: String,
    },
    Delete {
        pos_a: usize,
        text: String,
    },
    Insert {
        pos_b: usize,
        text: String,
    },
}

impl DiffOp {
    pub fn equal(pos_a: usize, pos_b: usize, text: impl Into<String>) -> Self {
        DiffOp::Equal {
            pos_a,
            pos_b,
            text: text.into(),
        }
    }

    pub fn delete(pos_a: usize, text: impl Into<String>) -> Self {
        DiffOp::Delete {
            pos_a,
            text: text.into(),
        }
    }

    pub fn insert(pos_b: usize, text: impl Into<String>) -> Self {
        DiffOp::Insert {
            pos_b,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            DiffOp::Equal { .. } => OpKind::Equal,
            DiffOp::Delete { .. } => OpKind::Delete,
            DiffOp::Insert { .. } => OpKind::Insert,
        }
    }

    /// Position in the old sequence, if this op touches it
    pub fn pos_a(&self) -> Option<usize> {
        match self {
            DiffOp::Equal { pos_a, .. } | DiffOp::Delete { pos_a, .. } => Some(*pos_a),
            DiffOp::Insert { .. } => None,
        }
    }

    /// Position in the new sequence, if this op touches it
    pub fn pos_b(&self) -> Option<usize> {
        match self {
            DiffOp::Equal { pos_b, .. } | DiffOp::Insert { pos_b, .. } => Some(*pos_b),
            DiffOp::Delete { .. } => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DiffOp::Equal { text, .. }
            | DiffOp::Delete { text, .. }
            | DiffOp::Insert { text, .. } => text,
        }
    }

    /// Check if this is an actual change (not context)
    pub fn is_change(&self) -> bool {
        self.kind() != OpKind::Equal
    }
}

/// The ordered result of diffing two sequences.
///
/// Equal and Delete ops visit every old position exactly once in increasing
/// order; Equal and Insert ops do the same for new positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<DiffOp>,
}

impl EditScript {
    pub(crate) fn from_ops(ops: Vec<DiffOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffOp> {
        self.ops.iter()
    }

    /// Only the insertions and deletions
    pub fn changes(&self) -> impl Iterator<Item = &DiffOp> {
        self.ops.iter().filter(|op| op.is_change())
    }

    /// Number of inserted plus deleted lines
    pub fn edit_distance(&self) -> usize {
        self.changes().count()
    }

    pub fn is_identical(&self) -> bool {
        self.ops.iter().all(|op| !op.is_change())
    }

    pub fn stats(&self) -> Statistics {
        Statistics::from_ops(&self.ops)
    }

    /// Group changes into hunks padded with `context` equal lines
    pub fn hunks(&self, context: usize) -> Vec<Hunk<'_>> {
        hunk::group(&self.ops, context)
    }

    /// Line ranges touched by each maximal run of changes
    pub fn change_ranges(&self) -> Vec<ChangeRange> {
        self.hunks(0).iter().map(ChangeRange::from).collect()
    }

    pub fn into_ops(self) -> Vec<DiffOp> {
        self.ops
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a DiffOp;
    type IntoIter = std::slice::Iter<'a, DiffOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
