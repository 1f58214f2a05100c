//! Myers edit-graph search
//!
//! Finds the minimal number of line insertions and deletions that turn one
//! sequence into another, keeping the furthest-reaching point of every
//! diagonal for every edit count so the path can be rebuilt afterwards.
//!
//! Time is O((n+m)·D). The retained trace holds O(D²) entries, which is not
//! linear space: two large, mostly different inputs get expensive.

use log::{debug, trace};

use crate::diff::DiffError;
use crate::line::Line;

/// Picks the diagonal that a point on diagonal `k` was reached from after
/// `d` edits. `reach` yields the furthest x per diagonal after `d - 1` edits.
///
/// Comes down from `k + 1` (an insertion) on the lower edge or when that
/// diagonal got strictly further; otherwise comes across from `k - 1`
/// (a deletion). Ties therefore favour deletions.
pub(crate) fn predecessor(
    k: isize,
    d: isize,
    reach: impl Fn(isize) -> Option<usize>,
) -> Option<isize> {
    if k == -d {
        return Some(k + 1);
    }
    if k == d {
        return Some(k - 1);
    }
    let across = reach(k - 1)?;
    let down = reach(k + 1)?;
    Some(if across < down { k + 1 } else { k - 1 })
}

/// Working frontier: furthest x per diagonal, in a fixed array offset so
/// that diagonal `-max_d` lands on slot 0.
struct Frontier {
    data: Vec<usize>,
    offset: isize,
}

impl Frontier {
    fn new(max_d: usize) -> Result<Self, DiffError> {
        let size = 2 * max_d + 1;
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| DiffError::AllocationFailure { requested: size })?;
        data.resize(size, 0);
        Ok(Self {
            data,
            offset: max_d as isize,
        })
    }

    fn slot(&self, k: isize) -> Option<usize> {
        let idx = usize::try_from(k.checked_add(self.offset)?).ok()?;
        (idx < self.data.len()).then_some(idx)
    }

    fn get(&self, k: isize) -> Option<usize> {
        self.slot(k).map(|idx| self.data[idx])
    }

    fn set(&mut self, k: isize, x: usize) -> Option<()> {
        let idx = self.slot(k)?;
        self.data[idx] = x;
        Some(())
    }
}

/// Furthest-reaching x per diagonal, for every edit count `0..=D`.
///
/// Row `d` lists diagonals `-d, -d + 2, ..., d`. The last row stops at the
/// diagonal that reached the end of both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    n: usize,
    m: usize,
    rows: Vec<Vec<usize>>,
}

impl Trace {
    #[cfg(test)]
    pub(crate) fn from_rows(n: usize, m: usize, rows: Vec<Vec<usize>>) -> Self {
        Self { n, m, rows }
    }

    /// Lengths of the old and new sequences this trace was computed for
    pub fn dimensions(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Minimal number of insertions plus deletions
    pub fn edit_distance(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Furthest x reached on diagonal `k` with `d` edits
    pub fn reach(&self, d: usize, k: isize) -> Option<usize> {
        let row = self.rows.get(d)?;
        let d = isize::try_from(d).ok()?;
        if k < -d || k > d || (k + d) % 2 != 0 {
            return None;
        }
        row.get(((k + d) / 2) as usize).copied()
    }
}

/// Edit-graph search for one pair of sequences
pub struct Solver<'a> {
    a: &'a [Line],
    b: &'a [Line],
}

impl<'a> Solver<'a> {
    pub fn new(a: &'a [Line], b: &'a [Line]) -> Self {
        Self { a, b }
    }

    pub fn solve(&self) -> Result<Trace, DiffError> {
        let (n, m) = (self.a.len(), self.b.len());
        let max_d = n + m;
        let mut v = Frontier::new(max_d)?;
        let mut rows: Vec<Vec<usize>> = Vec::new();

        for d in 0..=max_d {
            let d_i = d as isize;
            rows.try_reserve(1)
                .map_err(|_| DiffError::AllocationFailure { requested: d + 1 })?;
            let mut row = Vec::new();
            row.try_reserve_exact(d + 1)
                .map_err(|_| DiffError::AllocationFailure { requested: d + 1 })?;

            for k in (-d_i..=d_i).step_by(2) {
                let corrupt = || DiffError::CorruptTrace { d, k };
                let mut x = if d == 0 {
                    0
                } else {
                    let prev_k = predecessor(k, d_i, |k| v.get(k)).ok_or_else(corrupt)?;
                    let prev_x = v.get(prev_k).ok_or_else(corrupt)?;
                    if prev_k == k + 1 {
                        prev_x
                    } else {
                        prev_x + 1
                    }
                };
                let mut y = usize::try_from(x as isize - k).map_err(|_| corrupt())?;

                // Snake
                while x < n && y < m && self.a[x].same_content(&self.b[y]) {
                    x += 1;
                    y += 1;
                }

                v.set(k, x).ok_or_else(corrupt)?;
                row.push(x);

                if x >= n && y >= m {
                    rows.push(row);
                    debug!("edit distance {} for {}x{} lines", d, n, m);
                    return Ok(Trace { n, m, rows });
                }
            }

            trace!("d={}: {} diagonals explored", d, row.len());
            rows.push(row);
        }

        // Every pair is solvable within n + m edits
        Err(DiffError::CorruptTrace {
            d: max_d,
            k: n as isize - m as isize,
        })
    }
}
