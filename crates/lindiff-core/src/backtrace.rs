//! Rebuilds the edit script from a solver trace
//!
//! Walks from `(n, m)` back to `(0, 0)` one edit at a time, using row
//! `d - 1` of the trace to find where the path on round `d` came from.

use crate::diff::DiffError;
use crate::line::Line;
use crate::op::{DiffOp, EditScript};
use crate::solver::{predecessor, Trace};

fn corrupt(d: usize, x: usize, y: usize) -> DiffError {
    DiffError::CorruptTrace {
        d,
        k: x as isize - y as isize,
    }
}

/// Produce the forward edit script for `a` -> `b` from their trace.
///
/// Fails with [`DiffError::CorruptTrace`] instead of guessing when the trace
/// does not describe a path through the edit graph of these two sequences.
pub fn backtrace(trace: &Trace, a: &[Line], b: &[Line]) -> Result<EditScript, DiffError> {
    let (n, m) = (a.len(), b.len());
    if trace.dimensions() != (n, m) || trace.rows() == 0 {
        return Err(corrupt(0, n, m));
    }

    let max_d = trace.edit_distance();
    if trace.reach(max_d, n as isize - m as isize) != Some(n) {
        return Err(corrupt(max_d, n, m));
    }

    let mut ops = Vec::new();
    ops.try_reserve_exact(n + m)
        .map_err(|_| DiffError::AllocationFailure { requested: n + m })?;

    let (mut x, mut y) = (n, m);
    for d in (1..=max_d).rev() {
        let k = x as isize - y as isize;
        let prev_k = predecessor(k, d as isize, |k| trace.reach(d - 1, k))
            .ok_or_else(|| corrupt(d, x, y))?;
        let prev_x = trace
            .reach(d - 1, prev_k)
            .ok_or_else(|| corrupt(d, x, y))?;
        let prev_y = usize::try_from(prev_x as isize - prev_k).map_err(|_| corrupt(d, x, y))?;
        if prev_x > n || prev_y > m {
            return Err(corrupt(d, x, y));
        }

        // Point right after the single edit of this round
        let inserted = prev_k == k + 1;
        let (mid_x, mid_y) = if inserted {
            (prev_x, prev_y + 1)
        } else {
            (prev_x + 1, prev_y)
        };
        if mid_x > x || mid_y > y {
            return Err(corrupt(d, x, y));
        }

        snake_back(&mut ops, a, b, (x, y), mid_x, d)?;
        if inserted {
            ops.push(DiffOp::insert(mid_y, b[mid_y - 1].text.clone()));
        } else {
            ops.push(DiffOp::delete(mid_x, a[mid_x - 1].text.clone()));
        }

        x = prev_x;
        y = prev_y;
    }

    if x != y {
        return Err(corrupt(0, x, y));
    }
    snake_back(&mut ops, a, b, (x, y), 0, 0)?;

    ops.reverse();
    Ok(EditScript::from_ops(ops))
}

/// Emit equal ops walking the diagonal from `from` back to column `to_x`,
/// last line first.
fn snake_back(
    ops: &mut Vec<DiffOp>,
    a: &[Line],
    b: &[Line],
    from: (usize, usize),
    to_x: usize,
    d: usize,
) -> Result<(), DiffError> {
    let (mut x, mut y) = from;
    while x > to_x {
        if y == 0 || !a[x - 1].same_content(&b[y - 1]) {
            return Err(corrupt(d, x, y));
        }
        ops.push(DiffOp::equal(x, y, a[x - 1].text.clone()));
        x -= 1;
        y -= 1;
    }
    Ok(())
}
