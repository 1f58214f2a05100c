//! lindiff core - line-based Myers diff engine
//!
//! This library computes minimal line edit scripts between two sequences of
//! text lines and derives hunks, unified diff output and statistics from
//! them. It performs no I/O.

pub mod backtrace;
pub mod diff;
pub mod hunk;
pub mod line;
pub mod op;
pub mod options;
pub mod solver;
pub mod stats;
pub mod unified;

pub use backtrace::backtrace;
pub use diff::{diff, DiffEngine, DiffError, DiffResult};
pub use hunk::{ChangeRange, Hunk};
pub use line::{Line, Normalization, Sequence};
pub use op::{DiffOp, EditScript, OpKind};
pub use options::DiffOptions;
pub use solver::{Solver, Trace};
pub use stats::Statistics;
pub use unified::UnifiedDiff;
