//! Diff computation engine

use log::{debug, warn};
use thiserror::Error;

use crate::backtrace::backtrace;
use crate::hunk::{ChangeRange, Hunk};
use crate::line::Sequence;
use crate::op::EditScript;
use crate::options::DiffOptions;
use crate::solver::Solver;
use crate::stats::Statistics;
use crate::unified::UnifiedDiff;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("Corrupt trace at d={d} on diagonal {k}")]
    CorruptTrace { d: usize, k: isize },
    #[error("Failed to allocate {requested} entries for the diff")]
    AllocationFailure { requested: usize },
}

/// Compute the minimal edit script turning `a` into `b`
pub fn diff(a: &Sequence, b: &Sequence) -> Result<EditScript, DiffError> {
    let trace = Solver::new(a.lines(), b.lines()).solve()?;
    let script = backtrace(&trace, a.lines(), b.lines())?;
    debug_assert_eq!(script.edit_distance(), trace.edit_distance());
    Ok(script)
}

/// Result of a diff operation
#[derive(Debug, Clone)]
pub struct DiffResult {
    script: EditScript,
    stats: Statistics,
    context: usize,
}

impl DiffResult {
    /// All ops in order
    pub fn script(&self) -> &EditScript {
        &self.script
    }

    /// Counts over the script
    pub fn stats(&self) -> Statistics {
        self.stats
    }

    /// Hunks using the engine's context
    pub fn hunks(&self) -> Vec<Hunk<'_>> {
        self.script.hunks(self.context)
    }

    pub fn hunks_with_context(&self, context: usize) -> Vec<Hunk<'_>> {
        self.script.hunks(context)
    }

    pub fn change_ranges(&self) -> Vec<ChangeRange> {
        self.script.change_ranges()
    }

    pub fn unified(
        &self,
        name_a: impl Into<String>,
        name_b: impl Into<String>,
    ) -> UnifiedDiff<'_> {
        UnifiedDiff::new(&self.script, self.context).with_names(name_a, name_b)
    }

    pub fn is_identical(&self) -> bool {
        self.stats.total_changes() == 0
    }
}

/// The main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn with_context(mut self, lines: usize) -> Self {
        self.options.context = lines;
        self
    }

    pub fn with_ignore_whitespace(mut self, enabled: bool) -> Self {
        self.options.ignore_whitespace = enabled;
        self
    }

    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.options.ignore_case = enabled;
        self
    }

    pub fn with_large_input_threshold(mut self, lines: usize) -> Self {
        self.options.large_input_threshold = lines;
        self
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compute diff between two sequences
    pub fn diff_sequences(&self, old: Sequence, new: Sequence) -> Result<DiffResult, DiffError> {
        let threshold = self.options.large_input_threshold;
        if old.len() > threshold || new.len() > threshold {
            warn!(
                "Large inputs ({} / {} lines): diff cost grows quadratically with the differences",
                old.len(),
                new.len()
            );
        }

        let normalization = self.options.normalization();
        let old = old.normalized(normalization);
        let new = new.normalized(normalization);

        let script = diff(&old, &new)?;
        let stats = script.stats();
        debug!(
            "{} equal, {} inserted, {} deleted",
            stats.equal(),
            stats.inserted(),
            stats.deleted()
        );

        Ok(DiffResult {
            script,
            stats,
            context: self.options.context,
        })
    }

    /// Compute diff between two lists of lines
    pub fn diff_lines<S: AsRef<str>>(&self, old: &[S], new: &[S]) -> Result<DiffResult, DiffError> {
        self.diff_sequences(
            Sequence::new(old.iter().map(AsRef::as_ref)),
            Sequence::new(new.iter().map(AsRef::as_ref)),
        )
    }

    /// Compute diff between two strings, split into lines
    pub fn diff_strings(&self, old: &str, new: &str) -> Result<DiffResult, DiffError> {
        self.diff_sequences(Sequence::from_text(old), Sequence::from_text(new))
    }
}
