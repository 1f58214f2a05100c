//! Unified diff rendering

use std::fmt;

use crate::hunk::Hunk;
use crate::op::EditScript;

/// Unified diff of an edit script, rendered through `Display`.
///
/// A script without changes renders as nothing, headers included.
#[derive(Debug, Clone)]
pub struct UnifiedDiff<'a> {
    name_a: String,
    name_b: String,
    hunks: Vec<Hunk<'a>>,
}

impl<'a> UnifiedDiff<'a> {
    pub fn new(script: &'a EditScript, context: usize) -> Self {
        Self {
            name_a: "a".to_string(),
            name_b: "b".to_string(),
            hunks: script.hunks(context),
        }
    }

    /// Names printed on the `---` and `+++` lines
    pub fn with_names(mut self, name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        self.name_a = name_a.into();
        self.name_b = name_b.into();
        self
    }

    pub fn hunks(&self) -> &[Hunk<'a>] {
        &self.hunks
    }
}

impl fmt::Display for UnifiedDiff<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hunks.is_empty() {
            return Ok(());
        }
        writeln!(f, "--- {}", self.name_a)?;
        writeln!(f, "+++ {}", self.name_b)?;
        for hunk in &self.hunks {
            writeln!(f, "{}", hunk.header())?;
            for op in hunk.ops {
                writeln!(f, "{}{}", op.kind().prefix(), op.text())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use crate::line::Sequence;
    use pretty_assertions::assert_eq;

    fn script(a: &[&str], b: &[&str]) -> EditScript {
        diff(
            &Sequence::new(a.iter().copied()),
            &Sequence::new(b.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_single_hunk() {
        let s = script(&["a", "b", "c"], &["a", "x", "c"]);
        let out = UnifiedDiff::new(&s, 3)
            .with_names("old.txt", "new.txt")
            .to_string();
        assert_eq!(
            out,
            "--- old.txt\n+++ new.txt\n@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n"
        );
    }

    #[test]
    fn test_identical_renders_nothing() {
        let s = script(&["a"], &["a"]);
        assert_eq!(UnifiedDiff::new(&s, 3).to_string(), "");
    }

    #[test]
    fn test_two_hunks_zero_context() {
        let s = script(&["a", "b", "c", "d"], &["x", "b", "c", "y"]);
        let out = UnifiedDiff::new(&s, 0).to_string();
        assert_eq!(
            out,
            "--- a\n+++ b\n@@ -1,1 +1,1 @@\n-a\n+x\n@@ -4,1 +4,1 @@\n-d\n+y\n"
        );
    }

    #[test]
    fn test_insert_into_empty_file() {
        let s = script(&[], &["only"]);
        assert_eq!(
            UnifiedDiff::new(&s, 3).to_string(),
            "--- a\n+++ b\n@@ -0,0 +1,1 @@\n+only\n"
        );
    }
}
