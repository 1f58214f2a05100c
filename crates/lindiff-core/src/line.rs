//! Lines and the sequences the diff engine compares

use serde::{Deserialize, Serialize};

/// How line content is folded before comparison.
///
/// Normalization only changes which lines compare equal; positions and the
/// text carried into the edit script stay as read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalization {
    /// Ignore leading and trailing whitespace
    pub ignore_whitespace: bool,
    /// Compare lines case-insensitively
    pub ignore_case: bool,
}

impl Normalization {
    pub fn is_identity(&self) -> bool {
        !self.ignore_whitespace && !self.ignore_case
    }

    fn key(&self, text: &str) -> String {
        let text = if self.ignore_whitespace {
            text.trim()
        } else {
            text
        };
        if self.ignore_case {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}

/// A line of text and its 1-based position in its sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub number: usize,
    pub text: String,
    /// Comparison key, set when the owning sequence was normalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            key: None,
        }
    }

    /// The value this line is compared by
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.text)
    }

    /// Value equality, ignoring positions
    pub fn same_content(&self, other: &Line) -> bool {
        self.key() == other.key()
    }
}

/// An ordered, read-only list of lines numbered from 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    lines: Vec<Line>,
}

impl Sequence {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| Line::new(i + 1, text))
            .collect();
        Self { lines }
    }

    /// Split text on `\n` / `\r\n`, dropping the terminators
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Attach comparison keys computed with `normalization`
    pub fn normalized(mut self, normalization: Normalization) -> Self {
        if normalization.is_identity() {
            return self;
        }
        for line in &mut self.lines {
            line.key = Some(normalization.key(&line.text));
        }
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by its 1-based number
    pub fn get(&self, number: usize) -> Option<&Line> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Sequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
