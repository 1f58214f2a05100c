//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::line::Normalization;

/// Lines per side above which a warning about quadratic cost is logged
pub const DEFAULT_LARGE_INPUT_THRESHOLD: usize = 50_000;

/// Options for [`DiffEngine`](crate::DiffEngine), loadable from a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Equal lines shown around each change in hunks
    pub context: usize,
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub large_input_threshold: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context: 3,
            ignore_whitespace: false,
            ignore_case: false,
            large_input_threshold: DEFAULT_LARGE_INPUT_THRESHOLD,
        }
    }
}

impl DiffOptions {
    pub fn normalization(&self) -> Normalization {
        Normalization {
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let opts: DiffOptions = serde_json::from_str(r#"{ "ignore_case": true }"#).unwrap();
        assert_eq!(
            opts,
            DiffOptions {
                ignore_case: true,
                ..DiffOptions::default()
            }
        );
        assert!(opts.normalization().ignore_case);
        assert!(!opts.normalization().ignore_whitespace);
    }
}
