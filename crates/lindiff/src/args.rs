//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per change, with line numbers
    Simple,
    /// Unified diff (like `diff -u`)
    Unified,
    /// Edit script, statistics and change ranges as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "lindiff",
    version,
    about = "Compare two text files line by line",
    long_about = "Finds the minimal set of inserted and deleted lines between two text files \
    using Myers' algorithm. Exits with 0 when the files match, 1 when they differ and 2 on error."
)]
pub struct Args {
    /// Original file
    pub file_a: PathBuf,

    /// Changed file
    pub file_b: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Simple)]
    pub format: Format,

    /// Context lines around changes in unified output
    #[arg(short, long)]
    pub context: Option<usize>,

    /// List equal lines too (simple format)
    #[arg(long)]
    pub show_equal: bool,

    /// Ignore leading and trailing whitespace
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,

    /// Compare lines case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Print statistics after the diff
    #[arg(long)]
    pub stats: bool,

    /// Print only statistics
    #[arg(long)]
    pub stats_only: bool,

    /// Print the line ranges of each change
    #[arg(long)]
    pub ranges: bool,

    /// Config file (default: <config dir>/lindiff/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lindiff", "a.txt", "b.txt"]);
        assert_eq!(args.format, Format::Simple);
        assert_eq!(args.context, None);
        assert!(!args.ignore_case);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["lindiff", "-f", "unified", "-c", "5", "-w", "-i", "a", "b"]);
        assert_eq!(args.format, Format::Unified);
        assert_eq!(args.context, Some(5));
        assert!(args.ignore_whitespace);
        assert!(args.ignore_case);
    }
}
