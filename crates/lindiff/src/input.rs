//! Reading files into lines

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file as lines, decoding lossily as UTF-8 and dropping terminators
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
