//! Whitespace-delimited dataset reader.
//!
//! One instance per line: the first numeric token is the class label, the
//! remaining tokens are feature values. Scientific notation is accepted
//! (datasets in the wild commonly use `1.0000000e+00` style columns), blank
//! lines are skipped, and every row must carry the same number of tokens.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_handling::{Dataset, Instance};

/// Parse dataset text into instances.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut instances = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut values = Vec::new();
        for token in line.split_whitespace() {
            let value: f64 = token.parse().with_context(|| {
                format!(
                    "Invalid numeric token '{}' on line {}",
                    token,
                    line_index + 1
                )
            })?;
            values.push(value);
        }
        instances.push(Instance::new(values));
    }
    Dataset::from_instances(instances).context("Dataset rows have inconsistent widths")
}

/// Read and parse a dataset file.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("Failed to parse dataset file: {}", path.display()))
}
