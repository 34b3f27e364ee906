//! A library for generating Swift test doubles from function signatures
//!
//! This crate parses one-line Swift function signatures and generates, for
//! each, a set of tracking properties (an invocation counter, one property
//! per parameter, one property for the return value) plus a mock
//! reimplementation that updates those properties and returns a stand-in
//! value.

pub mod analyzer;
pub mod errors;
pub mod generator;
pub mod models;
pub mod parser;
pub mod utils;

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::errors::MockerResult;
use crate::models::MockModel;

/// Parse one raw signature line and derive its tracking properties,
/// without rendering text.
pub fn analyze(raw_line: &str) -> MockerResult<MockModel> {
    let signature = parser::parse(raw_line)?;
    let properties = analyzer::derive(&signature);
    Ok(MockModel {
        signature,
        properties,
    })
}

/// Transform one raw signature line into its full mock text.
pub fn transform(raw_line: &str) -> MockerResult<String> {
    Ok(generator::render(&analyze(raw_line)?))
}

/// Transform a sequence of signature lines and join the outputs with a
/// blank-line separator, preserving input order.
///
/// A line that fails to parse is skipped with a warning; one bad line
/// never aborts the rest of the batch. Callers that want a different
/// failure policy should use [`transform`] per line.
pub fn transform_all<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mocks: Vec<String> = lines
        .into_iter()
        .filter_map(|line| match transform(line) {
            Ok(mock) => Some(mock),
            Err(e) => {
                warn!("Skipping signature line: {}", e);
                None
            }
        })
        .collect();
    mocks.join("\n\n")
}

/// Main entry point for generating mocks from a file of signature lines
///
/// Reads the input file, transforms every non-blank line independently,
/// and returns the joined output. When an output path is provided the
/// result is also saved there.
pub fn generate_mocks(input_path: &Path, output_path: Option<&Path>) -> Result<String> {
    let content = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path.display()))?;

    let result = transform_all(content.lines().filter(|line| !line.trim().is_empty()));

    if let Some(path) = output_path {
        generator::save_mocks(&result, path)?;
    }

    Ok(result)
}

/// Version of the mock generator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
