//! Mock text generation.
//!
//! Assembles the final output for one signature: a declaration block (one
//! line per tracking property) and an implementation block (the original
//! signature re-stated with a body that updates the tracking properties),
//! separated by a blank line.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};

use crate::models::{MockModel, Property, PropertySet, Signature};

/// Render the full mock text for one analyzed signature.
pub fn render(model: &MockModel) -> String {
    format!(
        "{}\n\n{}",
        render_declaration(&model.properties),
        render_implementation(&model.signature, &model.properties)
    )
}

/// One declaration line per tracking property: the counter first, then
/// the parameters in order, then the return value.
fn render_declaration(properties: &PropertySet) -> String {
    let mut lines = vec![properties.invoked_count.declaration()];
    lines.extend(properties.parameters.iter().map(|p| p.declaration()));
    if let Some(ret) = &properties.return_property {
        lines.push(ret.declaration());
    }
    lines.join("\n")
}

/// The original, unparsed signature followed by a body that increments
/// the counter, captures each parameter, and returns the stand-in value.
fn render_implementation(signature: &Signature, properties: &PropertySet) -> String {
    let mut result = format!("{} {{", signature.original_text);
    result.push_str("\n\t");
    result.push_str(&properties.invoked_count.implementation());
    for parameter in &properties.parameters {
        result.push_str("\n\t");
        result.push_str(&parameter.implementation());
    }
    if let Some(ret) = &properties.return_property {
        result.push_str("\n\t");
        result.push_str(&ret.implementation());
    }
    result.push_str("\n}");
    result
}

/// Save generated mock text to a file, creating parent directories as
/// needed.
pub fn save_mocks(content: &str, path: &Path) -> Result<()> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if let Some(parent) = absolute_path.parent() {
        if !parent.exists() {
            info!("Creating directory: {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut file = File::create(&absolute_path).map_err(|e| {
        error!(
            "Failed to create file: {} - Error: {}",
            absolute_path.display(),
            e
        );
        anyhow::anyhow!(
            "Failed to create file: {} - Error: {}",
            absolute_path.display(),
            e
        )
    })?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", absolute_path.display()))?;

    info!(
        "Saved {} bytes of generated mocks to: {}",
        content.len(),
        absolute_path.display()
    );

    Ok(())
}
