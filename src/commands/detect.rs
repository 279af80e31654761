// src/commands/detect.rs

//! Descriptor format detection command

use anyhow::Result;
use squareline_idf::descriptor::is_export_file;
use squareline_idf::DescriptorKind;
use std::path::Path;

/// Print `export` or `target` for the descriptor at `file`
///
/// An unreadable file counts as `target`, matching what a conversion run
/// would conclude.
pub fn cmd_detect(file: &Path, json: bool) -> Result<()> {
    let kind = if is_export_file(file) {
        DescriptorKind::Export
    } else {
        DescriptorKind::Target
    };

    if json {
        let out = serde_json::json!({
            "file": file.display().to_string(),
            "kind": kind.as_str(),
        });
        println!("{}", out);
    } else {
        println!("{}", kind);
    }

    Ok(())
}
