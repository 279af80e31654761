// src/commands/convert.rs

//! Full conversion run

use anyhow::{Context, Result};
use squareline_idf::{Converter, Layout, Reporter};
use std::path::Path;

/// Convert the SquareLine export in `dir` and fix LVGL includes
///
/// # Arguments
/// * `dir` - UI directory holding the descriptors
/// * `json` - Print the run summary as JSON on stdout
/// * `reporter` - Progress sink
pub fn cmd_convert(dir: &Path, json: bool, reporter: &dyn Reporter) -> Result<()> {
    let converter = Converter::new(Layout::in_dir(dir), reporter);

    let summary = converter
        .run()
        .with_context(|| format!("Conversion failed in {}", dir.display()))?;

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize run summary")?;
        println!("{}", out);
    }

    Ok(())
}
