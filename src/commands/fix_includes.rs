// src/commands/fix_includes.rs

//! Include rewrite pass on its own

use anyhow::{Context, Result};
use squareline_idf::{rewrite_tree, IncludeRewriteRule, Reporter};
use std::path::Path;

/// Rewrite `lvgl/lvgl.h` includes under `dir` without touching descriptors
pub fn cmd_fix_includes(dir: &Path, json: bool, reporter: &dyn Reporter) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let summary = rewrite_tree(dir, &IncludeRewriteRule::LVGL, reporter);

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize rewrite summary")?;
        println!("{}", out);
    }

    Ok(())
}
