// src/includes.rs

//! LVGL include path normalization
//!
//! SquareLine Studio writes `#include "lvgl/lvgl.h"`, which only resolves
//! when LVGL sits in a nested `lvgl/` directory. The ESP-IDF LVGL component
//! exposes `lvgl.h` directly, so every C source and header under the UI
//! directory gets the flattened form.
//!
//! The pass is idempotent and only touches files that actually change. A
//! file that cannot be read or written is reported and skipped; it never
//! stops the walk.

use crate::reporter::Reporter;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File name suffixes the rewrite pass looks at
pub const REWRITE_EXTENSIONS: &[&str] = &[".c", ".h"];

/// A literal text substitution applied to source files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncludeRewriteRule {
    pub from: &'static str,
    pub to: &'static str,
}

impl IncludeRewriteRule {
    /// Nested LVGL include to the flat one the ESP-IDF component provides
    pub const LVGL: Self = Self {
        from: "#include \"lvgl/lvgl.h\"",
        to: "#include \"lvgl.h\"",
    };

    /// Apply the rule, returning the new content only if something changed
    pub fn apply(&self, content: &str) -> Option<String> {
        if !content.contains(self.from) {
            return None;
        }
        let rewritten = content.replace(self.from, self.to);
        (rewritten != content).then_some(rewritten)
    }
}

/// Outcome of a rewrite pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteSummary {
    /// Candidate files visited
    pub scanned: usize,
    /// Files rewritten, relative to the walk root
    pub modified: Vec<PathBuf>,
    /// Files or directories that could not be processed, relative to the walk root
    pub failed: Vec<PathBuf>,
}

impl RewriteSummary {
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }
}

fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            REWRITE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .unwrap_or(false)
}

fn relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Rewrite one file in place; `Ok(true)` if it was written
fn rewrite_file(path: &Path, rule: &IncludeRewriteRule) -> std::io::Result<bool> {
    let content = fs::read_to_string(path)?;
    match rule.apply(&content) {
        Some(rewritten) => {
            fs::write(path, rewritten)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Apply `rule` to every `.c` and `.h` file under `root`
///
/// Files are visited in file-name order so reports are stable between runs.
pub fn rewrite_tree(
    root: &Path,
    rule: &IncludeRewriteRule,
    reporter: &dyn Reporter,
) -> RewriteSummary {
    reporter.info("Fixing LVGL includes...");
    let mut summary = RewriteSummary::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(|p| relative(p, root)).unwrap_or_default();
                reporter.warn(&format!("Could not process {}: {}", path.display(), e));
                summary.failed.push(path);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_candidate(entry.path()) {
            continue;
        }

        summary.scanned += 1;
        let rel_path = relative(entry.path(), root);

        match rewrite_file(entry.path(), rule) {
            Ok(true) => {
                reporter.info(&format!("Fixed LVGL includes in: {}", rel_path.display()));
                summary.modified.push(rel_path);
            }
            Ok(false) => {
                debug!("No change needed in {}", rel_path.display());
            }
            Err(e) => {
                reporter.warn(&format!("Could not process {}: {}", rel_path.display(), e));
                summary.failed.push(rel_path);
            }
        }
    }

    if summary.modified.is_empty() {
        reporter.info("No LVGL includes needed fixing");
    } else {
        reporter.info(&format!(
            "Fixed LVGL includes in {} file(s)",
            summary.modified_count()
        ));
    }

    summary
}
