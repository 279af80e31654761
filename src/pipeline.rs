// src/pipeline.rs

//! Conversion run orchestration
//!
//! A run works on one UI directory holding `CMakeLists.txt` and/or
//! `CMakeLists.txt.squareline`:
//!
//! 1. A `CMakeLists.txt` that still holds a SquareLine export (the exporter
//!    just overwrote our generated file) is renamed to the `.squareline`
//!    name first.
//! 2. Without a `.squareline` file there is nothing to convert; the run fails.
//! 3. A `CMakeLists.txt` strictly newer than the export is considered up to
//!    date and left alone.
//! 4. Otherwise the export is parsed and `CMakeLists.txt` regenerated.
//!
//! The include rewrite pass runs after steps 3 and 4 alike, since the
//! exporter rewrites source files independently of the descriptor.

use crate::descriptor::{
    is_export_file, parse_sources_file, write_component, EmissionConfig, EXPORT_FILE_NAME,
    TARGET_FILE_NAME,
};
use crate::error::{Error, Result};
use crate::includes::{rewrite_tree, IncludeRewriteRule, RewriteSummary};
use crate::reporter::Reporter;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Descriptor locations for one UI directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory holding the descriptors; also the include rewrite root
    pub root: PathBuf,
    /// `CMakeLists.txt.squareline`
    pub export: PathBuf,
    /// `CMakeLists.txt`
    pub target: PathBuf,
}

impl Layout {
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            export: root.join(EXPORT_FILE_NAME),
            target: root.join(TARGET_FILE_NAME),
            root,
        }
    }
}

/// Whether the generated descriptor can be reused
///
/// Decided purely on modification times: the target must be strictly newer
/// than the export. Equal times, or identical content with an older target,
/// still mean a reconversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
}

impl Freshness {
    pub fn compare(target_modified: Option<SystemTime>, export_modified: SystemTime) -> Self {
        match target_modified {
            Some(target) if target > export_modified => Self::UpToDate,
            _ => Self::Stale,
        }
    }

    /// Compare the files of `layout`; a missing target is stale
    pub fn of(layout: &Layout) -> Result<Self> {
        let export_modified = modified(&layout.export)?;
        let target_modified = if layout.target.exists() {
            Some(modified(&layout.target)?)
        } else {
            None
        };
        Ok(Self::compare(target_modified, export_modified))
    }
}

fn modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::io(path, e))
}

/// What happened to the descriptor during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// `CMakeLists.txt` was regenerated from this many sources
    Converted { sources: usize },
    /// `CMakeLists.txt` was newer than the export and kept
    UpToDate,
}

/// Result of a full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// An export-format `CMakeLists.txt` was renamed to `.squareline`
    pub recovered_backup: bool,
    pub outcome: ConversionOutcome,
    pub includes: RewriteSummary,
}

/// Drives a conversion run for one directory
pub struct Converter<'a> {
    layout: Layout,
    config: EmissionConfig,
    rule: IncludeRewriteRule,
    reporter: &'a dyn Reporter,
}

impl<'a> Converter<'a> {
    pub fn new(layout: Layout, reporter: &'a dyn Reporter) -> Self {
        Self {
            layout,
            config: EmissionConfig::default(),
            rule: IncludeRewriteRule::LVGL,
            reporter,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run the whole pipeline
    pub fn run(&self) -> Result<RunSummary> {
        let recovered_backup = self.recover_backup()?;

        if !self.layout.export.exists() {
            return Err(Error::MissingInput {
                export: self.layout.export.clone(),
                target: self.layout.target.clone(),
            });
        }

        let outcome = match Freshness::of(&self.layout)? {
            Freshness::UpToDate => {
                self.reporter
                    .info("CMakeLists.txt is already up to date, skipping conversion");
                ConversionOutcome::UpToDate
            }
            Freshness::Stale => self.convert()?,
        };

        let includes = self.fix_includes();

        if let ConversionOutcome::Converted { .. } = outcome {
            self.reporter.info("Conversion completed successfully");
        }

        Ok(RunSummary {
            recovered_backup,
            outcome,
            includes,
        })
    }

    /// Rename an export-format `CMakeLists.txt` to the `.squareline` name
    ///
    /// Only happens when no `.squareline` file exists yet. Returns whether a
    /// rename took place.
    pub fn recover_backup(&self) -> Result<bool> {
        let Layout { export, target, .. } = &self.layout;

        if !target.exists() || export.exists() || !is_export_file(target) {
            return Ok(false);
        }

        self.reporter
            .info("Detected SquareLine CMakeLists.txt, creating automatic backup...");
        fs::rename(target, export).map_err(|e| Error::io(target, e))?;
        Ok(true)
    }

    /// Parse the export and regenerate the component descriptor
    pub fn convert(&self) -> Result<ConversionOutcome> {
        self.reporter
            .info(&format!("Reading {}", display_name(&self.layout.export)));
        let sources = parse_sources_file(&self.layout.export)?;
        self.reporter
            .info(&format!("Found {} source files", sources.len()));

        self.reporter.info(&format!(
            "Generating {} for ESP-IDF",
            display_name(&self.layout.target)
        ));
        write_component(&self.layout.target, &sources, &self.config)?;

        Ok(ConversionOutcome::Converted {
            sources: sources.len(),
        })
    }

    /// Run the include rewrite pass over the directory
    pub fn fix_includes(&self) -> RewriteSummary {
        rewrite_tree(&self.layout.root, &self.rule, self.reporter)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
