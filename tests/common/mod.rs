// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A SquareLine export as the exporter writes it
pub const EXPORT_CMAKE: &str = "\
SET(SOURCES screens/ui_Screen1.c
    ui.c
    ui_helpers.c
    # generated events
    ui_events.c)

add_library(ui ${SOURCES})
";

/// Create an empty UI directory.
///
/// Keep the TempDir alive to prevent cleanup.
pub fn setup_ui_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write `content` to `rel` under `root`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Pin a file's modification time to `secs` after the epoch
pub fn set_mtime(path: &Path, secs: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
}

pub fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
}

/// Build an export descriptor listing `sources` one per line
pub fn export_with_sources(sources: &[&str]) -> String {
    format!(
        "SET(SOURCES\n    {}\n)\n\nadd_library(ui ${{SOURCES}})\n",
        sources.join("\n    ")
    )
}
