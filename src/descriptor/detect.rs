// src/descriptor/detect.rs

//! Export format detection

use std::fs;
use std::path::Path;
use tracing::debug;

/// Opening token of the exporter's source list
pub const SOURCES_MARKER: &str = "SET(SOURCES";

/// The exporter always declares the UI as a library named `ui`
pub const LIBRARY_MARKER: &str = "add_library(ui";

/// Check whether descriptor text is a SquareLine export
///
/// Both markers are required and matched case-sensitively.
pub fn is_export_format(content: &str) -> bool {
    content.contains(SOURCES_MARKER) && content.contains(LIBRARY_MARKER)
}

/// Check whether the file at `path` holds a SquareLine export
///
/// Unreadable files are reported as not being an export.
pub fn is_export_file(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => is_export_format(&content),
        Err(e) => {
            debug!("Treating unreadable {} as non-export: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_both_markers_required() {
        assert!(is_export_format("SET(SOURCES a.c)\nadd_library(ui ${SOURCES})"));
        assert!(!is_export_format("SET(SOURCES a.c)\n"));
        assert!(!is_export_format("add_library(ui ${SOURCES})\n"));
        assert!(!is_export_format(""));
    }

    #[test]
    fn test_markers_case_sensitive() {
        assert!(!is_export_format("set(SOURCES a.c)\nadd_library(ui ${SOURCES})"));
        assert!(!is_export_format("SET(SOURCES a.c)\nADD_LIBRARY(ui ${SOURCES})"));
    }

    #[test]
    fn test_other_library_name_is_not_export() {
        assert!(!is_export_format("SET(SOURCES a.c)\nadd_library(app ${SOURCES})"));
    }

    #[test]
    fn test_missing_file_fails_closed() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_export_file(&temp_dir.path().join("CMakeLists.txt")));
    }

    #[test]
    fn test_directory_fails_closed() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_export_file(temp_dir.path()));
    }

    #[test]
    fn test_export_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CMakeLists.txt");
        fs::write(&path, "SET(SOURCES ui.c)\nadd_library(ui ${SOURCES})\n").unwrap();
        assert!(is_export_file(&path));
    }
}
