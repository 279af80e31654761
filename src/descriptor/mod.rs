// src/descriptor/mod.rs

//! Build descriptors: SquareLine export format and ESP-IDF component format
//!
//! SquareLine Studio exports a plain CMake library:
//!
//! ```cmake
//! SET(SOURCES screens/ui_Screen1.c
//!     ui.c
//!     ui_helpers.c)
//!
//! add_library(ui ${SOURCES})
//! ```
//!
//! ESP-IDF wants a component registration instead. This module detects which
//! of the two a file holds, pulls the source list out of the export format,
//! and renders the component format.
//!
//! Both variants share the file name `CMakeLists.txt` at some point in their
//! life, so the kind is always derived from content, never from the name.

mod detect;
mod emitter;
mod parser;

pub use detect::{is_export_file, is_export_format, LIBRARY_MARKER, SOURCES_MARKER};
pub use emitter::{render, write_component, EmissionConfig};
pub use parser::{parse_sources, parse_sources_file};

use std::path::PathBuf;
use thiserror::Error;

/// File name of the backed-up SquareLine export
pub const EXPORT_FILE_NAME: &str = "CMakeLists.txt.squareline";

/// File name of the generated ESP-IDF component descriptor
pub const TARGET_FILE_NAME: &str = "CMakeLists.txt";

/// Errors produced while reading, parsing, or writing a descriptor
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Could not find SET(SOURCES ...) in {}", .path.display())]
    Malformed { path: PathBuf },

    #[error("Failed to access descriptor {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which convention a descriptor's text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// SquareLine Studio export (`SET(SOURCES ...)` + `add_library(ui ...)`)
    Export,
    /// Anything else; in practice the generated ESP-IDF component file
    Target,
}

impl DescriptorKind {
    /// Classify descriptor text
    pub fn classify(content: &str) -> Self {
        if is_export_format(content) {
            Self::Export
        } else {
            Self::Target
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Target => "target",
        }
    }
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of source paths as written in the export descriptor
///
/// Entries keep whatever quoting the exporter used. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    entries: Vec<String>,
}

impl SourceList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl From<Vec<String>> for SourceList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
