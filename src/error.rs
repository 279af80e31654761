// src/error.rs

//! Crate-level error type
//!
//! Everything that can abort a run ends up here. Per-file failures in the
//! include rewrite pass never do; they are reported and skipped.

use crate::descriptor::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Could not find {} or {}; make sure SquareLine Studio has exported CMakeLists.txt to this directory",
        .target.display(),
        .export.display()
    )]
    MissingInput { export: PathBuf, target: PathBuf },

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for conversion runs
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
