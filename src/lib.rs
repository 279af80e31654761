// src/lib.rs

//! squareline-idf
//!
//! Turns a SquareLine Studio UI export into an ESP-IDF component.
//!
//! # Architecture
//!
//! - `descriptor`: detect, parse, and emit `CMakeLists.txt` variants
//! - `includes`: normalize `lvgl/lvgl.h` includes across the UI sources
//! - `pipeline`: decide from filesystem state what a run has to do
//! - `reporter`: injected progress sink, so the core never prints directly

pub mod descriptor;
mod error;
pub mod includes;
pub mod pipeline;
pub mod reporter;

pub use descriptor::{DescriptorError, DescriptorKind, EmissionConfig, SourceList};
pub use error::{Error, Result};
pub use includes::{rewrite_tree, IncludeRewriteRule, RewriteSummary};
pub use pipeline::{ConversionOutcome, Converter, Freshness, Layout, RunSummary};
pub use reporter::{LogReporter, MemoryReporter, ReportEvent, Reporter, SilentReporter};
