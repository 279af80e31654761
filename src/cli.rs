// src/cli.rs
//! CLI definitions for squareline-idf
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Running without a subcommand performs a full conversion in the current
//! directory, which is what the ESP-IDF build hook calls.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squareline-idf")]
#[command(author = "squareline-idf Contributors")]
#[command(version)]
#[command(about = "Convert a SquareLine Studio UI export into an ESP-IDF component", long_about = None)]
pub struct Cli {
    /// UI directory holding CMakeLists.txt / CMakeLists.txt.squareline
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Print a JSON run summary on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the export and fix LVGL includes (the default)
    Convert,

    /// Report whether a descriptor is a SquareLine export or not
    Detect {
        /// Descriptor file to inspect
        file: PathBuf,
    },

    /// Only rewrite `lvgl/lvgl.h` includes in .c/.h files
    FixIncludes,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
