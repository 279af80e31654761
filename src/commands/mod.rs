// src/commands/mod.rs
//! Command handlers for the squareline-idf CLI

mod completions;
mod convert;
mod detect;
mod fix_includes;

// Re-export all command handlers
pub use completions::cmd_completions;
pub use convert::cmd_convert;
pub use detect::cmd_detect;
pub use fix_includes::cmd_fix_includes;
