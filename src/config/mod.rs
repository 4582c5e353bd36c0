//! Configuration loading and merging
//!
//! This module handles discovery and parsing of .new-component-config.json
//! files and layering them over built-in defaults.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
