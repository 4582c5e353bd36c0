//! new-component - a component scaffolding CLI
//!
//! new-component creates a component directory for a React project: a source
//! file rendered from a built-in template, a CSS module stylesheet, and an
//! index re-export, all named after the component.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{NewComponentError, Result};

/// Current version of new-component
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
