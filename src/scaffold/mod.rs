//! Component scaffolding engine
//!
//! This module handles creating a component on disk: path planning,
//! template rendering, formatting, and file writes.

pub mod component;
pub mod prettier;
pub mod template;

// Re-export main types
pub use component::*;
pub use prettier::*;
pub use template::*;
