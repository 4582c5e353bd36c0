//! Error types for new-component

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for new-component operations
pub type Result<T> = std::result::Result<T, NewComponentError>;

/// Main error type for new-component
#[derive(Error, Debug)]
pub enum NewComponentError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scaffolding refusals
    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),

    /// Formatter errors
    #[error("Formatting error: {0}")]
    Format(#[from] FormatError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl NewComponentError {
    /// Whether this error is a refusal rather than a failure.
    ///
    /// A refusal means the tool declined to act and nothing was written;
    /// the message is printed and the process exits 0.
    pub fn is_refusal(&self) -> bool {
        matches!(self, NewComponentError::Scaffold(_))
    }
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },

    #[error("Invalid config file '{path}': {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Scaffolding refusals: the component cannot or must not be created
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Sorry, you need to specify a name for your component like this: new-component <name>")]
    MissingName,

    #[error("'{0}' is not a valid component name; use a JavaScript identifier like 'Button' or 'NavLink'")]
    InvalidName(String),

    #[error("Looks like this component already exists! There's already a component at {0}.\nPlease delete this directory and try again.")]
    AlreadyExists(PathBuf),
}

/// Formatter invocation errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to run '{command}': {error}")]
    Launch { command: String, error: String },

    #[error("'{command}' exited with code {code:?}: {stderr}")]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for scaffolding operations
pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;

/// Specialized result type for formatter operations
pub type FormatResult<T> = std::result::Result<T, FormatError>;
