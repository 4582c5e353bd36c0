//! Core configuration types
//!
//! This module defines the settings that drive a scaffolding run and the
//! on-disk shape of a .new-component-config.json file.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Language a component is generated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript: `<Name>.js` plus `index.js`
    Js,
    /// TypeScript: `<Name>.tsx` plus `index.ts`
    Ts,
}

impl Language {
    /// File extension of the generated component source
    pub fn component_extension(self) -> &'static str {
        match self {
            Language::Js => "js",
            Language::Ts => "tsx",
        }
    }

    /// File extension of the generated index re-export
    pub fn index_extension(self) -> &'static str {
        match self {
            Language::Js => "js",
            Language::Ts => "ts",
        }
    }

    /// Human-readable name for terminal output
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Js => "JavaScript",
            Language::Ts => "TypeScript",
        }
    }
}

/// Effective settings for a scaffolding run, after merging defaults,
/// config files, and command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Language to generate the component in
    pub lang: Language,

    /// Directory that holds components, relative to the working directory
    pub dir: PathBuf,

    /// Prettier configuration file to forward to the formatter
    pub prettier_config: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lang: Language::Js,
            dir: PathBuf::from("src/components"),
            prettier_config: None,
        }
    }
}

impl Config {
    /// Layer one config file's values over these settings; keys the file
    /// does not set are left unchanged
    pub fn apply(&mut self, overrides: ConfigFile) {
        if let Some(lang) = overrides.lang {
            self.lang = lang;
        }
        if let Some(dir) = overrides.dir {
            self.dir = dir;
        }
        if let Some(prettier_config) = overrides.prettier_config {
            self.prettier_config = Some(prettier_config);
        }
    }
}

/// One .new-component-config.json file
///
/// Every key is optional; unknown keys are ignored so older binaries keep
/// working against newer config files.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Language to generate components in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,

    /// Directory that holds components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Prettier configuration file to forward to the formatter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prettier_config: Option<PathBuf>,
}
