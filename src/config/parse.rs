//! Configuration file parsing and discovery

use crate::config::types::{Config, ConfigFile};
use crate::error::{ConfigError, ConfigResult};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of both the per-user and the per-project configuration file
pub const CONFIG_FILE_NAME: &str = ".new-component-config.json";

/// Locate the global configuration file in the user's home directory
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILE_NAME))
}

/// Locate the project configuration file in a working directory
pub fn project_config_path(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_FILE_NAME)
}

/// Parse one configuration file; a missing file contributes no overrides
pub fn parse_config_file(path: &Path) -> ConfigResult<ConfigFile> {
    if !path.is_file() {
        return Ok(ConfigFile::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents, path)
}

/// Parse configuration from a string
pub fn parse_config(json: &str, path: &Path) -> ConfigResult<ConfigFile> {
    serde_json::from_str(json).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Load the effective configuration for a working directory.
///
/// Per-key precedence, lowest to highest: built-in defaults, the global
/// file in the home directory, then the project file in `cwd`. Flags from
/// the command line are applied by the caller on top of this.
pub fn load_config(cwd: &Path) -> ConfigResult<Config> {
    load_config_from(global_config_path().as_deref(), cwd)
}

/// Load configuration from explicit file locations
pub fn load_config_from(global: Option<&Path>, cwd: &Path) -> ConfigResult<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global {
        config.apply(parse_config_file(global_path)?);
    }
    config.apply(parse_config_file(&project_config_path(cwd))?);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Language;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{ "lang": "ts", "dir": "lib/components" }"#;
        let file = parse_config(json, Path::new("test.json")).unwrap();
        assert_eq!(file.lang, Some(Language::Ts));
        assert_eq!(file.dir, Some(PathBuf::from("lib/components")));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_config("{ not json", Path::new("test.json"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_file_contributes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = parse_config_file(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(file.lang.is_none());
        assert!(file.dir.is_none());
        assert!(file.prettier_config.is_none());
    }

    #[test]
    fn test_load_config_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(None, temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_reads_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "lang": "ts" }"#,
        )
        .unwrap();

        let config = load_config_from(None, temp_dir.path()).unwrap();
        assert_eq!(config.lang, Language::Ts);
        assert_eq!(config.dir, Config::default().dir);
    }

    #[test]
    fn test_project_file_overrides_global() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let global_path = home.path().join(CONFIG_FILE_NAME);

        fs::write(&global_path, r#"{ "lang": "ts", "dir": "app/components" }"#).unwrap();
        fs::write(
            project.path().join(CONFIG_FILE_NAME),
            r#"{ "lang": "js" }"#,
        )
        .unwrap();

        let config = load_config_from(Some(&global_path), project.path()).unwrap();
        assert_eq!(config.lang, Language::Js);
        assert_eq!(config.dir, PathBuf::from("app/components"));
    }

    #[test]
    fn test_malformed_project_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "lang: ts").unwrap();

        let result = load_config_from(None, temp_dir.path());
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
