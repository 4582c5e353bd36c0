//! Main CLI application

use crate::config::{load_config, Config, Language};
use crate::error::{Result, ScaffoldError};
use crate::scaffold::{self, Component, Prettifier};
use crate::ui;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::env;
use std::io;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "new-component",
    version = crate::VERSION,
    about = "Create a new React component directory, ready to import"
)]
pub struct Cli {
    /// Name of the component to create, e.g. `Button`
    #[arg(value_name = "componentName")]
    pub name: Option<String>,

    /// Language the component is generated in
    #[arg(short, long, value_enum, ignore_case = true)]
    pub lang: Option<Language>,

    /// Directory that holds components
    #[arg(short, long, value_name = "pathToDirectory")]
    pub dir: Option<PathBuf>,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Layer command-line flags over the configured settings
    fn apply(&self, config: &mut Config) {
        if let Some(lang) = self.lang {
            config.lang = lang;
        }
        if let Some(dir) = &self.dir {
            config.dir = dir.clone();
        }
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// Run with already-parsed arguments
fn run_with(cli: Cli) -> Result<()> {
    // Completion scripts print to stdout and short-circuit everything else
    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "new-component", &mut io::stdout());
        return Ok(());
    }

    // Resolve settings: defaults, config files, then flags
    let cwd = env::current_dir()?;
    let mut config = load_config(&cwd)?;
    cli.apply(&mut config);

    // A missing name is a refusal, not a usage error
    let name = match cli.name.as_deref() {
        Some(name) => name,
        None => return Err(ScaffoldError::MissingName.into()),
    };

    let component = Component::new(name, config.lang, &config.dir)?;
    let prettifier = Prettifier::detect(config.prettier_config.as_deref());

    ui::log_intro(component.name(), &component.dir(), component.lang());
    if !prettifier.is_available() {
        ui::log_notice("prettier not found; writing files unformatted.");
    }

    scaffold::create(&component, &prettifier)?;

    ui::log_conclusion();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_lang_and_dir() {
        let cli = Cli::try_parse_from(["new-component", "Button", "-l", "ts", "-d", "lib/widgets"])
            .unwrap();
        assert_eq!(cli.name.as_deref(), Some("Button"));
        assert_eq!(cli.lang, Some(Language::Ts));
        assert_eq!(cli.dir, Some(PathBuf::from("lib/widgets")));
    }

    #[test]
    fn test_parse_allows_missing_name() {
        let cli = Cli::try_parse_from(["new-component"]).unwrap();
        assert!(cli.name.is_none());
        assert!(cli.lang.is_none());
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from(["new-component", "Card", "--lang", "js", "--dir", "app"])
            .unwrap();
        assert_eq!(cli.lang, Some(Language::Js));
        assert_eq!(cli.dir, Some(PathBuf::from("app")));
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["new-component", "Button", "-l", "rs"]).is_err());
    }

    #[test]
    fn test_parse_language_ignores_case() {
        let cli = Cli::try_parse_from(["new-component", "Button", "-l", "TS"]).unwrap();
        assert_eq!(cli.lang, Some(Language::Ts));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["new-component", "Button", "-l", "ts"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.lang, Language::Ts);
        assert_eq!(config.dir, Config::default().dir);
    }
}
