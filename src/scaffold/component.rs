//! Component planning and creation
//!
//! This module contains the on-disk layout of a component and the logic
//! that writes it out.

use crate::config::Language;
use crate::error::{Result, ScaffoldError, ScaffoldResult};
use crate::scaffold::{template, Prettifier};
use crate::ui;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// A component to be scaffolded
#[derive(Debug, Clone)]
pub struct Component {
    /// Component name, substituted into the templates
    name: String,

    /// Language the component is generated in
    lang: Language,

    /// Directory that holds components; the component directory is created
    /// directly underneath it
    base_dir: PathBuf,
}

impl Component {
    /// Plan a component, validating its name
    pub fn new(name: &str, lang: Language, base_dir: &Path) -> ScaffoldResult<Self> {
        validate_name(name)?;

        Ok(Component {
            name: name.to_string(),
            lang,
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Component name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language the component is generated in
    pub fn lang(&self) -> Language {
        self.lang
    }

    /// Directory the component lives in: `<base>/<Name>`
    pub fn dir(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }

    /// Component source file: `<base>/<Name>/<Name>.js` or `.tsx`
    pub fn source_path(&self) -> PathBuf {
        self.dir()
            .join(format!("{}.{}", self.name, self.lang.component_extension()))
    }

    /// Stylesheet: `<base>/<Name>/<Name>.module.css`
    pub fn styles_path(&self) -> PathBuf {
        self.dir().join(format!("{}.module.css", self.name))
    }

    /// Index re-export: `<base>/<Name>/index.js` or `.ts`
    pub fn index_path(&self) -> PathBuf {
        self.dir()
            .join(format!("index.{}", self.lang.index_extension()))
    }
}

/// Validate a component name
///
/// The name is substituted into `function <name>()` and `export default
/// <name>`, so it must be a JavaScript identifier. This also keeps path
/// separators out of the directory name.
fn validate_name(name: &str) -> ScaffoldResult<()> {
    if name.is_empty() {
        return Err(ScaffoldError::MissingName);
    }

    let identifier = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
    if !identifier.is_match(name) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }

    Ok(())
}

/// Create the component on disk: its directory plus three files.
///
/// Refuses to touch anything when the component directory already exists.
pub fn create(component: &Component, prettifier: &Prettifier) -> Result<()> {
    // Make sure the components directory exists
    if !component.base_dir.exists() {
        fs::create_dir_all(&component.base_dir)?;
    }

    // Refuse to overwrite an existing component
    let component_dir = component.dir();
    if component_dir.exists() {
        return Err(ScaffoldError::AlreadyExists(component_dir).into());
    }

    fs::create_dir(&component_dir)?;
    ui::log_item("Directory created.");

    // Component source, rendered from the template and formatted
    let source = template::component_source(component.lang, &component.name);
    let source = prettifier.prettify(&source, &component.source_path())?;
    fs::write(component.source_path(), source)?;
    ui::log_item("Component built and saved to disk.");

    // Stylesheet starts empty
    fs::write(component.styles_path(), "")?;

    // Index re-export
    let index = prettifier.prettify(&template::index_source(&component.name), &component.index_path())?;
    fs::write(component.index_path(), index)?;
    ui::log_item("Index file built and saved to disk.");

    Ok(())
}
