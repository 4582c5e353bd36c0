//! Built-in component templates
//!
//! Templates are static source text with a placeholder token; rendering
//! replaces every occurrence of the token with the component name.

use crate::config::Language;

/// Placeholder token substituted with the component name
pub const PLACEHOLDER: &str = "COMPONENT_NAME";

/// JavaScript component template
const JS_TEMPLATE: &str = include_str!("templates/js.jsx");

/// TypeScript component template
const TS_TEMPLATE: &str = include_str!("templates/ts.tsx");

/// The raw, unrendered template for a language
pub fn raw_template(lang: Language) -> &'static str {
    match lang {
        Language::Js => JS_TEMPLATE,
        Language::Ts => TS_TEMPLATE,
    }
}

/// Render the component source for a language and component name
pub fn component_source(lang: Language, name: &str) -> String {
    raw_template(lang).replace(PLACEHOLDER, name)
}

/// Render the index re-export for a component name
pub fn index_source(name: &str) -> String {
    format!("export * from './{}';\n", name)
}
