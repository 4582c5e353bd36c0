//! Terminal output
//!
//! Progress and result messages for a scaffolding run. Everything goes to
//! stderr so stdout stays clean for machine-readable output such as
//! completion scripts.

use crate::config::Language;
use crate::utils::sample;
use colored::Colorize;
use std::path::Path;

/// Messages of encouragement printed after a successful run
const AFFIRMATIONS: &[&str] = &[
    "Nice work!",
    "Happy hacking!",
    "You're on a roll!",
    "Keep shipping!",
    "That was smooth.",
    "Onwards and upwards!",
];

/// Print the introduction block for a scaffolding run
pub fn log_intro(name: &str, dir: &Path, lang: Language) {
    eprintln!();
    eprintln!("✨  Creating the {} component ✨", name.yellow().bold());
    eprintln!();
    eprintln!("Directory:  {}", dir.display().to_string().bright_blue());
    eprintln!("Language:   {}", language_line(lang));
    eprintln!("{}", "=========================================".dimmed());
    eprintln!();
}

/// Show both languages, highlighting the selected one
fn language_line(selected: Language) -> String {
    [Language::Js, Language::Ts]
        .iter()
        .map(|lang| {
            if *lang == selected {
                lang.display_name().bright_blue().bold().to_string()
            } else {
                lang.display_name().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Print a completed step
pub fn log_item(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Print a notice that does not affect the run's outcome
pub fn log_notice(message: &str) {
    eprintln!("{}", message.dimmed());
}

/// Print the conclusion block after a successful run
pub fn log_conclusion() {
    eprintln!();
    eprintln!("{}", "Component created!".green().bold());
    eprintln!("{}", sample(AFFIRMATIONS).dimmed());
    eprintln!();
}

/// Print an error block
pub fn log_error(message: &str) {
    eprintln!();
    eprintln!("{}", "Error creating component.".red().bold());
    eprintln!("{}", message.red());
    eprintln!();
}
