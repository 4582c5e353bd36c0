//! Formatter invocation
//!
//! Generated sources are piped through Prettier when one is on the PATH, so
//! the emitted files match the surrounding project's style.

use crate::error::{FormatError, FormatResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

/// Candidate formatter commands, probed in order
const CANDIDATES: &[&[&str]] = &[&["prettier"], &["npx", "--no-install", "prettier"]];

/// A formatter for generated sources
#[derive(Debug)]
pub enum Prettifier {
    /// Pipe sources through an external Prettier command
    External {
        /// Program and leading arguments, e.g. `["npx", "--no-install", "prettier"]`
        command: Vec<String>,

        /// Configuration file forwarded via `--config`
        config: Option<PathBuf>,
    },

    /// No formatter found; sources are written exactly as rendered
    Passthrough,
}

impl Prettifier {
    /// Probe for a usable formatter, preferring a direct `prettier` binary
    /// over going through `npx`
    pub fn detect(config: Option<&Path>) -> Self {
        for candidate in CANDIDATES {
            if probe(candidate) {
                return Prettifier::External {
                    command: candidate.iter().map(|s| s.to_string()).collect(),
                    config: config.map(Path::to_path_buf),
                };
            }
        }

        Prettifier::Passthrough
    }

    /// Whether an external formatter was found
    pub fn is_available(&self) -> bool {
        matches!(self, Prettifier::External { .. })
    }

    /// Format source text destined for `path`.
    ///
    /// The path is only passed along so the formatter can pick a parser;
    /// nothing is read from or written to it here.
    pub fn prettify(&self, source: &str, path: &Path) -> FormatResult<String> {
        let (argv, config) = match self {
            Prettifier::External { command, config } => (command, config),
            Prettifier::Passthrough => return Ok(source.to_string()),
        };

        // Build the command
        let mut command = StdCommand::new(&argv[0]);
        if argv.len() > 1 {
            command.args(&argv[1..]);
        }
        command.arg("--stdin-filepath");
        command.arg(path);
        if let Some(config_path) = config {
            command.arg("--config");
            command.arg(config_path);
        }

        // Set up stdio
        command.stdin(Stdio::piped());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        // Spawn and feed the source on stdin
        let mut child = command.spawn().map_err(|e| FormatError::Launch {
            command: argv.join(" "),
            error: e.to_string(),
        })?;

        // A formatter that quits early closes the pipe; its exit status
        // is reported below
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(source.as_bytes()) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(FormatError::Launch {
                        command: argv.join(" "),
                        error: e.to_string(),
                    });
                }
            }
        }

        // Collect output and check exit status
        let output = child.wait_with_output().map_err(|e| FormatError::Launch {
            command: argv.join(" "),
            error: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                command: argv.join(" "),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check whether a candidate command responds to `--version`
fn probe(candidate: &[&str]) -> bool {
    StdCommand::new(candidate[0])
        .args(&candidate[1..])
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
