//! Common test utilities

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory plus an isolated fake home directory
pub struct TestProject {
    pub root: TempDir,
    pub home: TempDir,
}

/// Create an empty project with no configuration files anywhere
pub fn test_project() -> TestProject {
    TestProject {
        root: TempDir::new().unwrap(),
        home: TempDir::new().unwrap(),
    }
}

/// Build a `new-component` invocation running inside the project.
///
/// The environment is pinned down so runs are reproducible: the home
/// directory points at the scratch dir, the PATH is emptied so no real
/// formatter is picked up, and colors are off.
pub fn new_component_cmd(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("new-component").unwrap();
    cmd.current_dir(project.root.path())
        .env("HOME", project.home.path())
        .env("USERPROFILE", project.home.path())
        .env("PATH", "")
        .env("NO_COLOR", "1");
    cmd
}
