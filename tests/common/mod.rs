//! Common test utilities for reveal integration tests.
//!
//! `TestRepo` creates real temporary git repositories and runs the
//! compiled binary inside them.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get path to compiled binary (built by cargo test)
pub fn reveal_bin() -> &'static str {
    env!("CARGO_BIN_EXE_reveal")
}

/// A temporary real git repository to run the binary against.
pub struct TestRepo {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a repository with an initial commit on `main` and no remote.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path();

        git(path, &["init", "-b", "main"]);
        git(path, &["config", "user.email", "test@test.com"]);
        git(path, &["config", "user.name", "Test User"]);

        fs::write(path.join("README.md"), "# Test Repo\n").expect("Failed to write README");
        git(path, &["add", "-A"]);
        git(path, &["commit", "-m", "initial commit"]);

        Self { dir }
    }

    /// Create a repository whose `origin` points at the given URL.
    pub fn with_remote(url: &str) -> Self {
        let repo = Self::new();
        git(repo.path(), &["remote", "add", "origin", url]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file and commit it.
    pub fn commit_file(&self, relative: &str, contents: &str) {
        let file = self.path().join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file, contents).expect("Failed to write file");
        git(self.path(), &["add", "-A"]);
        git(self.path(), &["commit", "-m", "add file"]);
    }

    /// Create and switch to a branch.
    pub fn checkout_new_branch(&self, name: &str) {
        git(self.path(), &["checkout", "-b", name]);
    }

    /// Detach HEAD so `git branch --show-current` prints nothing.
    pub fn detach_head(&self) {
        git(self.path(), &["checkout", "--detach"]);
    }

    /// Run the binary in this repository.
    pub fn reveal(&self, args: &[&str]) -> Output {
        Command::new(reveal_bin())
            .args(args)
            .current_dir(self.path())
            // keep user-level config out of the picture
            .env("XDG_CONFIG_HOME", self.path().join(".test-config"))
            .output()
            .expect("Failed to execute reveal")
    }
}

fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run git {args:?}"));
    assert!(output.status.success(), "git {args:?} failed");
}

#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
