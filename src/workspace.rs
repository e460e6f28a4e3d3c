//! Workspace discovery.
//!
//! Where the original host asked the editor for the open folder and the
//! active document, the CLI answers from the current directory and the
//! path argument. The trait keeps the command flows runnable against a
//! fake workspace in tests.

use std::path::{Path, PathBuf};

/// The working copy and the file the user is acting on.
pub trait Workspace {
    /// Root of the first (only) workspace folder, when one exists.
    fn root(&self) -> Option<PathBuf>;

    /// Absolute path of the file the command targets, when one was given.
    fn active_file(&self) -> Option<PathBuf>;

    /// Workspace-relative rendering of `path`, forward slashes only.
    ///
    /// Paths outside the root are rendered as given, matching the editor
    /// host this tool descends from.
    fn relative_path(&self, path: &Path) -> String;
}

/// CLI workspace: the current directory plus an optional file argument.
pub struct CliWorkspace {
    file: Option<PathBuf>,
}

impl CliWorkspace {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }
}

impl Workspace for CliWorkspace {
    fn root(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn active_file(&self) -> Option<PathBuf> {
        let file = self.file.as_ref()?;
        if file.is_absolute() {
            Some(file.clone())
        } else {
            Some(self.root()?.join(file))
        }
    }

    fn relative_path(&self, path: &Path) -> String {
        if let Some(root) = self.root() {
            if let Ok(rel) = path.strip_prefix(&root) {
                return slashed(rel);
            }
        }
        slashed(path)
    }
}

/// Render a path with forward slashes regardless of platform separator.
fn slashed(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
