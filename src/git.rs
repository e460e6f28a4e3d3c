//! Git queries.
//!
//! The two read-only queries the tool needs, behind a trait so the command
//! flows can run against a fake in tests instead of spawning processes.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use wait_timeout::ChildExt;

/// A wedged git invocation must not hang the command indefinitely.
const REMOTE_URL_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only queries against a working copy.
///
/// Any `Err` means the query could not answer (not a repository, no such
/// remote, timeout). Callers treat that as an expected outcome.
pub trait GitQuery {
    /// Configured URL of the named remote.
    fn remote_url(&self, workdir: &Path, remote: &str) -> Result<String>;

    /// Name of the currently checked-out branch; empty when HEAD is detached.
    fn current_branch(&self, workdir: &Path) -> Result<String>;
}

/// Production implementation shelling out to the `git` binary.
pub struct GitCli;

impl GitQuery for GitCli {
    fn remote_url(&self, workdir: &Path, remote: &str) -> Result<String> {
        let mut child = Command::new("git")
            .args(["remote", "get-url", remote])
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to run git remote get-url")?;

        // Take stdout before waiting; wait_timeout reaps the process.
        let mut stdout_handle = child
            .stdout
            .take()
            .context("Missing stdout handle for git")?;

        let status = match child.wait_timeout(REMOTE_URL_TIMEOUT)? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                anyhow::bail!("git remote get-url timed out");
            }
        };

        if !status.success() {
            anyhow::bail!("No git remote '{}' found", remote);
        }

        let mut buf = Vec::new();
        stdout_handle
            .read_to_end(&mut buf)
            .context("Failed to read git output")?;
        let url = String::from_utf8_lossy(&buf).trim().to_string();

        if url.is_empty() {
            anyhow::bail!("Git remote '{}' has no URL configured", remote);
        }

        Ok(url)
    }

    fn current_branch(&self, workdir: &Path) -> Result<String> {
        let output = Command::new("git")
            .args(["branch", "--show-current"])
            .current_dir(workdir)
            .output()
            .context("Failed to run git branch --show-current")?;

        if !output.status.success() {
            anyhow::bail!("git branch --show-current failed");
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Resolve the checked-out branch, falling back when git can't answer.
///
/// Detached HEAD yields empty output; that and outright query failure both
/// resolve to `fallback`. Never fails, never returns an empty string.
pub fn resolve_current_branch(git: &dyn GitQuery, workdir: &Path, fallback: &str) -> String {
    match git.current_branch(workdir) {
        Ok(branch) if !branch.is_empty() => branch,
        _ => fallback.to_string(),
    }
}
