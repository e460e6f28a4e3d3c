//! Command flows.
//!
//! Each command is a short early-exit sequence over injected capabilities:
//! missing preconditions produce one warning and a normal return, never an
//! error bubbling out of the flow.

pub mod file;
pub mod project;

use std::path::PathBuf;

use crate::config::Config;
use crate::console::Console;
use crate::git::GitQuery;
use crate::opener::UrlOpener;
use crate::remote::{parse_remote_url, RepoIdentity};
use crate::workspace::Workspace;

pub const NO_WORKSPACE: &str = "No workspace folder found to open on GitHub.";
pub const NOT_A_GIT_REPOSITORY: &str =
    "Not a git repository. Initiate one with `git init` or check your remote URL.";
pub const NO_ACTIVE_FILE: &str = "Open a file to use the file command.";

/// The capabilities a command flow runs against.
pub struct Context<'a> {
    pub git: &'a dyn GitQuery,
    pub workspace: &'a dyn Workspace,
    pub console: &'a dyn Console,
    pub opener: &'a dyn UrlOpener,
    pub config: &'a Config,
}

/// Workspace root, or a warning and `None`.
fn require_workspace(ctx: &Context<'_>) -> Option<PathBuf> {
    let root = ctx.workspace.root();
    if root.is_none() {
        ctx.console.warn(NO_WORKSPACE);
    }
    root
}

/// Resolved repository identity, or a warning and `None`.
///
/// A failed remote query and an unparseable remote URL are the same
/// outcome here: nothing to open.
fn require_repo_identity(ctx: &Context<'_>, root: &std::path::Path) -> Option<RepoIdentity> {
    let identity = ctx
        .git
        .remote_url(root, &ctx.config.remote.name)
        .ok()
        .and_then(|url| parse_remote_url(&url));
    if identity.is_none() {
        ctx.console.warn(NOT_A_GIT_REPOSITORY);
    }
    identity
}
