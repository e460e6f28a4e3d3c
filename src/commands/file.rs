use anyhow::Result;

use super::{require_repo_identity, require_workspace, Context, NO_ACTIVE_FILE};
use crate::git::resolve_current_branch;
use crate::url;

/// Open a file at the current branch on GitHub.
pub fn run(ctx: &Context<'_>) -> Result<()> {
    let Some(root) = require_workspace(ctx) else {
        return Ok(());
    };
    let Some(repo) = require_repo_identity(ctx, &root) else {
        return Ok(());
    };
    let Some(file) = ctx.workspace.active_file() else {
        ctx.console.warn(NO_ACTIVE_FILE);
        return Ok(());
    };

    let relative = ctx.workspace.relative_path(&file);
    let branch = resolve_current_branch(ctx.git, &root, &ctx.config.branch.fallback);

    let target = url::file_url(&repo, &branch, &relative);
    ctx.console
        .info(&format!("Opening file on GitHub: {}", target.path));
    ctx.opener.open(&target)
}
