use anyhow::Result;

use super::{require_repo_identity, require_workspace, Context};
use crate::url;

/// Open the repository's project page on GitHub.
pub fn run(ctx: &Context<'_>) -> Result<()> {
    let Some(root) = require_workspace(ctx) else {
        return Ok(());
    };
    let Some(repo) = require_repo_identity(ctx, &root) else {
        return Ok(());
    };

    let target = url::project_url(&repo);
    ctx.console
        .info(&format!("Opening project on GitHub: {}", target.path));
    ctx.opener.open(&target)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::testing::{FakeGit, FakeWorkspace, RecordingConsole, RecordingOpener};
    use super::super::{Context, NOT_A_GIT_REPOSITORY, NO_WORKSPACE};
    use crate::config::Config;

    struct Fixture {
        git: FakeGit,
        workspace: FakeWorkspace,
        console: RecordingConsole,
        opener: RecordingOpener,
        config: Config,
    }

    impl Fixture {
        fn new(remote_url: Option<&str>) -> Self {
            Self {
                git: FakeGit {
                    remote_url: remote_url.map(String::from),
                    branch: Some("main".to_string()),
                    ..FakeGit::default()
                },
                workspace: FakeWorkspace {
                    root: Some(PathBuf::from("/work/widgets")),
                    file: None,
                },
                console: RecordingConsole::default(),
                opener: RecordingOpener::default(),
                config: Config::default(),
            }
        }

        fn run(&self) {
            let ctx = Context {
                git: &self.git,
                workspace: &self.workspace,
                console: &self.console,
                opener: &self.opener,
                config: &self.config,
            };
            super::run(&ctx).expect("project flow should not error");
        }
    }

    #[test]
    fn ssh_remote_opens_project_page() {
        let fx = Fixture::new(Some("git@github.com:acme/widgets.git"));
        fx.run();

        let opened = fx.opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].path, "acme/widgets");
        assert_eq!(opened[0].to_string(), "https://github.com/acme/widgets");
        assert!(fx.console.warnings.borrow().is_empty());
    }

    #[test]
    fn info_is_logged_on_success() {
        let fx = Fixture::new(Some("https://github.com/acme/widgets.git"));
        fx.run();

        let infos = fx.console.infos.borrow();
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains("acme/widgets"));
    }

    #[test]
    fn missing_workspace_warns_without_touching_git() {
        let mut fx = Fixture::new(Some("git@github.com:acme/widgets.git"));
        fx.workspace.root = None;
        fx.run();

        assert_eq!(*fx.console.warnings.borrow(), vec![NO_WORKSPACE]);
        assert_eq!(fx.git.remote_queries.get(), 0);
        assert!(fx.opener.opened.borrow().is_empty());
    }

    #[test]
    fn failed_remote_query_warns_once() {
        let fx = Fixture::new(None);
        fx.run();

        assert_eq!(*fx.console.warnings.borrow(), vec![NOT_A_GIT_REPOSITORY]);
        assert!(fx.opener.opened.borrow().is_empty());
    }

    #[test]
    fn unparseable_remote_warns_once() {
        let fx = Fixture::new(Some("/local/path/to/repo.git"));
        fx.run();

        assert_eq!(*fx.console.warnings.borrow(), vec![NOT_A_GIT_REPOSITORY]);
        assert!(fx.opener.opened.borrow().is_empty());
    }
}
