//! Browse-URL composition.
//!
//! Composes the github.com URL for a project or for a file at a branch.
//! The remote's own host never reaches this module; every URL targets the
//! fixed web host. Segments are passed through verbatim, no encoding.

use std::fmt;

use crate::remote::RepoIdentity;

/// The web host every composed URL targets, whatever host the remote used.
pub const WEB_HOST: &str = "github.com";

/// A browsable URL split into its structural parts.
///
/// The path never starts with a slash; `Display` inserts the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    pub scheme: &'static str,
    pub authority: &'static str,
    pub path: String,
}

impl TargetUrl {
    fn new(path: String) -> Self {
        Self {
            scheme: "https",
            authority: WEB_HOST,
            path,
        }
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.scheme, self.authority, self.path)
    }
}

/// URL of the repository's project page.
pub fn project_url(repo: &RepoIdentity) -> TargetUrl {
    TargetUrl::new(format!("{}/{}", repo.owner, repo.name))
}

/// URL of a file blob at the given branch.
///
/// `relative_path` is workspace-relative with forward slashes.
pub fn file_url(repo: &RepoIdentity, branch: &str, relative_path: &str) -> TargetUrl {
    TargetUrl::new(format!(
        "{}/{}/blob/{}/{}",
        repo.owner, repo.name, branch, relative_path
    ))
}
