//! Remote URL parsing.
//!
//! Turns the raw text of a git remote URL into an owner/name pair.
//! Supports the SSH shorthand, ssh:// and https:// forms; the host is
//! accepted generically and discarded, only owner and name survive.

/// Owner and repository name extracted from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub owner: String,
    pub name: String,
}

impl RepoIdentity {
    fn new(owner: &str, name: &str) -> Option<Self> {
        let name = name.strip_suffix(".git").unwrap_or(name);
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

type Matcher = fn(&str) -> Option<RepoIdentity>;

/// Tried in order; the first matcher that produces an identity wins.
const MATCHERS: &[Matcher] = &[match_ssh_shorthand, match_ssh_url, match_https];

/// Parse a remote URL into a [`RepoIdentity`].
///
/// Returns `None` for anything that doesn't fit a supported form. That is
/// the expected outcome for non-web-host remotes, not an error.
pub fn parse_remote_url(url: &str) -> Option<RepoIdentity> {
    let url = url.trim();
    MATCHERS.iter().find_map(|matcher| matcher(url))
}

/// `user@host:owner/name[.git]`
fn match_ssh_shorthand(url: &str) -> Option<RepoIdentity> {
    let (user_host, path) = url.split_once(':')?;
    let (user, host) = user_host.split_once('@')?;
    if user.is_empty() || host.is_empty() || path.starts_with("//") {
        return None;
    }
    split_owner_name(path)
}

/// `ssh://[user@]host/owner/name[.git]`
fn match_ssh_url(url: &str) -> Option<RepoIdentity> {
    let rest = url.strip_prefix("ssh://")?;
    let without_user = rest.rsplit('@').next()?;
    let (host, path) = without_user.split_once('/')?;
    if host.is_empty() {
        return None;
    }
    split_owner_name(path)
}

/// `https://host/owner/name[.git]`
fn match_https(url: &str) -> Option<RepoIdentity> {
    let rest = url.strip_prefix("https://")?;
    let (host, path) = rest.split_once('/')?;
    if host.is_empty() {
        return None;
    }
    split_owner_name(path)
}

/// Owner is the first path segment; name is the rest, `.git` stripped.
fn split_owner_name(path: &str) -> Option<RepoIdentity> {
    let (owner, name) = path.split_once('/')?;
    RepoIdentity::new(owner, name)
}
