/// Value vergen writes in place of git data it could not collect.
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Git metadata captured by `build.rs` through vergen.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BuildInfo {
    pub(crate) commit_sha1: Option<&'static str>,
    pub(crate) git_dirty: bool,
}

impl BuildInfo {
    fn from_parts(sha: Option<&'static str>, dirty: Option<&'static str>) -> Self {
        Self {
            commit_sha1: sha.filter(|sha| !sha.is_empty() && *sha != VERGEN_PLACEHOLDER),
            git_dirty: dirty == Some("true"),
        }
    }
}

pub(crate) fn build_info() -> BuildInfo {
    BuildInfo::from_parts(option_env!("VERGEN_GIT_SHA"), option_env!("VERGEN_GIT_DIRTY"))
}
