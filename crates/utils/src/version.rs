use std::sync::LazyLock;

use crate::build_info::build_info;

/// Defines the application version.
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    let info = build_info();
    format!(
        "{}-{}{}",
        env!("IMAGE_VERSION"),
        info.commit_sha1.unwrap_or("unknown"),
        if info.git_dirty { "-dirty" } else { "" }
    )
});

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn version_starts_with_image_version() {
        assert!(VERSION.starts_with(env!("IMAGE_VERSION")));
    }

    #[test]
    fn version_carries_commit_or_unknown() {
        let info = build_info();
        let sha = VERSION
            .strip_prefix(concat!(env!("IMAGE_VERSION"), "-"))
            .unwrap()
            .trim_end_matches("-dirty");

        assert_eq!(sha, info.commit_sha1.unwrap_or("unknown"));
        assert!(!VERSION.contains("VERGEN_IDEMPOTENT_OUTPUT"));
    }
}
