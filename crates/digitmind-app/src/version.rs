//! Build version shown in the window footer.

/// Returns `pkg_version (git_hash)`, or `pkg_version (unknown)` outside a git checkout.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}

#[cfg(test)]
mod tests {
    use super::build_version;

    #[test]
    fn starts_with_package_version() {
        assert!(build_version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
