//! String transformation utilities for code generation

/// Convert a parameter name to the name of its enum member.
///
/// This is plain uppercasing: `repoToken` becomes `REPOTOKEN`, not
/// `REPO_TOKEN`.
pub fn to_constant_name(name: &str) -> String {
    name.to_uppercase()
}

/// Turn a parameter description into single-line comment text.
///
/// Surrounding whitespace is trimmed and the first literal `\n` escape (a
/// backslash followed by `n`) becomes a space. Later escapes are kept as they
/// are, which existing generated files depend on.
pub fn comment_text(description: &str) -> String {
    description.trim().replacen("\\n", " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_constant_name() {
        assert_eq!(to_constant_name("repoToken"), "REPOTOKEN");
        assert_eq!(to_constant_name("github_pat"), "GITHUB_PAT");
        assert_eq!(to_constant_name("k8s_version2"), "K8S_VERSION2");
        assert_eq!(to_constant_name("ALREADY"), "ALREADY");
    }

    #[test]
    fn test_comment_text_trims() {
        assert_eq!(comment_text("  Auth token \n"), "Auth token");
    }

    #[test]
    fn test_comment_text_replaces_first_escape_only() {
        assert_eq!(
            comment_text("The build id\\nused later"),
            "The build id used later"
        );
        assert_eq!(comment_text("a\\nb\\nc"), "a b\\nc");
    }

    #[test]
    fn test_comment_text_keeps_real_newlines() {
        assert_eq!(comment_text("first\nsecond"), "first\nsecond");
    }
}
