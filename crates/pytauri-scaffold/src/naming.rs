//! Target directory and package name normalization

use crate::DEFAULT_TARGET_DIR;
use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar accepted by npm for a package.json "name" field
/// (optionally scoped, lowercase, limited punctuation)
static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name regex is valid")
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("disallowed-run regex"));

/// Trim whitespace and strip trailing path separators from a user-supplied
/// target directory. Total function, never fails.
pub fn format_target_dir(target_dir: &str) -> String {
    target_dir.trim().trim_end_matches('/').to_string()
}

/// Check a name against the package.json name grammar
pub fn is_valid_package_name(project_name: &str) -> bool {
    PACKAGE_NAME.is_match(project_name)
}

/// Best-effort normalization of an arbitrary string into the package name
/// grammar: trim, lowercase, whitespace runs to `-`, one leading `.`/`_`
/// stripped, remaining disallowed runs collapsed to `-`.
///
/// Not a fixed point for degenerate input (an all-symbol string normalizes
/// to `-`, which is still invalid); see [`suggest_package_name`].
pub fn to_valid_package_name(project_name: &str) -> String {
    let name = project_name.trim().to_lowercase();
    let name = WHITESPACE.replace_all(&name, "-").into_owned();
    let name = match name.chars().next() {
        Some('.') | Some('_') => name[1..].to_string(),
        _ => name,
    };
    DISALLOWED.replace_all(&name, "-").into_owned()
}

/// Normalize a name for use as a prompt default, falling back to the fixed
/// default project name when normalization cannot produce a valid one
pub fn suggest_package_name(project_name: &str) -> String {
    let suggested = to_valid_package_name(project_name);
    if is_valid_package_name(&suggested) {
        suggested
    } else {
        DEFAULT_TARGET_DIR.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_target_dir_strips_trailing_separators() {
        assert_eq!(format_target_dir("my-app/"), "my-app");
        assert_eq!(format_target_dir("my-app///"), "my-app");
        assert_eq!(format_target_dir("nested/dir/"), "nested/dir");
    }

    #[test]
    fn test_format_target_dir_trims_whitespace() {
        assert_eq!(format_target_dir("  my-app  "), "my-app");
        assert_eq!(format_target_dir("\tmy-app/\n"), "my-app");
        assert_eq!(format_target_dir("my-app"), "my-app");
    }

    #[test]
    fn test_valid_package_names() {
        for name in [
            "my-app",
            "pytauri-project",
            "a",
            "app.name",
            "app_name~x",
            "@scope/pkg",
            "@my-org/my.pkg",
        ] {
            assert!(is_valid_package_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_package_names() {
        for name in [
            "",
            "My-App",
            ".hidden",
            "_private",
            "has space",
            "emoji🚀",
            "@/nothing",
        ] {
            assert!(!is_valid_package_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_plain_valid_names_are_normalization_fixed_points() {
        // Dots and underscores are valid yet still collapsed by the
        // normalizer, so the fixed-point property holds for the plain subset
        for name in ["my-app", "pytauri-project", "a0~b", "hello"] {
            assert_eq!(to_valid_package_name(name), name);
        }
    }

    #[test]
    fn test_to_valid_package_name_normalizes() {
        assert_eq!(to_valid_package_name("My App"), "my-app");
        assert_eq!(to_valid_package_name("  Hello  World  "), "hello-world");
        assert_eq!(to_valid_package_name(".hidden"), "hidden");
        assert_eq!(to_valid_package_name("_private"), "private");
        assert_eq!(to_valid_package_name("foo/bar"), "foo-bar");
        assert_eq!(to_valid_package_name("app.name"), "app-name");
    }

    #[test]
    fn test_normalized_names_usually_validate() {
        // "!!!" collapses to "-", which the grammar happens to accept
        for name in ["My App", ".hidden", "foo/bar", "Crazy  NAME!!", "!!!"] {
            let normalized = to_valid_package_name(name);
            assert!(
                is_valid_package_name(&normalized),
                "{name} normalized to invalid {normalized}"
            );
        }
    }

    #[test]
    fn test_degenerate_inputs_fall_back_to_default() {
        // These normalize to the empty string, which is outside the grammar
        for name in ["", "   ", ".", "_"] {
            let normalized = to_valid_package_name(name);
            assert!(!is_valid_package_name(&normalized));
            assert_eq!(suggest_package_name(name), DEFAULT_TARGET_DIR);
        }
    }

    #[test]
    fn test_suggest_package_name_prefers_normalization() {
        assert_eq!(suggest_package_name("My App"), "my-app");
        assert_eq!(suggest_package_name("my-app"), "my-app");
    }
}
