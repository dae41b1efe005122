//! Custom alias format validation.

use regex::Regex;
use std::sync::LazyLock;

/// Aliases must be strictly shorter than this many characters.
pub const CUSTOM_ALIAS_MAX_LENGTH: usize = 50;

static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Validates an optional user-chosen alias.
///
/// An absent or empty alias is valid: the backend generates one.
///
/// # Rules
///
/// - Fewer than [`CUSTOM_ALIAS_MAX_LENGTH`] characters
/// - Only ASCII letters, digits, `-` and `_`
///
/// # Examples
///
/// ```
/// use short_link_client::validators::validate_custom_alias_format;
///
/// assert!(validate_custom_alias_format(None).is_none());
/// assert!(validate_custom_alias_format(Some("fb")).is_none());
/// assert!(validate_custom_alias_format(Some("has space")).is_some());
/// ```
pub fn validate_custom_alias_format(input: Option<&str>) -> Option<String> {
    let alias = match input {
        Some(alias) if !alias.is_empty() => alias,
        _ => return None,
    };

    if alias.chars().count() >= CUSTOM_ALIAS_MAX_LENGTH {
        return Some(format!(
            "Custom alias must be shorter than {CUSTOM_ALIAS_MAX_LENGTH} characters."
        ));
    }

    if !CUSTOM_ALIAS_REGEX.is_match(alias) {
        return Some(
            "Custom alias can only contain letters, digits, hyphens and underscores.".to_string(),
        );
    }

    None
}
