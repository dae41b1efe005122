//! Long link format validation.

use url::Url;
use validator::ValidateUrl;

/// Validates the long link a user wants to shorten.
///
/// # Rules
///
/// - Must be present and not blank
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
/// - Must have a host
///
/// Rejects `javascript:`, `data:`, `file:` and similar schemes.
///
/// # Examples
///
/// ```
/// use short_link_client::validators::validate_long_link_format;
///
/// assert!(validate_long_link_format(Some("https://www.google.com")).is_none());
/// assert!(validate_long_link_format(Some("")).is_some());
/// assert!(validate_long_link_format(None).is_some());
/// ```
pub fn validate_long_link_format(input: Option<&str>) -> Option<String> {
    let long_link = match input.map(str::trim) {
        Some(link) if !link.is_empty() => link,
        _ => return Some("Long link cannot be empty.".to_string()),
    };

    let invalid = || {
        Some(format!(
            "Long link \"{long_link}\" is not a valid link. \
             Please enter a full link such as \"https://www.google.com\"."
        ))
    };

    if !long_link.validate_url() {
        return invalid();
    }

    let Ok(parsed) = Url::parse(long_link) else {
        return invalid();
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return Some("Only http and https links can be shortened.".to_string());
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return invalid();
    }

    None
}
