//! Destination URL validation.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Accepts only absolute `http` and `https` URLs.
///
/// Used as a `validator` custom function on request DTOs. Rejects
/// `javascript:`, `data:`, `file:` and every other scheme, as well as relative
/// or malformed input.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value).map_err(|_| {
        ValidationError::new("url").with_message(Cow::Borrowed("Invalid URL format"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("url_scheme")
            .with_message(Cow::Borrowed("Only HTTP and HTTPS URLs are allowed"))),
    }
}
