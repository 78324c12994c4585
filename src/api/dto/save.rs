//! DTOs for the alias creation endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

use super::response::validation_message;

/// Longest alias a caller may request.
pub const MAX_REQUESTED_ALIAS_LEN: u64 = 32;

/// Compiled regex for requested aliases. Empty is allowed and means "generate".
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// URLs must not carry control characters; they cannot go into a `Location` header.
static URL_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\x00-\x1F\x7F]*$").unwrap());

/// Request to map a URL to an alias.
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    #[validate(url)]
    #[validate(regex(path = "*URL_CHARS_REGEX", code = "url"))]
    pub url: String,

    /// Omitted or empty means a generated alias.
    #[validate(length(max = MAX_REQUESTED_ALIAS_LEN))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Builds a request and runs the same checks the HTTP endpoint applies.
    ///
    /// # Errors
    ///
    /// Returns the joined field messages if validation fails.
    pub fn checked(url: impl Into<String>, alias: Option<String>) -> Result<Self, String> {
        let request = Self {
            url: url.into(),
            alias,
        };
        request
            .validate()
            .map_err(|errors| validation_message(&errors))?;
        Ok(request)
    }
}

/// Successful creation: `{"status": "OK", "alias": "..."}`.
pub type SaveResponse = super::response::Envelope;
