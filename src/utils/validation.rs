//! Validation of the shorten form before anything is sent to the backend.

use url::Url;

use crate::services::CreateShortLinkRequest;

/// Longest custom code the backend accepts
pub const MAX_CUSTOM_CODE_LEN: usize = 2048;

/// Example shown in the custom code field
pub const CUSTOM_CODE_EXAMPLE: &str = "promo2024";

/// Raw contents of the shorten form, exactly as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionInput {
    pub url: String,
    pub custom_code: String,
    pub expires_in_days: String,
}

impl SubmissionInput {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Nothing but whitespace was entered
    Empty,
    /// Not an absolute http(s) URL
    InvalidUrl,
    /// Custom code is not `[A-Za-z0-9]+` or is too long
    InvalidCustomCode,
    /// Expiry is not a whole number of days >= 1
    InvalidExpiry,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Please enter a URL"),
            ValidationError::InvalidUrl => write!(f, "Invalid URL. Use http:// or https://"),
            ValidationError::InvalidCustomCode => {
                write!(f, "Custom code may only contain letters and digits")
            }
            ValidationError::InvalidExpiry => {
                write!(f, "Expiration must be a whole number of days (1 or more)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that `raw` is an absolute http or https URL
///
/// Leading and trailing whitespace is ignored.
pub fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl)?;

    // `Url` accepts "http:host" and normalizes it; require the explicit "://" form
    let lowered = trimmed.to_ascii_lowercase();
    let explicit = lowered.starts_with("http://") || lowered.starts_with("https://");

    match url.scheme() {
        "http" | "https" if explicit && url.host_str().is_some() => Ok(url),
        _ => Err(ValidationError::InvalidUrl),
    }
}

fn validate_custom_code(raw: &str) -> Result<Option<String>, ValidationError> {
    let code = raw.trim();
    if code.is_empty() {
        return Ok(None);
    }
    if code.len() > MAX_CUSTOM_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidCustomCode);
    }
    Ok(Some(code.to_string()))
}

fn validate_expiry(raw: &str) -> Result<Option<u32>, ValidationError> {
    let days = raw.trim();
    if days.is_empty() {
        return Ok(None);
    }
    match days.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(Some(n)),
        _ => Err(ValidationError::InvalidExpiry),
    }
}

/// Turn the raw form into a create request, or explain why it cannot be sent
///
/// The URL is forwarded as typed (trimmed) except for the scheme, which is
/// lowercased. The backend only matches `http://` and `https://`.
pub fn parse_submission(input: &SubmissionInput) -> Result<CreateShortLinkRequest, ValidationError> {
    let url = validate_url(&input.url)?;

    // validate_url guarantees the input starts with the ASCII scheme
    let trimmed = input.url.trim();
    let scheme = url.scheme();
    let original_url = format!("{}{}", scheme, &trimmed[scheme.len()..]);

    Ok(CreateShortLinkRequest {
        original_url,
        custom_code: validate_custom_code(&input.custom_code)?,
        expires_in_days: validate_expiry(&input.expires_in_days)?,
    })
}
