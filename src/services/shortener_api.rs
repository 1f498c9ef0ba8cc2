use async_trait::async_trait;
use chrono::NaiveDateTime;
use gloo_net::http::Request;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Default path of the link collection on the shortening backend
pub const DEFAULT_API_BASE: &str = "/api/urls";

/// A shortened link as returned by the backend
///
/// Only `originalUrl` and `shortCode` are required. The remaining fields are
/// extras some backends send; a missing or oddly-shaped extra never fails decoding.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRecord {
    pub original_url: String,
    pub short_code: String,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub click_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub expires_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ShortLinkRecord {
    #[allow(dead_code)]
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            short_url: None,
            click_count: None,
            created_at: None,
            expires_at: None,
            is_active: None,
        }
    }
}

/// Body of `POST /api/urls`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkRequest {
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<u32>,
}

impl CreateShortLinkRequest {
    #[allow(dead_code)]
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            custom_code: None,
            expires_in_days: None,
        }
    }
}

// Backends disagree on datetime encoding (ISO strings, arrays, null).
// Anything that is not an ISO-8601 string is treated as absent.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| NaiveDateTime::from_str(s).ok()))
}

/// Error type for shortener API calls
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, ...)
    Request(String),
    /// The request body could not be serialized
    Encode(String),
    /// The backend answered with a non-2xx status
    Status { status: u16, status_text: String },
    /// The response body was not the expected JSON shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Request failed: {}", e),
            ApiError::Encode(e) => write!(f, "Failed to encode request: {}", e),
            ApiError::Status { status, status_text } => {
                write!(f, "Server returned {} {}", status, status_text)
            }
            ApiError::Decode(e) => write!(f, "Failed to parse response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// The HTTP surface of the shortening backend
#[async_trait(?Send)]
pub trait ShortenerApi {
    /// Create a short link (`POST {base}`)
    async fn create(&self, request: &CreateShortLinkRequest) -> Result<ShortLinkRecord, ApiError>;

    /// Fetch every known link, oldest first (`GET {base}`)
    async fn list(&self) -> Result<Vec<ShortLinkRecord>, ApiError>;

    /// Fetch the click counter of one link (`GET {base}/{code}/clicks`)
    async fn click_count(&self, short_code: &str) -> Result<u64, ApiError>;
}

#[async_trait(?Send)]
impl<T: ShortenerApi + ?Sized> ShortenerApi for &T {
    async fn create(&self, request: &CreateShortLinkRequest) -> Result<ShortLinkRecord, ApiError> {
        (**self).create(request).await
    }

    async fn list(&self) -> Result<Vec<ShortLinkRecord>, ApiError> {
        (**self).list().await
    }

    async fn click_count(&self, short_code: &str) -> Result<u64, ApiError> {
        (**self).click_count(short_code).await
    }
}

/// `ShortenerApi` backed by the browser fetch API
#[derive(Debug, Clone)]
pub struct HttpShortenerApi {
    base_url: String,
}

impl HttpShortenerApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the clicks endpoint for a short code
    pub fn clicks_url(&self, short_code: &str) -> String {
        format!("{}/{}/clicks", self.base_url, urlencoding::encode(short_code))
    }
}

impl Default for HttpShortenerApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn check_status(response: &gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[async_trait(?Send)]
impl ShortenerApi for HttpShortenerApi {
    async fn create(&self, request: &CreateShortLinkRequest) -> Result<ShortLinkRecord, ApiError> {
        let response = Request::post(&self.base_url)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<ShortLinkRecord>, ApiError> {
        let response = Request::get(&self.base_url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn click_count(&self, short_code: &str) -> Result<u64, ApiError> {
        let response = Request::get(&self.clicks_url(short_code))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
