use crate::services::shortener_api::DEFAULT_API_BASE;

/// Origin used off-browser (native tests, early start-up)
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Where the backend lives and which origin short links are built on
///
/// Both values can be baked in at build time:
/// - `SHORTENER_API_BASE`: path or absolute URL of the link collection
/// - `SHORTENER_PUBLIC_ORIGIN`: origin prefixed to short codes
///
/// When unset, the API is same-origin at `/api/urls` and short links use
/// `window.location.origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    api_base: String,
    public_origin: String,
}

impl ApiConfig {
    /// Build the config from compile-time environment and the current page
    pub fn from_env() -> Self {
        let api_base = option_env!("SHORTENER_API_BASE").unwrap_or(DEFAULT_API_BASE);
        let public_origin = option_env!("SHORTENER_PUBLIC_ORIGIN")
            .map(|s| s.to_string())
            .unwrap_or_else(page_origin);

        Self::new(api_base, &public_origin)
    }

    pub fn new(api_base: &str, public_origin: &str) -> Self {
        let api_base = api_base.trim().trim_end_matches('/');
        Self {
            api_base: if api_base.is_empty() {
                DEFAULT_API_BASE.to_string()
            } else {
                api_base.to_string()
            },
            public_origin: public_origin.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL of the link collection endpoint
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Origin short links are displayed under, without trailing slash
    pub fn public_origin(&self) -> &str {
        &self.public_origin
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, FALLBACK_ORIGIN)
    }
}

/// `window.location.origin`, or the local fallback outside a browser
fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
        log::warn!("Could not read window.location.origin, using {}", FALLBACK_ORIGIN);
    }
    FALLBACK_ORIGIN.to_string()
}
