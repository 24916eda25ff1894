// web_app/api/config.rs - Where the products service lives
//
// The server reads `API_BASE` from its environment (after dotenv) and
// publishes the result in a `<meta name="api-base">` tag of the shell.
// The WASM bundle has no process environment: it reads that tag first,
// then the value baked in when it was compiled, then the local default.

use reqwest::Url;

use super::ApiError;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// `name` of the meta tag carrying the server's base URL to the browser
pub const API_BASE_META: &str = "api-base";

/// Base URL of the products REST service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base.trim()).map_err(|e| ApiError::InvalidBaseUrl(format!("{base}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Resolve the base URL from the environment, falling back to the default
    pub fn from_env() -> Self {
        let configured = std::env::var("API_BASE")
            .ok()
            .or_else(|| option_env!("API_BASE").map(str::to_string))
            .filter(|value| !value.trim().is_empty());

        match configured {
            Some(value) => Self::new(&value).unwrap_or_else(|e| {
                tracing::warn!("Ignoring API_BASE: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Configuration for the running app: the published base in the
    /// browser, the environment everywhere else
    pub fn resolve() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(config) = Self::from_document() {
                return config;
            }
        }
        Self::from_env()
    }

    /// Parse the `content` of the published meta tag
    pub fn from_published(content: Option<&str>) -> Option<Self> {
        let content = content.map(str::trim).filter(|c| !c.is_empty())?;
        match Self::new(content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring published API base: {}", e);
                None
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_BASE_META}\"]");
        let meta = document.query_selector(&selector).ok().flatten()?;
        Self::from_published(meta.get_attribute("content").as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segment}/...`, percent-encoding every segment
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
        }
    }
}
