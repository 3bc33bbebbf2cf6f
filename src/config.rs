/// Backend address used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000"; // Local development API

/// Site-wide settings resolved once in `main` and handed to the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    backend_url: String,
}

impl SiteConfig {
    /// Reads `BACKEND_URL` baked in by the wasm build.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("BACKEND_URL"))
    }

    pub fn resolve(raw: Option<&str>) -> Self {
        let backend_url = raw
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();
        Self { backend_url }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Joins `path` (which must start with `/`) onto the backend address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}
