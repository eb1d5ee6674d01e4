//! Validated base address of the catalogue API.
//!
//! Every endpoint Curator calls is resolved relative to this address, so a
//! deployment can point the console at a different host or at an API mounted
//! below a path prefix (`https://example.com/catalogue/`).

use std::fmt;

use url::Url;

use super::error::CatalogueError;

/// Default API address used when no configuration source provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the catalogue API.
///
/// The stored URL always ends with `/` so relative endpoint paths append to
/// any path prefix instead of replacing its last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidBaseUrl`] when the value is not an
    /// absolute `http` or `https` URL, or carries a query or fragment.
    pub fn parse(raw: &str) -> Result<Self, CatalogueError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogueError::InvalidBaseUrl(
                "base URL must not be empty".to_owned(),
            ));
        }

        let mut url =
            Url::parse(trimmed).map_err(|error| CatalogueError::InvalidBaseUrl(error.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogueError::InvalidBaseUrl(format!(
                "unsupported scheme '{}' (expected http or https)",
                url.scheme()
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(CatalogueError::InvalidBaseUrl(
                "base URL must not contain a query or fragment".to_owned(),
            ));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    /// Resolves an endpoint path such as `products/pending` against the base.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidBaseUrl`] when the joined URL cannot
    /// be constructed.
    pub fn endpoint(&self, path: &str) -> Result<Url, CatalogueError> {
        self.0
            .join(path.trim_start_matches('/'))
            .map_err(|error| CatalogueError::InvalidBaseUrl(format!("{path}: {error}")))
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
