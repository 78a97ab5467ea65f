//! ==============================================================================
//! config.rs - content store endpoint configuration
//! ==============================================================================
//!
//! purpose:
//!     resolves the two external values the site needs (store url and public
//!     anon key). missing or malformed values never abort start-up: the site
//!     falls back to an inert placeholder endpoint, logs a warning, and every
//!     store call then fails like any other network error.
//!
//! relationships:
//!     - used by: site/api (RestStore builds every request url from this)
//!
//! ==============================================================================

use thiserror::Error;
use url::Url;

/// endpoint used when no valid configuration is present
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// key used when no valid configuration is present
pub const PLACEHOLDER_KEY: &str = "placeholder-anon-key";

/// table holding blog posts
pub const POSTS_TABLE: &str = "blog_posts";

/// template values shipped in example env files
const TEMPLATE_URL: &str = "your_supabase_url_here";
const TEMPLATE_KEY: &str = "your_supabase_anon_key_here";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} still holds the template value")]
    Template(&'static str),
    #[error("store url is not a valid http(s) url: {0}")]
    InvalidUrl(String),
}

/// resolved store endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// base url without trailing slash
    pub url: String,
    pub anon_key: String,
    /// false when running against the placeholder endpoint
    pub configured: bool,
}

impl StoreConfig {
    /// validate raw environment values, degrading to the placeholder
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Self {
        match Self::validate(url, anon_key) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "content store environment invalid ({err}); using placeholder endpoint, \
                     blog features will be unavailable"
                );
                Self::placeholder()
            }
        }
    }

    pub fn validate(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        if url == TEMPLATE_URL {
            return Err(ConfigError::Template("SUPABASE_URL"));
        }
        if anon_key == TEMPLATE_KEY {
            return Err(ConfigError::Template("SUPABASE_ANON_KEY"));
        }

        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            configured: true,
        })
    }

    pub fn placeholder() -> Self {
        Self {
            url: PLACEHOLDER_URL.to_string(),
            anon_key: PLACEHOLDER_KEY.to_string(),
            configured: false,
        }
    }

    /// `{url}/rest/v1/{table}`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// `{url}/auth/v1/{endpoint}`
    pub fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.url, endpoint)
    }

    /// local storage key for the persisted session, `sb-<project-ref>-auth-token`
    pub fn session_storage_key(&self) -> String {
        let project = Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.split('.').next().unwrap_or(h).to_string()))
            .unwrap_or_else(|| "local".to_string());
        format!("sb-{project}-auth-token")
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values_are_kept() {
        let config = StoreConfig::from_values(Some("https://abcd.supabase.co/"), Some("anon"));
        assert!(config.configured);
        assert_eq!(config.url, "https://abcd.supabase.co");
        assert_eq!(
            config.table_url(POSTS_TABLE),
            "https://abcd.supabase.co/rest/v1/blog_posts"
        );
        assert_eq!(
            config.auth_url("token"),
            "https://abcd.supabase.co/auth/v1/token"
        );
        assert_eq!(config.session_storage_key(), "sb-abcd-auth-token");
    }

    #[test]
    fn test_missing_or_template_values_fall_back() {
        let cases = [
            (None, Some("key")),
            (Some("https://abcd.supabase.co"), None),
            (Some(""), Some("key")),
            (Some("your_supabase_url_here"), Some("key")),
            (Some("https://abcd.supabase.co"), Some("your_supabase_anon_key_here")),
            (Some("not a url"), Some("key")),
            (Some("ftp://abcd.supabase.co"), Some("key")),
        ];
        for (url, key) in cases {
            let config = StoreConfig::from_values(url, key);
            assert_eq!(config, StoreConfig::placeholder(), "url={url:?} key={key:?}");
            assert!(!config.configured);
        }
    }

    #[test]
    fn test_validate_reports_reason() {
        assert_eq!(
            StoreConfig::validate(None, Some("k")),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
        assert_eq!(
            StoreConfig::validate(Some("your_supabase_url_here"), Some("k")),
            Err(ConfigError::Template("SUPABASE_URL"))
        );
        assert!(matches!(
            StoreConfig::validate(Some("::"), Some("k")),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_placeholder_storage_key() {
        assert_eq!(
            StoreConfig::placeholder().session_storage_key(),
            "sb-placeholder-auth-token"
        );
    }
}
