use std::time::Duration;

use crate::error::{MovieMoodError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the movie catalog
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
    /// Upper bound for a single catalog request
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `TMDB_API_KEY`, `TMDB_BASE_URL`, `TMDB_LANGUAGE` and `CATALOG_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TMDB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MovieMoodError::Config("TMDB_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup("TMDB_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(language) = lookup("TMDB_LANGUAGE") {
            config.language = language;
        }
        if let Some(raw) = lookup("CATALOG_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                MovieMoodError::Config(format!("CATALOG_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
