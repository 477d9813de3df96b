//! User settings loaded from `config.toml`.

mod paths;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logic::{DEFAULT_PAGE_SIZE, DomainMatch};
use crate::sources::{DEFAULT_API_BASE, DEFAULT_CONCURRENCY, FailurePolicy, FetchOptions};

pub use paths::{CONFIG_ENV, config_dir, logs_dir, resolve_config_path};

/// Errors raised while reading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Settings file path.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
    /// File is not valid settings TOML.
    #[error("invalid settings in {path}: {source}")]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// User-tunable settings. Every key is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// API root, e.g. `https://hacker-news.firebaseio.com/v0`.
    pub api_base: String,
    /// Stories per page.
    pub page_size: usize,
    /// Item requests in flight during the initial fetch.
    pub concurrency: usize,
    /// Per-request timeout in seconds; absent or 0 disables it.
    pub request_timeout_secs: Option<u64>,
    /// Item failure handling during the initial fetch.
    pub failure_policy: FailurePolicy,
    /// Domain filter comparison.
    pub domain_match: DomainMatch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout_secs: None,
            failure_policy: FailurePolicy::FailFast,
            domain_match: DomainMatch::Exact,
        }
    }
}

impl Settings {
    /// What: Parse settings from TOML text.
    ///
    /// Inputs:
    /// - `text`: TOML document.
    /// - `path`: Source path, used in error messages.
    ///
    /// Output:
    /// - Normalized settings.
    ///
    /// # Errors
    /// - `ConfigError::Parse` on invalid TOML, wrong types, or unknown keys.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let parsed: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parsed.normalized())
    }

    /// What: Load settings from `path`.
    ///
    /// Output:
    /// - `Ok(Settings::default())` when the file does not exist.
    ///
    /// # Errors
    /// - `ConfigError::Read` when the file exists but cannot be read.
    /// - `ConfigError::Parse` when its contents are invalid.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file; using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// What: Load settings from the resolved config path, never failing.
    ///
    /// Inputs:
    /// - `explicit`: Path given on the command line, if any.
    ///
    /// Output:
    /// - Loaded settings, or defaults when the file is unreadable or invalid.
    ///
    /// Details:
    /// - Problems are logged at `warn` so startup is never blocked by a bad file.
    #[must_use]
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = resolve_config_path(explicit);
        match Self::load_from_path(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "settings loaded");
                settings
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default settings");
                Self::default()
            }
        }
    }

    /// Clamp counts to at least 1 and drop a zero timeout.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.concurrency = self.concurrency.max(1);
        if self.request_timeout_secs == Some(0) {
            self.request_timeout_secs = None;
        }
        if self.api_base.trim().is_empty() {
            self.api_base = DEFAULT_API_BASE.to_string();
        }
        self
    }

    /// Retriever options derived from these settings.
    #[must_use]
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            api_base: self.api_base.clone(),
            concurrency: self.concurrency,
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            failure_policy: self.failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Partial files keep defaults for missing keys
    ///
    /// - Input: Only `page_size` and `domain_match`
    /// - Output: Those two overridden, everything else default
    fn partial_file_merges_with_defaults() {
        let s = Settings::from_toml_str(
            "page_size = 10\ndomain_match = \"contains\"\n",
            Path::new("test.toml"),
        )
        .expect("valid settings");
        assert_eq!(s.page_size, 10);
        assert_eq!(s.domain_match, DomainMatch::Contains);
        assert_eq!(s.api_base, DEFAULT_API_BASE);
        assert_eq!(s.failure_policy, FailurePolicy::FailFast);
    }

    #[test]
    fn zero_values_are_normalized() {
        let s = Settings::from_toml_str(
            "page_size = 0\nconcurrency = 0\nrequest_timeout_secs = 0\napi_base = \" \"\n",
            Path::new("test.toml"),
        )
        .expect("valid settings");
        assert_eq!(s.page_size, 1);
        assert_eq!(s.concurrency, 1);
        assert_eq!(s.request_timeout_secs, None);
        assert_eq!(s.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_toml_str("pagesize = 3\n", Path::new("bad.toml"))
            .expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn fetch_options_carry_timeout_and_policy() {
        let s = Settings {
            request_timeout_secs: Some(5),
            failure_policy: FailurePolicy::SkipFailed,
            concurrency: 8,
            ..Settings::default()
        };
        let opts = s.fetch_options();
        assert_eq!(opts.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(opts.failure_policy, FailurePolicy::SkipFailed);
        assert_eq!(opts.concurrency, 8);
    }
}
