//! # App configuration (`parcels.toml`)
//!
//! The only setting the app needs is the base URL of the parcel API. It is
//! resolved in three layers, later layers winning:
//!
//! 1. the built-in default ([`DEFAULT_BASE_URL`], or `PARCELS_API_URL` captured at
//!    compile time, since mobile builds have no runtime environment),
//! 2. the `parcels.toml` file in the platform config directory,
//! 3. the `PARCELS_API_URL` environment variable (see [`ParcelsConfig::with_env`]).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://192.168.1.70:8000"
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::Deserialize;

use crate::error::StoreError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the API base URL.
pub const API_URL_VAR: &str = "PARCELS_API_URL";

/// Top-level configuration stored in `parcels.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ParcelsConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and optional path prefix of the parcel API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("PARCELS_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ParcelsConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "parcels.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Blank values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        self
    }
}
