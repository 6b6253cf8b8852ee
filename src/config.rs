//! Configuration for the provider adapters
//!
//! Loaded once at process start and immutable thereafter. The crate
//! never reads credentials from the environment on its own.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Per-provider connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// API key sent with every request
    pub api_key: String
  , /// API base URL (if custom)
    #[serde(default)]
    pub api_base: Option<String>
  , /// Request timeout in seconds, none waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>
}

impl ProviderConfig
{   pub fn new(api_key: impl Into<String>) -> Self
    {   ProviderConfig
        {   api_key: api_key.into()
          , api_base: None
          , timeout_secs: None
        }
    }

    /// Point the adapter at another base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self
    {   self.api_base = Some(api_base.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self
    {   self.timeout_secs = Some(secs);
        self
    }

    /// Resolve the base URL, falling back to the provider default
    pub fn base_url<'a>(&'a self, default: &'a str) -> &'a str
    {   self.api_base
          .as_deref()
          .map(|base| base.trim_end_matches('/'))
          .unwrap_or(default)
    }

    /// Build the HTTP client for this provider
    pub fn http_client(&self) -> Result<reqwest::Client, Error>
    {   let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().map_err(|e| {
          Error::InvalidConfiguration(
            format!("cannot build HTTP client: {}", e)
          )
        })
    }
}

/// Configuration for all providers; an absent entry disables it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllmConfig
{   #[serde(default)]
    pub openai: Option<ProviderConfig>
  , #[serde(default)]
    pub anthropic: Option<ProviderConfig>
  , #[serde(default)]
    pub mistral: Option<ProviderConfig>
}

impl AllmConfig
{   pub fn from_json_str(json: &str) -> Result<Self, Error>
    {   serde_json::from_str(json).map_err(|e| {
          Error::InvalidConfiguration(e.to_string())
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>)
      -> Result<Self, Error>
    {   let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
          Error::InvalidConfiguration(
            format!("{}: {}", path.display(), e)
          )
        })?;
        Self::from_json_str(&json)
    }
}
