#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    normalize_host, validate_api_version, validate_range, validate_url, Validate,
};
use std::collections::HashMap;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "http://localhost:2375";
pub const DEFAULT_API_VERSION: &str = "1.41";

/// Resolved engine client settings: CLI flags over config file over defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub api_version: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: normalize_host(&host.into()),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }

    pub fn resolve(
        file: Option<TomlConfig>,
        host: Option<String>,
        api_version: Option<String>,
    ) -> Self {
        let section = file.map(|f| f.client).unwrap_or_default();

        let host = host
            .or(section.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let api_version = api_version
            .or(section.api_version)
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Self {
            host: normalize_host(&host),
            api_version,
            timeout_seconds: section.timeout_seconds,
            headers: section.headers.unwrap_or_default(),
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.host", &self.host)?;
        validate_api_version("client.api_version", &self.api_version)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("client.timeout_seconds", timeout, 1, 3600)?;
        }
        Ok(())
    }
}
