//! # Endpoint Configuration
//!
//! The analysis endpoint base address is the only external configuration
//! point. It is injectable everywhere (constructor, CLI flag, environment
//! variable) so tests and deployments never depend on a hardcoded host.

use std::env;

/// Default analysis endpoint base address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the endpoint base address
pub const ENDPOINT_ENV_VAR: &str = "GREENWAVE_ENDPOINT";

/// Base address of the analysis endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisEndpoint {
    base_url: String,
}

impl AnalysisEndpoint {
    /// Create an endpoint from a base URL (trailing slashes are stripped)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        AnalysisEndpoint { base_url }
    }

    /// Endpoint from `GREENWAVE_ENDPOINT`, falling back to the default
    pub fn from_env() -> Self {
        match env::var(ENDPOINT_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => AnalysisEndpoint::new(value),
            _ => AnalysisEndpoint::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the upload operation
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }
}

impl Default for AnalysisEndpoint {
    fn default() -> Self {
        AnalysisEndpoint::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_joins_path() {
        let endpoint = AnalysisEndpoint::new("http://analysis.example:8080");
        assert_eq!(endpoint.upload_url(), "http://analysis.example:8080/upload");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let endpoint = AnalysisEndpoint::new("http://analysis.example/");
        assert_eq!(endpoint.upload_url(), "http://analysis.example/upload");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(AnalysisEndpoint::default().base_url(), DEFAULT_BASE_URL);
    }
}
