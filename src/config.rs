//! Environment-derived application configuration.

use std::path::PathBuf;

/// Default course catalog base URL (override with EXAMFORGE_API)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the course catalog service
    pub api_url: String,
    /// Optional path to a signed-in user profile (JSON)
    pub profile_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("EXAMFORGE_API").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let profile_path = std::env::var_os("EXAMFORGE_PROFILE").map(PathBuf::from);
        Self {
            api_url,
            profile_path,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            profile_path: None,
        }
    }
}
