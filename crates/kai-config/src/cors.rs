use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
///
/// The browser client is served from a separate origin during development,
/// so the default allows exactly that one origin with credentials.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (explicit list; no wildcard)
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
    /// Allowed HTTP methods (empty = any)
    #[serde(default)]
    pub methods: Vec<String>,
    /// Allowed request headers (empty = any)
    #[serde(default)]
    pub headers: Vec<String>,
    /// Allow credentials
    #[serde(default = "default_credentials")]
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
            methods: Vec::new(),
            headers: Vec::new(),
            credentials: default_credentials(),
            max_age: None,
        }
    }
}

fn default_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

#[allow(clippy::missing_const_for_fn)]
fn default_credentials() -> bool {
    true
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}
