use serde::{Deserialize, Serialize};

/// Connection settings for the hosted backend.
///
/// Every field has a default so a partial `config.toml` still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_content_table")]
    pub content_table: String,
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,
}

fn default_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_content_table() -> String {
    "content".to_string()
}

fn default_profiles_table() -> String {
    "profiles".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            anon_key: String::new(),
            content_table: default_content_table(),
            profiles_table: default_profiles_table(),
        }
    }
}

impl BackendConfig {
    fn base(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// REST endpoint for a table, e.g. `https://x.example.co/rest/v1/content`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base(), table)
    }

    /// Auth endpoint, e.g. `https://x.example.co/auth/v1/token`.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base(), path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
