use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` baked into the binary. The browser build has no filesystem,
/// so this is the only source there.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Path checked at runtime by native builds, relative to the working directory.
#[cfg(feature = "native")]
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents. Invalid TOML falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse config: {e}, using defaults");
        AppConfig::default()
    })
}

/// Replace the backend URL and key with any non-empty override.
pub fn apply_overrides(config: &mut AppConfig, url: Option<String>, anon_key: Option<String>) {
    if let Some(url) = url.filter(|v| !v.trim().is_empty()) {
        config.backend.url = url;
    }
    if let Some(key) = anon_key.filter(|v| !v.trim().is_empty()) {
        config.backend.anon_key = key;
    }
}

#[cfg(feature = "native")]
fn read_config() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(_) => parse_config(BUNDLED_CONFIG),
    }
}

#[cfg(not(feature = "native"))]
fn read_config() -> AppConfig {
    parse_config(BUNDLED_CONFIG)
}

/// Load the configuration once and return it. Later calls return the
/// cached value.
///
/// Precedence, lowest first: bundled file, runtime file (native), build-time
/// `CMS_BACKEND_URL` / `CMS_BACKEND_ANON_KEY`, then runtime env and `.env` (native).
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config();
        apply_overrides(
            &mut config,
            option_env!("CMS_BACKEND_URL").map(str::to_string),
            option_env!("CMS_BACKEND_ANON_KEY").map(str::to_string),
        );

        #[cfg(feature = "native")]
        {
            let _ = dotenvy::dotenv();
            apply_overrides(
                &mut config,
                std::env::var("CMS_BACKEND_URL").ok(),
                std::env::var("CMS_BACKEND_ANON_KEY").ok(),
            );
        }

        if config.backend.anon_key.is_empty() {
            eprintln!("[config] backend.anon_key is empty, requests will be anonymous");
        }
        config
    })
}
