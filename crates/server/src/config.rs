use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Address the HTTP server binds to unless `LISTEN_ADDR` is set.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Parse config file contents, then apply environment overrides.
///
/// `LEAGUE_DATA_DIR` and `LEAGUE_IMAGES_DIR` win over the file.
fn resolve(contents: Option<&str>, env: impl Fn(&str) -> Option<String>) -> AppConfig {
    let mut config = match contents {
        Some(contents) => toml::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    if let Some(dir) = env("LEAGUE_DATA_DIR").filter(|v| !v.is_empty()) {
        config.site.data_dir = dir;
    }
    if let Some(dir) = env("LEAGUE_IMAGES_DIR").filter(|v| !v.is_empty()) {
        config.site.images_dir = dir;
    }
    config
}

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let contents = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => Some(contents),
            Err(e) => {
                tracing::info!(path = CONFIG_PATH, error = %e, "no config file, using defaults");
                None
            }
        };
        let config = resolve(contents.as_deref(), |key| std::env::var(key).ok());
        tracing::info!(
            data_dir = %config.site.data_dir,
            images_dir = %config.site.images_dir,
            telemetry = config.features.telemetry,
            "configuration loaded"
        );
        config
    })
}

/// Socket address to listen on.
pub fn listen_addr() -> String {
    std::env::var("LISTEN_ADDR")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
}
