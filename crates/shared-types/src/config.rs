use serde::{Deserialize, Serialize};

/// Title used by every page that does not supply its own.
pub const DEFAULT_SITE_TITLE: &str = "League Teams Viewer";

/// Directory the export step writes its JSON files into.
pub const DEFAULT_DATA_DIR: &str = "interface/data";

/// Directory holding `champions/<Id>.png` icons.
pub const DEFAULT_IMAGES_DIR: &str = "interface/images";

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Where the exported data lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_images_dir() -> String {
    DEFAULT_IMAGES_DIR.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            images_dir: default_images_dir(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}
