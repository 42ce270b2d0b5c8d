// File: crates/chat/src/config.rs
// Summary: TOML configuration (`[chat]`, `[render]`) with per-field defaults and file lookup.
// Notes:
// - Every field has a default, so an empty or missing file is a valid configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chart_core::{theme, RenderOptions};
use serde::Deserialize;
use tracing::warn;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "DATACHAT_CONFIG";

/// Config file picked up from the working directory.
pub const LOCAL_CONFIG: &str = "datachat.toml";

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub chat: ChatConfig,
    pub render: RenderConfig,
}

/// Chat loop settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay between submitting a message and processing it.
    pub processing_delay_ms: u64,

    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { processing_delay_ms: 900, log_level: "info".to_string() }
    }
}

impl ChatConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

/// Chart surface settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,

    /// Theme name: `pink`, `dark` or `light`.
    pub theme: String,

    pub draw_labels: bool,

    /// Where the live chart PNG is written.
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: chart_core::types::WIDTH,
            height: chart_core::types::HEIGHT,
            theme: "pink".to_string(),
            draw_labels: true,
            output: PathBuf::from("target/out/chart.png"),
        }
    }
}

impl RenderConfig {
    /// Renderer options for these settings. Unknown theme names fall back to pink.
    pub fn options(&self) -> RenderOptions {
        let resolved = theme::find(&self.theme);
        if !resolved.name.eq_ignore_ascii_case(&self.theme) {
            warn!(theme = %self.theme, "unknown theme; using pink");
        }
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: resolved,
            draw_labels: self.draw_labels,
            ..RenderOptions::default()
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config at {}: {e}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .map_err(|e| anyhow::anyhow!("failed to parse config at {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Load configuration.
    /// Precedence: `explicit` path > `DATACHAT_CONFIG` > `./datachat.toml` > defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match config_path(explicit) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Resolve which config file to read, if any.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(LOCAL_CONFIG);
    local.is_file().then_some(local)
}
