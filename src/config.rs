//! Configuration loading for the portfolio viewer.
//!
//! Tunables live in `conf/config.toml` if present. Any missing or invalid
//! entries fall back to defaults so the page can still launch. Command-line
//! flags are applied on top with [`AppConfig::apply_cli`].

use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::cli::Cli;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    /// File path or `http(s)://` URL of the content document
    #[serde(default = "default_content_source")]
    pub content_source: String,
    #[serde(default = "default_scroll_throttle_ms")]
    pub scroll_throttle_ms: u64,
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: f32,
    #[serde(default = "default_mobile_width_threshold")]
    pub mobile_width_threshold: u32,
    /// Fraction of the window resolution the background scene is traced at
    #[serde(default = "default_render_scale")]
    pub render_scale: f32,
    #[serde(default = "default_enable_scene")]
    pub enable_scene: bool,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            content_source: default_content_source(),
            scroll_throttle_ms: default_scroll_throttle_ms(),
            back_to_top_threshold: default_back_to_top_threshold(),
            mobile_width_threshold: default_mobile_width_threshold(),
            render_scale: default_render_scale(),
            enable_scene: default_enable_scene(),
            user_agent: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    /// Command-line flags win over the file
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.content_source = content.clone();
        }
        if let Some(user_agent) = &cli.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli.no_scene {
            self.enable_scene = false;
        }
        if let Some(width) = cli.width {
            self.window_width = width;
        }
        if let Some(height) = cli.height {
            self.window_height = height;
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// Load configuration from disk, falling back to defaults on any error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!("Loaded config from {}", path.display());
            data
        }
        Err(err) => {
            warn!(
                "Falling back to default config ({}): {}",
                path.display(),
                err
            );
            return AppConfig::default();
        }
    };

    parse_config(&contents).unwrap_or_else(|err| {
        warn!("Invalid config TOML in {}: {}", path.display(), err);
        AppConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let mut cfg = toml::from_str::<AppConfig>(contents)?;
    debug!("Parsed configuration");
    if !(cfg.render_scale > 0.0 && cfg.render_scale <= 1.0) {
        warn!(
            "render_scale {} out of range (0, 1], using {}",
            cfg.render_scale,
            default_render_scale()
        );
        cfg.render_scale = default_render_scale();
    }
    Ok(cfg)
}

fn default_content_source() -> String {
    "profile-data.json".to_string()
}

fn default_scroll_throttle_ms() -> u64 {
    100
}

fn default_back_to_top_threshold() -> f32 {
    400.0
}

fn default_mobile_width_threshold() -> u32 {
    768
}

fn default_render_scale() -> f32 {
    0.5
}

fn default_enable_scene() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    800
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.content_source, "profile-data.json");
        assert_eq!(cfg.scroll_throttle(), Duration::from_millis(100));
        assert_eq!(cfg.back_to_top_threshold, 400.0);
        assert_eq!(cfg.mobile_width_threshold, 768);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert!(cfg.enable_scene);
    }

    #[test]
    fn test_partial_file() {
        let cfg = parse_config("log_level = \"debug\"\nscroll_throttle_ms = 50\n").unwrap();
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.scroll_throttle_ms, 50);
        assert_eq!(cfg.window_width, 1280);
    }

    #[test]
    fn test_invalid_render_scale_is_replaced() {
        let cfg = parse_config("render_scale = 4.0").unwrap();
        assert_eq!(cfg.render_scale, 0.5);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(parse_config("log_level = ").is_err());
        let cfg = load_config(Path::new("definitely/not/here/config.toml"));
        assert_eq!(cfg.window_height, 800);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "dev-portfolio",
            "--content",
            "https://example.com/profile-data.json",
            "--no-scene",
            "--width",
            "640",
        ]);
        let mut cfg = AppConfig::default();
        cfg.apply_cli(&cli);
        assert_eq!(cfg.content_source, "https://example.com/profile-data.json");
        assert!(!cfg.enable_scene);
        assert_eq!(cfg.window_width, 640);
        assert_eq!(cfg.window_height, 800);
    }
}
