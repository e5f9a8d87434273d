//! Application configuration: optional TOML file and built-in defaults.
//!
//! Resolution order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. Global `~/.config/file-explorer/config.toml`
//! 3. `$FILE_EXPLORER_CONFIG` environment variable (path to config file)
//!
//! A missing file is not an error; the defaults describe the stock behaviour.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::navigation::ListingOptions;
use crate::preview_content::DEFAULT_MAX_PREVIEW_BYTES;

// ── Section configs ──────────────────────────────────────────────────────────

/// General application settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Event loop tick interval in milliseconds.
    pub tick_rate_ms: Option<u64>,
}

/// Preview pane settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    /// Files larger than this many bytes are not read.
    pub max_preview_bytes: Option<u64>,
    /// Soft-wrap long lines.
    pub wrap: Option<bool>,
}

/// Directory listing settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListingConfig {
    /// Directories always listed first.
    pub dirs_first: Option<bool>,
    /// Show dotfiles.
    pub show_hidden: Option<bool>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark" or "light".
    pub scheme: Option<String>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs can be layered.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub preview: PreviewConfig,
    pub listing: ListingConfig,
    pub theme: ThemeConfig,
}

/// Default event loop tick interval.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FILE_EXPLORER_CONFIG";

// ── Config file locator ──────────────────────────────────────────────────────

/// Candidate config file paths, lowest priority first.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("file-explorer").join("config.toml"));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(env_path));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                tick_rate_ms: other.general.tick_rate_ms.or(self.general.tick_rate_ms),
            },
            preview: PreviewConfig {
                max_preview_bytes: other
                    .preview
                    .max_preview_bytes
                    .or(self.preview.max_preview_bytes),
                wrap: other.preview.wrap.or(self.preview.wrap),
            },
            listing: ListingConfig {
                dirs_first: other.listing.dirs_first.or(self.listing.dirs_first),
                show_hidden: other.listing.show_hidden.or(self.listing.show_hidden),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
            },
        }
    }

    /// Load the merged configuration from every candidate file.
    pub fn load() -> AppConfig {
        Self::load_from(&candidate_paths())
    }

    fn load_from(paths: &[PathBuf]) -> AppConfig {
        paths
            .iter()
            .filter_map(|path| load_file(path))
            .fold(AppConfig::default(), |config, file_cfg| config.merge(&file_cfg))
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    pub fn tick_rate_ms(&self) -> u64 {
        self.general.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)
    }

    pub fn max_preview_bytes(&self) -> u64 {
        self.preview
            .max_preview_bytes
            .unwrap_or(DEFAULT_MAX_PREVIEW_BYTES)
    }

    pub fn preview_wrap(&self) -> bool {
        self.preview.wrap.unwrap_or(true)
    }

    pub fn dirs_first(&self) -> bool {
        self.listing.dirs_first.unwrap_or(true)
    }

    pub fn show_hidden(&self) -> bool {
        self.listing.show_hidden.unwrap_or(true)
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            dirs_first: self.dirs_first(),
            show_hidden: self.show_hidden(),
        }
    }

    /// Theme scheme: "dark" or "light".
    pub fn theme_scheme(&self) -> &str {
        self.theme.scheme.as_deref().unwrap_or("dark")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.tick_rate_ms(), 250);
        assert_eq!(cfg.max_preview_bytes(), 102_400);
        assert!(cfg.preview_wrap());
        assert!(cfg.dirs_first());
        assert!(cfg.show_hidden());
        assert_eq!(cfg.theme_scheme(), "dark");
        assert_eq!(cfg.listing_options(), ListingOptions::default());
    }

    #[test]
    fn test_toml_parsing_full() {
        let toml = r#"
[general]
tick_rate_ms = 100

[preview]
max_preview_bytes = 4096
wrap = false

[listing]
dirs_first = false
show_hidden = false

[theme]
scheme = "light"
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(cfg.tick_rate_ms(), 100);
        assert_eq!(cfg.max_preview_bytes(), 4096);
        assert!(!cfg.preview_wrap());
        assert!(!cfg.dirs_first());
        assert!(!cfg.show_hidden());
        assert_eq!(cfg.theme_scheme(), "light");
    }

    #[test]
    fn test_toml_parsing_partial() {
        let toml = r#"
[listing]
show_hidden = false
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert!(!cfg.show_hidden());
        assert!(cfg.dirs_first());
        assert_eq!(cfg.max_preview_bytes(), 102_400);
    }

    #[test]
    fn test_toml_parsing_empty() {
        let cfg: AppConfig = toml::from_str("").expect("parse failed");
        assert_eq!(cfg.tick_rate_ms(), 250);
    }

    #[test]
    fn test_merge_overrides() {
        let base = AppConfig {
            preview: PreviewConfig {
                max_preview_bytes: Some(1000),
                wrap: Some(false),
            },
            ..Default::default()
        };
        let over = AppConfig {
            preview: PreviewConfig {
                max_preview_bytes: Some(2000),
                wrap: None,
            },
            ..Default::default()
        };

        let merged = base.merge(&over);
        assert_eq!(merged.max_preview_bytes(), 2000);
        assert!(!merged.preview_wrap());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("config.toml");
        std::fs::write(&cfg_path, "[theme]\nscheme = \"light\"\n").expect("write");

        let cfg = load_file(&cfg_path).expect("load");
        assert_eq!(cfg.theme_scheme(), "light");
        assert_eq!(cfg.tick_rate_ms(), 250);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_file(Path::new("/nonexistent/config.toml")).is_none());
    }

    #[test]
    fn test_load_invalid_toml_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("bad.toml");
        std::fs::write(&cfg_path, "this is { not valid toml").expect("write");
        assert!(load_file(&cfg_path).is_none());
    }

    #[test]
    fn test_later_files_win() {
        let dir = tempfile::tempdir().expect("tempdir");
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&global, "[preview]\nmax_preview_bytes = 10\nwrap = false\n")
            .expect("write");
        std::fs::write(&explicit, "[preview]\nmax_preview_bytes = 20\n").expect("write");

        let cfg = AppConfig::load_from(&[global, dir.path().join("missing.toml"), explicit]);
        assert_eq!(cfg.max_preview_bytes(), 20);
        assert!(!cfg.preview_wrap());
    }
}
