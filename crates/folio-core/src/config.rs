//! Configuration types for folio.
//!
//! The config file is optional JSON (default `.folio/config.json`). Every
//! field has a default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::portfolio::{ContentError, Portfolio};

/// Default config directory, relative to the working directory.
pub const CONFIG_DIR: &str = ".folio";

/// Default config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Main configuration for folio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon style. When unset, `NO_COLOR` selects ASCII and Nerd Font icons
    /// are used otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconStyle>,

    /// Portfolio content file. When unset, the built-in content is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// Black and white with bright accents.
    HighContrast,
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mocha" | "dark" => Ok(Self::Mocha),
            "latte" | "light" => Ok(Self::Latte),
            "high_contrast" | "high-contrast" => Ok(Self::HighContrast),
            other => Err(format!(
                "unknown theme '{other}' (expected mocha, latte or high_contrast)"
            )),
        }
    }
}

/// Icon glyph families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    Nerd,
    Unicode,
    Ascii,
}

impl std::str::FromStr for IconStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nerd" => Ok(Self::Nerd),
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(format!(
                "unknown icon style '{other}' (expected nerd, unicode or ascii)"
            )),
        }
    }
}

impl Config {
    /// Default config path under the given directory.
    pub fn default_path(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::load(path)?;
            tracing::debug!(path = %path.display(), "Loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Resolve the icon style, falling back to the environment.
    pub fn icon_style(&self) -> IconStyle {
        self.icons.unwrap_or_else(|| {
            if std::env::var_os("NO_COLOR").is_some() {
                IconStyle::Ascii
            } else {
                IconStyle::Nerd
            }
        })
    }

    /// Load the configured portfolio content, or the built-in sample.
    pub fn portfolio(&self) -> Result<Portfolio, ContentError> {
        match &self.content {
            Some(path) => Portfolio::load(path),
            None => Ok(Portfolio::sample()),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Mocha);
        assert!(config.icons.is_none());
        assert!(config.content.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            theme: ThemeName::HighContrast,
            icons: Some(IconStyle::Unicode),
            content: Some(PathBuf::from("me.json")),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("high_contrast"));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = serde_json::from_str(r#"{"theme": "latte"}"#).unwrap();
        assert_eq!(config.theme, ThemeName::Latte);
        assert!(config.icons.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = Config::default_path(dir.path());
        let config = Config {
            icons: Some(IconStyle::Ascii),
            ..Config::default()
        };

        config.save(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&Config::default_path(dir.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme": "neon"}"#).unwrap();

        assert!(matches!(
            Config::load_or_default(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_explicit_icon_style_wins() {
        let config = Config {
            icons: Some(IconStyle::Unicode),
            ..Config::default()
        };
        assert_eq!(config.icon_style(), IconStyle::Unicode);
    }

    #[test]
    fn test_no_color_selects_ascii_icons() {
        // Only test in this crate that touches the environment
        let saved = std::env::var_os("NO_COLOR");
        let config = Config::default();

        std::env::set_var("NO_COLOR", "1");
        assert_eq!(config.icon_style(), IconStyle::Ascii);

        std::env::remove_var("NO_COLOR");
        assert_eq!(config.icon_style(), IconStyle::Nerd);

        if let Some(value) = saved {
            std::env::set_var("NO_COLOR", value);
        }
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("light".parse::<ThemeName>(), Ok(ThemeName::Latte));
        assert_eq!("high-contrast".parse::<ThemeName>(), Ok(ThemeName::HighContrast));
        assert!("neon".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_icon_style_from_str() {
        assert_eq!("ascii".parse::<IconStyle>(), Ok(IconStyle::Ascii));
        assert!("emoji".parse::<IconStyle>().is_err());
    }

    #[test]
    fn test_portfolio_defaults_to_sample() {
        let portfolio = Config::default().portfolio().unwrap();
        assert_eq!(portfolio, Portfolio::sample());
    }

    #[test]
    fn test_portfolio_from_content_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("me.json");
        std::fs::write(
            &path,
            r#"{"profile": {"name": "Ada", "headline": "Engineer"}, "skills": ["Rust"]}"#,
        )
        .unwrap();

        let config = Config {
            content: Some(path),
            ..Config::default()
        };
        let portfolio = config.portfolio().unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.skills, vec!["Rust"]);
    }
}
