use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub session: SessionConfig,
    pub log: LogConfig,
}

/// Cell glyphs for both the console grid and the full-screen board. Each
/// should occupy two terminal columns so the grid lines stay aligned.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one: String,
    pub player_two: String,
    pub empty: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one: "\u{1F534}".to_string(),
            player_two: "\u{1F535}".to_string(),
            empty: "  ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    /// Line-oriented prompts on stdin/stdout.
    #[default]
    Console,
    /// Full-screen terminal view.
    Tui,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub interface: Interface,
    /// Offer a new game after each one ends.
    pub offer_replay: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            interface: Interface::Console,
            offer_replay: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Append log lines to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("display.player_one", &self.display.player_one),
            ("display.player_two", &self.display.player_two),
            ("display.empty", &self.display.empty),
        ];
        for (key, glyph) in glyphs {
            if glyph.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }

        if self.display.player_one == self.display.player_two {
            return Err(ConfigError::Validation(
                "display.player_one and display.player_two must differ".into(),
            ));
        }
        if self.display.empty == self.display.player_one
            || self.display.empty == self.display.player_two
        {
            return Err(ConfigError::Validation(
                "display.empty must differ from both player glyphs".into(),
            ));
        }

        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation("log.filter must not be empty".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
player_one = "XX"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.player_one, "XX");
        // Other fields should be defaults
        assert_eq!(config.display.player_two, "\u{1F535}");
        assert_eq!(config.session.interface, Interface::Console);
        assert!(config.session.offer_replay);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_interface_parses_lowercase() {
        let config: AppConfig = toml::from_str("[session]\ninterface = \"tui\"\n").unwrap();
        assert_eq!(config.session.interface, Interface::Tui);
        assert!(toml::from_str::<AppConfig>("[session]\ninterface = \"web\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_empty_glyph() {
        let mut config = AppConfig::default();
        config.display.empty = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_identical_player_glyphs() {
        let mut config = AppConfig::default();
        config.display.player_two = config.display.player_one.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_glyph_matching_player() {
        let mut config = AppConfig::default();
        config.display.empty = config.display.player_two.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_log_filter() {
        let mut config = AppConfig::default();
        config.log.filter = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[session]
offer_replay = false

[log]
filter = "connect_four=debug"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.session.offer_replay);
        assert_eq!(config.log.filter, "connect_four=debug");
        assert_eq!(config.log.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nplayer_one = \"\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
