use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_COLS, DEFAULT_ROWS};

/// Most rows whose board (plus its four frame lines) fits the 15-line board
/// area of an 80x24 terminal.
pub const MAX_ROWS: usize = 11;

/// Most columns the view lays out; 16 columns need 53 terminal columns.
pub const MAX_COLS: usize = 16;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing, built-in defaults were used.
    Defaults { missing: PathBuf },
}

impl ConfigSource {
    /// User-facing notice when the requested file was not found.
    pub fn missing_notice(&self) -> Option<String> {
        match self {
            ConfigSource::File(_) => None,
            ConfigSource::Defaults { missing } => Some(format!(
                "config file '{}' not found, using defaults",
                missing.display()
            )),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Player,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory the log file is written to
    pub directory: PathBuf,
    pub file_name: String,
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            directory: PathBuf::from("logs"),
            file_name: "connect-four.log".to_string(),
            level: "info".to_string(),
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
    /// does not exist. The returned source tells the caller which happened, since
    /// this usually runs before logging is set up.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((
                Self::default(),
                ConfigSource::Defaults {
                    missing: path.to_path_buf(),
                },
            ))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ROWS).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={MAX_ROWS}"
            )));
        }
        if !(1..=MAX_COLS).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in 1..={MAX_COLS}"
            )));
        }
        if self.logging.file_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file_name must not be empty".into(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
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
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.game.first_player, Player::Red);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 9);
        // Other fields should be defaults
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_first_player_parses_lowercase() {
        let config: AppConfig = toml::from_str("[game]\nfirst_player = \"yellow\"\n").unwrap();
        assert_eq!(config.game.first_player, Player::Yellow);
    }

    #[test]
    fn test_unknown_player_is_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nfirst_player = \"green\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_cols() {
        let mut config = AppConfig::default();
        config.board.cols = MAX_COLS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_row_bound() {
        let mut config = AppConfig::default();
        config.board.rows = MAX_ROWS;
        assert!(config.validate().is_ok());
        config.board.rows = MAX_ROWS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_log_file() {
        let mut config = AppConfig::default();
        config.logging.file_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = Path::new("nonexistent_config.toml");
        let (config, source) = AppConfig::load_or_default(path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            source,
            ConfigSource::Defaults {
                missing: path.to_path_buf()
            }
        );
        assert_eq!(
            source.missing_notice().as_deref(),
            Some("config file 'nonexistent_config.toml' not found, using defaults")
        );
    }

    #[test]
    fn test_load_or_default_existing_file_has_no_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[board]\ncols = 5\n").unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.board.cols, 5);
        assert_eq!(source, ConfigSource::File(path.clone()));
        assert_eq!(source.missing_notice(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.logging.level, "debug");
        // Others are defaults
        assert_eq!(config.board.cols, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
