use std::path::PathBuf;

/// Invalid human input. Always recoverable by asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid column.")]
    InvalidColumnFormat,

    #[error("That column is full.")]
    ColumnFull,

    #[error("Your name can't be empty.")]
    EmptyName,
}

/// Errors that end an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed before the session finished")]
    InputClosed,

    #[error("the game is already over")]
    GameOver,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
