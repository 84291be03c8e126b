use std::path::PathBuf;

/// An invalid move: the requested column cannot accept a drop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors raised when building a board from explicit rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur while talking to the player.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a {0} was entered")]
    InputClosed(&'static str),

    #[error("no valid {what} after {attempts} attempts")]
    AttemptsExhausted { what: &'static str, attempts: usize },
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::Ragged {
            row: 2,
            expected: 7,
            found: 6,
        };
        assert_eq!(err.to_string(), "row 2 has 6 cells, expected 7");
    }

    #[test]
    fn test_shell_error_display() {
        let err = ShellError::AttemptsExhausted {
            what: "move",
            attempts: 3,
        };
        assert_eq!(err.to_string(), "no valid move after 3 attempts");
        assert_eq!(
            ShellError::InputClosed("name").to_string(),
            "input closed before a name was entered"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("max_prompt_attempts must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: max_prompt_attempts must be > 0"
        );
    }
}
