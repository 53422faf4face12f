use crate::services::ConfigError;
use std::io;

#[derive(Debug)]
pub enum AppError {
    /// The terminal is below the minimum supported size.
    TerminalTooSmall { rows: u16, cols: u16 },
    /// Terminal setup or size query failed.
    Terminal(io::Error),
    /// Reading the next key failed; the loop cannot continue.
    Input(io::Error),
    Config(ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::TerminalTooSmall { rows, cols } => write!(
                f,
                "terminal is {}x{}, at least {}x{} (rows x cols) is required",
                rows,
                cols,
                super::MIN_ROWS,
                super::MIN_COLS
            ),
            AppError::Terminal(err) => write!(f, "terminal initialization failed: {}", err),
            AppError::Input(err) => write!(f, "reading input failed: {}", err),
            AppError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::TerminalTooSmall { .. } => None,
            AppError::Terminal(err) | AppError::Input(err) => Some(err),
            AppError::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}
