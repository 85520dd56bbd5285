use crate::core::solver::MAX_DISKS;
use crate::domain::model::Move;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HanoiError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("{disks} disks exceeds the limit of {limit}")]
    ResourceExhausted { disks: u64, limit: u32 },

    #[error("Illegal move '{mv}': {reason}")]
    IllegalMove { mv: Move, reason: String },

    #[error("Replay of {disks} disks did not end in a solved state")]
    UnsolvedState { disks: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Solver,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HanoiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HanoiError::InvalidInput { .. } => ErrorCategory::Input,
            HanoiError::InvalidConfigValueError { .. }
            | HanoiError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            HanoiError::ResourceExhausted { .. }
            | HanoiError::IllegalMove { .. }
            | HanoiError::UnsolvedState { .. } => ErrorCategory::Solver,
            HanoiError::IoError(_)
            | HanoiError::CsvError(_)
            | HanoiError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Solver => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度對應的行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HanoiError::InvalidInput { .. } => {
                "Enter a whole number of disks, zero or greater (for example: 3)".to_string()
            }
            HanoiError::InvalidConfigValueError { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            HanoiError::ConfigValidationError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            HanoiError::ResourceExhausted { limit, .. } if *limit < MAX_DISKS => format!(
                "Use at most {} disks or raise --max-disks (up to {})",
                limit, MAX_DISKS
            ),
            HanoiError::ResourceExhausted { limit, .. } => {
                format!("Use at most {} disks", limit)
            }
            HanoiError::IllegalMove { .. } | HanoiError::UnsolvedState { .. } => {
                "This is a solver bug; please report the disk count and rods used".to_string()
            }
            HanoiError::IoError(_) | HanoiError::CsvError(_) | HanoiError::SerializationError(_) => {
                "Check that standard output is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HanoiError::InvalidInput { input, reason } => {
                format!("Could not read a disk count from '{}': {}", input, reason)
            }
            HanoiError::ResourceExhausted { disks, limit } => format!(
                "Refusing to solve {} disks; the limit is {} disks",
                disks, limit
            ),
            other => other.to_string(),
        }
    }

    /// 下游讀取端提前關閉 (例如 `| head`)
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            HanoiError::IoError(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            HanoiError::CsvError(e) => match e.kind() {
                csv::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::BrokenPipe,
                _ => false,
            },
            HanoiError::SerializationError(e) => {
                e.io_error_kind() == Some(std::io::ErrorKind::BrokenPipe)
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, HanoiError>;
