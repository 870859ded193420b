use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid age {age} for '{name}' at row {row}: no age bracket matches")]
    InvalidAge { row: usize, name: String, age: i64 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Read,
    Write,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        EtlError::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        EtlError::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ReadError { .. } | EtlError::CsvError(_) => ErrorCategory::Read,
            EtlError::WriteError { .. } | EtlError::SerializationError(_) => ErrorCategory::Write,
            EtlError::InvalidAge { .. } => ErrorCategory::Data,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 磁碟或權限問題屬於系統層級
            EtlError::WriteError { .. } => ErrorSeverity::Critical,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::ReadError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            EtlError::CsvError(_) => {
                "Make sure the input has a header row with name, email, age, city and that every age is an integer".to_string()
            }
            EtlError::WriteError { path, .. } => format!(
                "Check permissions and free disk space for '{}'",
                path
            ),
            EtlError::SerializationError(_) => {
                "Output records could not be encoded as JSON; re-run with --verbose".to_string()
            }
            EtlError::InvalidAge { row, .. } => format!(
                "Fix the age on row {} or run without --reject-out-of-range to emit a null category",
                row
            ),
            EtlError::ConfigValidationError { field, .. }
            | EtlError::InvalidConfigValueError { field, .. } => {
                format!("Review the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Read => format!("Could not read input data: {}", self),
            ErrorCategory::Write => format!("Could not write output document: {}", self),
            ErrorCategory::Data => format!("Input data rejected: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
