use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {path}")]
    EncodingError { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Encoding,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatchError::IoError(_) => ErrorCategory::Io,
            PatchError::EncodingError { .. } => ErrorCategory::Encoding,
            PatchError::SerializationError(_) => ErrorCategory::Serialization,
            PatchError::ConfigValidationError { .. }
            | PatchError::InvalidConfigValueError { .. }
            | PatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Encoding => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI: 1 for bad configuration, 2 for file failures.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Serialization => 1,
            ErrorCategory::Io | ErrorCategory::Encoding => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PatchError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "Target file not found".to_string(),
                std::io::ErrorKind::PermissionDenied => {
                    "Permission denied while accessing the target file".to_string()
                }
                _ => format!("File operation failed: {}", e),
            },
            PatchError::EncodingError { path } => {
                format!("'{}' does not contain valid UTF-8 text", path)
            }
            PatchError::SerializationError(e) => format!("Could not render report: {}", e),
            PatchError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            PatchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            PatchError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file path exists and is readable and writable",
            ErrorCategory::Encoding => "Convert the file to UTF-8 before patching it",
            ErrorCategory::Configuration => {
                "Fix the rule file or command-line arguments and run again"
            }
            ErrorCategory::Serialization => "Run again without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
