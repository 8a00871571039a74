use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Error response from daemon ({status}): {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("cannot get label {label} for service {service_id}")]
    MissingLabelError { label: String, service_id: String },

    #[error("Operation cancelled")]
    CancelledError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failed command. Never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl StackError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StackError::ApiError(_) | StackError::ApiStatusError { .. } => ErrorCategory::Network,
            StackError::MissingLabelError { .. } | StackError::SerializationError(_) => {
                ErrorCategory::Data
            }
            StackError::ConfigError { .. }
            | StackError::ConfigValidationError { .. }
            | StackError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StackError::IoError(_) => ErrorCategory::System,
            StackError::CancelledError => ErrorCategory::Interrupted,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重試即可
            ErrorCategory::Network | ErrorCategory::Interrupted => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            StackError::ApiError(e) if e.is_connect() => {
                "Cannot connect to the engine API. Is the daemon running?".to_string()
            }
            StackError::ApiError(e) if e.is_timeout() => {
                "The engine API did not answer in time".to_string()
            }
            StackError::CancelledError => "Interrupted".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StackError::ApiError(_) => "Check --host / DOCKER_HOST and that the daemon is reachable",
            StackError::ApiStatusError { status: 401 | 403, .. } => {
                "Check the credentials configured in [client.headers]"
            }
            StackError::ApiStatusError { .. } => "Check the daemon logs for details",
            StackError::MissingLabelError { .. } => {
                "A service was created by a tool that does not set the stack namespace label; inspect it with the engine API"
            }
            StackError::CancelledError => "Re-run the command",
            StackError::SerializationError(_) => {
                "The daemon returned an unexpected payload; check --api-version"
            }
            StackError::IoError(_) => "Check file permissions and available disk space",
            StackError::ConfigError { .. }
            | StackError::ConfigValidationError { .. }
            | StackError::InvalidConfigValueError { .. } => "Fix the configuration file or CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, StackError>;
