use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::IoError(e) => format!("File access failed: {}", e),
            ApiError::TomlParseError(_) => "The configuration file is not valid TOML".to_string(),
            ApiError::ConfigValidationError { field, .. } => {
                format!("Configuration problem in '{}'", field)
            }
            ApiError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
            ApiError::BindError { address, .. } => {
                format!("Cannot listen on {}", address)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::IoError(_) => "Check that the configuration file exists and is readable",
            ApiError::TomlParseError(_) => "Fix the syntax of the configuration file",
            ApiError::ConfigValidationError { .. } | ApiError::InvalidConfigValueError { .. } => {
                "Correct the value via --help, the config file or the environment"
            }
            ApiError::BindError { .. } => "Choose another --port or stop the process using it",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::ConfigValidationError { .. }
            | ApiError::InvalidConfigValueError { .. }
            | ApiError::TomlParseError(_) => 2,
            ApiError::IoError(_) | ApiError::BindError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
