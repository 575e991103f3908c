use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("All {attempts} attempts failed for {identifier}: {source}")]
    RetryExhausted {
        identifier: String,
        attempts: u32,
        #[source]
        source: Box<ScrapeError>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Sink error: {message}")]
    SinkError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    /// Decode failures are local to a single visit and never retried.
    pub fn is_decode(&self) -> bool {
        matches!(self, ScrapeError::Decode { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::Transport(_) => ErrorCategory::Network,
            ScrapeError::RetryExhausted { source, .. } => source.category(),
            ScrapeError::Decode { .. } | ScrapeError::SerializationError(_) => ErrorCategory::Data,
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ScrapeError::CsvError(_) | ScrapeError::IoError(_) | ScrapeError::SinkError { .. } => {
                ErrorCategory::Storage
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScrapeError::Decode { .. } => ErrorSeverity::Low,
            ScrapeError::Transport(_) | ScrapeError::RetryExhausted { .. } => ErrorSeverity::Medium,
            ScrapeError::SerializationError(_) | ScrapeError::SinkError { .. } => ErrorSeverity::High,
            ScrapeError::CsvError(_) | ScrapeError::IoError(_) => ErrorSeverity::Critical,
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and that the dining API is reachable, then rerun"
            }
            ErrorCategory::Data => "The API response format may have changed; inspect the raw payload",
            ErrorCategory::Configuration => "Fix the configuration file or command-line arguments",
            ErrorCategory::Storage => "Check that the output path exists and is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::RetryExhausted {
                identifier,
                attempts,
                ..
            } => format!(
                "Could not reach {} after {} attempts",
                identifier, attempts
            ),
            ScrapeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ScrapeError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
