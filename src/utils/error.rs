use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Request to {url} failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatusError { url: String, status: StatusCode },

    #[error("Response body is not valid JSON: {0}")]
    ParseError(#[source] serde_json::Error),

    #[error("Invalid product data{}: {message}", index_suffix(.index))]
    ValidationError {
        index: Option<usize>,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Interrupted before the request completed")]
    Interrupted,
}

/// Coarse grouping of [`ConnectorError`] used for reporting and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Parse,
    Validation,
    Config,
    Interrupted,
}

impl ConnectorError {
    pub fn validation(index: Option<usize>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            index,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TransportError { .. } | Self::HttpStatusError { .. } => ErrorCategory::Transport,
            Self::ParseError(_) => ErrorCategory::Parse,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::IoError(_) => {
                ErrorCategory::Config
            }
            Self::Interrupted => ErrorCategory::Interrupted,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// HTTP status of a rejected response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatusError { status, .. } => Some(*status),
            Self::TransportError { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Transport => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Validation => 4,
            ErrorCategory::Interrupted => 130,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TransportError { url, source } if source.is_timeout() => {
                format!("Timed out waiting for {}", url)
            }
            Self::TransportError { url, source } if source.is_connect() => {
                format!("Could not connect to {}", url)
            }
            Self::HttpStatusError { status, .. } => {
                format!("The product service answered with HTTP {}", status)
            }
            Self::ParseError(_) => "The product service did not return valid JSON".to_string(),
            Self::ValidationError { .. } => {
                format!("The product list is malformed: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => {
                "Check that the product service is running and the endpoint is correct"
            }
            ErrorCategory::Parse => "Check that the endpoint serves the product list as JSON",
            ErrorCategory::Validation => {
                "Every product needs a string 'name' and a numeric 'price'"
            }
            ErrorCategory::Config => "Review the --endpoint/--timeout flags or the config file",
            ErrorCategory::Interrupted => "Run the command again to retry",
        }
    }
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
