use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred.";
pub const DECODE_ERROR_MESSAGE: &str = "The response body could not be decoded.";

/// Transport-tier error produced by the API client.
///
/// `status_code` is the HTTP status of the failed response, or `0` when no
/// response was received at all (connect failure, timeout).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn network() -> Self {
        Self::new(NETWORK_ERROR_MESSAGE, 0)
    }

    /// Builds the error for a response that arrived with a failing status.
    ///
    /// The body's `message` field wins when it is a non-empty string,
    /// otherwise the fixed default for the status is used.
    pub fn from_response(status_code: u16, body: Option<serde_json::Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_error_message(status_code).to_string());

        Self {
            message,
            status_code,
            data: body,
        }
    }

    pub fn is_network_error(&self) -> bool {
        self.status_code == 0
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }
}

pub fn default_error_message(status_code: u16) -> &'static str {
    match status_code {
        400 => "The request was invalid.",
        401 => "Authentication is required.",
        403 => "Access was denied.",
        404 => "The requested resource could not be found.",
        500 => "A server error occurred.",
        _ => "An error occurred.",
    }
}

#[derive(Error, Debug)]
pub enum BlogError {
    #[error(transparent)]
    ApiError(#[from] ApiError),

    /// Caller misuse detected before any request is sent.
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("HTTP client construction failed: {0}")]
    ClientBuildError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BlogError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// HTTP status of a transport failure; `None` for every other tier.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError(e) => Some(e.status_code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError(e) if e.is_not_found())
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
                | Self::ClientBuildError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;
