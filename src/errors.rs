use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Explorer API operations
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV report writing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Explorer API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network-level failure (connection, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Non-success HTTP status from the explorer
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Explorer returned 429 Too Many Requests
    #[error("Rate limited by the explorer API")]
    RateLimited,

    /// Failed to deserialise the explorer response
    #[error("Deserialisation failed: {0}")]
    DeserialisationFailed(String),

    /// Retry limit exceeded while fetching an address
    #[error("Max retries exceeded fetching {address}")]
    MaxRetriesExceeded { address: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for explorer API operations
pub type ApiResult<T> = Result<T, ApiError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestFailed(err.to_string())
    }
}
