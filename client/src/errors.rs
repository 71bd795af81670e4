/// Error types for API operations
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    Http(reqwest::Error),
    /// The backend reported a failure, either via a non-success status or
    /// a `success: false` envelope.
    Api { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    Decode(String),
    /// Invalid or incomplete client configuration.
    Config(String),
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(err) => write!(f, "HTTP error: {}", err),
            ApiError::Api { status, message } => write!(f, "API error {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::Config(msg) => write!(f, "Config error: {}", msg),
            ApiError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}
