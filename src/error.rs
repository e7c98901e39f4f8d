//! Fetch Errors
//!
//! Everything that can go wrong while loading products. The UI collapses all
//! of these into a single error flag; the detail only reaches the log.

/// Common result type for product fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Product fetch errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request never produced a response (offline, CORS, DNS...)
    Network(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body was not a JSON array of products
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Server responded with status {}", code),
            FetchError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
