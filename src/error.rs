//! Error types for the ReserveKit client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all ReserveKit client operations.
#[derive(Error, Debug)]
pub enum ReserveKitError {
    /// The request body could not be encoded as JSON. No request was sent.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP exchange failed (DNS, connection refused, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// ReserveKit API returned an error
    #[error("{0}")]
    Api(ApiError),

    /// The response body did not match the expected shape.
    ///
    /// Raised for both success and error responses. When `status >= 400` the
    /// server's error body itself could not be decoded, so no [`ApiError`]
    /// fields are available.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        /// HTTP status of the response
        status: u16,
        /// Raw response body
        body: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Service initialization failed.
    #[error("failed to initialize service: {source}")]
    InitService {
        /// The service that was requested
        service_id: u64,
        /// The error returned by the service lookup
        #[source]
        source: Box<ReserveKitError>,
    },

    /// A session shortcut was used before `init_service` succeeded.
    #[error("no service initialized: call init_service first")]
    ServiceNotInitialized,

    /// The client configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for ReserveKitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl ReserveKitError {
    /// The API error carried by this error, looking through context wrappers.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::InitService { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// The HTTP status of the failed response, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Decode { status, .. } => Some(*status),
            Self::InitService { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(reqwest_middleware::Error::Reqwest(err)) => err.is_timeout(),
            Self::InitService { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Whether repeating the same call could succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api(err) => err.status >= 500,
            Self::InitService { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

/// Error body returned by the ReserveKit API on any status >= 400.
///
/// ```json
/// {"status": 404, "message": "Service not found", "code": "not_found"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// HTTP status code reported by the server
    #[serde(default)]
    pub status: u16,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Machine-readable error code (e.g. "not_found")
    #[serde(default)]
    pub code: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API error: {} (code: {}, status: {})",
            self.message, self.code, self.status
        )
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: code.into(),
        }
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.code == error_codes::NOT_FOUND
    }

    /// Check if the request conflicts with existing state (e.g. a full slot).
    pub fn is_conflict(&self) -> bool {
        self.status == 409 || self.code == error_codes::CONFLICT
    }

    /// Check if the credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.code == error_codes::UNAUTHORIZED
    }
}

/// Known ReserveKit error codes for pattern matching.
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const CONFLICT: &str = "conflict";
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const VALIDATION_ERROR: &str = "validation_error";
}
