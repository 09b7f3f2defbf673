//! Error types for signed API calls.
//!
//! The taxonomy keeps transport failures, malformed responses, and remote
//! application errors distinct: a signature the remote service rejects comes
//! back as an [`ClientError::Api`] with a provider error code, never as a
//! transport error.

/// Errors surfaced by the signed caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network-level failure: connect, DNS, timeout, or a broken body stream.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload could not be serialized, or the response body was not
    /// valid JSON in the shape the caller expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The action's endpoint does not form a valid `https://` URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A descriptor field contains bytes that cannot appear in an HTTP header.
    #[error("invalid value for header {0}")]
    InvalidHeader(String),

    /// The remote service processed the call and reported a failure, either
    /// as an authentication rejection or an application-level error. Both
    /// arrive inside an HTTP 200 envelope and are only distinguishable by
    /// their provider error code.
    #[error("API error {code}: {message} (request id {request_id})")]
    Api {
        /// Provider error code, e.g. `AuthFailure.SignatureFailure`.
        code: String,
        /// Human-readable message from the provider.
        message: String,
        /// The provider-assigned request ID, for support tickets.
        request_id: String,
    },

    /// A 200 response carried neither an error nor the field the caller
    /// needs.
    #[error("response missing expected field {0}")]
    MissingField(&'static str),
}

/// Convenience result type for signed API calls.
pub type ClientResult<T> = Result<T, ClientError>;
