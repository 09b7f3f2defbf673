//! Tencent Cloud response envelope parsing.
//!
//! Every TC3 API response wraps its body in a `Response` member:
//!
//! ```text
//! {"Response": {"RequestId": "...", ...action fields...}}
//! {"Response": {"RequestId": "...", "Error": {"Code": "...", "Message": "..."}}}
//! ```
//!
//! Failures, including authentication rejections, arrive inside an HTTP 200
//! envelope; callers must branch on the `Error` member rather than the status
//! code.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// The `Error` member of a response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Provider error code, e.g. `AuthFailure.SignatureFailure`.
    #[serde(rename = "Code")]
    pub code: String,
    /// Human-readable message.
    #[serde(rename = "Message")]
    pub message: String,
}

/// Unwrap a raw envelope into the typed action response.
///
/// Returns [`ClientError::Api`] when the envelope carries an `Error` member,
/// otherwise deserializes the `Response` object into `T`.
pub fn parse_envelope<T: DeserializeOwned>(envelope: Value) -> Result<T, ClientError> {
    let response = envelope.get("Response").cloned().unwrap_or(Value::Null);

    let request_id = response
        .get("RequestId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    if let Some(error) = response.get("Error") {
        let error: ApiError = serde_json::from_value(error.clone())?;
        return Err(ClientError::Api {
            code: error.code,
            message: error.message,
            request_id,
        });
    }

    Ok(serde_json::from_value(response)?)
}
