//! Canonical request construction for the TC3-HMAC-SHA256 scheme.
//!
//! TC3 API calls always take the same shape on the wire: a `POST` to `/` with
//! no query string and a JSON body. The canonical request is therefore mostly
//! fixed:
//!
//! ```text
//! POST\n
//! /\n
//! \n
//! content-type:application/json; charset=utf-8\n
//! host:<endpoint>\n
//! x-tc-action:<action, lowercased>\n
//! \n
//! content-type;host;x-tc-action\n
//! HashedPayload
//! ```
//!
//! Only the host line, the action line, and the payload hash vary per call.

use sha2::{Digest, Sha256};

/// Content type sent (and signed) on every TC3 request.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// The fixed signed-header list, in canonical order.
pub const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

/// Hex-encode the SHA-256 digest of the serialized payload.
///
/// The same byte slice passed here must be transmitted verbatim as the HTTP
/// body; any difference makes the remote verifier compute a different payload
/// hash and reject the signature.
///
/// # Examples
///
/// ```
/// use tcstack_auth::canonical::hash_payload;
///
/// assert_eq!(
///     hash_payload(b"{}"),
///     "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Build the canonical headers block: three lines in fixed order, keyed by
/// lowercase header name, without a trailing newline.
#[must_use]
pub fn build_canonical_headers(endpoint: &str, action_name: &str) -> String {
    format!(
        "content-type:{CONTENT_TYPE}\nhost:{endpoint}\nx-tc-action:{action}",
        action = action_name.to_lowercase()
    )
}

/// Build the full canonical request string for one call.
///
/// # Examples
///
/// ```
/// use tcstack_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "asr.tencentcloudapi.com",
///     "SentenceRecognition",
///     "015abd7f5cc57a2dd94b7590f04ad8084273905ee33ec5cebeae62276a97f862",
/// );
/// assert!(canonical.starts_with("POST\n/\n\n"));
/// assert!(canonical.contains("x-tc-action:sentencerecognition\n"));
/// ```
#[must_use]
pub fn build_canonical_request(endpoint: &str, action_name: &str, payload_hash: &str) -> String {
    let canonical_headers = build_canonical_headers(endpoint, action_name);

    format!("POST\n/\n\n{canonical_headers}\n\n{SIGNED_HEADERS}\n{payload_hash}")
}
