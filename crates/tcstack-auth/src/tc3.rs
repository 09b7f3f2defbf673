//! TC3-HMAC-SHA256 signature computation.
//!
//! The final signature is the last link of a key-derivation chain:
//!
//! ```text
//! kDate    = HMAC-SHA256(key = "TC3" + SecretKey, msg = Date)
//! kService = HMAC-SHA256(key = kDate,             msg = Service)
//! kSigning = HMAC-SHA256(key = kService,          msg = "tc3_request")
//! Signature = hex(HMAC-SHA256(key = kSigning,     msg = StringToSign))
//! ```
//!
//! Each intermediate key is the raw 32-byte MAC output, not its hex form. The
//! string to sign covers the hashed canonical request, so the signature covers
//! the full semantic content of the call.
//!
//! Signing is total: it accepts any byte payload and any credential strings,
//! including empty ones. Malformed inputs surface only as a remote rejection.

use chrono::DateTime;
use hmac::{Hmac, KeyInit, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::action::Action;
use crate::canonical::{self, SIGNED_HEADERS};
use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// The algorithm tag embedded in the string to sign and the authorization
/// header.
pub const ALGORITHM: &str = "TC3-HMAC-SHA256";

/// The fixed literal terminating the credential scope and the key chain.
const SCOPE_SUFFIX: &str = "tc3_request";

/// The prefix mixed into the secret key for the first derivation step.
const KEY_PREFIX: &str = "TC3";

/// The engine's output for one call: an authorization header value and the
/// timestamp it embeds.
///
/// A `SignedRequest` has no independent lifecycle. It is computed fresh per
/// call and becomes unusable once the remote signing window for its timestamp
/// expires, so it must never be cached or reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// The full `Authorization` header value.
    pub authorization: String,
    /// Seconds since the epoch, as sent in `X-TC-Timestamp`. This is the same
    /// integer embedded in the string to sign; transmitting any other value
    /// makes the remote verifier recompute a different signature.
    pub timestamp: String,
}

/// Sign one call at the current time.
///
/// `payload` must be the exact byte sequence later transmitted as the HTTP
/// body; the serialize-once discipline lives with the caller.
#[must_use]
pub fn sign(credentials: &Credentials, action: &Action, payload: &[u8]) -> SignedRequest {
    sign_at(credentials, action, payload, chrono::Utc::now().timestamp())
}

/// Sign one call at an explicit timestamp (seconds since the epoch).
///
/// Fully deterministic: fixed inputs always produce a byte-identical
/// authorization header. Tests pin golden vectors through this entry point.
#[must_use]
pub fn sign_at(
    credentials: &Credentials,
    action: &Action,
    payload: &[u8],
    timestamp: i64,
) -> SignedRequest {
    let scope = credential_scope(timestamp, action.service());
    let signature = compute_signature_at(credentials, action, payload, timestamp, &scope);

    SignedRequest {
        authorization: format!(
            "{ALGORITHM} Credential={id}/{scope}, SignedHeaders={SIGNED_HEADERS}, \
             Signature={signature}",
            id = credentials.secret_id()
        ),
        timestamp: timestamp.to_string(),
    }
}

/// Recompute the signature for the given inputs and compare it against a
/// provided hex signature in constant time.
///
/// Useful for testing callers against a mock endpoint that verifies what the
/// real service would.
#[must_use]
pub fn verify(
    credentials: &Credentials,
    action: &Action,
    payload: &[u8],
    timestamp: i64,
    provided_signature: &str,
) -> bool {
    let scope = credential_scope(timestamp, action.service());
    let expected = compute_signature_at(credentials, action, payload, timestamp, &scope);
    expected
        .as_bytes()
        .ct_eq(provided_signature.as_bytes())
        .into()
}

/// Run the full signing pipeline down to the hex signature.
fn compute_signature_at(
    credentials: &Credentials,
    action: &Action,
    payload: &[u8],
    timestamp: i64,
    scope: &str,
) -> String {
    let date = scope_date(timestamp);
    let hashed_payload = canonical::hash_payload(payload);
    let canonical_request =
        canonical::build_canonical_request(action.endpoint(), action.name(), &hashed_payload);

    debug!(canonical_request, "built canonical request");

    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign = build_string_to_sign(timestamp, scope, &hashed_canonical_request);

    debug!(string_to_sign, "built string to sign");

    let signing_key = derive_signing_key(credentials.secret_key(), &date, action.service());
    compute_signature(&signing_key, &string_to_sign)
}

/// Build the credential scope for a timestamp and service:
/// `<UTC date>/<service>/tc3_request`.
///
/// The date comes from the same timestamp embedded in the string to sign,
/// never from a second wall-clock read.
#[must_use]
pub fn credential_scope(timestamp: i64, service: &str) -> String {
    format!("{}/{service}/{SCOPE_SUFFIX}", scope_date(timestamp))
}

/// Build the string to sign:
/// `TC3-HMAC-SHA256\n<timestamp>\n<scope>\n<hashed canonical request>`.
#[must_use]
pub fn build_string_to_sign(
    timestamp: i64,
    credential_scope: &str,
    hashed_canonical_request: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{hashed_canonical_request}")
}

/// Derive the signing key via the three-step HMAC chain over
/// (date, service, `tc3_request`).
///
/// The raw secret key never signs application data directly; compromise of a
/// derived key is bounded to one day and one service.
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("{KEY_PREFIX}{secret_key}").as_bytes(), date.as_bytes());
    let k_service = hmac_sha256(&k_date, service.as_bytes());
    hmac_sha256(&k_service, SCOPE_SUFFIX.as_bytes())
}

/// Compute the final hex signature over the string to sign.
#[must_use]
pub fn compute_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex::encode(hmac_sha256(signing_key, string_to_sign.as_bytes()))
}

/// The UTC calendar date of a timestamp in `YYYY-MM-DD` form.
///
/// Timestamps outside chrono's representable range fall back to the epoch
/// date, keeping the routine total.
fn scope_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept any key length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
