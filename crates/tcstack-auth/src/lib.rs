//! TC3-HMAC-SHA256 request signing for Tencent Cloud APIs.
//!
//! This crate implements the client side of the TC3 signing scheme: given a
//! credential pair, an action descriptor, and the serialized request payload,
//! it deterministically produces the `Authorization` header value and the
//! timestamp that authenticate one outbound API call.
//!
//! The signing key is never the raw secret. It is derived through a chain of
//! keyed hashes scoped to the request date and target service, so each derived
//! key is valid for one day and one service only.
//!
//! # Usage
//!
//! ```rust
//! use tcstack_auth::{Action, Credentials, sign_at};
//!
//! let credentials = Credentials::new("AKID", "secret");
//! let action = Action::new("asr.tencentcloudapi.com", "asr", "SentenceRecognition", "2019-06-14");
//!
//! // `sign` captures the current time; `sign_at` takes an explicit timestamp.
//! let signed = sign_at(&credentials, &action, br#"{"a":1}"#, 1_700_000_000);
//! assert!(signed.authorization.starts_with("TC3-HMAC-SHA256 Credential=AKID/"));
//! ```
//!
//! # Modules
//!
//! - [`action`] - Action descriptors identifying a remote operation
//! - [`canonical`] - Canonical request construction for the TC3 scheme
//! - [`credentials`] - Credential pair handling
//! - [`tc3`] - Signature computation and verification

pub mod action;
pub mod canonical;
pub mod credentials;
pub mod tc3;

pub use action::Action;
pub use canonical::{CONTENT_TYPE, SIGNED_HEADERS, hash_payload};
pub use credentials::Credentials;
pub use tc3::{ALGORITHM, SignedRequest, sign, sign_at, verify};
