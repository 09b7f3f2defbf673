//! Credential pair handling for Tencent Cloud API calls.

use std::fmt;

/// Environment variable holding the secret ID.
pub const SECRET_ID_ENV: &str = "TENCENT_CLOUD_SECRET_ID";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "TENCENT_CLOUD_SECRET_KEY";

/// A long-lived Tencent Cloud credential pair.
///
/// Both components are opaque ASCII strings, immutable for the process
/// lifetime. The pair is passed explicitly to the signing routine; nothing in
/// this crate persists or logs it, and [`fmt::Debug`] redacts the secret key.
///
/// An empty pair is accepted: signing still succeeds locally, and the remote
/// service rejects the call as an authentication failure. This matches how
/// unset credentials surface everywhere else in the stack.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    secret_id: String,
    secret_key: String,
}

impl Credentials {
    /// Create a credential pair from explicit values.
    #[must_use]
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Load the credential pair from `TENCENT_CLOUD_SECRET_ID` and
    /// `TENCENT_CLOUD_SECRET_KEY`, defaulting to empty strings when unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            secret_id: std::env::var(SECRET_ID_ENV).unwrap_or_default(),
            secret_key: std::env::var(SECRET_KEY_ENV).unwrap_or_default(),
        }
    }

    /// The secret ID, as embedded in the `Credential=` clause of the
    /// authorization header.
    #[must_use]
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// The secret key. Only the signing routine reads this.
    #[must_use]
    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Whether both components are non-empty.
    ///
    /// Callers may use this to warn early instead of waiting for the remote
    /// service to reject the signature.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.secret_id.is_empty() && !self.secret_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
