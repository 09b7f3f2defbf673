//! Integration tests for the tcstack client.
//!
//! Offline tests exercise the full request-building path against pinned
//! signature vectors. Live tests call the real Tencent Cloud endpoints, need
//! `TENCENT_CLOUD_SECRET_ID` / `TENCENT_CLOUD_SECRET_KEY` set, and are marked
//! `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run the live tests with:
//! ```text
//! cargo test -p tcstack-integration -- --ignored
//! ```

use std::sync::Once;

use tcstack_auth::Credentials;
use tcstack_client::TcClient;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a client with fixed throwaway credentials for offline tests.
#[must_use]
pub fn offline_client() -> TcClient {
    init_tracing();
    TcClient::new(Credentials::new("AKID", "secret")).expect("client should build")
}

/// Create a client from real environment credentials for live tests.
#[must_use]
pub fn live_client() -> TcClient {
    init_tracing();
    let credentials = Credentials::from_env();
    assert!(
        credentials.is_configured(),
        "live tests need TENCENT_CLOUD_SECRET_ID and TENCENT_CLOUD_SECRET_KEY"
    );
    TcClient::new(credentials).expect("client should build")
}

mod test_live;
mod test_signing;
