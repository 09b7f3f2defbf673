//! Signed HTTP caller for Tencent Cloud APIs.
//!
//! This crate turns a signed action into an actual outbound call: it
//! serializes the payload once, asks [`tcstack_auth`] for the authorization
//! header, attaches the `X-TC-*` header set, and POSTs the exact bytes that
//! were hashed during signing. Typed wrappers for the two actions the product
//! uses (ASR sentence recognition and TMT text translation) sit on top.
//!
//! # Usage
//!
//! ```rust,no_run
//! use tcstack_client::{TcClient, tmt::TextTranslateRequest};
//!
//! # async fn run() -> Result<(), tcstack_client::ClientError> {
//! let client = TcClient::from_env()?;
//! let translated = client
//!     .translate_text(&TextTranslateRequest::en_to_zh("hello"))
//!     .await?;
//! println!("{}", translated.target_text);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`asr`] - Sentence-level speech recognition action
//! - [`client`] - The signed caller itself
//! - [`error`] - Client error taxonomy
//! - [`response`] - Tencent Cloud response envelope parsing
//! - [`tmt`] - Text translation action
//! - [`transcribe`] - Recognize-then-translate convenience pipeline

pub mod asr;
pub mod client;
pub mod error;
pub mod response;
pub mod tmt;
pub mod transcribe;

pub use client::TcClient;
pub use error::{ClientError, ClientResult};
pub use response::ApiError;
pub use transcribe::Transcription;
