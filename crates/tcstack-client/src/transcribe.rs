//! Recognize-then-translate convenience pipeline.
//!
//! Mirrors the product's transcription flow: recognize an English WAV clip,
//! then translate the transcript to Chinese. A missing transcript is a hard
//! failure; a failed translation is tolerated and the transcript is returned
//! alone.

use tracing::warn;

use crate::asr::SentenceRecognitionRequest;
use crate::client::TcClient;
use crate::error::{ClientError, ClientResult};
use crate::tmt::{TextTranslateRequest, TextTranslateResponse};

/// A recognized transcript with its optional Chinese translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    /// The recognized English text.
    pub transcript: String,
    /// The Chinese translation, when the translation call succeeded.
    pub translation: Option<String>,
}

impl TcClient {
    /// Recognize a base64 WAV clip and translate the transcript to Chinese.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingField`] when recognition succeeds but
    /// yields no transcript, and propagates recognition errors. Translation
    /// errors are logged and swallowed; the transcript is returned without a
    /// translation.
    pub async fn transcribe_and_translate(
        &self,
        audio_data: &str,
        audio_key: &str,
    ) -> ClientResult<Transcription> {
        let recognition = self
            .recognize_sentence(&SentenceRecognitionRequest::wav_16k_en(audio_data, audio_key))
            .await?;
        let transcript = require_transcript(recognition.result)?;

        let translation = accept_translation(
            self.translate_text(&TextTranslateRequest::en_to_zh(&transcript))
                .await,
        );

        Ok(Transcription {
            transcript,
            translation,
        })
    }
}

/// A missing or empty transcript makes the whole pipeline fail.
fn require_transcript(result: Option<String>) -> ClientResult<String> {
    result
        .filter(|text| !text.is_empty())
        .ok_or(ClientError::MissingField("Response.Result"))
}

/// Keep the transcript usable when the translation call fails or comes back
/// empty.
fn accept_translation(outcome: ClientResult<TextTranslateResponse>) -> Option<String> {
    match outcome {
        Ok(translated) if !translated.target_text.is_empty() => Some(translated.target_text),
        Ok(_) => None,
        Err(error) => {
            warn!(%error, "translation failed, returning transcript only");
            None
        }
    }
}
