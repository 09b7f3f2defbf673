//! Sentence-level speech recognition (`asr` / `SentenceRecognition`).

use serde::{Deserialize, Serialize};

use tcstack_auth::Action;

use crate::client::TcClient;
use crate::error::ClientResult;

/// API host for the speech recognition service.
pub const ENDPOINT: &str = "asr.tencentcloudapi.com";

/// Service namespace embedded in the credential scope.
pub const SERVICE: &str = "asr";

/// API version for `SentenceRecognition`.
pub const VERSION: &str = "2019-06-14";

/// Action descriptor for a `SentenceRecognition` call.
#[must_use]
pub fn sentence_recognition() -> Action {
    Action::new(ENDPOINT, SERVICE, "SentenceRecognition", VERSION)
}

/// Request payload for `SentenceRecognition`.
///
/// Field names follow the provider's wire format.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceRecognitionRequest {
    /// Caller-chosen key identifying the audio clip, echoed in logs.
    #[serde(rename = "UsrAudioKey")]
    pub usr_audio_key: String,
    /// Sub-service type; 2 selects one-sentence recognition.
    #[serde(rename = "SubServiceType")]
    pub sub_service_type: u32,
    /// Project ID, 0 for the default project.
    #[serde(rename = "ProjectId")]
    pub project_id: u32,
    /// Recognition engine, e.g. `16k_en`.
    #[serde(rename = "EngSerViceType")]
    pub engine_service_type: String,
    /// Audio container format, e.g. `wav`.
    #[serde(rename = "VoiceFormat")]
    pub voice_format: String,
    /// Base64-encoded audio bytes.
    #[serde(rename = "Data")]
    pub data: String,
    /// Audio source type; 1 means the audio is inlined in `Data`.
    #[serde(rename = "SourceType")]
    pub source_type: u32,
}

impl SentenceRecognitionRequest {
    /// Request for an inlined base64 WAV clip against the 16k English engine.
    #[must_use]
    pub fn wav_16k_en(data: impl Into<String>, usr_audio_key: impl Into<String>) -> Self {
        Self {
            usr_audio_key: usr_audio_key.into(),
            sub_service_type: 2,
            project_id: 0,
            engine_service_type: "16k_en".to_owned(),
            voice_format: "wav".to_owned(),
            data: data.into(),
            source_type: 1,
        }
    }
}

/// Response body of `SentenceRecognition`.
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceRecognitionResponse {
    /// The recognized transcript. Absent when the service accepted the call
    /// but produced no transcript.
    #[serde(rename = "Result", default)]
    pub result: Option<String>,
    /// Duration of the recognized audio in milliseconds, when reported.
    #[serde(rename = "AudioDuration", default)]
    pub audio_duration: Option<i64>,
}

impl TcClient {
    /// Recognize one sentence of speech.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ClientError`] from the underlying signed call.
    pub async fn recognize_sentence(
        &self,
        request: &SentenceRecognitionRequest,
    ) -> ClientResult<SentenceRecognitionResponse> {
        self.call_api(&sentence_recognition(), request).await
    }
}
