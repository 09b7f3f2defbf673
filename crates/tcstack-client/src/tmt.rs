//! Text translation (`tmt` / `TextTranslate`).

use serde::{Deserialize, Serialize};

use tcstack_auth::Action;

use crate::client::TcClient;
use crate::error::ClientResult;

/// API host for the translation service.
pub const ENDPOINT: &str = "tmt.tencentcloudapi.com";

/// Service namespace embedded in the credential scope.
pub const SERVICE: &str = "tmt";

/// API version for `TextTranslate`.
pub const VERSION: &str = "2018-03-21";

/// Region the translation service is called in. Region routing does not
/// affect the signature, only the `X-TC-Region` header.
pub const DEFAULT_REGION: &str = "ap-guangzhou";

/// Action descriptor for a `TextTranslate` call in the default region.
#[must_use]
pub fn text_translate() -> Action {
    Action::new(ENDPOINT, SERVICE, "TextTranslate", VERSION).with_region(DEFAULT_REGION)
}

/// Request payload for `TextTranslate`.
#[derive(Debug, Clone, Serialize)]
pub struct TextTranslateRequest {
    /// The text to translate.
    #[serde(rename = "SourceText")]
    pub source_text: String,
    /// Source language code, e.g. `en`.
    #[serde(rename = "Source")]
    pub source: String,
    /// Target language code, e.g. `zh`.
    #[serde(rename = "Target")]
    pub target: String,
    /// Project ID, 0 for the default project.
    #[serde(rename = "ProjectId")]
    pub project_id: u32,
}

impl TextTranslateRequest {
    /// Translate between an explicit language pair.
    #[must_use]
    pub fn new(
        source_text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            source: source.into(),
            target: target.into(),
            project_id: 0,
        }
    }

    /// English-to-Chinese translation, the pair the product uses.
    #[must_use]
    pub fn en_to_zh(source_text: impl Into<String>) -> Self {
        Self::new(source_text, "en", "zh")
    }
}

/// Response body of `TextTranslate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextTranslateResponse {
    /// The translated text.
    #[serde(rename = "TargetText", default)]
    pub target_text: String,
    /// Echoed source language code.
    #[serde(rename = "Source", default)]
    pub source: String,
    /// Echoed target language code.
    #[serde(rename = "Target", default)]
    pub target: String,
}

impl TcClient {
    /// Translate a piece of text in the default region.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ClientError`] from the underlying signed call.
    pub async fn translate_text(
        &self,
        request: &TextTranslateRequest,
    ) -> ClientResult<TextTranslateResponse> {
        self.call_api(&text_translate(), request).await
    }
}
