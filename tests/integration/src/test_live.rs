//! Live tests against the real Tencent Cloud endpoints.

#[cfg(test)]
mod tests {
    use tcstack_client::ClientError;
    use tcstack_client::tmt::TextTranslateRequest;

    use crate::live_client;

    #[tokio::test]
    #[ignore = "requires real Tencent Cloud credentials"]
    async fn test_should_translate_english_to_chinese() {
        let client = live_client();
        let translated = client
            .translate_text(&TextTranslateRequest::en_to_zh("hello"))
            .await
            .expect("translate_text should succeed");
        assert!(!translated.target_text.is_empty());
        assert_eq!(translated.source, "en");
        assert_eq!(translated.target, "zh");
    }

    #[tokio::test]
    #[ignore = "requires real Tencent Cloud credentials"]
    async fn test_should_fail_transcription_without_transport_error_for_bad_audio() {
        // Unrecognizable audio either trips a provider-side error or yields
        // an empty transcript; neither may surface as a transport failure.
        let client = live_client();
        let result = client
            .transcribe_and_translate("bm90LWEtcmVhbC13YXY=", "bad-audio")
            .await;
        match result {
            Err(ClientError::Api { .. } | ClientError::MissingField(_)) => {}
            other => panic!("expected a remote or missing-transcript error, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_should_surface_bad_credentials_as_api_error() {
        // A syntactically valid call signed with garbage credentials must come
        // back as a remote authentication failure, not a transport error.
        let client = tcstack_client::TcClient::new(tcstack_auth::Credentials::new(
            "AKIDinvalid",
            "invalid",
        ))
        .expect("client should build");

        let result = client
            .translate_text(&TextTranslateRequest::en_to_zh("hello"))
            .await;
        match result {
            Err(ClientError::Api { code, .. }) => {
                assert!(code.starts_with("AuthFailure"), "unexpected code {code}");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
