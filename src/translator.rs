use base64::Engine;
use serde::{Deserialize, Serialize};

const CHAT_URL: &str = "https://japan-assist.onrender.com/chat";

/// Without a timeout a hung backend would leave the UI in its loading
/// state forever.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Serialize)]
struct ChatRequest<'a> {
    text: &'a str,
    lang: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
    audio_base64: Option<String>,
}

/// A completed translation: the text to display plus the decoded audio
/// clip, when the backend synthesized one.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub audio: Option<Vec<u8>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("backend returned {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Client for the Japan Assist chat endpoint.
pub struct Translator {
    client: reqwest::Client,
    endpoint: String,
}

impl Translator {
    pub fn new() -> Self {
        Self::with_endpoint(CHAT_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Send one translation request. `text` must already be trimmed and
    /// non-empty; empty input is rejected before this layer.
    pub async fn translate(&self, text: &str, lang: &str) -> Result<Translation, TranslateError> {
        log::info!("Sending translation request to {}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { text, lang })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        log::info!("Backend answered with status {status}");

        interpret_response(status, &body)
    }
}

/// Turn a raw HTTP outcome into a `Translation`. Kept free of any
/// transport so the response handling is testable on its own.
fn interpret_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<Translation, TranslateError> {
    if !status.is_success() {
        return Err(TranslateError::Remote {
            status,
            body: body.to_string(),
        });
    }

    let parsed: ChatResponse = serde_json::from_str(body)?;

    // A clip that fails to decode costs us the audio, not the translation.
    let audio = parsed.audio_base64.as_deref().and_then(|b64| {
        match base64::engine::general_purpose::STANDARD.decode(b64) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                log::warn!("Discarding undecodable audio payload: {e}");
                None
            }
        }
    });

    Ok(Translation {
        text: parsed.text,
        audio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn success_without_audio() {
        let t = interpret_response(StatusCode::OK, r#"{"text": "こんにちは"}"#).unwrap();
        assert_eq!(t.text, "こんにちは");
        assert!(t.audio.is_none());
    }

    #[test]
    fn success_with_audio_decodes_payload() {
        let t =
            interpret_response(StatusCode::OK, r#"{"text": "hola", "audio_base64": "QUJD"}"#)
                .unwrap();
        assert_eq!(t.text, "hola");
        assert_eq!(t.audio.as_deref(), Some(b"ABC".as_slice()));
    }

    #[test]
    fn null_audio_field_is_no_audio() {
        let t = interpret_response(StatusCode::OK, r#"{"text": "x", "audio_base64": null}"#)
            .unwrap();
        assert!(t.audio.is_none());
    }

    #[test]
    fn undecodable_audio_keeps_the_text() {
        let t = interpret_response(
            StatusCode::OK,
            r#"{"text": "hola", "audio_base64": "%%%not-base64%%%"}"#,
        )
        .unwrap();
        assert_eq!(t.text, "hola");
        assert!(t.audio.is_none());
    }

    #[test]
    fn server_error_carries_status_and_body() {
        let err =
            interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "server error").unwrap_err();
        match err {
            TranslateError::Remote { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "server error");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = interpret_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }

    #[test]
    fn missing_text_field_is_malformed() {
        let err = interpret_response(StatusCode::OK, r#"{"audio_base64": "QUJD"}"#).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }
}
