//! Azure OpenAI text-to-speech client.
//!
//! Sends one blocking HTTPS POST per paragraph to the configured deployment
//! URL:
//!
//! ```text
//! POST <AZURE_TTS_URL>
//! Content-Type: application/json
//! api-key: <AZURE_API_KEY>
//!
//! {"model": "tts-1-hd", "input": "<text>", "voice": "<voice>"}
//! ```
//!
//! A 2xx response body is the encoded audio. Any other status is reported as
//! [`TtsError::SynthesisStatus`]. No retries and no explicit timeout beyond
//! the reqwest defaults.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::config::AzureConfig;
use crate::error::TtsError;
use crate::voice::Voice;
use crate::{SpeechSynthesizer, SynthesizedAudio};

/// Model requested for every synthesis call.
pub const TTS_MODEL: &str = "tts-1-hd";

/// Header carrying the deployment key.
pub const API_KEY_HEADER: &str = "api-key";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: Voice,
}

pub struct AzureSpeech {
    client: Client,
    url: String,
    api_key: String,
}

impl AzureSpeech {
    pub fn new(config: &AzureConfig) -> Result<Self, TtsError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: config.tts_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl SpeechSynthesizer for AzureSpeech {
    fn synthesize(&self, text: &str, voice: Voice) -> Result<SynthesizedAudio, TtsError> {
        let request = SpeechRequest {
            model: TTS_MODEL,
            input: text,
            voice,
        };

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::error!("Speech synthesis returned {status}");
            return Err(TtsError::SynthesisStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes()?.to_vec();
        log::debug!("Synthesized {} bytes with voice {voice}", bytes.len());
        Ok(SynthesizedAudio { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn speech_for(server: &mockito::Server) -> AzureSpeech {
        AzureSpeech::new(&AzureConfig {
            tts_url: format!("{}/openai/deployments/tts/audio/speech", server.url()),
            api_key: "test-key".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn posts_model_text_and_voice() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/openai/deployments/tts/audio/speech")
            .match_header("api-key", "test-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "model": "tts-1-hd",
                "input": "Bonjour à tous",
                "voice": "fable",
            })))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(b"ID3\x04fake-mp3")
            .create();

        let audio = speech_for(&server)
            .synthesize("Bonjour à tous", Voice::Fable)
            .unwrap();

        mock.assert();
        assert_eq!(audio.bytes, b"ID3\x04fake-mp3".to_vec());
    }

    #[test]
    fn error_status_is_reported_with_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/openai/deployments/tts/audio/speech")
            .with_status(429)
            .with_body("rate limited")
            .expect(1)
            .create();

        let err = speech_for(&server)
            .synthesize("hello", Voice::Alloy)
            .unwrap_err();

        mock.assert();
        match err {
            TtsError::SynthesisStatus { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn synthesize_to_file_writes_nothing_on_failure() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/openai/deployments/tts/audio/speech")
            .with_status(500)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        let result = speech_for(&server).synthesize_to_file("hello", Voice::Echo, &path);

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
