//! **Speech-to-Text (STT)** — convert an `AudioUpload` into a `Transcription`.
//!
//! Implement `SttBackend` for a remote OpenAI-compatible transcription API
//! (`RemoteStt`) or for tests/offline runs (`PlaceholderStt`). Recognition
//! failures are data, not errors: a backend answers `Unintelligible` or
//! `ServiceUnavailable` so the gateway can render them distinctly, and only
//! misconfiguration surfaces as `VoiceError`.

use crate::error::{VoiceError, VoiceResult};
use crate::upload::AudioUpload;
use async_trait::async_trait;
use tracing::warn;

/// Outcome of one transcription attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcription {
    /// The service recognized speech; the text is returned verbatim.
    Success(String),
    /// The service answered but could not map the audio to text.
    Unintelligible,
    /// The service could not be reached or answered with a failure status.
    ServiceUnavailable,
}

impl Transcription {
    pub fn is_success(&self) -> bool {
        matches!(self, Transcription::Success(_))
    }

    /// Recognized text, when there is any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Transcription::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Stable machine-readable label for APIs and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Transcription::Success(_) => "success",
            Transcription::Unintelligible => "unintelligible",
            Transcription::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl std::fmt::Display for Transcription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transcription::Success(text) => f.write_str(text),
            Transcription::Unintelligible => f.write_str("Audio could not be understood."),
            Transcription::ServiceUnavailable => {
                f.write_str("Error with the speech recognition service.")
            }
        }
    }
}

/// Classify service-reported text: blank means the audio was not understood.
fn transcription_from_text(text: &str) -> Transcription {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Transcription::Unintelligible
    } else {
        Transcription::Success(trimmed.to_string())
    }
}

/// Backend for converting uploaded audio to text.
#[async_trait]
pub trait SttBackend: Send + Sync {
    /// Transcribe one upload. No retries; the call blocks only its own task.
    async fn transcribe(&self, upload: &AudioUpload) -> VoiceResult<Transcription>;

    /// Short name for the startup status line.
    fn name(&self) -> &'static str;
}

/// Placeholder STT: returns a fixed outcome. Use for running the pipeline
/// without an API key, and for tests.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderStt {
    /// If set, return this instead of the default message.
    pub outcome: Option<Transcription>,
}

impl PlaceholderStt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            outcome: Some(Transcription::Success(text.into())),
        }
    }

    pub fn with_outcome(outcome: Transcription) -> Self {
        Self {
            outcome: Some(outcome),
        }
    }
}

#[async_trait]
impl SttBackend for PlaceholderStt {
    async fn transcribe(&self, upload: &AudioUpload) -> VoiceResult<Transcription> {
        if let Some(ref outcome) = self.outcome {
            return Ok(outcome.clone());
        }
        Ok(Transcription::Success(format!(
            "[STT placeholder: {} bytes from {} — set STT_API_KEY for real transcription]",
            upload.bytes.len(),
            upload.file_name
        )))
    }

    fn name(&self) -> &'static str {
        "Placeholder"
    }
}

/// Production STT backend: OpenAI-compatible transcription API.
/// Uses `STT_API_URL` (e.g. https://api.openai.com/v1), `STT_API_KEY`, and
/// `STT_MODEL` (default whisper-1).
#[derive(Debug, Clone)]
pub struct RemoteStt {
    /// Base URL without trailing slash (e.g. https://api.openai.com/v1).
    pub base_url: String,
    /// Bearer API key.
    pub api_key: String,
    /// Model: whisper-1 or gpt-4o-transcribe, etc.
    pub model: String,
    client: reqwest::Client,
}

impl RemoteStt {
    /// Build from environment: STT_API_URL, STT_API_KEY, STT_MODEL.
    pub fn from_env() -> VoiceResult<Self> {
        let base_url = std::env::var("STT_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let api_key = std::env::var("STT_API_KEY")
            .map_err(|_| VoiceError::Config("STT requires STT_API_KEY".to_string()))?;
        let model = std::env::var("STT_MODEL").unwrap_or_else(|_| "whisper-1".to_string());
        Self::new(base_url, api_key, model)
    }

    /// Create with explicit config.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> VoiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| VoiceError::Stt(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }
}

#[async_trait]
impl SttBackend for RemoteStt {
    async fn transcribe(&self, upload: &AudioUpload) -> VoiceResult<Transcription> {
        if upload.bytes.is_empty() {
            return Ok(Transcription::Unintelligible);
        }
        let url = format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        );
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime())
            .map_err(|e| VoiceError::Stt(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());
        let res = match self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                warn!(target: "scamscan::stt", "STT request failed: {}", e);
                return Ok(Transcription::ServiceUnavailable);
            }
        };
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            warn!(target: "scamscan::stt", "STT API error {}: {}", status, body);
            return Ok(Transcription::ServiceUnavailable);
        }
        let json: serde_json::Value = match res.json().await {
            Ok(json) => json,
            Err(e) => {
                warn!(target: "scamscan::stt", "STT response decode failed: {}", e);
                return Ok(Transcription::ServiceUnavailable);
            }
        };
        let text = json.get("text").and_then(|t| t.as_str()).unwrap_or("");
        Ok(transcription_from_text(text))
    }

    fn name(&self) -> &'static str {
        "Remote"
    }
}

/// Create the best available STT backend from environment:
/// `RemoteStt` if `STT_API_KEY` is set, else `PlaceholderStt`.
pub fn create_best_stt() -> Box<dyn SttBackend> {
    match RemoteStt::from_env() {
        Ok(remote) => Box::new(remote),
        Err(_) => Box::new(PlaceholderStt::new()),
    }
}
