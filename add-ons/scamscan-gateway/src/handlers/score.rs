//! Scoring pipeline: multipart upload → spool → transcription → keyword tally → fraud score.
//!
//! `POST /process` renders the HTML result view; `POST /api/v1/analyze` answers
//! the same report as JSON. Scoring only runs on a genuine transcript; the
//! two recognition-failure outcomes render as notices with no score attached.

use crate::spool::SpooledAudio;
use crate::{ui, AppState};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use scamscan_core::{
    count_keyword_hits, fraud_score, whitespace_word_count, CoreError, ScamLexicon,
};
use scamscan_voice::{AudioUpload, Transcription, VoiceError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Failures that abort a scoring request.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Voice(#[from] VoiceError),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Spool error: {0}")]
    Spool(#[from] std::io::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(target: "scamscan::gateway", "Request failed: {}", self);
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Result of one scoring request. The numeric fields are present only when the
/// transcription succeeded; failure outcomes carry the notice text instead.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub outcome: &'static str,
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scam_hits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// GET / — the upload form.
pub async fn index_get(State(state): State<AppState>) -> Response {
    ui::upload_page(&state.config.app_name).into_response()
}

/// GET /api/v1/health — liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.config.app_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /process — multipart form surface. A missing `audio_file` field or an
/// empty file name routes straight back to the form without touching anything.
pub async fn process_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, GatewayError> {
    let Some(upload) = read_audio_field(&mut multipart).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let report = run_pipeline(&state, upload).await?;
    Ok(ui::result_page(&state.config.app_name, &report).into_response())
}

/// POST /api/v1/analyze — JSON surface over the same pipeline. An API client
/// gets a 400 for a missing file rather than a redirect.
pub async fn analyze_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, GatewayError> {
    let Some(upload) = read_audio_field(&mut multipart).await? else {
        return Err(GatewayError::Upload(
            "multipart field 'audio_file' with a file name is required".to_string(),
        ));
    };
    let report = run_pipeline(&state, upload).await?;
    Ok(Json(report).into_response())
}

/// Pull the `audio_file` part out of the multipart stream.
/// `None` means no usable upload (field absent, or file name empty).
async fn read_audio_field(
    multipart: &mut Multipart,
) -> Result<Option<AudioUpload>, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::Upload(e.to_string()))?
    {
        if field.name() != Some("audio_file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("").to_string();
        if file_name.is_empty() {
            return Ok(None);
        }
        let content_type = field.content_type().map(|ct| ct.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GatewayError::Upload(e.to_string()))?;
        return Ok(Some(AudioUpload::new(file_name, content_type, bytes.to_vec())));
    }
    Ok(None)
}

/// Spool → transcribe → (on success) load lexicon, tally, score.
/// The spool guard removes the audio file on every exit path, including `?`.
async fn run_pipeline(state: &AppState, upload: AudioUpload) -> Result<ScoreReport, GatewayError> {
    let spooled = SpooledAudio::write(std::path::Path::new(&state.config.spool_dir), &upload)?;
    info!(
        target: "scamscan::gateway",
        "Processing {} ({} bytes) via {}",
        upload.file_name,
        upload.bytes.len(),
        spooled.path().display()
    );

    let transcription = state.stt.transcribe(&upload).await?;
    let report = match &transcription {
        Transcription::Success(text) => {
            let lexicon = ScamLexicon::load(&state.config.keywords_path)?;
            let frequency = state.segmenter.token_frequency(text);
            let scam_hits = count_keyword_hits(&frequency, &lexicon);
            let total_words = whitespace_word_count(text);
            let score = fraud_score(scam_hits, total_words);
            info!(
                target: "scamscan::gateway",
                "Scored {} hit(s) / {} word(s) -> {:.1}",
                scam_hits, total_words, score
            );
            ScoreReport {
                outcome: transcription.label(),
                transcript: text.clone(),
                scam_hits: Some(scam_hits),
                total_words: Some(total_words),
                score: Some(score),
            }
        }
        failed => {
            info!(target: "scamscan::gateway", "Transcription outcome: {}", failed.label());
            ScoreReport {
                outcome: failed.label(),
                transcript: failed.to_string(),
                scam_hits: None,
                total_words: None,
                score: None,
            }
        }
    };
    Ok(report)
}
