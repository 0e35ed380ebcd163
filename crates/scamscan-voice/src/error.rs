//! Error types for the ScamScan voice layer.

use thiserror::Error;

/// Result type alias for voice operations.
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Errors that can occur while setting up or driving a transcription backend.
///
/// Remote-service failures during a transcription are NOT errors here: they
/// are reported as `Transcription::ServiceUnavailable` so the gateway can
/// render them distinctly instead of failing the request.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("STT error: {0}")]
    Stt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
