//! Uploaded audio passed to an STT backend.

use chrono::{DateTime, Utc};

/// One uploaded audio file, held in memory for the duration of a request.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Client-supplied file name (e.g. `call.wav`). Never empty: the gateway
    /// rejects empty-name uploads before building one of these.
    pub file_name: String,
    /// Content type from the multipart part, when the client sent one.
    pub content_type: Option<String>,
    /// Raw audio container bytes, forwarded to the recognition service as-is.
    pub bytes: Vec<u8>,
    /// When the upload arrived.
    pub received_at: DateTime<Utc>,
}

impl AudioUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
            received_at: Utc::now(),
        }
    }

    /// MIME type for the recognition API: the client's content type when given,
    /// otherwise guessed from the file extension (WAV fallback).
    pub fn mime(&self) -> &str {
        if let Some(ct) = self.content_type.as_deref() {
            if !ct.is_empty() {
                return ct;
            }
        }
        match self.extension().as_deref() {
            Some("mp3") => "audio/mpeg",
            Some("ogg") => "audio/ogg",
            Some("flac") => "audio/flac",
            Some("m4a") => "audio/mp4",
            Some("webm") => "audio/webm",
            _ => "audio/wav",
        }
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}
