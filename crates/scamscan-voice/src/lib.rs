//! # ScamScan Voice — transcription layer
//!
//! Turns one uploaded audio file into a `Transcription` through a pluggable
//! `SttBackend`:
//!
//! ```text
//! AudioUpload ──► SttBackend ──► Transcription::{Success, Unintelligible, ServiceUnavailable}
//!                 (RemoteStt │ PlaceholderStt)
//! ```
//!
//! The remote backend speaks the OpenAI-compatible `/audio/transcriptions`
//! multipart API. Recognition failures come back as tagged outcomes, never as
//! look-alike transcript strings, so scoring only ever runs on real speech.

pub mod error;
pub mod stt;
pub mod upload;

pub use error::{VoiceError, VoiceResult};
pub use stt::{create_best_stt, PlaceholderStt, RemoteStt, SttBackend, Transcription};
pub use upload::AudioUpload;
