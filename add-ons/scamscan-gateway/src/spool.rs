//! Per-request audio spool.
//!
//! Every upload gets its own UUID-named file under the spool directory, and the
//! guard removes it when dropped, early returns included. Concurrent requests
//! never share a path.

use scamscan_voice::AudioUpload;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// RAII guard for one spooled upload. The file exists for exactly as long as
/// the guard lives.
#[derive(Debug)]
pub struct SpooledAudio {
    path: PathBuf,
}

impl SpooledAudio {
    /// Write `upload` to a fresh file under `dir`, creating the directory if
    /// needed. The file name is a v4 UUID plus the upload's extension.
    pub fn write(dir: &Path, upload: &AudioUpload) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let ext = upload.extension().unwrap_or_else(|| "wav".to_string());
        let path = dir.join(format!("{}.{}", Uuid::new_v4(), ext));
        std::fs::write(&path, &upload.bytes)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SpooledAudio {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(
                target: "scamscan::gateway",
                "Spool cleanup failed for {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
