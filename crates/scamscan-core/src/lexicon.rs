//! Scam word list, loaded from a newline-delimited text file.
//!
//! One word per line, source order preserved. No case normalization happens at
//! load time (matching is done against lower-cased tokens), and no
//! deduplication: a word listed twice weights its transcript frequency twice.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Ordered list of flagged words. Immutable for the duration of a request.
#[derive(Debug, Clone, Default)]
pub struct ScamLexicon {
    words: Vec<String>,
}

impl ScamLexicon {
    /// Read the word list from `path`. An unreadable or missing file is an
    /// error for the caller to handle; the gateway fails that request only.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::LexiconIo {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon = Self::from_lines(&raw);
        tracing::debug!(
            target: "scamscan::lexicon",
            "Loaded {} keyword(s) from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Build a lexicon from newline-delimited text (one word per line).
    pub fn from_lines(raw: &str) -> Self {
        let words = raw.lines().map(|line| line.trim().to_string()).collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_preserves_order_and_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "free\nwinner\nprize\nfree").unwrap();
        let lexicon = ScamLexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.words(), vec!["free", "winner", "prize", "free"]);
        assert_eq!(lexicon.len(), 4);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = ScamLexicon::load("no_such_words.txt").unwrap_err();
        assert!(matches!(err, CoreError::LexiconIo { .. }));
        assert!(err.to_string().contains("no_such_words.txt"));
    }

    #[test]
    fn from_lines_trims_line_endings() {
        let lexicon = ScamLexicon::from_lines("urgent\r\naccount\r\n");
        assert_eq!(lexicon.words(), vec!["urgent", "account"]);
    }

    #[test]
    fn empty_source_is_an_empty_lexicon() {
        assert!(ScamLexicon::from_lines("").is_empty());
    }
}
