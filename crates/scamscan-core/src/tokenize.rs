//! Transcript segmentation and keyword tallying.
//!
//! `WordSegmenter` is the process-wide text-segmentation resource: the gateway
//! builds one at startup and shares it read-only across requests. It keeps only
//! wholly alphabetic tokens (anything carrying digits, punctuation, or symbols
//! is dropped) and lower-cases them before counting.

use crate::lexicon::ScamLexicon;
use std::collections::HashMap;

/// Segments transcripts into lower-cased alphabetic tokens.
///
/// Construct once and share (`Arc`); the segmenter holds no per-request state.
#[derive(Debug, Default, Clone)]
pub struct WordSegmenter;

impl WordSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Lower-cased alphabetic tokens of `text`, in order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }

    /// Frequency map over the alphabetic tokens of one transcript.
    pub fn token_frequency(&self, text: &str) -> TokenFrequency {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in self.tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        TokenFrequency { counts }
    }
}

/// Token → occurrence count for a single transcript. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct TokenFrequency {
    counts: HashMap<String, usize>,
}

impl TokenFrequency {
    /// Occurrences of `word`; absent entries count 0.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tokens seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Sum of transcript frequencies over every lexicon entry.
///
/// A word missing from the transcript contributes 0; a word listed twice in the
/// lexicon contributes its frequency twice.
pub fn count_keyword_hits(frequency: &TokenFrequency, lexicon: &ScamLexicon) -> usize {
    lexicon
        .words()
        .iter()
        .map(|word| frequency.get(word))
        .sum()
}
