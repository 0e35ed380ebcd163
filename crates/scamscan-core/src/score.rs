//! Fraud score: keyword density as a bounded percentage.

/// Combine keyword hits and total word count into a score in [0, 100].
///
/// Zero total words means score 0 (no words → no risk). The result is capped at
/// 100: the hit count and the word count come from different tokenization rules
/// (alphabetic tokens vs whitespace split), so hits can in principle exceed the
/// denominator.
pub fn fraud_score(scam_hits: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    let percentage = (scam_hits as f64 / total_words as f64) * 100.0;
    percentage.min(100.0)
}

/// Total word count of a transcript: whitespace split, no filtering.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
