//! scamscan-core: shared library for the ScamScan gateway (lexicon, tokenization,
//! scoring, configuration).
//!
//! The gateway add-on stays a thin HTTP layer; everything it computes lives here
//! so the pipeline can be exercised without a server.

mod config;
mod error;
mod lexicon;
mod score;
mod tokenize;

pub use config::GatewayConfig;
pub use error::{CoreError, CoreResult};
pub use lexicon::ScamLexicon;
pub use score::{fraud_score, whitespace_word_count};
pub use tokenize::{count_keyword_hits, TokenFrequency, WordSegmenter};
