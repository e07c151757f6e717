use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for fitting a keyword model and ranking its output.
///
/// `max_vocab_size` and `top_n` are unsigned, so negative values are
/// rejected when the configuration is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Terms contained in more than `ratio * corpus_size` documents are dropped.
    /// Must be within `[0.0, 1.0]`.
    pub max_document_frequency_ratio: f64,
    /// Keep only this many terms (highest corpus-wide term frequency first).
    pub max_vocab_size: Option<usize>,
    /// `false` gives pure term-frequency ranking (every idf weight is 1.0).
    pub use_idf: bool,
    /// Add-one smoothing of the idf weights.
    pub smoothing: bool,
    /// Number of keywords returned per document.
    pub top_n: usize,
    /// Tokens shorter than this (in chars) are ignored at fit and query time.
    pub min_term_length: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            max_document_frequency_ratio: 0.85,
            max_vocab_size: None,
            use_idf: true,
            smoothing: true,
            top_n: 10,
            min_term_length: 1,
        }
    }
}

impl KeywordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings used to train on scraped job postings:
    /// only terms present in at most 5% of postings, 20000 terms at most,
    /// ranked by raw term frequency.
    pub fn job_postings() -> Self {
        Self {
            max_document_frequency_ratio: 0.05,
            max_vocab_size: Some(20_000),
            use_idf: false,
            ..Self::default()
        }
    }

    pub fn with_max_document_frequency_ratio(mut self, ratio: f64) -> Self {
        self.max_document_frequency_ratio = ratio;
        self
    }

    pub fn with_max_vocab_size(mut self, max_vocab_size: Option<usize>) -> Self {
        self.max_vocab_size = max_vocab_size;
        self
    }

    pub fn with_use_idf(mut self, use_idf: bool) -> Self {
        self.use_idf = use_idf;
        self
    }

    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_min_term_length(mut self, min_term_length: usize) -> Self {
        self.min_term_length = min_term_length;
        self
    }

    /// Check every field before any processing starts.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.max_document_frequency_ratio;
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::invalid(
                "max_document_frequency_ratio",
                format!("{ratio} is outside [0, 1]"),
            ));
        }
        if self.min_term_length == 0 {
            return Err(Error::invalid("min_term_length", "must be at least 1"));
        }
        Ok(())
    }
}
