//! This crate extracts representative keywords from a document with a
//! TF-IDF model fit over a background corpus.

pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// Keyword Extractor
/// The top-level struct of this crate: a fitted, immutable keyword model.
///
/// Internally, it holds:
/// - The vocabulary (term ↔ column mapping)
/// - The IDF vector, one weight per column
/// - The default number of keywords to return
///
/// Fit it once over a large training corpus with `KeywordExtractor::fit`,
/// then call `extract` / `extract_keywords` for every document to
/// summarize. All query methods take `&self` and can run concurrently.
///
/// `KeywordExtractor<E>` has one generic parameter:
/// - `E`: TF-IDF calculation engine type (default `DefaultTFIDFEngine`)
///
/// # Serialization
/// Supported, through `KeywordModelData`.
/// `to_cbor` / `from_cbor` are provided for convenience.
///
/// # Deserialization
/// Supported. Inconsistent data (duplicate terms, IDF length differing
/// from the vocabulary size) is rejected.
pub use vectorizer::KeywordExtractor;

/// Training and query entry points
/// - `fit`: raw corpus + stopwords + config → (Vocabulary, IDFVector)
/// - `extract_keywords`: raw document + fitted parts → ranked keywords
pub use vectorizer::{extract_keywords, fit};

/// Keyword Model Data Structure for Serialization
/// Terms in column order, the IDF weights and the default keyword count.
/// Convert it into a `KeywordExtractor` with `into_keyword_extractor`.
pub use vectorizer::serde::KeywordModelData;

/// Vocabulary Builder
/// `Vocabulary` maps terms to dense column indices. `fit_vocabulary`
/// builds one from normalized documents, dropping stopwords and terms
/// above the document-frequency ceiling, then applying the size cap.
/// `DocumentFrequency` is the per-column document count it returns.
pub use vectorizer::vocabulary::{fit_vocabulary, DocumentFrequency, Vocabulary};

/// Corpus statistics
/// Document count plus per-term document frequency and term frequency.
/// Partial tables from different shards of the corpus can be merged.
pub use vectorizer::corpus::{Corpus, TermStat};

/// Document-Term Counter
/// `TermCounts` counts the tokens of one document; `count` turns a
/// normalized document into a sparse count vector over a vocabulary.
pub use vectorizer::token::{count, CountVector, TermCounts};

/// IDF Estimator and TF-IDF Scorer
/// `fit_idf` computes the IDF vector, `score` multiplies a count vector
/// by it. The `TFIDFEngine` trait lets other weighting schemes plug in.
pub use vectorizer::tfidf::{fit_idf, score, DefaultTFIDFEngine, IDFVector, ScoreVector, TFIDFEngine};

/// Top-N Ranker
/// `top_n` sorts a score vector (score desc, column desc) and maps the
/// best entries back to their terms. `Keywords` holds the result.
pub use vectorizer::evaluate::ranking::{top_n, Keywords};

/// Stopword set, loadable one word per line.
pub use vectorizer::stopwords::Stopwords;

/// Tokenizer/Normalizer
pub use utils::normalizer::{normalize, tokenize};

/// Sparse vector used for counts and scores.
pub use utils::datastruct::vector::ZeroSpVec;

/// Fitting and ranking settings, validated before any work starts.
pub use config::KeywordConfig;

/// Crate-wide error type and `Result` alias.
pub use error::{Error, Result};
