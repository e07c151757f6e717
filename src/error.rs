/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the fitting and query entry points.
///
/// Unknown query terms and empty vocabularies are not errors;
/// they produce empty vectors and empty keyword lists.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A configuration value is out of range.
    /// Reported before any processing starts.
    #[error("invalid configuration `{field}`: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },

    /// The IDF vector (or a count/score vector) was built against a
    /// vocabulary of a different size, i.e. the model parts were fit
    /// inconsistently.
    #[error("model mismatch: vector has {vector_len} dimensions but vocabulary has {vocab_len} terms")]
    ModelMismatch {
        vector_len: usize,
        vocab_len: usize,
    },

    /// Unsmoothed IDF was requested for a column no training document contains.
    #[error("column {index} has a document frequency of zero; unsmoothed idf is undefined")]
    ZeroDocumentFrequency {
        index: usize,
    },

    /// The persisted vocabulary lists the same term twice.
    #[error("duplicate vocabulary term `{0}`")]
    DuplicateTerm(String),

    /// A sparse vector entry lies outside the vector's dimension.
    #[error("sparse entry index {index} is out of bounds for dimension {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },

    /// A sparse vector was given two entries for the same index.
    #[error("sparse entry index {index} appears more than once")]
    DuplicateIndex {
        index: usize,
    },

    /// Reading a stopword list failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a persisted model failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_cbor::Error),
}

impl Error {
    pub(crate) fn mismatch(vector_len: usize, vocab_len: usize) -> Self {
        Error::ModelMismatch { vector_len, vocab_len }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
