pub mod corpus;
pub mod evaluate;
pub mod serde;
pub mod stopwords;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use rayon::prelude::*;

use crate::config::KeywordConfig;
use crate::error::{Error, Result};
use crate::utils::normalizer::normalize;
use crate::vectorizer::evaluate::ranking::{top_n, Keywords};
use crate::vectorizer::stopwords::Stopwords;
use crate::vectorizer::tfidf::{DefaultTFIDFEngine, IDFVector, TFIDFEngine};
use crate::vectorizer::token::count;
use crate::vectorizer::vocabulary::{fit_vocabulary, Vocabulary};

/// Fit a vocabulary and IDF weights over raw training documents.
///
/// The configuration is validated before anything else. Documents are
/// normalized and counted in parallel.
pub fn fit<S>(
    corpus: &[S],
    stopwords: &Stopwords,
    config: &KeywordConfig,
) -> Result<(Vocabulary, IDFVector)>
where
    S: AsRef<str> + Sync,
{
    fit_with::<DefaultTFIDFEngine, S>(corpus, stopwords, config)
}

/// Top `top_n` keywords of a raw document:
/// normalize → count → score → rank.
///
/// Fails with [`Error::ModelMismatch`] when `idf` was not fit together
/// with `vocabulary`.
pub fn extract_keywords(
    document: &str,
    vocabulary: &Vocabulary,
    idf: &IDFVector,
    top_n: usize,
) -> Result<Keywords> {
    extract_with::<DefaultTFIDFEngine>(document, vocabulary, idf, top_n)
}

fn fit_with<E, S>(
    corpus: &[S],
    stopwords: &Stopwords,
    config: &KeywordConfig,
) -> Result<(Vocabulary, IDFVector)>
where
    E: TFIDFEngine,
    S: AsRef<str> + Sync,
{
    config.validate()?;
    log::debug!("fitting over {} documents with {:?}", corpus.len(), config);

    let normalized: Vec<String> = corpus.par_iter().map(|doc| normalize(doc.as_ref())).collect();
    let (vocabulary, doc_freq) = fit_vocabulary(&normalized, stopwords, config)?;
    let idf = E::idf_vec(&doc_freq, config.smoothing, config.use_idf)?;

    if vocabulary.is_empty() {
        log::warn!("fit over {} documents produced an empty vocabulary", corpus.len());
    } else {
        log::info!(
            "fit {} terms over {} documents (use_idf: {}, smoothing: {})",
            vocabulary.len(),
            doc_freq.doc_num,
            config.use_idf,
            config.smoothing
        );
    }
    Ok((vocabulary, idf))
}

fn extract_with<E: TFIDFEngine>(
    document: &str,
    vocabulary: &Vocabulary,
    idf: &IDFVector,
    n: usize,
) -> Result<Keywords> {
    if idf.len() != vocabulary.len() {
        return Err(Error::mismatch(idf.len(), vocabulary.len()));
    }
    let counts = count(&normalize(document), vocabulary);
    let scores = E::tf_idf_vec(&counts, idf)?;
    let keywords = top_n(&scores, vocabulary, n)?;
    log::trace!(
        "{} vocabulary hits, {} keywords returned",
        scores.nnz(),
        keywords.len()
    );
    Ok(keywords)
}

/// Fitted keyword model.
///
/// Owns the vocabulary and IDF weights, both immutable after fitting.
/// Every query method takes `&self`, so one extractor can serve many
/// threads at once without locking.
///
/// `E` picks the TF-IDF formulas; the default is [`DefaultTFIDFEngine`].
#[derive(Debug, Clone)]
pub struct KeywordExtractor<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    pub(crate) vocabulary: Vocabulary,
    pub(crate) idf: IDFVector,
    /// keywords returned by [`KeywordExtractor::extract`]
    pub(crate) top_n: usize,
    _marker: PhantomData<E>,
}

impl<E> KeywordExtractor<E>
where
    E: TFIDFEngine,
{
    /// Fit over raw training documents.
    pub fn fit<S>(corpus: &[S], stopwords: &Stopwords, config: &KeywordConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let (vocabulary, idf) = fit_with::<E, S>(corpus, stopwords, config)?;
        Ok(Self {
            vocabulary,
            idf,
            top_n: config.top_n,
            _marker: PhantomData,
        })
    }

    /// Assemble from parts fit elsewhere.
    /// The IDF vector must have one weight per vocabulary term.
    pub fn from_parts(vocabulary: Vocabulary, idf: IDFVector, top_n: usize) -> Result<Self> {
        if idf.len() != vocabulary.len() {
            return Err(Error::mismatch(idf.len(), vocabulary.len()));
        }
        Ok(Self {
            vocabulary,
            idf,
            top_n,
            _marker: PhantomData,
        })
    }

    /// Top keywords of `document`, as many as configured at fit time.
    pub fn extract(&self, document: &str) -> Result<Keywords> {
        self.extract_keywords(document, self.top_n)
    }

    /// Top `top_n` keywords of `document`.
    pub fn extract_keywords(&self, document: &str, top_n: usize) -> Result<Keywords> {
        extract_with::<E>(document, &self.vocabulary, &self.idf, top_n)
    }

    /// Keywords of many documents, in parallel. Output order follows input.
    pub fn extract_keywords_batch<S>(&self, documents: &[S], top_n: usize) -> Result<Vec<Keywords>>
    where
        S: AsRef<str> + Sync,
        E: Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.extract_keywords(doc.as_ref(), top_n))
            .collect()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &IDFVector {
        &self.idf
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwords() -> Stopwords {
        ["the"].into_iter().collect()
    }

    fn config() -> KeywordConfig {
        KeywordConfig::new().with_max_document_frequency_ratio(1.0)
    }

    #[test]
    fn extractor_matches_free_functions() {
        let corpus = ["The cat sat", "The dog sat", "The cat ran"];
        let extractor: KeywordExtractor = KeywordExtractor::fit(&corpus, &stopwords(), &config()).unwrap();
        let (vocab, idf) = fit(&corpus, &stopwords(), &config()).unwrap();
        assert_eq!(extractor.vocabulary(), &vocab);
        assert_eq!(extractor.idf(), &idf);
        assert_eq!(
            extractor.extract("the cat ran fast").unwrap(),
            extract_keywords("the cat ran fast", &vocab, &idf, 10).unwrap()
        );
    }

    #[test]
    fn fit_rejects_bad_config_before_work() {
        let config = config().with_max_document_frequency_ratio(-1.0);
        assert!(matches!(
            fit(&["a"], &stopwords(), &config),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn stale_idf_fails_fast() {
        let (vocab_small, _) = fit(&["alpha beta"], &Stopwords::new(), &config()).unwrap();
        let (_, idf_large) = fit(&["alpha beta gamma"], &Stopwords::new(), &config()).unwrap();
        assert!(matches!(
            extract_keywords("alpha", &vocab_small, &idf_large, 5),
            Err(Error::ModelMismatch { vector_len: 3, vocab_len: 2 })
        ));
        assert!(KeywordExtractor::<DefaultTFIDFEngine>::from_parts(vocab_small, idf_large, 5).is_err());
    }

    #[test]
    fn batch_preserves_order() {
        let corpus = ["rust cargo", "python pip", "rust crates"];
        let extractor: KeywordExtractor =
            KeywordExtractor::fit(&corpus, &Stopwords::new(), &config()).unwrap();
        let docs = ["pip pip", "cargo", "nothing known here"];
        let batch = extractor.extract_keywords_batch(&docs, 3).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].terms().collect::<Vec<_>>(), vec!["pip"]);
        assert_eq!(batch[1].terms().collect::<Vec<_>>(), vec!["cargo"]);
        assert!(batch[2].is_empty());
    }

    #[test]
    fn empty_model_returns_empty_keywords() {
        let extractor: KeywordExtractor =
            KeywordExtractor::fit::<&str>(&[], &stopwords(), &config()).unwrap();
        assert!(extractor.vocabulary().is_empty());
        assert!(extractor.extract("the cat").unwrap().is_empty());
    }
}
