use indexmap::IndexSet;

use crate::config::KeywordConfig;
use crate::error::{Error, Result};
use crate::vectorizer::corpus::{Corpus, TermStat};
use crate::vectorizer::stopwords::Stopwords;

/// Fitted term ↔ column mapping.
///
/// Columns are dense (`0..len`) and fixed once fit. The token length
/// threshold used while fitting travels with the vocabulary so query
/// documents are tokenized exactly like the training corpus.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
    min_term_length: usize,
}

/// Document frequency of every vocabulary column, aligned by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFrequency {
    /// corpus size
    pub doc_num: u64,
    /// `doc_freq[i]` is the document frequency of column `i`
    pub doc_freq: Vec<u64>,
}

impl DocumentFrequency {
    #[inline]
    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }
}

/// Column order matters, unlike `IndexSet` equality.
impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.min_term_length == other.min_term_length && self.terms.iter().eq(other.terms.iter())
    }
}

impl Eq for Vocabulary {}

impl Vocabulary {
    /// Select the vocabulary out of corpus statistics.
    ///
    /// 1. drop stopwords
    /// 2. drop terms found in more than `ratio * doc_num` documents
    /// 3. order by corpus term frequency descending, ties lexicographically
    /// 4. keep at most `max_vocab_size` terms
    ///
    /// Column indices follow that order. The ordering only looks at the
    /// merged totals, so the same corpus always yields the same columns.
    pub fn from_corpus(
        corpus: &Corpus,
        stopwords: &Stopwords,
        config: &KeywordConfig,
    ) -> (Vocabulary, DocumentFrequency) {
        let doc_num = corpus.doc_num();
        let max_doc_freq = config.max_document_frequency_ratio * doc_num as f64;

        let mut stop_pruned = 0usize;
        let mut df_pruned = 0usize;
        let mut candidates: Vec<(&str, &TermStat)> = corpus
            .iter()
            .filter(|(term, stat)| {
                if stopwords.contains(term) {
                    stop_pruned += 1;
                    false
                } else if stat.doc_freq as f64 > max_doc_freq {
                    df_pruned += 1;
                    false
                } else {
                    true
                }
            })
            .collect();

        // terms are unique so an unstable sort is deterministic
        candidates.sort_unstable_by(|a, b| {
            b.1.term_freq
                .cmp(&a.1.term_freq)
                .then_with(|| a.0.cmp(b.0))
        });
        let mut cap_pruned = 0usize;
        if let Some(max) = config.max_vocab_size {
            cap_pruned = candidates.len().saturating_sub(max);
            candidates.truncate(max);
        }

        log::debug!(
            "vocabulary pruning: {} stopwords, {} over document frequency {:.2}, {} over size cap",
            stop_pruned,
            df_pruned,
            max_doc_freq,
            cap_pruned
        );

        let mut terms = IndexSet::with_capacity(candidates.len());
        let mut doc_freq = Vec::with_capacity(candidates.len());
        for (term, stat) in candidates {
            terms.insert(Box::from(term));
            doc_freq.push(stat.doc_freq);
        }
        (
            Vocabulary {
                terms,
                min_term_length: config.min_term_length,
            },
            DocumentFrequency { doc_num, doc_freq },
        )
    }

    /// Rebuild a vocabulary from its terms in column order.
    /// Fails on a repeated term, since that would shift every later column.
    pub fn from_terms(terms: Vec<String>, min_term_length: usize) -> Result<Self> {
        let mut set = IndexSet::with_capacity(terms.len());
        for term in terms {
            let term: Box<str> = term.into_boxed_str();
            if set.contains(&term) {
                return Err(Error::DuplicateTerm(term.into_string()));
            }
            set.insert(term);
        }
        Ok(Vocabulary {
            terms: set,
            min_term_length,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column of `term`, if it is in the vocabulary.
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at column `index`.
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|term| &**term)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[inline]
    pub fn min_term_length(&self) -> usize {
        self.min_term_length
    }

    /// Terms in column order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.terms.iter().map(|term| &**term)
    }
}

/// Fit a vocabulary over normalized documents.
///
/// An empty corpus, or one where every term is filtered out, gives an
/// empty vocabulary (not an error).
pub fn fit_vocabulary<S>(
    corpus: &[S],
    stopwords: &Stopwords,
    config: &KeywordConfig,
) -> Result<(Vocabulary, DocumentFrequency)>
where
    S: AsRef<str> + Sync,
{
    config.validate()?;
    let stats = Corpus::from_documents(corpus, config.min_term_length);
    Ok(Vocabulary::from_corpus(&stats, stopwords, config))
}
