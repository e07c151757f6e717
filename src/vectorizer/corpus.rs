use std::collections::HashMap;

use rayon::prelude::*;

use crate::vectorizer::token::TermCounts;

/// Per-term statistics accumulated over a training corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermStat {
    /// number of documents containing the term at least once
    pub doc_freq: u64,
    /// number of occurrences across all documents
    pub term_freq: u64,
}

/// Document-frequency table of a training corpus.
///
/// Keeps the document count plus, for every term seen, its document
/// frequency and aggregate term frequency. It does not store document
/// text. Tables built from disjoint shards combine with [`Corpus::merge`],
/// which is commutative and associative, so the result does not depend on
/// the order documents are processed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    doc_num: u64,
    term_stats: HashMap<Box<str>, TermStat>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a corpus of normalized documents, in parallel.
    pub fn from_documents<S>(documents: &[S], min_term_length: usize) -> Self
    where
        S: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .fold(Corpus::new, |mut shard, doc| {
                shard.add_document(&TermCounts::from_normalized(doc.as_ref(), min_term_length));
                shard
            })
            .reduce(Corpus::new, Corpus::merge)
    }

    /// Add one document.
    /// Each distinct term raises its document frequency by one.
    pub fn add_document(&mut self, doc: &TermCounts) {
        self.doc_num += 1;
        for (term, count) in doc.iter() {
            if let Some(stat) = self.term_stats.get_mut(term) {
                stat.doc_freq += 1;
                stat.term_freq += u64::from(count);
            } else {
                let stat = TermStat {
                    doc_freq: 1,
                    term_freq: u64::from(count),
                };
                self.term_stats.insert(Box::from(term), stat);
            }
        }
    }

    /// Sum two tables.
    pub fn merge(self, other: Corpus) -> Corpus {
        // 小さい方を大きい方へ
        let (mut into, from) = if self.term_stats.len() >= other.term_stats.len() {
            (self, other)
        } else {
            (other, self)
        };
        into.doc_num += from.doc_num;
        for (term, stat) in from.term_stats {
            let entry = into.term_stats.entry(term).or_default();
            entry.doc_freq += stat.doc_freq;
            entry.term_freq += stat.term_freq;
        }
        into
    }

    /// Number of documents in the corpus.
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.term_stats.get(term).map_or(0, |stat| stat.doc_freq)
    }

    #[inline]
    pub fn term_freq(&self, term: &str) -> u64 {
        self.term_stats.get(term).map_or(0, |stat| stat.term_freq)
    }

    /// Number of distinct terms seen.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_stats.len()
    }

    /// `(term, stat)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStat)> {
        self.term_stats.iter().map(|(term, stat)| (&**term, stat))
    }
}
