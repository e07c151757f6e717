use std::collections::HashSet;
use std::io::BufRead;

use crate::error::Result;

/// Terms that never enter a vocabulary.
///
/// Matching is exact on the normalized (lowercase) form,
/// so entries should be lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<Box<str>>,
}

impl Stopwords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one stopword per line.
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(Box::from(word));
            }
        }
        log::debug!("loaded {} stopwords", words.len());
        Ok(Self { words })
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(Box::from(word))
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| Box::from(w.as_ref())).collect(),
        }
    }
}
