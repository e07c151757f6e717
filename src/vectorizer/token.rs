use indexmap::IndexMap;

use crate::utils::datastruct::vector::ZeroSpVec;
use crate::utils::normalizer::tokenize;
use crate::vectorizer::vocabulary::Vocabulary;

/// Sparse count vector of one document, indexed by vocabulary column.
pub type CountVector = ZeroSpVec<u32>;

/// TermCounts 構造体
/// 1文書内のterm出現回数を管理します
///
/// Terms are kept in first-seen order.
///
/// # Examples
/// ```
/// use tf_idf_keywords::TermCounts;
/// let counts = TermCounts::from_normalized("rust cargo rust", 1);
/// assert_eq!(counts.term_count("rust"), 2);
/// assert_eq!(counts.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    term_count: IndexMap<Box<str>, u32>,
    total_term_count: u64,
}

impl TermCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the tokens of an already normalized document.
    ///
    /// # Arguments
    /// * `normalized` - output of [`crate::normalize`]
    /// * `min_term_length` - shorter tokens are skipped
    pub fn from_normalized(normalized: &str, min_term_length: usize) -> Self {
        let mut counts = Self::new();
        for token in tokenize(normalized, min_term_length) {
            counts.add_term(token);
        }
        counts
    }

    /// termを追加する
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(Box::from(term), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// 複数のtermを追加する
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of tokens counted (repeats included).
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// `(term, count)` in first-seen order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (&**term, count))
    }
}

/// Count vector of a normalized document against a fitted vocabulary.
///
/// Terms outside the vocabulary are dropped silently. The result has
/// `vocabulary.len()` dimensions and stores only the terms that occur.
/// Linear in document length (plus sorting the distinct hits).
pub fn count(document: &str, vocabulary: &Vocabulary) -> CountVector {
    let counts = TermCounts::from_normalized(document, vocabulary.min_term_length());
    // distinct terms map to distinct in-range columns
    let mut hits: Vec<(usize, u32)> = counts
        .iter()
        .filter_map(|(term, n)| vocabulary.index_of(term).map(|idx| (idx, n)))
        .collect();
    hits.sort_unstable_by_key(|(idx, _)| *idx);

    let mut vec = ZeroSpVec::with_capacity(vocabulary.len(), hits.len());
    for (idx, n) in hits {
        vec.push_entry(idx, n);
    }
    vec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeats() {
        let mut counts = TermCounts::new();
        counts.add_terms(&["b", "a", "b", "c", "b"]);
        assert_eq!(counts.term_count("b"), 3);
        assert_eq!(counts.term_count("a"), 1);
        assert_eq!(counts.term_count("zzz"), 0);
        assert_eq!(counts.term_sum(), 5);
        assert_eq!(counts.len(), 3);
        let order: Vec<&str> = counts.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn from_normalized_uses_min_length() {
        let counts = TermCounts::from_normalized("a bb a ccc", 2);
        assert_eq!(counts.term_count("a"), 0);
        assert_eq!(counts.term_count("bb"), 1);
        assert_eq!(counts.term_sum(), 2);
    }

    #[test]
    fn count_drops_unknown_terms() {
        let vocabulary = Vocabulary::from_terms(vec!["cat".into(), "sat".into()], 1).unwrap();
        let vec = count("cat cat dog sat cat", &vocabulary);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.get(0), Some(&3));
        assert_eq!(vec.get(1), Some(&1));
    }

    #[test]
    fn count_against_empty_vocabulary_is_empty() {
        let vocabulary = Vocabulary::from_terms(Vec::new(), 1).unwrap();
        let vec = count("anything at all", &vocabulary);
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.nnz(), 0);
    }
}
