use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::vectorizer::tfidf::ScoreVector;
use crate::vectorizer::vocabulary::Vocabulary;

/// Ranked keywords of one document
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Keywords {
    /// (term, score rounded to 3 decimals), best first
    pub list: Vec<(String, f64)>,
}

impl Keywords {
    pub fn new(list: Vec<(String, f64)>) -> Self {
        Keywords { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Terms in rank order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.list.iter().map(|(term, _)| term.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.list.iter().map(|(term, score)| (term.as_str(), *score))
    }
}

impl IntoIterator for Keywords {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (term, score) in &self.list {
            writeln!(f, "{} {}", term, score)?;
        }
        Ok(())
    }
}

impl Debug for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // 1行1件
            writeln!(f, "Keywords [")?;
            for (term, score) in &self.list {
                writeln!(f, "    {:?}: {:.3}", term, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// score desc, then column desc
#[inline]
fn by_rank(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0))
}

#[inline]
fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Top `n` terms of a score vector.
///
/// Sorted by score descending, equal scores by column index descending.
/// Scores are rounded to 3 decimals after selection, so ties are broken
/// on full precision. Returns fewer than `n` entries when the vector has
/// fewer non-zero entries. `O(nnz + n log n)`.
///
/// Fails when `scores` was not built against `vocabulary`.
pub fn top_n(scores: &ScoreVector, vocabulary: &Vocabulary, n: usize) -> Result<Keywords> {
    if scores.len() != vocabulary.len() {
        return Err(Error::mismatch(scores.len(), vocabulary.len()));
    }
    if n == 0 {
        return Ok(Keywords::default());
    }

    let mut entries: Vec<(usize, f64)> = scores
        .raw_iter()
        .filter(|(_, score)| **score != 0.0)
        .map(|(idx, score)| (idx, *score))
        .collect();
    if n < entries.len() {
        // 上位nだけ残してからソート
        entries.select_nth_unstable_by(n - 1, by_rank);
        entries.truncate(n);
    }
    entries.sort_unstable_by(by_rank);

    let list = entries
        .into_iter()
        .map(|(idx, score)| {
            vocabulary
                .term(idx)
                .map(|term| (term.to_string(), round_score(score)))
                .ok_or_else(|| Error::mismatch(scores.len(), vocabulary.len()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Keywords::new(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datastruct::vector::ZeroSpVec;

    fn vocabulary(n: usize) -> Vocabulary {
        Vocabulary::from_terms((0..n).map(|i| format!("t{i}")).collect(), 1).unwrap()
    }

    #[test]
    fn sorts_by_score_then_higher_index() {
        let vocab = vocabulary(5);
        let scores =
            ZeroSpVec::from_entries(5, vec![(0, 1.0), (1, 3.0), (2, 1.0), (4, 2.5)]).unwrap();
        let keywords = top_n(&scores, &vocab, 10).unwrap();
        assert_eq!(keywords.terms().collect::<Vec<_>>(), vec!["t1", "t4", "t2", "t0"]);
    }

    #[test]
    fn truncates_to_n() {
        let vocab = vocabulary(6);
        let scores = ZeroSpVec::from_entries(
            6,
            vec![(0, 0.5), (1, 4.0), (2, 2.0), (3, 2.0), (4, 3.0), (5, 0.1)],
        )
        .unwrap();
        let keywords = top_n(&scores, &vocab, 3).unwrap();
        assert_eq!(keywords.terms().collect::<Vec<_>>(), vec!["t1", "t4", "t3"]);
    }

    #[test]
    fn zero_n_is_empty() {
        let vocab = vocabulary(2);
        let scores = ZeroSpVec::from_entries(2, vec![(0, 1.0)]).unwrap();
        assert!(top_n(&scores, &vocab, 0).unwrap().is_empty());
    }

    #[test]
    fn rounds_after_tie_break() {
        let vocab = vocabulary(3);
        // equal after rounding, but t0 is larger at full precision
        let scores = ZeroSpVec::from_entries(3, vec![(0, 1.23449), (2, 1.2344)]).unwrap();
        let keywords = top_n(&scores, &vocab, 2).unwrap();
        assert_eq!(
            keywords.list,
            vec![("t0".to_string(), 1.234), ("t2".to_string(), 1.234)]
        );
    }

    #[test]
    fn rounds_to_three_decimals() {
        let vocab = vocabulary(1);
        let scores = ZeroSpVec::from_entries(1, vec![(0, 2.0f64.ln() + 1.0)]).unwrap();
        let keywords = top_n(&scores, &vocab, 1).unwrap();
        assert_eq!(keywords.list[0].1, 1.693);
    }

    #[test]
    fn mismatched_vocabulary_fails() {
        let vocab = vocabulary(2);
        let scores = ZeroSpVec::from_entries(3, vec![(0, 1.0)]).unwrap();
        assert!(matches!(
            top_n(&scores, &vocab, 1),
            Err(Error::ModelMismatch { vector_len: 3, vocab_len: 2 })
        ));
    }

    #[test]
    fn every_selected_entry_maps_to_a_term() {
        let vocab = vocabulary(3);
        let scores = ZeroSpVec::from_entries(3, vec![(0, 1.0), (2, 5.0)]).unwrap();
        let keywords = top_n(&scores, &vocab, 5).unwrap();
        assert_eq!(keywords.len(), scores.nnz());
        assert_eq!(keywords.terms().collect::<Vec<_>>(), vec!["t2", "t0"]);
    }

    #[test]
    fn display_one_keyword_per_line() {
        let keywords = Keywords::new(vec![("ran".into(), 1.693), ("cat".into(), 1.288)]);
        assert_eq!(keywords.to_string(), "ran 1.693\ncat 1.288\n");
    }
}
