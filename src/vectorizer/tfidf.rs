use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::datastruct::vector::ZeroSpVec;
use crate::vectorizer::token::CountVector;
use crate::vectorizer::vocabulary::DocumentFrequency;

/// Sparse TF-IDF scores of one document, indexed by vocabulary column.
pub type ScoreVector = ZeroSpVec<f64>;

/// IDF weights, one per vocabulary column.
/// Dense because every column has a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IDFVector {
    idf_vec: Vec<f64>,
    /// corpus size the weights were fit on
    doc_num: u64,
}

impl IDFVector {
    pub fn new(idf_vec: Vec<f64>, doc_num: u64) -> Self {
        Self { idf_vec, doc_num }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf_vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf_vec.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.idf_vec.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.idf_vec
    }

    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }
}

/// TF-IDF計算エンジン
///
/// Plug a different weighting scheme into
/// [`KeywordExtractor`](crate::KeywordExtractor) by implementing this.
pub trait TFIDFEngine {
    /// IDFベクトルを生成する
    ///
    /// # Arguments
    /// * `doc_freq` - document frequency per vocabulary column
    /// * `smoothing` - add-one smoothing
    /// * `use_idf` - `false` gives all-ones weights
    fn idf_vec(doc_freq: &DocumentFrequency, smoothing: bool, use_idf: bool) -> Result<IDFVector>;

    /// Weight a count vector. Zero counts stay implicit.
    /// Fails when `counts` and `idf` do not have the same dimension.
    fn tf_idf_vec(counts: &CountVector, idf: &IDFVector) -> Result<ScoreVector>;
}

/// デフォルトのTF-IDFエンジン
///
/// - idf (smoothed): `ln((1 + n) / (1 + df)) + 1`
/// - idf (plain): `ln(n / df) + 1`
/// - tf: the raw count
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    fn idf_vec(doc_freq: &DocumentFrequency, smoothing: bool, use_idf: bool) -> Result<IDFVector> {
        let doc_num = doc_freq.doc_num;
        if !use_idf {
            return Ok(IDFVector::new(vec![1.0; doc_freq.len()], doc_num));
        }
        let n = doc_num as f64;
        let idf_vec = doc_freq
            .doc_freq
            .iter()
            .enumerate()
            .map(|(index, &df)| {
                if smoothing {
                    Ok(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
                } else if df == 0 {
                    Err(Error::ZeroDocumentFrequency { index })
                } else {
                    Ok((n / df as f64).ln() + 1.0)
                }
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(IDFVector::new(idf_vec, doc_num))
    }

    fn tf_idf_vec(counts: &CountVector, idf: &IDFVector) -> Result<ScoreVector> {
        if counts.len() != idf.len() {
            return Err(Error::mismatch(idf.len(), counts.len()));
        }
        let mut scores = ZeroSpVec::with_capacity(counts.len(), counts.nnz());
        for (idx, &count) in counts.raw_iter() {
            let weight = idf
                .get(idx)
                .ok_or_else(|| Error::mismatch(idf.len(), counts.len()))?;
            // raw_iter is ascending, so push_entry keeps the order
            scores.push_entry(idx, f64::from(count) * weight);
        }
        Ok(scores)
    }
}

/// Fit IDF weights with [`DefaultTFIDFEngine`].
pub fn fit_idf(doc_freq: &DocumentFrequency, smoothing: bool, use_idf: bool) -> Result<IDFVector> {
    DefaultTFIDFEngine::idf_vec(doc_freq, smoothing, use_idf)
}

/// Score a count vector with [`DefaultTFIDFEngine`].
pub fn score(counts: &CountVector, idf: &IDFVector) -> Result<ScoreVector> {
    DefaultTFIDFEngine::tf_idf_vec(counts, idf)
}
