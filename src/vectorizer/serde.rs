use ::serde::de::Error as DeError;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::vectorizer::tfidf::{IDFVector, TFIDFEngine};
use crate::vectorizer::vocabulary::Vocabulary;
use crate::vectorizer::KeywordExtractor;

/// KeywordExtractorの保存用データ構造
///
/// Vocabulary terms in column order plus the IDF weights, stored as
/// `f64` so a save/load cycle reproduces them bit for bit.
/// Convert back with [`KeywordModelData::into_keyword_extractor`],
/// which checks that the parts still line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordModelData {
    /// vocabulary terms, index = column
    pub terms: Vec<String>,
    pub min_term_length: usize,
    pub idf: IDFVector,
    pub top_n: usize,
}

impl KeywordModelData {
    /// `KeywordModelData`から`KeywordExtractor`に変換します。
    ///
    /// Fails on duplicate terms or when the IDF length differs from the
    /// number of terms.
    pub fn into_keyword_extractor<E>(self) -> Result<KeywordExtractor<E>>
    where
        E: TFIDFEngine,
    {
        if self.min_term_length == 0 {
            return Err(Error::invalid("min_term_length", "must be at least 1"));
        }
        let vocabulary = Vocabulary::from_terms(self.terms, self.min_term_length)?;
        KeywordExtractor::from_parts(vocabulary, self.idf, self.top_n)
    }
}

impl<E> From<&KeywordExtractor<E>> for KeywordModelData
where
    E: TFIDFEngine,
{
    fn from(extractor: &KeywordExtractor<E>) -> Self {
        KeywordModelData {
            terms: extractor.vocabulary.iter().map(String::from).collect(),
            min_term_length: extractor.vocabulary.min_term_length(),
            idf: extractor.idf.clone(),
            top_n: extractor.top_n,
        }
    }
}

impl<E> KeywordExtractor<E>
where
    E: TFIDFEngine,
{
    /// Encode as CBOR.
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(&KeywordModelData::from(self))?)
    }

    /// Decode a model written by [`KeywordExtractor::to_cbor`].
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let data: KeywordModelData = serde_cbor::from_slice(bytes)?;
        data.into_keyword_extractor()
    }
}

impl<E> Serialize for KeywordExtractor<E>
where
    E: TFIDFEngine,
{
    /// Serialized through [`KeywordModelData`].
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        KeywordModelData::from(self).serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for KeywordExtractor<E>
where
    E: TFIDFEngine,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        KeywordModelData::deserialize(deserializer)?
            .into_keyword_extractor()
            .map_err(D::Error::custom)
    }
}
