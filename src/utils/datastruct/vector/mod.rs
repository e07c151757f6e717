pub mod serde;

use std::fmt::{self, Debug};

use num::Num;

use crate::error::{Error, Result};

/// ZeroSpVecは0要素を疎とした疎ベクトルです
///
/// Holds only the non-zero entries as parallel `inds` / `vals` arrays,
/// plus the logical dimension `len` (the vocabulary size for count
/// and score vectors). Entries are kept sorted by ascending index.
///
/// - construction from `k` unsorted entries: `O(k log k)`
/// - point lookup: `O(log nnz)`
/// - iteration over non-zero entries: `O(nnz)`
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
    zero: N,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Empty vector of dimension `len` (every entry is zero).
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
            zero: N::zero(),
        }
    }

    /// Empty vector of dimension `len` with room for `nnz` non-zero entries.
    #[inline]
    pub fn with_capacity(len: usize, nnz: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(nnz),
            vals: Vec::with_capacity(nnz),
            len,
            zero: N::zero(),
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped.
    ///
    /// Fails when an index is `>= len` or appears twice.
    pub fn from_entries<I>(len: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = entries
            .into_iter()
            .filter(|(_, val)| *val != N::zero())
            .collect();
        pairs.sort_unstable_by_key(|(idx, _)| *idx);
        if let Some(&(index, _)) = pairs.last().filter(|(idx, _)| *idx >= len) {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(Error::DuplicateIndex { index: w[0].0 });
        }

        let mut vec = ZeroSpVec::with_capacity(len, pairs.len());
        for (idx, val) in pairs {
            vec.inds.push(idx);
            vec.vals.push(val);
        }
        Ok(vec)
    }

    /// Append a non-zero entry.
    /// `index` must be greater than every index already stored.
    /// A zero `value` is ignored.
    #[inline]
    pub(crate) fn push_entry(&mut self, index: usize, value: N) {
        debug_assert!(index < self.len, "index out of bounds");
        debug_assert!(self.inds.last().map_or(true, |last| *last < index), "indices must ascend");
        if value != N::zero() {
            self.inds.push(index);
            self.vals.push(value);
        }
    }

    /// Logical dimension.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Value at `index`, `Some(&0)` for implicit zeros, `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(&self.vals[pos]),
            Err(_) => Some(&self.zero),
        }
    }

    /// Iterate over non-zero entries as `(index, &value)`, ascending by index.
    #[inline]
    pub fn raw_iter(&self) -> impl ExactSizeIterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    fn default() -> Self {
        ZeroSpVec::new(0)
    }
}

impl<N: Num + Copy + Debug> Debug for ZeroSpVec<N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec(len: {}, ", self.len)?;
            f.debug_map().entries(self.raw_iter()).finish()?;
            write!(f, ")")
        } else {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("inds", &self.inds)
                .field("vals", &self.vals)
                .finish()
        }
    }
}
