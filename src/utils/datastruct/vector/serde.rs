use num::Num;
use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ZeroSpVec;

impl<N> Serialize for ZeroSpVec<N>
where
    N: Num + Serialize + Copy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // len, nnz, entries の順
        let mut state = serializer.serialize_struct("ZeroSpVec", 3)?;
        state.serialize_field("len", &(self.len as u64))?;
        state.serialize_field("nnz", &(self.nnz() as u64))?;
        let entries: Vec<(u64, N)> = self
            .raw_iter()
            .map(|(idx, val)| (idx as u64, *val))
            .collect();
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

impl<'de, N> Deserialize<'de> for ZeroSpVec<N>
where
    N: Num + Deserialize<'de> + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ZeroSpVecData<N> {
            len: u64,
            nnz: u64,
            entries: Vec<(u64, N)>,
        }

        let data = ZeroSpVecData::<N>::deserialize(deserializer)?;
        if data.nnz as usize != data.entries.len() {
            return Err(D::Error::custom(format!(
                "nnz is {} but {} entries were stored",
                data.nnz,
                data.entries.len()
            )));
        }
        let len = data.len as usize;
        let mut vec = ZeroSpVec::with_capacity(len, data.entries.len());
        let mut prev: Option<usize> = None;
        for (idx, val) in data.entries {
            let idx = idx as usize;
            if idx >= len || prev.is_some_and(|p| p >= idx) {
                return Err(D::Error::custom(format!("entry index {idx} is out of order or out of range")));
            }
            if val == N::zero() {
                return Err(D::Error::custom(format!("entry {idx} stores an explicit zero")));
            }
            vec.push_entry(idx, val);
            prev = Some(idx);
        }
        Ok(vec)
    }
}
