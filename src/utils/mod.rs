pub mod datastruct;
pub mod normalizer;
