use crate::error::Result;
use crate::types::SearchHit;

pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Result<Vec<String>>;
}

pub trait TermSearcher: Send + Sync {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>>;
}
