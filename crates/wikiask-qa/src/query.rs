use regex::Regex;

use wikiask_core::error::Result;
use wikiask_core::traits::{Normalizer, TermSearcher};
use wikiask_core::types::SearchHit;

/// Query-time half of the pipeline. The raw question is normalized first and
/// punctuation stripped second; the normalizer may emit punctuation that
/// must never reach the query parser. The engine's ranking comes back
/// untouched: no re-sort, no re-rank.
pub struct QueryProcessor<S: TermSearcher> {
    searcher: S,
    normalizer: Box<dyn Normalizer>,
    punct_re: Regex,
}

impl<S: TermSearcher> QueryProcessor<S> {
    pub fn new(searcher: S, normalizer: Box<dyn Normalizer>) -> Self {
        Self {
            searcher,
            normalizer,
            punct_re: Regex::new(r"[[:punct:]]").unwrap(),
        }
    }

    /// Ranked candidates for a free-text query, at most `top_k` of them.
    pub fn query(&self, top_k: usize, raw_query: &str) -> Result<Vec<SearchHit>> {
        let terms = self.normalizer.normalize(raw_query)?;
        let cleaned = self.punct_re.replace_all(&terms.join(" "), "").into_owned();
        self.searcher.search(&cleaned, top_k)
    }
}
