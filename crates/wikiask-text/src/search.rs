use std::path::Path;

use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::{Index, IndexReader, TantivyDocument};

use wikiask_core::error::{Error, Result};
use wikiask_core::traits::TermSearcher;
use wikiask_core::types::SearchHit;

use crate::tantivy_utils::register_tokenizer;

/// Read-only phase of the index lifecycle; produced by
/// [`IndexBuilder::commit`](crate::index::IndexBuilder::commit) or by
/// [`open`](Self::open) on a previously committed directory.
pub struct TermIndex {
    index: Index,
    reader: IndexReader,
    docid_field: tantivy::schema::Field,
    term_field: tantivy::schema::Field,
}

impl TermIndex {
    /// Open an index previously committed at `index_dir`.
    pub fn open(index_dir: &Path) -> Result<Self> {
        let index = Index::open_in_dir(index_dir).map_err(|e| Error::StorageUnavailable {
            path: index_dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_index(index, index_dir)
    }

    /// A committed index leaves tantivy's `meta.json` behind; a bare or
    /// half-created directory counts as absent and triggers a rebuild.
    pub fn exists(index_dir: &Path) -> bool {
        index_dir.join("meta.json").is_file()
    }

    pub(crate) fn from_index(index: Index, index_dir: &Path) -> Result<Self> {
        register_tokenizer(&index);
        let schema = index.schema();
        let storage = |e: String| Error::StorageUnavailable {
            path: index_dir.to_path_buf(),
            reason: e,
        };
        let docid_field = schema
            .get_field("docid")
            .map_err(|e| storage(e.to_string()))?;
        let term_field = schema
            .get_field("term")
            .map_err(|e| storage(e.to_string()))?;
        let reader = index.reader().map_err(|e| storage(e.to_string()))?;
        Ok(Self {
            index,
            reader,
            docid_field,
            term_field,
        })
    }
}

impl TermSearcher for TermIndex {
    /// Ranked top-k lookup against the term field. Results keep the engine's
    /// descending-score order; parse failures surface as
    /// [`Error::QuerySyntax`] so callers can recover per query.
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>> {
        let searcher = self.reader.searcher();
        let parser = QueryParser::for_index(&self.index, vec![self.term_field]);
        let parsed = parser
            .parse_query(query)
            .map_err(|e| Error::QuerySyntax(e.to_string()))?;
        let top_docs = searcher
            .search(&parsed, &TopDocs::with_limit(top_k))
            .map_err(|e| Error::Search(e.to_string()))?;
        let mut hits = Vec::new();
        for (score, addr) in top_docs {
            let doc: TantivyDocument = searcher.doc(addr).map_err(|e| Error::Search(e.to_string()))?;
            let id = doc
                .get_first(self.docid_field)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            hits.push(SearchHit { id, score });
        }
        Ok(hits)
    }
}
