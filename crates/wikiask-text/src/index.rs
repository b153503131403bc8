use std::fs;
use std::path::{Path, PathBuf};

use tantivy::{Index, IndexWriter, TantivyDocument};

use wikiask_core::error::{Error, Result};
use wikiask_core::traits::Normalizer;
use wikiask_core::types::RawDocument;

use crate::search::TermIndex;
use crate::tantivy_utils::{build_schema, register_tokenizer};

const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Exclusive write phase of the index lifecycle. [`commit`](Self::commit)
/// consumes the builder and hands back the read-only [`TermIndex`], so a
/// committed index can never be written to through a stale handle.
pub struct IndexBuilder {
    index: Index,
    index_dir: PathBuf,
    writer: IndexWriter,
    docid_field: tantivy::schema::Field,
    term_field: tantivy::schema::Field,
}

impl IndexBuilder {
    /// Create a fresh index at `index_dir`, wiping any stale one first.
    pub fn create(index_dir: &Path) -> Result<Self> {
        let schema = build_schema();
        if index_dir.exists() {
            fs::remove_dir_all(index_dir).map_err(|e| storage_err(index_dir, &e))?;
        }
        fs::create_dir_all(index_dir).map_err(|e| storage_err(index_dir, &e))?;
        let index = Index::create_in_dir(index_dir, schema.clone())
            .map_err(|e| storage_err(index_dir, &e))?;
        register_tokenizer(&index);
        let docid_field = schema
            .get_field("docid")
            .map_err(|e| storage_err(index_dir, &e))?;
        let term_field = schema
            .get_field("term")
            .map_err(|e| storage_err(index_dir, &e))?;
        let writer = index
            .writer(WRITER_HEAP_BYTES)
            .map_err(|e| storage_err(index_dir, &e))?;
        Ok(Self {
            index,
            index_dir: index_dir.to_path_buf(),
            writer,
            docid_field,
            term_field,
        })
    }

    /// Queue one document: the id verbatim, every term as its own posting.
    /// Repeated terms repeat their postings, raising that term's weight for
    /// this document.
    pub fn add_document(&mut self, id: &str, terms: &[String]) -> Result<()> {
        let mut doc = TantivyDocument::default();
        doc.add_text(self.docid_field, id);
        for term in terms {
            doc.add_text(self.term_field, term);
        }
        self.writer
            .add_document(doc)
            .map_err(|e| storage_err(&self.index_dir, &e))?;
        Ok(())
    }

    /// Commit every queued write and expose the index for reading. Documents
    /// are queryable as soon as this returns.
    pub fn commit(self) -> Result<TermIndex> {
        let Self {
            index,
            index_dir,
            mut writer,
            ..
        } = self;
        writer.commit().map_err(|e| storage_err(&index_dir, &e))?;
        TermIndex::from_index(index, &index_dir)
    }
}

/// Feed a segmented document stream through the normalizer into a fresh
/// index, one entry per document. A document that cannot be normalized
/// aborts the build; it could not be indexed consistently.
pub fn build_index(
    index_dir: &Path,
    docs: &[RawDocument],
    normalizer: &dyn Normalizer,
) -> Result<TermIndex> {
    let mut builder = IndexBuilder::create(index_dir)?;
    for doc in docs {
        let terms = normalizer.normalize(&doc.content)?;
        builder.add_document(&doc.id, &terms)?;
        println!("Indexed [{}] ({} terms)", doc.id, terms.len());
    }
    builder.commit()
}

fn storage_err(path: &Path, reason: &dyn std::fmt::Display) -> Error {
    Error::StorageUnavailable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
