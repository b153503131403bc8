use tempfile::TempDir;

use wikiask_core::error::{Error, Result};
use wikiask_core::segment::Segmenter;
use wikiask_core::traits::{Normalizer, TermSearcher};
use wikiask_core::types::RawDocument;
use wikiask_text::{build_index, IndexBuilder, TermIndex};

/// Splits on whitespace and lowercases, nothing else, so ranking
/// assertions stay independent of any stemmer.
struct WhitespaceNormalizer;

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(|t| t.to_lowercase()).collect())
    }
}

fn doc(id: &str, content: &str) -> RawDocument {
    RawDocument {
        id: id.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn segment_build_and_search_round_trip() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("tantivy");

    let docs = Segmenter::new().segment("[[Doc1]]\n\ncat fact\n\n\n[[Doc2]]\n\ndog fact");
    let index = build_index(&index_dir, &docs, &WhitespaceNormalizer).expect("build");

    // queryable immediately after commit, id returned verbatim
    let hits = index.search("cat", 3).expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "Doc1");

    let hits = index.search("fact", 3).expect("search");
    assert_eq!(hits.len(), 2);
}

#[test]
fn repeated_terms_raise_a_documents_rank() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("tantivy");

    let docs = vec![
        doc("Heavy", "cat cat cat dog"),
        doc("Light", "cat mouse bird fish"),
    ];
    let index = build_index(&index_dir, &docs, &WhitespaceNormalizer).expect("build");

    let hits = index.search("cat", 3).expect("search");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, "Heavy");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn committed_index_reopens_from_disk() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("tantivy");
    assert!(!TermIndex::exists(&index_dir));

    let mut builder = IndexBuilder::create(&index_dir).expect("create");
    builder
        .add_document("Solo", &["unique".to_string(), "marker".to_string()])
        .expect("add");
    drop(builder.commit().expect("commit"));

    assert!(TermIndex::exists(&index_dir));
    let reopened = TermIndex::open(&index_dir).expect("open");
    let hits = reopened.search("marker", 3).expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "Solo");
}

#[test]
fn malformed_query_is_a_syntax_error_not_a_panic() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("tantivy");
    let index = build_index(&index_dir, &[doc("A", "text")], &WhitespaceNormalizer).expect("build");

    let result = index.search("\"cat", 3);
    assert!(matches!(result, Err(Error::QuerySyntax(_))));
}

#[test]
fn stop_word_only_query_returns_no_hits() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("tantivy");
    let index = build_index(&index_dir, &[doc("A", "text")], &WhitespaceNormalizer).expect("build");

    let hits = index.search("the and of", 3).expect("search");
    assert!(hits.is_empty());
}

#[test]
fn opening_a_missing_index_is_a_storage_error() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("never-created");

    let result = TermIndex::open(&index_dir);
    assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
}

#[test]
fn rebuild_replaces_a_stale_index() {
    let tmp = TempDir::new().unwrap();
    let index_dir = tmp.path().join("tantivy");

    let first = build_index(&index_dir, &[doc("Old", "stale")], &WhitespaceNormalizer).expect("build");
    drop(first);
    let second =
        build_index(&index_dir, &[doc("New", "fresh")], &WhitespaceNormalizer).expect("rebuild");

    assert!(second.search("stale", 3).expect("search").is_empty());
    assert_eq!(second.search("fresh", 3).expect("search")[0].id, "New");
}
