//! Domain types shared by the segmenter, the term index, and the
//! evaluation harness.

use serde::{Deserialize, Serialize};

pub type DocId = String;

/// One document recovered from the raw corpus.
///
/// - `id`: the boundary header text, kept verbatim (case preserved) as the
///   retrieval key
/// - `content`: the text between this document's header and the next true
///   boundary; embedded media references never terminate it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: DocId,
    pub content: String,
}

/// One ranked candidate returned by the term index.
///
/// `score` is the engine's relevance score; higher is better. Equal scores
/// keep the engine's own order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: DocId,
    pub score: f32,
}

/// One labeled test case from the question file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Tally produced by the evaluation harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalSummary {
    pub correct: usize,
    pub total: usize,
}
