//! Corpus segmentation.
//!
//! A corpus file carries documents back to back with no length header:
//!
//! ```text
//! [[Title]]\n\ncontent ...\n\n\n[[Next Title]]\n\ncontent ...
//! ```
//!
//! The `\n\n\n[[` opener is ambiguous: a `[[File:...]]` or `[[Image:...]]`
//! media reference can sit right after a paragraph break inside a document
//! body and must not end it. The scanner below is a small state machine;
//! every transition moves the scan position forward, so it terminates on
//! any input, well-formed or not.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::types::RawDocument;

/// Closes a boundary header; document content starts right after it.
const HEADER_CLOSE: &str = "]]\n\n";
/// Opens the next boundary header from inside a document body.
const BOUNDARY_OPEN: &str = "\n\n\n[[";

enum ScanState {
    /// Looking for a boundary header whose `[[` sits at `opener`.
    SeekBoundary { opener: usize },
    /// Inside the body that began at `start`; the terminator scan is at `scan`.
    InDocument { id: String, start: usize, scan: usize },
    /// The scan hit `\n\n\n[[File:` or `\n\n\n[[Image:`; resume past it.
    MediaReference { id: String, start: usize, resume: usize },
    EndOfCorpus,
}

#[derive(Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Segment a corpus file, or every regular file under a corpus directory.
    ///
    /// Directory entries are visited in sorted path order so repeated builds
    /// index documents in the same sequence.
    pub fn segment_source(&self, source: &Path) -> Result<Vec<RawDocument>> {
        let files = if source.is_dir() {
            self.list_corpus_files(source)
        } else {
            vec![source.to_path_buf()]
        };
        let mut docs = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            println!(
                "Segmenting file {}/{}: {}",
                file_index + 1,
                files.len(),
                file_path.display()
            );
            let corpus = self.read_file_content(file_path)?;
            docs.extend(self.segment(&corpus));
        }
        Ok(docs)
    }

    /// Split one corpus blob into documents.
    ///
    /// A corpus with no well-formed boundary header yields no documents. A
    /// final document with no terminator runs to the end of the text.
    pub fn segment(&self, corpus: &str) -> Vec<RawDocument> {
        let mut docs = Vec::new();
        let mut state = match corpus.find("[[") {
            Some(opener) => ScanState::SeekBoundary { opener },
            None => ScanState::EndOfCorpus,
        };
        loop {
            state = match state {
                ScanState::SeekBoundary { opener } => match parse_header(corpus, opener) {
                    Some((id, start)) => ScanState::InDocument { id, start, scan: start },
                    None => ScanState::EndOfCorpus,
                },
                ScanState::InDocument { id, start, scan } => {
                    match corpus[scan..].find(BOUNDARY_OPEN) {
                        Some(rel) => {
                            let end = scan + rel;
                            let after = &corpus[end + BOUNDARY_OPEN.len()..];
                            if after.starts_with("File:") || after.starts_with("Image:") {
                                ScanState::MediaReference {
                                    id,
                                    start,
                                    resume: end + BOUNDARY_OPEN.len(),
                                }
                            } else {
                                docs.push(RawDocument {
                                    id,
                                    content: corpus[start..end].to_string(),
                                });
                                // the next header's `[[` sits past the three newlines
                                ScanState::SeekBoundary { opener: end + 3 }
                            }
                        }
                        None => {
                            docs.push(RawDocument {
                                id,
                                content: corpus[start..].to_string(),
                            });
                            ScanState::EndOfCorpus
                        }
                    }
                }
                ScanState::MediaReference { id, start, resume } => {
                    ScanState::InDocument { id, start, scan: resume }
                }
                ScanState::EndOfCorpus => break,
            };
        }
        docs
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }

    fn list_corpus_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }
}

/// Parse the header whose `[[` sits at `opener`. Returns the document id and
/// the content start offset just past the `]]\n\n` closer, or `None` when no
/// closer follows.
fn parse_header(corpus: &str, opener: usize) -> Option<(String, usize)> {
    let id_start = opener + 2;
    let close = id_start + corpus.get(id_start..)?.find(HEADER_CLOSE)?;
    Some((
        corpus[id_start..close].to_string(),
        close + HEADER_CLOSE.len(),
    ))
}
