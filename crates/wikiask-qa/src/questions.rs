use std::fs;
use std::path::Path;

use wikiask_core::error::{Error, Result};
use wikiask_core::types::QuestionRecord;

/// Stride of one record in the question file: category, question, expected
/// answer, spacer line.
const RECORD_STRIDE: usize = 4;

pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::QuestionFile(format!("{}: {}", path.display(), e)))?;
    parse_questions(&text)
}

/// Parse the fixed-stride question file. Trailing blank lines are fine; a
/// record cut off mid-stride is not.
pub fn parse_questions(text: &str) -> Result<Vec<QuestionRecord>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut records = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i..].iter().all(|l| l.trim().is_empty()) {
            break;
        }
        if i + 2 >= lines.len() {
            return Err(Error::QuestionFile(format!(
                "truncated record starting at line {}",
                i + 1
            )));
        }
        records.push(QuestionRecord {
            category: lines[i].trim().to_string(),
            question: lines[i + 1].trim().to_string(),
            answer: lines[i + 2].trim().to_string(),
        });
        i += RECORD_STRIDE;
    }
    Ok(records)
}
