use wikiask_core::traits::TermSearcher;
use wikiask_core::types::{EvalSummary, QuestionRecord};

use crate::query::QueryProcessor;

/// Hits requested per question; only the top-ranked one decides correctness.
const EVAL_TOP_K: usize = 3;

/// Drive the labeled question set through the query processor and tally
/// top-1 accuracy. A failing query prints a diagnostic and scores zero; the
/// batch always continues.
pub fn evaluate<S: TermSearcher>(
    processor: &QueryProcessor<S>,
    records: &[QuestionRecord],
) -> EvalSummary {
    let mut correct = 0;
    for record in records {
        let query = format!("{} {}", record.category.trim(), record.question.trim());
        match processor.query(EVAL_TOP_K, &query) {
            Ok(hits) => match hits.first() {
                Some(top) if answers_match(&top.id, &record.answer) => {
                    println!("  correct: {}", record.answer);
                    correct += 1;
                }
                Some(top) => println!("  expected: {} (got {})", record.answer, top.id),
                None => println!("  expected: {} (no hits)", record.answer),
            },
            Err(e) => eprintln!("  query failed for \"{}\": {}", query, e),
        }
    }
    EvalSummary {
        correct,
        total: records.len(),
    }
}

fn answers_match(candidate: &str, expected: &str) -> bool {
    candidate.to_lowercase() == expected.to_lowercase()
}
