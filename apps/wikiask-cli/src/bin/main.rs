use std::env;
use std::path::PathBuf;

use wikiask_core::config::{expand_path, Config};
use wikiask_core::segment::Segmenter;
use wikiask_lemma::SnowballNormalizer;
use wikiask_qa::{evaluate, load_questions, QueryProcessor};
use wikiask_text::{build_index, TermIndex};

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let args: Vec<String> = env::args().skip(1).collect();
    let corpus_path = args.first().map(PathBuf::from).unwrap_or_else(|| {
        let p: String = config
            .get("data.corpus_path")
            .unwrap_or_else(|_| "data/wiki-data".to_string());
        expand_path(p)
    });
    let questions_path = args.get(1).map(PathBuf::from).unwrap_or_else(|| {
        let p: String = config
            .get("data.questions_path")
            .unwrap_or_else(|_| "data/questions.txt".to_string());
        expand_path(p)
    });
    let index_dir = {
        let p: String = config
            .get("data.index_dir")
            .unwrap_or_else(|_| "data/index/tantivy".to_string());
        expand_path(p)
    };

    println!("wikiask retrieval evaluation\n============================");
    let normalizer = SnowballNormalizer::english();
    let index = if TermIndex::exists(&index_dir) {
        println!("Opening existing index at {}", index_dir.display());
        TermIndex::open(&index_dir)?
    } else {
        println!("Building index from {}", corpus_path.display());
        let docs = Segmenter::new().segment_source(&corpus_path)?;
        println!("Segmented {} documents", docs.len());
        build_index(&index_dir, &docs, &normalizer)?
    };

    let records = load_questions(&questions_path)?;
    println!(
        "Running {} questions from {}",
        records.len(),
        questions_path.display()
    );
    let processor = QueryProcessor::new(index, Box::new(normalizer));
    let summary = evaluate(&processor, &records);
    println!("\n📊 Correct answers: {}/{}", summary.correct, summary.total);
    Ok(())
}
