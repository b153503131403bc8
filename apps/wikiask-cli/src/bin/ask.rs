use std::env;
use std::path::PathBuf;

use wikiask_lemma::SnowballNormalizer;
use wikiask_qa::QueryProcessor;
use wikiask_text::TermIndex;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} \"<question>\" [index_dir]", args[0]);
        eprintln!("Example: {} 'ANIMALS what says meow' data/index/tantivy", args[0]);
        std::process::exit(1);
    }
    let question = &args[1];
    let index_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/index/tantivy"));

    println!("🔍 wikiask-ask\n==============");
    println!("Question: {}", question);
    println!("Index directory: {}", index_dir.display());

    let index = TermIndex::open(&index_dir)?;
    let processor = QueryProcessor::new(index, Box::new(SnowballNormalizer::english()));
    let hits = processor.query(10, question)?;

    println!("\nFound {} candidates", hits.len());
    for (i, hit) in hits.iter().enumerate() {
        println!("  {}. score={:.4}  id={}", i + 1, hit.score, hit.id);
    }
    Ok(())
}
