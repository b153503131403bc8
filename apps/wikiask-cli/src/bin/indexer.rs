use std::env;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use wikiask_core::config::{expand_path, Config};
use wikiask_core::segment::Segmenter;
use wikiask_core::traits::Normalizer;
use wikiask_lemma::SnowballNormalizer;
use wikiask_text::IndexBuilder;

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
    let index_dir = {
        let p: String = config
            .get("data.index_dir")
            .unwrap_or_else(|_| "data/index/tantivy".to_string());
        expand_path(p)
    };

    println!("wikiask indexer\n===============");
    println!("Corpus: {}", corpus_path.display());

    let docs = Segmenter::new().segment_source(&corpus_path)?;
    println!("Segmented {} documents", docs.len());

    let normalizer = SnowballNormalizer::english();
    let mut builder = IndexBuilder::create(&index_dir)?;
    let bar = ProgressBar::new(docs.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);
    for doc in &docs {
        let terms = normalizer.normalize(&doc.content)?;
        builder.add_document(&doc.id, &terms)?;
        bar.inc(1);
    }
    builder.commit()?;
    bar.finish_and_clear();

    println!("✅ Indexed {} documents into {}", docs.len(), index_dir.display());
    println!("💡 To evaluate, run: cargo run --bin wikiask");
    println!("💡 To ask one question, run: cargo run --bin wikiask-ask '<question>'");
    Ok(())
}
