use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

/// Tokenizer registered for the searchable term field.
pub const TERM_TOKENIZER: &str = "term_with_stopwords";

pub fn build_schema() -> Schema {
    let mut schema_builder = Schema::builder();
    // docid is the retrieval key: stored verbatim, never tokenized
    let _docid_field = schema_builder.add_text_field("docid", STRING | STORED);
    let term_indexing = TextFieldIndexing::default()
        .set_tokenizer(TERM_TOKENIZER)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let term_options = TextOptions::default().set_indexing_options(term_indexing);
    let _term_field = schema_builder.add_text_field("term", term_options);
    schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
    let stop_words = vec![
        "a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
    ];
    let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(StopWordFilter::remove(stop_words.into_iter().map(|s| s.to_string())))
        .build();
    index.tokenizers().register(TERM_TOKENIZER, tokenizer);
}
