//! wikiask-lemma
//!
//! Snowball-based text normalization behind the `Normalizer` trait. Raw text
//! is split into lowercase alphanumeric tokens and each token is reduced to
//! its stem, so query and document vocabulary match regardless of surface
//! inflection. Deterministic for identical input.

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use wikiask_core::error::Result;
use wikiask_core::traits::Normalizer;

pub struct SnowballNormalizer {
    stemmer: Stemmer,
    token_re: Regex,
}

impl SnowballNormalizer {
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            token_re: Regex::new(r"[A-Za-z0-9]+").unwrap(),
        }
    }
}

impl Default for SnowballNormalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer for SnowballNormalizer {
    fn normalize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .token_re
            .find_iter(text)
            .map(|m| self.stemmer.stem(&m.as_str().to_lowercase()).into_owned())
            .collect())
    }
}
