//! wikiask-text
//!
//! Tantivy-based term indexing and search. The index lifecycle is split into
//! a write phase (`IndexBuilder`, consumed on commit) and a read-only query
//! phase (`TermIndex`), so a handle can never be in both at once.

pub mod index;
pub mod search;
pub mod tantivy_utils;

pub use index::{build_index, IndexBuilder};
pub use search::TermIndex;
