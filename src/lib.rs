//! Treerel: rule-based relation extraction from dependency trees
//!
//! Turns a dependency parse (Stanford basic labels, Penn Treebank tags) into
//! (subject, relation, object) triples by recognizing a fixed set of
//! structural cases at the root. Trees come from hierplane JSON, CoNLL-U or
//! a bracket notation; corpora are processed sentence by sentence.

// Core modules (tree model and evaluation)
pub mod accessor; // Structural queries on nodes
pub mod evaluator; // Per-case pattern evaluators
pub mod extractor; // Root classification and assembly
pub mod phrase; // Noun and temporal phrase rendering
pub mod relation; // Relation records and expansion to tuples
pub mod tree; // ParseNode, dependency labels and POS tags

// Input, configuration and batch processing
pub mod config;
pub mod conllu;
pub mod corpus;
pub mod error;
pub mod hierplane;
pub mod notation;

#[cfg(test)]
mod fixtures;

// Python bindings
#[cfg(feature = "pyo3")]
pub mod python;

// Re-exports for convenience
pub use config::{ConfigError, ExtractorConfig};
pub use conllu::CoNLLUReader;
pub use corpus::{Corpus, InputFormat, SentenceOutcome};
pub use error::{ExtractError, InputError};
pub use extractor::{Extraction, Extractor, Pattern, generate};
pub use hierplane::parse_json;
pub use notation::parse_tree;
pub use relation::RelationTuple;
pub use tree::{DepRel, ParseNode, PosTag};
