//! Error types
//!
//! `ExtractError` is scoped to one sentence: callers drop that sentence and
//! move on. `InputError` covers reading trees from text, JSON and files.

use std::path::PathBuf;

use thiserror::Error;

use crate::conllu::ParseError;
use crate::notation::NotationError;

/// Failure while evaluating a single tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("malformed tree: `{word}` has no predicate object, direct object or prepositional complement")]
    MissingPredicateObject { word: String },

    #[error("malformed tree: `{word}` has no possessor")]
    MissingPossessor { word: String },

    #[error("malformed tree: `{word}` is not a noun and cannot take a possessor")]
    PossessorOnNonNoun { word: String },

    #[error("tree depth {depth} exceeds the maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },

    #[error("{relations} relation groups cannot be paired with {objects} object groups")]
    UnpairedRelations { relations: usize, objects: usize },
}

impl ExtractError {
    /// Caused by the shape of the input tree rather than by the evaluators
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::MissingPredicateObject { .. }
            | Self::MissingPossessor { .. }
            | Self::PossessorOnNonNoun { .. }
            | Self::DepthExceeded { .. } => true,
            Self::UnpairedRelations { .. } => false,
        }
    }
}

/// Failure while reading trees
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hierplane JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Conllu(#[from] ParseError),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}
