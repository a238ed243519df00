//! Relation assembly
//!
//! Evaluators hand back lists of subjects, relation labels and objects.
//! `create_relations` turns them into one record per label; records expand
//! into concrete `(subject, relation, object)` tuples.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// A relation label shared by a set of subjects and a set of objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRecord {
    pub subjects: Vec<String>,
    pub relation: String,
    pub objects: Vec<String>,
}

impl RelationRecord {
    /// Every subject paired with every object
    pub fn expand(&self) -> impl Iterator<Item = RelationTuple> + '_ {
        self.subjects.iter().flat_map(move |subject| {
            self.objects.iter().map(move |object| RelationTuple {
                subject: subject.clone(),
                relation: self.relation.clone(),
                object: object.clone(),
            })
        })
    }
}

/// A single extracted triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationTuple {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl RelationTuple {
    pub fn new(subject: &str, relation: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            relation: relation.to_string(),
            object: object.to_string(),
        }
    }
}

/// Tab-separated, one tuple per line
impl fmt::Display for RelationTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.relation, self.object)
    }
}

impl From<(String, String, String)> for RelationTuple {
    fn from((subject, relation, object): (String, String, String)) -> Self {
        Self {
            subject,
            relation,
            object,
        }
    }
}

impl From<RelationTuple> for (String, String, String) {
    fn from(tuple: RelationTuple) -> Self {
        (tuple.subject, tuple.relation, tuple.object)
    }
}

/// Drop repeated strings, keeping first occurrences in order
fn dedup_ordered(items: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// One record per distinct relation label, each over all subjects and objects
pub fn create_relations(
    subjects: &[String],
    relations: &[String],
    objects: &[String],
) -> Vec<RelationRecord> {
    let subjects = dedup_ordered(subjects);
    let objects = dedup_ordered(objects);
    dedup_ordered(relations)
        .into_iter()
        .map(|relation| RelationRecord {
            subjects: subjects.clone(),
            relation,
            objects: objects.clone(),
        })
        .collect()
}

/// Pair the i-th relation group with the i-th object group only
///
/// Each group comes from a separate clause fragment, so groups are never
/// crossed with one another.
pub fn create_nested_relations(
    subjects: &[String],
    relations: &[Vec<String>],
    objects: &[Vec<String>],
) -> Result<Vec<RelationRecord>, ExtractError> {
    if relations.len() != objects.len() {
        return Err(ExtractError::UnpairedRelations {
            relations: relations.len(),
            objects: objects.len(),
        });
    }

    Ok(relations
        .iter()
        .zip(objects)
        .flat_map(|(relations, objects)| create_relations(subjects, relations, objects))
        .collect())
}

/// Flatten records into tuples, preserving record order
pub fn expand(records: &[RelationRecord]) -> Vec<RelationTuple> {
    records.iter().flat_map(RelationRecord::expand).collect()
}
