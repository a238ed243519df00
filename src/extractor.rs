//! Relation extraction driver
//!
//! Classifies the root of a dependency tree, runs the matching pattern
//! evaluators and assembles their findings into relation tuples.

use std::fmt;

use tracing::{debug, trace};

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::evaluator::{self, Findings};
use crate::phrase::{NounMode, all_nouns, noun_phrase};
use crate::relation::{self, RelationRecord, RelationTuple};
use crate::tree::{DepRel, ParseNode};

/// Structural case recognized at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Proper subject, proper object
    SubjectObject,
    /// Open clausal complement of a subject-object clause
    OpenClausalComplement,
    /// Proper passive subject
    PassiveSubject,
    /// Proper subject of a nominal root
    NounRootSubject,
    /// Proper subject, verb root, non-proper direct object
    VerbRootSubjectObject,
    /// Proper subject, verb root, no direct object
    VerbRootSubject,
    /// Proper-noun fragment
    ProperNounRoot,
    /// Possessors inside a non-proper passive subject
    PassiveSubjectPossessor,
    /// Relative clause modifier; not evaluated
    RelativeClauseModifier,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubjectObject => "sub_obj_vbroot",
            Self::OpenClausalComplement => "x_comp",
            Self::PassiveSubject => "subjpass",
            Self::NounRootSubject => "nnroot_subj",
            Self::VerbRootSubjectObject => "vbroot_subj_xobj",
            Self::VerbRootSubject => "vbroot_subj",
            Self::ProperNounRoot => "nnproot",
            Self::PassiveSubjectPossessor => "subjpass_poss",
            Self::RelativeClauseModifier => "subj_rcmod",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tuples extracted from one tree, with the cases that fired
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub tuples: Vec<RelationTuple>,
    pub patterns: Vec<Pattern>,
    /// Set when a recognized but unsupported case applied
    pub unsupported: bool,
}

impl Extraction {
    fn record(&mut self, pattern: Pattern, records: &[RelationRecord]) {
        let tuples = relation::expand(records);
        debug!(pattern = pattern.name(), tuples = tuples.len(), "pattern evaluated");
        self.patterns.push(pattern);
        self.tuples.extend(tuples);
    }
}

/// Rule-based relation extractor over dependency trees
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Tuples for one tree; an empty list is a normal outcome
    pub fn generate(&self, root: &ParseNode) -> Result<Vec<RelationTuple>, ExtractError> {
        Ok(self.extract(root)?.tuples)
    }

    /// Evaluate `root` and report which cases fired
    pub fn extract(&self, root: &ParseNode) -> Result<Extraction, ExtractError> {
        let depth = root.depth();
        if depth > self.config.max_depth {
            return Err(ExtractError::DepthExceeded {
                depth,
                max_depth: self.config.max_depth,
            });
        }

        let mut extraction = Extraction::default();
        let subject = root.subject();
        let object = root.object();

        match (subject, object) {
            (Some(subject), Some(object))
                if subject.is_proper_noun() && object.is_proper_noun() =>
            {
                self.subject_object(root, subject, object, &mut extraction)?;
            }
            (Some(subject), object) if subject.is_proper_noun() => {
                self.proper_subject(root, subject, object, &mut extraction)?;
            }
            (subject, _) => {
                self.no_proper_subject(root, subject, &mut extraction)?;
            }
        }

        if extraction.patterns.is_empty() {
            trace!(root = %root.word, "no recognized structure");
        }
        Ok(extraction)
    }

    fn subject_object(
        &self,
        root: &ParseNode,
        subject: &ParseNode,
        object: &ParseNode,
        extraction: &mut Extraction,
    ) -> Result<(), ExtractError> {
        let subjects = all_nouns(subject, NounMode::Proper)?;
        let objects = vec![noun_phrase(object, NounMode::Proper)?];
        let relations = evaluator::sub_obj_vbroot(root)?;
        extraction.record(
            Pattern::SubjectObject,
            &relation::create_relations(&subjects, &relations, &objects),
        );

        // the complement's logical subject is the outer object
        if let Some(open_comp) = root.first_child_of(DepRel::OpenClausalComplement) {
            let found = evaluator::x_comp(open_comp)?;
            extraction.record(
                Pattern::OpenClausalComplement,
                &assemble(&objects, &found),
            );
        }
        Ok(())
    }

    fn proper_subject(
        &self,
        root: &ParseNode,
        subject: &ParseNode,
        object: Option<&ParseNode>,
        extraction: &mut Extraction,
    ) -> Result<(), ExtractError> {
        let subjects = all_nouns(subject, NounMode::Proper)?;

        if subject.link == DepRel::PassiveNominalSubject {
            let found = evaluator::subjpass(root)?;
            let mut records = Vec::new();
            for appos in &found.appositions {
                records.extend(assemble(&subjects, appos));
            }
            records.extend(assemble(&subjects, &found.main));
            extraction.record(Pattern::PassiveSubject, &records);
        } else if root.is_noun() {
            let found = evaluator::nnroot_subj(root)?;
            extraction.record(Pattern::NounRootSubject, &assemble(&subjects, &found));
        } else if root.is_verb() && object.is_some() {
            let found = evaluator::vbroot_subj_xobj(root, &self.config)?;
            extraction.record(
                Pattern::VerbRootSubjectObject,
                &assemble(&subjects, &found),
            );
        } else if root.is_verb() {
            let found = evaluator::vbroot_subj(root, &self.config)?;
            let records =
                relation::create_nested_relations(&subjects, &found.relations, &found.objects)?;
            extraction.record(Pattern::VerbRootSubject, &records);
        } else {
            trace!(root = %root.word, subject = %subject.word, "proper subject with unknown structure");
        }
        Ok(())
    }

    fn no_proper_subject(
        &self,
        root: &ParseNode,
        subject: Option<&ParseNode>,
        extraction: &mut Extraction,
    ) -> Result<(), ExtractError> {
        if let Some(subject) = subject.filter(|s| s.link == DepRel::PassiveNominalSubject) {
            let owners = evaluator::subjpass_poss(subject)?;
            debug!(
                pattern = Pattern::PassiveSubjectPossessor.name(),
                owners = ?owners,
                "nested possessive subject"
            );
            extraction.patterns.push(Pattern::PassiveSubjectPossessor);
        }

        if evaluator::subj_rcmod(root).is_some() {
            debug!(
                pattern = Pattern::RelativeClauseModifier.name(),
                unsupported = true,
                "relative clause modifier not evaluated"
            );
            extraction.patterns.push(Pattern::RelativeClauseModifier);
            extraction.unsupported = true;
        }

        if root.is_proper_noun() {
            let (subject, found) = evaluator::nnproot(root)?;
            extraction.record(Pattern::ProperNounRoot, &assemble(&[subject], &found));
        }
        Ok(())
    }
}

fn assemble(subjects: &[String], found: &Findings) -> Vec<RelationRecord> {
    relation::create_relations(subjects, &found.relations, &found.objects)
}

/// Extract relation tuples with the default configuration
pub fn generate(root: &ParseNode) -> Result<Vec<RelationTuple>, ExtractError> {
    Extractor::default().generate(root)
}
