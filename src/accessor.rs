//! Read-only queries over parse nodes
//!
//! Lookups are total: a missing child yields an empty iterator or `None`.
//! The two lookups with structural preconditions (`predicate_object`,
//! `possessor`) report violations as `ExtractError`.

use crate::error::ExtractError;
use crate::tree::{DepRel, ParseNode, PosTag};

impl ParseNode {
    /// Children linked by `link`, in sentence order
    pub fn children_of(&self, link: DepRel) -> impl Iterator<Item = &ParseNode> + '_ {
        self.children().iter().filter(move |child| child.link == link)
    }

    /// First child linked by `link`
    pub fn first_child_of(&self, link: DepRel) -> Option<&ParseNode> {
        self.children_of(link).next()
    }

    pub fn has_child_of(&self, link: DepRel) -> bool {
        self.first_child_of(link).is_some()
    }

    /// True only when the node has no children list at all
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Proper noun tag, or any numeral child ("88 years" counts as a named value)
    pub fn is_proper_noun(&self) -> bool {
        self.has_child_of(DepRel::Numeral) || *self.pos() == PosTag::ProperNoun
    }

    pub fn is_noun(&self) -> bool {
        self.is_proper_noun() || matches!(self.pos(), PosTag::Noun | PosTag::NounPlural)
    }

    pub fn is_verb(&self) -> bool {
        self.pos().is_verb()
    }

    /// A preposition that glues a name together ("University of X")
    pub fn is_of_preposition(&self) -> bool {
        self.link == DepRel::Preposition && self.word == "of"
    }

    pub fn has_possessor(&self) -> bool {
        self.has_child_of(DepRel::PossessionBy)
    }

    pub fn has_relative_clause_modifier(&self) -> bool {
        self.has_child_of(DepRel::RelativeClauseModifier)
    }

    /// First possession-by child of a noun
    pub fn possessor(&self) -> Result<&ParseNode, ExtractError> {
        if !self.is_noun() {
            return Err(ExtractError::PossessorOnNonNoun {
                word: self.word.clone(),
            });
        }
        self.first_child_of(DepRel::PossessionBy)
            .ok_or_else(|| ExtractError::MissingPossessor {
                word: self.word.clone(),
            })
    }

    /// Nominal, clausal or passive nominal subject
    pub fn subject(&self) -> Option<&ParseNode> {
        self.children().iter().find(|child| {
            matches!(
                child.link,
                DepRel::NominalSubject | DepRel::ClausalSubject | DepRel::PassiveNominalSubject
            )
        })
    }

    /// Direct, predicate or indirect object
    pub fn object(&self) -> Option<&ParseNode> {
        self.children().iter().find(|child| {
            matches!(
                child.link,
                DepRel::DirectObject | DepRel::PredicateObject | DepRel::IndirectObject
            )
        })
    }

    pub fn prepositional_complement(&self) -> Option<&ParseNode> {
        self.first_child_of(DepRel::PrepositionalComplement)
    }

    /// Appositions that are not themselves named entities
    pub fn appositional_phrases(&self) -> impl Iterator<Item = &ParseNode> + '_ {
        self.children_of(DepRel::Apposition)
            .filter(|appos| !appos.is_proper_noun())
    }

    /// Object governed by a preposition: pobj, else dobj, else pcomp
    pub fn find_predicate_object(&self) -> Option<&ParseNode> {
        self.first_child_of(DepRel::PredicateObject)
            .or_else(|| self.first_child_of(DepRel::DirectObject))
            .or_else(|| self.first_child_of(DepRel::PrepositionalComplement))
    }

    /// Like `find_predicate_object`, but absence means the tree is malformed
    pub fn predicate_object(&self) -> Result<&ParseNode, ExtractError> {
        self.find_predicate_object()
            .ok_or_else(|| ExtractError::MissingPredicateObject {
                word: self.word.clone(),
            })
    }
}
