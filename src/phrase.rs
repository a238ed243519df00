//! Surface phrases for tree nodes
//!
//! Builds the noun phrase, named-entity phrase or temporal phrase a node
//! heads. Only leaf modifiers are folded into a phrase; conjuncts and other
//! sub-phrases are collected separately by `all_nouns`.

use crate::error::ExtractError;
use crate::tree::{DepRel, ParseNode};

/// How a noun is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounMode {
    /// Relation labels: adjectival modifiers are kept
    Common,
    /// Named entities: adjectives dropped, possessors and "of" kept
    Proper,
}

/// Space-joined phrase accumulator
#[derive(Debug, Default)]
pub struct PhraseBuilder {
    buf: String,
}

impl PhraseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word, separated by a space unless the phrase is empty
    pub fn push_word(&mut self, word: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(word);
    }

    /// Append text with no separator (punctuation)
    pub fn push_abutting(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Discard what has been built and start over from `word`
    pub fn reset_to(&mut self, word: &str) {
        self.buf.clear();
        self.buf.push_str(word);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Phrase headed by `node`, anchored by the node's own word at the end
pub fn noun_phrase(node: &ParseNode, mode: NounMode) -> Result<String, ExtractError> {
    let proper = mode == NounMode::Proper;

    if node.children().is_empty() {
        return Ok(node.word.clone());
    }

    // XXX's barracks
    if proper && node.has_possessor() {
        let owner = noun_phrase(node.possessor()?, NounMode::Proper)?;
        return Ok(format!("{}'s {}", owner, node.word));
    }

    // Month Day, Year
    if proper {
        let mut numerals = node.children_of(DepRel::Numeral);
        if let (Some(day), Some(year)) = (numerals.next(), numerals.next()) {
            return Ok(format!("{} {}, {}", node.word, day.word, year.word));
        }
    }

    let mut phrase = PhraseBuilder::new();
    for child in node.children() {
        if proper && child.is_of_preposition() {
            let pobj = child.predicate_object()?;
            phrase.push_word(&node.word);
            phrase.push_word(&child.word);
            phrase.push_word(&pobj.word);
            return Ok(phrase.finish());
        }
        if !child.is_leaf() {
            continue;
        }
        match child.link {
            // only the closest adjective survives
            DepRel::AdjectivalModifier if !proper => phrase.reset_to(&child.word),
            DepRel::Numeral | DepRel::NounCompound => phrase.push_word(&child.word),
            _ => {}
        }
    }
    phrase.push_word(&node.word);
    Ok(phrase.finish())
}

/// Date-like phrase under a temporal modifier
///
/// The head word is emitted when the first punctuation child is reached,
/// so "September 4, 1946" comes out as "4 September, 1946".
pub fn temporal_phrase(node: &ParseNode) -> String {
    if node.children().is_empty() {
        return node.word.clone();
    }

    let mut phrase = PhraseBuilder::new();
    let mut head_added = false;
    for child in node.children() {
        if child.link == DepRel::Punctuation {
            if !head_added {
                phrase.push_word(&node.word);
                head_added = true;
            }
            phrase.push_abutting(&child.word);
        } else {
            phrase.push_word(&child.word);
        }
    }
    phrase.finish()
}

/// Every noun phrase rooted at `node`
///
/// Order: the node itself, its conjuncts, its appositions, then compound
/// nouns that head their own sub-phrase. In `Proper` mode conjuncts and
/// appositions that are not proper nouns are dropped.
pub fn all_nouns(node: &ParseNode, mode: NounMode) -> Result<Vec<String>, ExtractError> {
    let proper = mode == NounMode::Proper;
    let mut nouns = vec![noun_phrase(node, mode)?];

    for conj in node.children_of(DepRel::Conjunction) {
        if proper && !conj.is_proper_noun() {
            continue;
        }
        nouns.push(noun_phrase(conj, mode)?);
    }

    for appos in node.children_of(DepRel::Apposition) {
        if proper && !appos.is_proper_noun() {
            continue;
        }
        nouns.push(noun_phrase(appos, mode)?);
    }

    for compound in node.children_of(DepRel::NounCompound) {
        if !compound.is_leaf() {
            nouns.push(noun_phrase(compound, mode)?);
        }
    }

    Ok(nouns)
}
