//! Pattern evaluators
//!
//! One evaluator per structural configuration of a clause root. Evaluators
//! only gather strings: relation labels and objects (and, for the
//! noun-fragment case, the subject). Turning them into tuples is the job of
//! `relation`, and picking an evaluator is the job of `extractor`.
//!
//! Tree descent in the helpers is iterative; the extractor rejects trees
//! deeper than its configured limit before any evaluator runs.

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::phrase::{NounMode, all_nouns, noun_phrase, temporal_phrase};
use crate::tree::{DepRel, ParseNode};

/// Relation labels and objects that apply to each other as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub relations: Vec<String>,
    pub objects: Vec<String>,
}

impl Findings {
    /// True when no tuple can come out of these findings
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty() || self.objects.is_empty()
    }
}

/// Relation groups paired index by index with object groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairedFindings {
    pub relations: Vec<Vec<String>>,
    pub objects: Vec<Vec<String>>,
}

impl PairedFindings {
    fn push(&mut self, relations: Vec<String>, objects: Vec<String>) {
        self.relations.push(relations);
        self.objects.push(objects);
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

/// Output of the passive subject evaluator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassiveFindings {
    /// One entry per apposition that names a relation of its own
    pub appositions: Vec<Findings>,
    pub main: Findings,
}

/// A named entity found below a chain of prepositions, labelled by its
/// immediate governor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedEntity {
    pub relation: String,
    pub object: String,
}

/// Case 1: proper subject and proper object around a verb
///
/// Relations are the nouns under each preposition of the root, plus those
/// under prepositions conjoined to it ("as X and as Y").
pub fn sub_obj_vbroot(root: &ParseNode) -> Result<Vec<String>, ExtractError> {
    let mut relations = Vec::new();
    for prep in root.children_of(DepRel::Preposition) {
        relations.extend(all_nouns(prep.predicate_object()?, NounMode::Common)?);

        for conj in prep.children_of(DepRel::Conjunction) {
            relations.extend(all_nouns(conj.predicate_object()?, NounMode::Common)?);
        }
    }
    Ok(relations)
}

/// Case 2: open clausal complement whose logical subject is the outer object
///
/// A nominal complement, or a verbal one without an object, yields nothing.
pub fn x_comp(open_comp: &ParseNode) -> Result<Findings, ExtractError> {
    if open_comp.is_noun() {
        return Ok(Findings::default());
    }
    let Some(object) = open_comp.find_predicate_object() else {
        return Ok(Findings::default());
    };

    Ok(Findings {
        relations: vec![noun_phrase(open_comp, NounMode::Common)?],
        objects: all_nouns(object, NounMode::Proper)?,
    })
}

/// Case 3: proper passive subject
pub fn subjpass(root: &ParseNode) -> Result<PassiveFindings, ExtractError> {
    let mut found = PassiveFindings::default();

    if let Some(subject) = root.subject() {
        for appos in subject.appositional_phrases() {
            found.appositions.extend(pobj_appositional_relations(appos)?);
        }
    }

    let mut root_relations = false;
    for prep in root.children_of(DepRel::Preposition) {
        let pobj = prep.predicate_object()?;
        let owner = if pobj.has_possessor() {
            Some(pobj.possessor()?)
        } else {
            None
        };

        // as Federer's coach
        if let Some(owner) = owner.filter(|owner| owner.is_proper_noun()) {
            found.main.objects.push(noun_phrase(owner, NounMode::Proper)?);
            found.main.relations.extend(all_nouns(pobj, NounMode::Common)?);
        } else if pobj.is_proper_noun() {
            found.main.objects.extend(all_nouns(pobj, NounMode::Proper)?);
            root_relations = true;
            for appos in pobj.appositional_phrases() {
                found.appositions.extend(pobj_appositional_relations(appos)?);
            }
        }
    }

    if root_relations {
        found.main.relations.push(noun_phrase(root, NounMode::Common)?);
    }

    for tmod in root.children_of(DepRel::TemporalModifier) {
        found.main.relations.push(noun_phrase(root, NounMode::Common)?);
        found.main.objects.push(temporal_phrase(tmod));
    }

    Ok(found)
}

/// Relations named by a non-proper apposition ("the only son of X")
///
/// Yields one entry per preposition of the apposition whose object is a
/// proper noun.
pub fn pobj_appositional_relations(appos: &ParseNode) -> Result<Vec<Findings>, ExtractError> {
    let mut found = Vec::new();
    for prep in appos.children_of(DepRel::Preposition) {
        let pobj = prep.predicate_object()?;
        if pobj.is_proper_noun() {
            found.push(Findings {
                relations: vec![noun_phrase(appos, NounMode::Common)?],
                objects: all_nouns(pobj, NounMode::Proper)?,
            });
        }
    }
    Ok(found)
}

/// Case 4: proper subject of a nominal root
pub fn nnroot_subj(root: &ParseNode) -> Result<Findings, ExtractError> {
    let mut found = Findings {
        relations: vec![noun_phrase(root, NounMode::Common)?],
        objects: Vec::new(),
    };

    for prep in root.children_of(DepRel::Preposition) {
        let pobj = prep.predicate_object()?;
        if pobj.is_proper_noun() {
            found.objects.extend(all_nouns(pobj, NounMode::Proper)?);
        }
    }
    Ok(found)
}

/// Case 5: verb root whose non-proper direct object names the relation
///
/// Without any prepositional object the whole finding is dropped.
pub fn vbroot_subj_xobj(
    root: &ParseNode,
    config: &ExtractorConfig,
) -> Result<Findings, ExtractError> {
    let Some(object) = root.object() else {
        return Ok(Findings::default());
    };
    let relations = all_nouns(object, NounMode::Common)?;

    let mut objects = Vec::new();
    for prep in root.children_of(DepRel::Preposition) {
        let pobj = prep.predicate_object()?;
        if prep.word == config.nested_preposition {
            objects.extend(nested_in_pobjs(pobj, &config.nested_preposition)?);
        } else if pobj.is_proper_noun() {
            objects.push(noun_phrase(pobj, NounMode::Common)?);
        }
    }

    if objects.is_empty() {
        return Ok(Findings::default());
    }
    Ok(Findings { relations, objects })
}

/// Case 6: verb root with a proper subject and no direct object
///
/// Every pair comes from a separate prepositional phrase or conjoined
/// clause, so the result must be paired positionally.
pub fn vbroot_subj(
    root: &ParseNode,
    config: &ExtractorConfig,
) -> Result<PairedFindings, ExtractError> {
    let mut found = PairedFindings::default();

    for prep in root.children_of(DepRel::Preposition) {
        let pobj = prep.predicate_object()?;

        // died at St. Vincent's hospital (in X)
        if pobj.has_possessor() && pobj.possessor()?.is_proper_noun() {
            found.push(
                vec![root.word.clone()],
                vec![noun_phrase(pobj, NounMode::Proper)?],
            );
            let nested = nested_in_pobjs(pobj, &config.nested_preposition)?;
            if !nested.is_empty() {
                found.push(vec![root.word.clone()], nested);
            }
        }

        // "After a stint as ..." ahead of the subject
        if config.fronted_prepositions && is_title_case(&prep.word) {
            if let Some(entity) = recursive_prep_search(pobj)? {
                found.push(vec![entity.relation], vec![entity.object]);
            }
        }

        if pobj.is_proper_noun() {
            found.push(
                vec![noun_phrase(root, NounMode::Common)?],
                all_nouns(pobj, NounMode::Proper)?,
            );
        } else if prep.prepositional_complement().is_some() {
            if let Some(entity) = recursive_prep_search(pobj)? {
                found.push(vec![entity.relation], vec![entity.object]);
            }
        }
    }

    for conj in root.children_of(DepRel::Conjunction) {
        let conj_prep = conj.first_child_of(DepRel::Preposition);
        let conj_obj = conj.object();

        match (conj_prep, conj_obj) {
            (Some(prep), Some(object)) => {
                let pobj = prep.predicate_object()?;
                found.push(
                    vec![noun_phrase(object, NounMode::Common)?],
                    all_nouns(pobj, NounMode::Proper)?,
                );
            }
            (Some(prep), None) => {
                if prep.prepositional_complement().is_some() {
                    continue;
                }
                let pobj = prep.predicate_object()?;
                if pobj.is_proper_noun() {
                    found.push(
                        vec![noun_phrase(conj, NounMode::Common)?],
                        all_nouns(pobj, NounMode::Proper)?,
                    );
                }
            }
            (None, Some(object)) => {
                if let Some(entity) = recursive_prep_search(object)? {
                    found.push(vec![entity.relation], vec![entity.object]);
                }
            }
            (None, None) => {}
        }
    }

    Ok(found)
}

/// Follow first prepositions down from `node` to the first proper noun
///
/// The relation is the noun directly governing the entity, so
/// "stint as a teacher at X" yields ("teacher", X). Descent stops with
/// nothing at the first candidate that is not a noun or has no preposition.
pub fn recursive_prep_search(node: &ParseNode) -> Result<Option<NestedEntity>, ExtractError> {
    let Some(prep) = node.first_child_of(DepRel::Preposition) else {
        return Ok(None);
    };

    let mut parent = node;
    let mut candidate = prep.predicate_object()?;
    loop {
        if candidate.is_proper_noun() {
            return Ok(Some(NestedEntity {
                relation: noun_phrase(parent, NounMode::Common)?,
                object: noun_phrase(candidate, NounMode::Proper)?,
            }));
        }
        if !candidate.is_noun() {
            return Ok(None);
        }
        let Some(prep) = candidate.first_child_of(DepRel::Preposition) else {
            return Ok(None);
        };
        parent = candidate;
        candidate = prep.predicate_object()?;
    }
}

/// Flatten "X in Y in Z" place chains
///
/// Proper nouns are collected at every level reached through `preposition`
/// (normally "in"), outer levels first. A non-proper level contributes only
/// a colon-introduced list, if it has one.
pub fn nested_in_pobjs(pobj: &ParseNode, preposition: &str) -> Result<Vec<String>, ExtractError> {
    let mut objects = Vec::new();
    let mut stack = vec![pobj];

    while let Some(node) = stack.pop() {
        if node.is_proper_noun() {
            objects.extend(all_nouns(node, NounMode::Proper)?);
        } else {
            objects.extend(colon_dep(node)?);
        }

        let mut nested = node
            .children_of(DepRel::Preposition)
            .filter(|prep| prep.word == preposition)
            .map(|prep| prep.predicate_object())
            .collect::<Result<Vec<_>, _>>()?;
        nested.reverse();
        stack.extend(nested);
    }

    Ok(objects)
}

/// Proper nouns listed after a colon ("cities: Moscow, Kazan")
pub fn colon_dep(node: &ParseNode) -> Result<Vec<String>, ExtractError> {
    let has_colon = node
        .children_of(DepRel::Punctuation)
        .any(|punct| punct.word == ":");

    match node.first_child_of(DepRel::Unknown) {
        Some(dep) if has_colon => all_nouns(dep, NounMode::Proper),
        _ => Ok(Vec::new()),
    }
}

/// Case 7: a proper-noun fragment with no clause around it
///
/// Returns the root's own phrase as the subject.
pub fn nnproot(root: &ParseNode) -> Result<(String, Findings), ExtractError> {
    let subject = noun_phrase(root, NounMode::Proper)?;

    let mut found = Findings::default();
    for prep in root.children_of(DepRel::Preposition) {
        let pobj = prep.predicate_object()?;
        if pobj.is_noun() && !pobj.is_proper_noun() && pobj.has_possessor() {
            found.objects.push(noun_phrase(pobj.possessor()?, NounMode::Proper)?);
            found.relations.push(noun_phrase(pobj, NounMode::Common)?);
        }
    }

    Ok((subject, found))
}

/// Case 8: owners named inside a non-proper passive subject
///
/// Either the subject's own possessors, or, failing that, the proper
/// objects (or their possessors) of its prepositions. Objects that are
/// neither are skipped.
pub fn subjpass_poss(subject: &ParseNode) -> Result<Vec<String>, ExtractError> {
    if subject.has_possessor() {
        return subject
            .children_of(DepRel::PossessionBy)
            .map(|owner| noun_phrase(owner, NounMode::Proper))
            .collect();
    }

    let mut owners = Vec::new();
    for prep in subject.children_of(DepRel::Preposition) {
        for pobj in prep.children_of(DepRel::PredicateObject) {
            if pobj.is_proper_noun() {
                owners.push(noun_phrase(pobj, NounMode::Proper)?);
            } else if pobj.is_noun() && pobj.has_possessor() {
                owners.push(noun_phrase(pobj.possessor()?, NounMode::Proper)?);
            }
        }
    }
    Ok(owners)
}

/// Case 9: relative clause modifier on the root
///
/// Recognized but not evaluated: `Some` marks the case as applicable and
/// always carries empty findings.
pub fn subj_rcmod(root: &ParseNode) -> Option<Findings> {
    root.has_relative_clause_modifier().then(Findings::default)
}

/// Title case as in "After" or "In": cased runs start upper and continue lower
fn is_title_case(word: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}
