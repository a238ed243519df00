//! Dependency parse tree data structures
//!
//! A `ParseNode` owns its children, so a tree handed to the extractor is
//! acyclic by construction. Leaves carry no children list at all, which is
//! distinct from an internal node whose children list happens to be empty.

use std::fmt;

/// Grammatical relation linking a node to its governor
///
/// Labels follow the Stanford basic dependency scheme emitted by the
/// PTB-trained parsers this crate consumes. A handful of Universal
/// Dependencies labels with a one-to-one counterpart are accepted as
/// aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepRel {
    AdjectivalModifier,
    Apposition,
    ClausalComplement,
    ClausalSubject,
    Conjunction,
    DirectObject,
    IndirectObject,
    NominalSubject,
    NounCompound,
    Numeral,
    OpenClausalComplement,
    PassiveNominalSubject,
    Possessive,
    PossessionBy,
    PredicateObject,
    Preposition,
    PrepositionalComplement,
    Punctuation,
    RelativeClauseModifier,
    TemporalModifier,
    /// Unclassified dependency (`dep`)
    Unknown,
    /// Link of the root node
    Root,
    /// Any label the extractor does not distinguish (det, aux, cc, ...)
    Other,
}

impl DepRel {
    pub fn from_label(label: &str) -> Self {
        match label {
            "amod" => Self::AdjectivalModifier,
            "appos" => Self::Apposition,
            "ccomp" => Self::ClausalComplement,
            "csubj" => Self::ClausalSubject,
            "conj" => Self::Conjunction,
            "dobj" | "obj" => Self::DirectObject,
            "iobj" => Self::IndirectObject,
            "nsubj" => Self::NominalSubject,
            "nn" | "compound" => Self::NounCompound,
            "num" | "nummod" => Self::Numeral,
            "xcomp" => Self::OpenClausalComplement,
            "nsubjpass" | "nsubj:pass" => Self::PassiveNominalSubject,
            "possessive" => Self::Possessive,
            "poss" | "nmod:poss" => Self::PossessionBy,
            "pobj" => Self::PredicateObject,
            "prep" => Self::Preposition,
            "pcomp" => Self::PrepositionalComplement,
            "punct" => Self::Punctuation,
            "rcmod" | "acl:relcl" => Self::RelativeClauseModifier,
            "tmod" | "obl:tmod" | "nmod:tmod" => Self::TemporalModifier,
            "dep" => Self::Unknown,
            "ROOT" | "root" => Self::Root,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdjectivalModifier => "amod",
            Self::Apposition => "appos",
            Self::ClausalComplement => "ccomp",
            Self::ClausalSubject => "csubj",
            Self::Conjunction => "conj",
            Self::DirectObject => "dobj",
            Self::IndirectObject => "iobj",
            Self::NominalSubject => "nsubj",
            Self::NounCompound => "nn",
            Self::Numeral => "num",
            Self::OpenClausalComplement => "xcomp",
            Self::PassiveNominalSubject => "nsubjpass",
            Self::Possessive => "possessive",
            Self::PossessionBy => "poss",
            Self::PredicateObject => "pobj",
            Self::Preposition => "prep",
            Self::PrepositionalComplement => "pcomp",
            Self::Punctuation => "punct",
            Self::RelativeClauseModifier => "rcmod",
            Self::TemporalModifier => "tmod",
            Self::Unknown => "dep",
            Self::Root => "ROOT",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DepRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Penn Treebank part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adjective,
    CardinalNumber,
    Noun,
    NounPlural,
    ProperNoun,
    VerbBase,
    VerbPast,
    VerbGerund,
    VerbPastParticiple,
    Verb3rdSingular,
    VerbNon3rdSingular,
    WhPronoun,
    /// Any other tag, kept verbatim
    Other(String),
}

impl PosTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "JJ" => Self::Adjective,
            "CD" => Self::CardinalNumber,
            "NN" => Self::Noun,
            "NNS" => Self::NounPlural,
            "NNP" => Self::ProperNoun,
            "VB" => Self::VerbBase,
            "VBD" => Self::VerbPast,
            "VBG" => Self::VerbGerund,
            "VBN" => Self::VerbPastParticiple,
            "VBZ" => Self::Verb3rdSingular,
            "VBP" => Self::VerbNon3rdSingular,
            "WP" => Self::WhPronoun,
            _ => Self::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Adjective => "JJ",
            Self::CardinalNumber => "CD",
            Self::Noun => "NN",
            Self::NounPlural => "NNS",
            Self::ProperNoun => "NNP",
            Self::VerbBase => "VB",
            Self::VerbPast => "VBD",
            Self::VerbGerund => "VBG",
            Self::VerbPastParticiple => "VBN",
            Self::Verb3rdSingular => "VBZ",
            Self::VerbNon3rdSingular => "VBP",
            Self::WhPronoun => "WP",
            Self::Other(tag) if tag.is_empty() => "X",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            Self::VerbBase
                | Self::VerbPast
                | Self::VerbGerund
                | Self::VerbPastParticiple
                | Self::Verb3rdSingular
                | Self::VerbNon3rdSingular
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static UNTAGGED: PosTag = PosTag::Other(String::new());

/// A node in a dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub word: String,
    /// POS tags; only the first one drives classification
    pub attributes: Vec<PosTag>,
    pub link: DepRel,
    /// `None` for leaves
    pub children: Option<Vec<ParseNode>>,
}

impl ParseNode {
    /// Create a leaf node with the given attributes
    pub fn new(word: &str, pos: PosTag, link: DepRel) -> Self {
        Self {
            word: word.to_string(),
            attributes: vec![pos],
            link,
            children: None,
        }
    }

    /// Create a root node (no meaningful link)
    pub fn root(word: &str, pos: PosTag) -> Self {
        Self::new(word, pos, DepRel::Root)
    }

    /// Append a child, turning a leaf into an internal node
    pub fn with_child(mut self, child: ParseNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Mark the node as internal without adding children
    pub fn with_empty_children(mut self) -> Self {
        self.children.get_or_insert_with(Vec::new);
        self
    }

    /// Primary part-of-speech tag
    pub fn pos(&self) -> &PosTag {
        self.attributes.first().unwrap_or(&UNTAGGED)
    }

    /// Children in sentence order (empty for leaves)
    pub fn children(&self) -> &[ParseNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of levels in the tree rooted here (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        max
    }
}

/// Renders the bracket notation understood by `notation::parse_tree`
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if self.link != DepRel::Root {
            write!(f, "{} ", self.link)?;
        }
        f.write_str(&self.word)?;
        f.write_str("/")?;
        if self.attributes.is_empty() {
            f.write_str(UNTAGGED.as_str())?;
        }
        for (i, tag) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(tag.as_str())?;
        }
        match &self.children {
            None => {}
            Some(children) if children.is_empty() => f.write_str(" []")?,
            Some(children) => {
                for child in children {
                    write!(f, " {}", child)?;
                }
            }
        }
        f.write_str(")")
    }
}
