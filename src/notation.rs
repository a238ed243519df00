//! Bracket notation parser
//!
//! Parses the compact tree syntax rendered by `ParseNode`'s `Display`
//! into a `ParseNode`, using a pest grammar.

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

use crate::tree::{DepRel, ParseNode, PosTag};

#[derive(Parser)]
#[grammar = "notation.pest"]
struct NotationParser;

/// Error type for bracket notation failures
#[derive(Debug, Error)]
pub enum NotationError {
    #[error("Notation error: {0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),

    #[error("Notation error: empty tree")]
    Empty,
}

impl From<pest::error::Error<Rule>> for NotationError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        NotationError::Syntax(Box::new(err))
    }
}

/// Parse a bracketed tree
///
/// The outermost node takes its link from the text if one is given and is
/// otherwise treated as the root; inner nodes without a label get
/// `DepRel::Other`.
pub fn parse_tree(input: &str) -> Result<ParseNode, NotationError> {
    let mut pairs = NotationParser::parse(Rule::tree, input)?;

    let Some(tree_pair) = pairs.next() else {
        return Err(NotationError::Empty);
    };
    let Some(node_pair) = tree_pair
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::node)
    else {
        return Err(NotationError::Empty);
    };

    Ok(build_node(node_pair, DepRel::Root))
}

/// Build a node from a `node` pair, using `default_link` when unlabelled
fn build_node(pair: pest::iterators::Pair<Rule>, default_link: DepRel) -> ParseNode {
    let mut node = ParseNode {
        word: String::new(),
        attributes: Vec::new(),
        link: default_link,
        children: None,
    };

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::link => node.link = DepRel::from_label(inner.as_str()),
            Rule::token => {
                for part in inner.into_inner() {
                    match part.as_rule() {
                        Rule::word => node.word = part.as_str().to_string(),
                        Rule::tags => {
                            node.attributes = part.as_str().split('|').map(PosTag::from_tag).collect()
                        }
                        _ => {}
                    }
                }
            }
            Rule::empty => node.children = Some(Vec::new()),
            Rule::node => node
                .children
                .get_or_insert_with(Vec::new)
                .push(build_node(inner, DepRel::Other)),
            _ => {}
        }
    }

    node
}
