//! AllenNLP hierplane JSON input
//!
//! The dependency parser predictor returns its tree under
//! `hierplane_tree.root`. Each node carries `word`, `attributes` (POS tags),
//! `link` and, for non-leaves, `children`. Extra keys such as `nodeType` and
//! `spans` are ignored.

use serde::Deserialize;

use crate::error::InputError;
use crate::tree::{DepRel, ParseNode, PosTag};

/// A node as it appears in the JSON
#[derive(Debug, Clone, Deserialize)]
pub struct HierplaneNode {
    pub word: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Kept optional: an absent key marks a leaf
    #[serde(default)]
    pub children: Option<Vec<HierplaneNode>>,
}

#[derive(Debug, Clone, Deserialize)]
struct HierplaneTree {
    #[serde(default)]
    text: Option<String>,
    root: HierplaneNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Document {
    Prediction { hierplane_tree: HierplaneTree },
    Tree(HierplaneTree),
    Node(HierplaneNode),
}

/// A tree read from JSON, with its sentence when the document has one
#[derive(Debug, Clone, PartialEq)]
pub struct HierplaneDocument {
    pub text: Option<String>,
    pub root: ParseNode,
}

impl HierplaneNode {
    fn into_parse_node(self, link: DepRel) -> ParseNode {
        ParseNode {
            word: self.word,
            attributes: self.attributes.iter().map(|tag| PosTag::from_tag(tag)).collect(),
            link,
            children: self.children.map(|children| {
                children
                    .into_iter()
                    .map(|child| {
                        let link = child
                            .link
                            .as_deref()
                            .map(DepRel::from_label)
                            .unwrap_or(DepRel::Other);
                        child.into_parse_node(link)
                    })
                    .collect()
            }),
        }
    }
}

/// Read a predictor output, a hierplane tree or a bare node
pub fn read_document(json: &str) -> Result<HierplaneDocument, InputError> {
    let (text, node) = match serde_json::from_str(json)? {
        Document::Prediction { hierplane_tree } => (hierplane_tree.text, hierplane_tree.root),
        Document::Tree(tree) => (tree.text, tree.root),
        Document::Node(node) => (None, node),
    };

    Ok(HierplaneDocument {
        text,
        // whatever the parser put there, the top node is the root
        root: node.into_parse_node(DepRel::Root),
    })
}

/// Read just the tree from a JSON document
pub fn parse_json(json: &str) -> Result<ParseNode, InputError> {
    Ok(read_document(json)?.root)
}
