//! CoNLL-U file parsing
//!
//! Reads CoNLL-U sentences into `ParseNode` trees. Multiword tokens and
//! empty nodes are skipped; FEATS, DEPS and MISC are ignored. Files ending in
//! `.gz` are decompressed on the fly.
//!
//! Both Stanford basic labels and Universal Dependencies v2 labels are
//! accepted. UD attaches an adposition (`case`) to its noun (`obl`/`nmod`);
//! such pairs are rebuilt as a `prep` of the noun's governor with the noun
//! as its `pobj`.
//!
//! CoNLL-U format: https://universaldependencies.org/format.html

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Lines, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::tree::{DepRel, ParseNode, PosTag};

/// Error during CoNLL-U parsing
#[derive(Debug, Error)]
#[error("Parse error at line {line_num}: {message}")]
pub struct ParseError {
    pub line_num: usize,
    pub message: String,
}

/// One parsed sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// `# text = ...` comment, if any
    pub text: Option<String>,
    /// Other `# key = value` comments
    pub metadata: HashMap<String, String>,
    pub root: ParseNode,
}

/// CoNLL-U reader that iterates over sentences
pub struct CoNLLUReader<R: BufRead> {
    lines: Lines<R>,
    line_num: usize,
}

/// Open a file for buffered reading, decompressing `.gz` files
pub fn open_input(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let inner: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(BufReader::new(inner))
}

impl CoNLLUReader<BufReader<Box<dyn Read>>> {
    /// Create a reader from a file path
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(open_input(path)?))
    }
}

impl CoNLLUReader<BufReader<Cursor<String>>> {
    /// Create a reader from a string
    pub fn from_str(text: &str) -> Self {
        Self::new(BufReader::new(Cursor::new(text.to_string())))
    }
}

impl<R: BufRead> CoNLLUReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl<R: BufRead> Iterator for CoNLLUReader<R> {
    type Item = Result<Sentence, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut tree_lines = Vec::new();
        let mut metadata = HashMap::new();
        let mut sentence_text = None;

        // Read lines until we hit a blank line (sentence boundary) or EOF
        loop {
            self.line_num += 1;
            match self.lines.next() {
                None => {
                    if tree_lines.is_empty() {
                        return None;
                    }
                    // Last sentence without trailing blank line
                    break;
                }
                Some(Err(e)) => {
                    return Some(Err(ParseError {
                        line_num: self.line_num,
                        message: format!("IO error: {}", e),
                    }));
                }
                Some(Ok(line)) => {
                    let line = line.trim();

                    if line.is_empty() {
                        if !tree_lines.is_empty() {
                            break;
                        }
                        continue;
                    }

                    if let Some(comment) = line.strip_prefix('#') {
                        parse_comment(comment, &mut metadata, &mut sentence_text);
                        continue;
                    }

                    tree_lines.push((self.line_num, line.to_string()));
                }
            }
        }

        Some(parse_sentence(tree_lines, sentence_text, metadata))
    }
}

/// Parse a comment line (starts with #)
fn parse_comment(
    comment: &str,
    metadata: &mut HashMap<String, String>,
    sentence_text: &mut Option<String>,
) {
    let comment = comment.trim();

    if let Some((key, value)) = comment.split_once('=') {
        let key = key.trim();
        let value = value.trim();

        if key == "text" {
            *sentence_text = Some(value.to_string());
        } else {
            metadata.insert(key.to_string(), value.to_string());
        }
    }
}

/// A token before it is attached to its head
struct Token {
    line_num: usize,
    head: usize,
    /// DEPREL as written in the file
    label: String,
    node: ParseNode,
}

/// Parse accumulated lines into a sentence
fn parse_sentence(
    lines: Vec<(usize, String)>,
    text: Option<String>,
    metadata: HashMap<String, String>,
) -> Result<Sentence, ParseError> {
    let first_line = lines.first().map(|(line_num, _)| *line_num).unwrap_or(0);

    let mut tokens = Vec::new();
    for (line_num, line) in lines {
        if let Some(token) = parse_line(&line, line_num, tokens.len() + 1)? {
            tokens.push(token);
        }
    }

    attach_adpositions(&mut tokens);
    let root = build_tree(tokens, first_line)?;
    Ok(Sentence {
        text,
        metadata,
        root,
    })
}

/// Parse a single CoNLL-U line into a token
///
/// Returns `None` for multiword tokens and empty nodes.
fn parse_line(line: &str, line_num: usize, expected_id: usize) -> Result<Option<Token>, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() != 10 {
        return Err(ParseError {
            line_num,
            message: format!("Expected 10 fields, found {}", fields.len()),
        });
    }

    // Field 0: ID
    if fields[0].contains('-') || fields[0].contains('.') {
        return Ok(None);
    }
    let id: usize = fields[0].parse().map_err(|_| ParseError {
        line_num,
        message: format!("Invalid ID: {}", fields[0]),
    })?;
    if id != expected_id {
        return Err(ParseError {
            line_num,
            message: format!("Expected token {}, found {}", expected_id, id),
        });
    }

    // Fields 3 and 4: UPOS, XPOS
    let attributes = match fields[4] {
        "_" => vec![upos_tag(fields[3])],
        xpos => vec![PosTag::from_tag(xpos), upos_tag(fields[3])],
    };

    // Field 6: HEAD
    let head: usize = fields[6].parse().map_err(|_| ParseError {
        line_num,
        message: format!("Invalid HEAD: {}", fields[6]),
    })?;

    // Field 7: DEPREL
    let link = if head == 0 {
        DepRel::Root
    } else {
        DepRel::from_label(fields[7])
    };

    Ok(Some(Token {
        line_num,
        head,
        label: fields[7].to_string(),
        node: ParseNode {
            word: fields[1].to_string(),
            attributes,
            link,
            children: None,
        },
    }))
}

/// Closest Penn Treebank tag for a universal POS tag
fn upos_tag(upos: &str) -> PosTag {
    match upos {
        "PROPN" => PosTag::ProperNoun,
        "NOUN" => PosTag::Noun,
        "VERB" => PosTag::VerbBase,
        "ADJ" => PosTag::Adjective,
        "NUM" => PosTag::CardinalNumber,
        other => PosTag::Other(other.to_string()),
    }
}

/// Nominal dependents that UD marks with an adposition
fn is_oblique(label: &str) -> bool {
    match label.split_once(':') {
        None => matches!(label, "obl" | "nmod"),
        Some((base, sub)) => matches!(base, "obl" | "nmod") && !matches!(sub, "poss" | "tmod"),
    }
}

/// Re-hang UD adpositions as prepositions governing their noun
///
/// `born -obl-> Moscow -case-> in` becomes `born -prep-> in -pobj-> Moscow`.
/// A conjunct with its own adposition ("as coach and as friend") becomes a
/// `conj` of the first preposition. The `case` marker under a possessor
/// (`'s`) becomes `possessive`. Stanford-labelled input has no `case`
/// tokens and is left alone.
fn attach_adpositions(tokens: &mut [Token]) {
    let n = tokens.len();

    let mut case_of: Vec<Option<usize>> = vec![None; n];
    for (i, token) in tokens.iter().enumerate() {
        if token.label == "case" && (1..=n).contains(&token.head) {
            case_of[token.head - 1].get_or_insert(i);
        }
    }

    let mut prep_of: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        let head = tokens[i].head;
        if head == 0 || !is_oblique(&tokens[i].label) {
            continue;
        }
        let Some(case) = case_of[i] else { continue };
        tokens[case].head = head;
        tokens[case].node.link = DepRel::Preposition;
        tokens[i].head = case + 1;
        tokens[i].node.link = DepRel::PredicateObject;
        prep_of[i] = Some(case);
    }

    for i in 0..n {
        let head = tokens[i].head;
        if head == 0 || head > n || tokens[i].label != "conj" {
            continue;
        }
        let (Some(case), Some(outer)) = (case_of[i], prep_of[head - 1]) else {
            continue;
        };
        tokens[case].head = outer + 1;
        tokens[case].node.link = DepRel::Conjunction;
        tokens[i].head = case + 1;
        tokens[i].node.link = DepRel::PredicateObject;
    }

    for i in 0..n {
        let head = tokens[i].head;
        if tokens[i].label == "case"
            && tokens[i].node.link == DepRel::Other
            && (1..=n).contains(&head)
            && tokens[head - 1].node.link == DepRel::PossessionBy
        {
            tokens[i].node.link = DepRel::Possessive;
        }
    }
}

/// Attach every token to its head and return the root
fn build_tree(tokens: Vec<Token>, line_num: usize) -> Result<ParseNode, ParseError> {
    let n = tokens.len();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut root = None;

    for (i, token) in tokens.iter().enumerate() {
        match token.head {
            0 if root.is_some() => {
                return Err(ParseError {
                    line_num: token.line_num,
                    message: "More than one root token".to_string(),
                });
            }
            0 => root = Some(i),
            head if head > n => {
                return Err(ParseError {
                    line_num: token.line_num,
                    message: format!("HEAD {} out of range", head),
                });
            }
            head => dependents[head - 1].push(i),
        }
    }

    let Some(root) = root else {
        return Err(ParseError {
            line_num,
            message: "No root token".to_string(),
        });
    };

    // Preorder from the root; tokens caught in a cycle are never reached
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        order.push(i);
        stack.extend(dependents[i].iter().rev());
    }
    if order.len() != n {
        return Err(ParseError {
            line_num,
            message: format!("{} tokens unreachable from the root", n - order.len()),
        });
    }

    // Children come after their head in preorder, so build in reverse
    let mut nodes: Vec<Option<ParseNode>> = tokens.into_iter().map(|t| Some(t.node)).collect();
    for &i in order.iter().rev() {
        if dependents[i].is_empty() {
            continue;
        }
        let children = dependents[i]
            .iter()
            .filter_map(|&child| nodes[child].take())
            .collect();
        if let Some(node) = nodes[i].as_mut() {
            node.children = Some(children);
        }
    }

    nodes[root].take().ok_or_else(|| ParseError {
        line_num,
        message: "Root token missing".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::generate;
    use crate::relation::RelationTuple;
    use std::io::Write;

    const DMITRY: &str = "# sent_id = 7
# text = Dmitry was born in Moscow.
1\tDmitry\tDmitry\tPROPN\tNNP\t_\t3\tnsubjpass\t_\t_
2\twas\tbe\tAUX\tVBD\t_\t3\tauxpass\t_\t_
3\tborn\tbear\tVERB\tVBN\t_\t0\troot\t_\t_
4\tin\tin\tADP\tIN\t_\t3\tprep\t_\t_
5\tMoscow\tMoscow\tPROPN\tNNP\t_\t4\tpobj\t_\tSpaceAfter=No
6\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_

";

    #[test]
    fn test_parse_simple_sentence() {
        let mut reader = CoNLLUReader::from_str(DMITRY);
        let sentence = reader.next().unwrap().unwrap();

        assert_eq!(sentence.text, Some("Dmitry was born in Moscow.".to_string()));
        assert_eq!(sentence.metadata.get("sent_id"), Some(&"7".to_string()));

        let root = &sentence.root;
        assert_eq!(root.word, "born");
        assert_eq!(root.link, DepRel::Root);
        assert_eq!(root.pos(), &PosTag::VerbPastParticiple);
        assert_eq!(root.children().len(), 4);

        let prep = &root.children()[2];
        assert_eq!(prep.link, DepRel::Preposition);
        assert_eq!(prep.children()[0].word, "Moscow");
        assert!(prep.children()[0].is_leaf());

        assert!(reader.next().is_none());
    }

    #[test]
    fn test_extract_from_conllu() {
        let sentence = CoNLLUReader::from_str(DMITRY).next().unwrap().unwrap();
        assert_eq!(
            generate(&sentence.root).unwrap(),
            vec![RelationTuple::new("Dmitry", "born", "Moscow")]
        );
    }

    #[test]
    fn test_universal_labels_and_tags() {
        let conllu = "1\tDmitry\tDmitry\tPROPN\t_\t_\t2\tnsubj:pass\t_\t_
2\tborn\tbear\tVERB\t_\t_\t0\troot\t_\t_
";
        let root = CoNLLUReader::from_str(conllu).next().unwrap().unwrap().root;
        assert_eq!(root.pos(), &PosTag::VerbBase);
        assert_eq!(root.children()[0].link, DepRel::PassiveNominalSubject);
        assert_eq!(root.children()[0].pos(), &PosTag::ProperNoun);
    }

    const DMITRY_UD: &str = "# text = Dmitry was born in Moscow.
1\tDmitry\tDmitry\tPROPN\tNNP\t_\t3\tnsubj:pass\t_\t_
2\twas\tbe\tAUX\tVBD\t_\t3\taux:pass\t_\t_
3\tborn\tbear\tVERB\tVBN\t_\t0\troot\t_\t_
4\tin\tin\tADP\tIN\t_\t5\tcase\t_\t_
5\tMoscow\tMoscow\tPROPN\tNNP\t_\t3\tobl\t_\tSpaceAfter=No
6\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_

";

    #[test]
    fn test_universal_adposition_becomes_preposition() {
        let root = CoNLLUReader::from_str(DMITRY_UD).next().unwrap().unwrap().root;
        assert_eq!(
            root.to_string(),
            "(born/VBN|VB (nsubjpass Dmitry/NNP|NNP) (other was/VBD|AUX) \
             (prep in/IN|ADP (pobj Moscow/NNP|NNP)) (punct ./.|PUNCT))"
        );
        assert_eq!(
            generate(&root).unwrap(),
            vec![RelationTuple::new("Dmitry", "born", "Moscow")]
        );
    }

    #[test]
    fn test_universal_possessor_under_adposition() {
        let conllu = "1\tAnnacone\tAnnacone\tPROPN\tNNP\t_\t3\tnsubj:pass\t_\t_
2\twas\tbe\tAUX\tVBD\t_\t3\taux:pass\t_\t_
3\thired\thire\tVERB\tVBN\t_\t0\troot\t_\t_
4\tas\tas\tADP\tIN\t_\t7\tcase\t_\t_
5\tFederer\tFederer\tPROPN\tNNP\t_\t7\tnmod:poss\t_\t_
6\t's\t's\tPART\tPOS\t_\t5\tcase\t_\t_
7\tcoach\tcoach\tNOUN\tNN\t_\t3\tobl\t_\t_
";
        let root = CoNLLUReader::from_str(conllu).next().unwrap().unwrap().root;
        let prep = root.first_child_of(DepRel::Preposition).unwrap();
        assert_eq!(prep.word, "as");
        let coach = prep.first_child_of(DepRel::PredicateObject).unwrap();
        assert_eq!(coach.word, "coach");
        let federer = coach.first_child_of(DepRel::PossessionBy).unwrap();
        assert_eq!(federer.children()[0].link, DepRel::Possessive);
        assert_eq!(
            generate(&root).unwrap(),
            vec![RelationTuple::new("Annacone", "coach", "Federer")]
        );
    }

    #[test]
    fn test_universal_coordinated_adpositions() {
        let conllu = "1\tFederer\tFederer\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\thired\thire\tVERB\tVBD\t_\t0\troot\t_\t_
3\tAnnacone\tAnnacone\tPROPN\tNNP\t_\t2\tobj\t_\t_
4\tas\tas\tADP\tIN\t_\t6\tcase\t_\t_
5\this\the\tPRON\tPRP$\t_\t6\tnmod:poss\t_\t_
6\tcoach\tcoach\tNOUN\tNN\t_\t2\tobl\t_\t_
7\tand\tand\tCCONJ\tCC\t_\t10\tcc\t_\t_
8\tas\tas\tADP\tIN\t_\t10\tcase\t_\t_
9\ta\ta\tDET\tDT\t_\t10\tdet\t_\t_
10\tfriend\tfriend\tNOUN\tNN\t_\t6\tconj\t_\t_
";
        let root = CoNLLUReader::from_str(conllu).next().unwrap().unwrap().root;
        let prep = root.first_child_of(DepRel::Preposition).unwrap();
        let inner = prep.first_child_of(DepRel::Conjunction).unwrap();
        assert_eq!(inner.word, "as");
        assert_eq!(inner.children()[0].word, "friend");
        assert_eq!(inner.children()[0].link, DepRel::PredicateObject);
        assert_eq!(
            generate(&root).unwrap(),
            vec![
                RelationTuple::new("Federer", "coach", "Annacone"),
                RelationTuple::new("Federer", "friend", "Annacone"),
            ]
        );
    }

    #[test]
    fn test_oblique_without_adposition_untouched() {
        let conllu = "1\tDmitry\tDmitry\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\tleft\tleave\tVERB\tVBD\t_\t0\troot\t_\t_
3\tyesterday\tyesterday\tNOUN\tNN\t_\t2\tobl\t_\t_
";
        let root = CoNLLUReader::from_str(conllu).next().unwrap().unwrap().root;
        assert_eq!(root.children()[1].link, DepRel::Other);
        assert!(root.children()[1].is_leaf());
    }

    #[test]
    fn test_multiword_tokens_skipped() {
        let conllu = "1-2\tdel\t_\t_\t_\t_\t_\t_\t_\t_
1\tde\tde\tADP\tIN\t_\t2\tcase\t_\t_
2\tel\tel\tDET\tDT\t_\t0\troot\t_\t_
2.1\tx\tx\tX\t_\t_\t_\t_\t_\t_
";
        let root = CoNLLUReader::from_str(conllu).next().unwrap().unwrap().root;
        assert_eq!(root.word, "el");
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_multiple_sentences() {
        let text = format!("{}{}", DMITRY, "1\truns\trun\tVERB\tVBZ\t_\t0\troot\t_\t_\n");
        let sentences: Vec<_> = CoNLLUReader::from_str(&text).collect();
        assert_eq!(sentences.len(), 2);
        let last = sentences[1].as_ref().unwrap();
        assert_eq!(last.root.word, "runs");
        assert!(last.root.is_leaf());
    }

    #[test]
    fn test_structural_errors() {
        let two_roots = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t0\troot\t_\t_\n";
        let err = CoNLLUReader::from_str(two_roots).next().unwrap().unwrap_err();
        assert!(err.message.contains("More than one root"));
        assert_eq!(err.line_num, 2);

        let cycle = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t3\tdep\t_\t_\n3\tc\tc\tX\t_\t_\t2\tdep\t_\t_\n";
        let err = CoNLLUReader::from_str(cycle).next().unwrap().unwrap_err();
        assert!(err.message.contains("unreachable"));

        let no_root = "1\ta\ta\tX\t_\t_\t1\tdep\t_\t_\n";
        assert!(CoNLLUReader::from_str(no_root).next().unwrap().is_err());

        let out_of_range = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t9\tdep\t_\t_\n";
        assert!(CoNLLUReader::from_str(out_of_range).next().unwrap().is_err());

        let skipped_id = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n3\tb\tb\tX\t_\t_\t1\tdep\t_\t_\n";
        let err = CoNLLUReader::from_str(skipped_id).next().unwrap().unwrap_err();
        assert!(err.message.contains("Expected token 2"));

        let short = "1\ta\ta\n";
        let err = CoNLLUReader::from_str(short).next().unwrap().unwrap_err();
        assert!(err.to_string().contains("Expected 10 fields"));
    }

    #[test]
    fn test_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dmitry.conllu.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(DMITRY.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let sentences: Vec<_> = CoNLLUReader::from_file(&path).unwrap().collect();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].as_ref().unwrap().root.word, "born");
    }
}
