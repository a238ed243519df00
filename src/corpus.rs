//! Batch extraction over corpora
//!
//! A `Corpus` reads sentences from a string, a file, or a list of files
//! (explicitly or from a glob) and runs an `Extractor` over each of them.
//! Unreadable files and unparseable sentences are logged and skipped. A
//! sentence whose tree the extractor rejects is logged and reported in its
//! `SentenceOutcome`; the batch carries on.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use pariter::IteratorExt as _;
use tracing::warn;

use crate::conllu::{self, CoNLLUReader};
use crate::error::{ExtractError, InputError};
use crate::extractor::Extractor;
use crate::hierplane;
use crate::relation::RelationTuple;
use crate::tree::ParseNode;

/// How each source is encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    Conllu,
    /// One hierplane JSON document per line
    HierplaneLines,
}

#[derive(Debug, Clone)]
enum Source {
    String(String),
    File(PathBuf),
    Files(Vec<PathBuf>),
}

/// A sentence ready for extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the corpus, counting sentences that failed to parse
    pub index: usize,
    pub text: Option<String>,
    pub tree: ParseNode,
}

/// Result of running the extractor over one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceOutcome {
    pub index: usize,
    pub text: Option<String>,
    pub result: Result<Vec<RelationTuple>, ExtractError>,
}

impl Sentence {
    pub fn extract(self, extractor: &Extractor) -> SentenceOutcome {
        let result = extractor.generate(&self.tree);
        if let Err(err) = &result {
            warn!(
                index = self.index,
                text = self.text.as_deref().unwrap_or(""),
                tree = %self.tree,
                malformed = err.is_malformed(),
                "skipping sentence: {}",
                err
            );
        }
        SentenceOutcome {
            index: self.index,
            text: self.text,
            result,
        }
    }
}

impl SentenceOutcome {
    /// Tuples of a successful sentence, nothing for a failed one
    pub fn tuples(&self) -> &[RelationTuple] {
        self.result.as_deref().unwrap_or(&[])
    }
}

/// Collection of parsed sentences from a string, file, or glob pattern
///
/// # Examples
///
/// ```no_run
/// use treerel::{Corpus, Extractor};
///
/// let extractor = Extractor::default();
/// for outcome in Corpus::from_glob("data/*.conllu").unwrap().extract(&extractor) {
///     for tuple in outcome.tuples() {
///         println!("{}", tuple);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Corpus {
    source: Source,
    format: InputFormat,
}

impl Corpus {
    /// Create from in-memory CoNLL-U text
    pub fn from_string(text: &str) -> Self {
        Self::new(Source::String(text.to_string()))
    }

    /// Create from a single file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::new(Source::File(path.as_ref().to_path_buf()))
    }

    /// Create from a glob pattern
    ///
    /// Files are processed in sorted order for deterministic results.
    pub fn from_glob(pattern: &str) -> Result<Self, InputError> {
        let mut file_paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
        file_paths.sort();
        Ok(Self::from_paths(file_paths))
    }

    /// Create from explicit file paths
    pub fn from_paths(file_paths: Vec<PathBuf>) -> Self {
        Self::new(Source::Files(file_paths))
    }

    fn new(source: Source) -> Self {
        Self {
            source,
            format: InputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn sentences(&self) -> Box<dyn Iterator<Item = Sentence>> {
        self.clone().into_iter()
    }

    /// Run `extractor` over every sentence, in input order
    pub fn extract(&self, extractor: &Extractor) -> Box<dyn Iterator<Item = SentenceOutcome>> {
        let extractor = extractor.clone();
        Box::new(self.sentences().map(move |sentence| sentence.extract(&extractor)))
    }

    /// Like `extract`, with sentences evaluated on worker threads
    ///
    /// Outcomes still arrive in input order.
    pub fn extract_parallel(
        &self,
        extractor: &Extractor,
    ) -> Box<dyn Iterator<Item = SentenceOutcome>> {
        let extractor = extractor.clone();
        Box::new(
            self.sentences()
                .parallel_map(move |sentence| sentence.extract(&extractor)),
        )
    }
}

impl IntoIterator for Corpus {
    type Item = Sentence;
    type IntoIter = Box<dyn Iterator<Item = Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        let format = self.format;
        let parsed: Box<dyn Iterator<Item = Parsed>> = match self.source {
            Source::String(text) => match format {
                InputFormat::Conllu => Box::new(conllu_sentences(CoNLLUReader::from_str(&text))),
                InputFormat::HierplaneLines => Box::new(hierplane_lines(
                    text.lines().map(str::to_string).collect::<Vec<_>>().into_iter().map(Ok),
                )),
            },
            Source::File(path) => open_file_sentences(path, format),
            Source::Files(paths) => Box::new(
                paths
                    .into_iter()
                    .flat_map(move |path| open_file_sentences(path, format)),
            ),
        };

        let iter = parsed
            .enumerate()
            .filter_map(|(index, parsed)| match parsed {
                Ok((text, tree)) => Some(Sentence { index, text, tree }),
                Err(err) => {
                    warn!(index, "skipping unreadable sentence: {}", err);
                    None
                }
            });
        Box::new(iter)
    }
}

type Parsed = Result<(Option<String>, ParseNode), InputError>;

fn conllu_sentences<R: BufRead>(reader: CoNLLUReader<R>) -> impl Iterator<Item = Parsed> {
    reader.map(|result| {
        result
            .map(|sentence| (sentence.text, sentence.root))
            .map_err(InputError::from)
    })
}

fn hierplane_lines(
    lines: impl Iterator<Item = std::io::Result<String>>,
) -> impl Iterator<Item = Parsed> {
    lines.filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(hierplane::read_document(&line).map(|doc| (doc.text, doc.root))),
        Err(err) => Some(Err(InputError::Io(err))),
    })
}

/// Open a file and iterate over its sentences
///
/// A file that cannot be opened is logged and yields nothing.
fn open_file_sentences(path: PathBuf, format: InputFormat) -> Box<dyn Iterator<Item = Parsed>> {
    let reader = match conllu::open_input(&path) {
        Ok(reader) => reader,
        Err(source) => {
            let err = InputError::FileOpen { path, source };
            warn!("{}", err);
            return Box::new(std::iter::empty());
        }
    };
    match format {
        InputFormat::Conllu => Box::new(conllu_sentences(CoNLLUReader::new(reader))),
        InputFormat::HierplaneLines => Box::new(hierplane_lines(reader.lines())),
    }
}
