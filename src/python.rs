//! Python bindings for treerel
//!
//! This module provides PyO3-based Python bindings for the Rust core.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::config::ExtractorConfig;
use crate::corpus::{Corpus, InputFormat, SentenceOutcome};
use crate::error::{ExtractError, InputError};
use crate::extractor::Extractor;
use crate::hierplane::parse_json;
use crate::notation::parse_tree;
use crate::tree::ParseNode;

type Triple = (String, String, String);

/// Convert InputError to Python exception
impl From<InputError> for PyErr {
    fn from(err: InputError) -> PyErr {
        match err {
            InputError::Io(e) => PyIOError::new_err(e.to_string()),
            InputError::FileOpen { .. } => PyIOError::new_err(err.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

impl From<ExtractError> for PyErr {
    fn from(err: ExtractError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn triples(extractor: &Extractor, root: &ParseNode) -> PyResult<Vec<Triple>> {
    Ok(extractor
        .generate(root)?
        .into_iter()
        .map(Triple::from)
        .collect())
}

/// Rule-based relation extractor.
///
/// Args:
///     max_depth: Trees deeper than this are rejected (default 128)
///     fronted_prepositions: Treat capitalized leading prepositions as fronted (default True)
///     nested_preposition: Preposition whose chains are flattened (default "in")
#[pyclass(name = "Extractor")]
#[derive(Clone)]
pub struct PyExtractor {
    inner: Extractor,
}

#[pymethods]
impl PyExtractor {
    #[new]
    #[pyo3(signature = (max_depth=None, fronted_prepositions=None, nested_preposition=None))]
    fn new(
        max_depth: Option<usize>,
        fronted_prepositions: Option<bool>,
        nested_preposition: Option<String>,
    ) -> PyResult<Self> {
        let defaults = ExtractorConfig::default();
        let max_depth = max_depth.unwrap_or(defaults.max_depth);
        if max_depth == 0 {
            return Err(PyValueError::new_err("max_depth must be positive"));
        }
        let config = ExtractorConfig {
            max_depth,
            fronted_prepositions: fronted_prepositions.unwrap_or(defaults.fronted_prepositions),
            nested_preposition: nested_preposition.unwrap_or(defaults.nested_preposition),
        };
        Ok(PyExtractor {
            inner: Extractor::new(config),
        })
    }

    /// Create an extractor configured from TREEREL_* environment variables.
    #[staticmethod]
    fn from_env() -> PyResult<Self> {
        let config =
            ExtractorConfig::from_env().map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyExtractor {
            inner: Extractor::new(config),
        })
    }

    /// Extract (subject, relation, object) triples from a hierplane JSON document.
    fn generate(&self, json: &str) -> PyResult<Vec<Triple>> {
        triples(&self.inner, &parse_json(json)?)
    }

    /// Extract triples from a tree in bracket notation.
    fn generate_tree(&self, notation: &str) -> PyResult<Vec<Triple>> {
        let root = parse_tree(notation).map_err(InputError::from)?;
        triples(&self.inner, &root)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "<Extractor max_depth={} nested_preposition='{}'>",
            config.max_depth, config.nested_preposition
        )
    }
}

/// A collection of parsed sentences from files or strings.
///
/// Supports multiple iterations by cloning internally.
#[pyclass(name = "Corpus")]
#[derive(Clone)]
pub struct PyCorpus {
    inner: Corpus,
}

fn input_format(hierplane: bool) -> InputFormat {
    if hierplane {
        InputFormat::HierplaneLines
    } else {
        InputFormat::Conllu
    }
}

#[pymethods]
impl PyCorpus {
    /// Create a Corpus from a string.
    ///
    /// Args:
    ///     text: CoNLL-U text, or hierplane JSON lines if hierplane is True
    #[classmethod]
    #[pyo3(signature = (text, hierplane=false))]
    fn from_string(_cls: &Bound<'_, pyo3::types::PyType>, text: &str, hierplane: bool) -> Self {
        PyCorpus {
            inner: Corpus::from_string(text).with_format(input_format(hierplane)),
        }
    }

    /// Create a Corpus from a single file.
    ///
    /// Automatically detects and handles gzip-compressed files (.gz).
    #[classmethod]
    #[pyo3(signature = (file_path, hierplane=false))]
    fn from_file(
        _cls: &Bound<'_, pyo3::types::PyType>,
        file_path: &str,
        hierplane: bool,
    ) -> Self {
        PyCorpus {
            inner: Corpus::from_file(PathBuf::from(file_path)).with_format(input_format(hierplane)),
        }
    }

    /// Create a Corpus from multiple file paths.
    #[classmethod]
    #[pyo3(signature = (file_paths, hierplane=false))]
    fn from_files(
        _cls: &Bound<'_, pyo3::types::PyType>,
        file_paths: Vec<String>,
        hierplane: bool,
    ) -> Self {
        let path_bufs: Vec<PathBuf> = file_paths.iter().map(PathBuf::from).collect();
        PyCorpus {
            inner: Corpus::from_paths(path_bufs).with_format(input_format(hierplane)),
        }
    }

    /// Create a Corpus from files matching a glob pattern.
    ///
    /// Files are processed in sorted order for deterministic results.
    ///
    /// Raises:
    ///     ValueError: If glob pattern is invalid
    #[classmethod]
    #[pyo3(signature = (pattern, hierplane=false))]
    fn from_glob(
        _cls: &Bound<'_, pyo3::types::PyType>,
        pattern: &str,
        hierplane: bool,
    ) -> PyResult<Self> {
        Ok(PyCorpus {
            inner: Corpus::from_glob(pattern)?.with_format(input_format(hierplane)),
        })
    }

    /// Extract triples from every sentence.
    ///
    /// Args:
    ///     extractor: Extractor to use (default configuration if omitted)
    ///     parallel: Evaluate sentences on worker threads; order is kept
    ///
    /// Returns:
    ///     Iterator over (index, text, triples) tuples. triples is None for a
    ///     sentence the extractor rejected.
    #[pyo3(signature = (extractor=None, parallel=false))]
    fn extract(&self, extractor: Option<&PyExtractor>, parallel: bool) -> PyOutcomeIterator {
        let extractor = extractor.map(|e| e.inner.clone()).unwrap_or_default();
        let inner = if parallel {
            self.inner.extract_parallel(&extractor)
        } else {
            self.inner.extract(&extractor)
        };
        PyOutcomeIterator { inner }
    }

    fn __repr__(&self) -> String {
        format!("<Corpus format={:?}>", self.inner.format())
    }
}

/// Iterator over extraction outcomes from a corpus.
#[pyclass(name = "OutcomeIterator", unsendable)]
struct PyOutcomeIterator {
    inner: Box<dyn Iterator<Item = SentenceOutcome>>,
}

#[pymethods]
impl PyOutcomeIterator {
    fn __iter__(slf: PyRef<Self>) -> PyRef<Self> {
        slf
    }

    fn __next__(&mut self) -> Option<(usize, Option<String>, Option<Vec<Triple>>)> {
        self.inner.next().map(|outcome| {
            let tuples = outcome
                .result
                .ok()
                .map(|tuples| tuples.into_iter().map(Triple::from).collect());
            (outcome.index, outcome.text, tuples)
        })
    }
}

/// Extract triples from a hierplane JSON document with the default configuration.
///
/// Args:
///     json: Predictor output, hierplane tree or bare root node
///
/// Returns:
///     List of (subject, relation, object) tuples
#[pyfunction(name = "generate")]
fn py_generate(json: &str) -> PyResult<Vec<Triple>> {
    triples(&Extractor::default(), &parse_json(json)?)
}

#[pyfunction]
fn __version__() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pymodule]
fn treerel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyExtractor>()?;
    m.add_class::<PyCorpus>()?;
    m.add_class::<PyOutcomeIterator>()?;

    m.add_function(wrap_pyfunction!(py_generate, m)?)?;
    m.add_function(wrap_pyfunction!(__version__, m)?)?;

    Ok(())
}
