//! Python bindings for leafmark.

use leafmark_core::{
    error::Error as CoreError, TextNode as CoreTextNode, TextType as CoreTextType,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: CoreError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ============================================================================
// Enums
// ============================================================================

/// Inline style of a text node.
#[pyclass(frozen, eq, eq_int, name = "TextType")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PyTextType {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
    Underline,
}

#[pymethods]
impl PyTextType {
    /// Look up a type by name, e.g. "bold". Raises ValueError for unknown names.
    #[staticmethod]
    #[pyo3(text_signature = "(name)")]
    fn from_name(name: &str) -> PyResult<Self> {
        name.parse::<CoreTextType>()
            .map(PyTextType::from)
            .map_err(to_py_err)
    }

    /// Canonical lowercase name, e.g. "bold".
    fn as_str(&self) -> &'static str {
        CoreTextType::from(*self).as_str()
    }
}

impl From<CoreTextType> for PyTextType {
    fn from(t: CoreTextType) -> Self {
        match t {
            CoreTextType::Plain => PyTextType::Plain,
            CoreTextType::Bold => PyTextType::Bold,
            CoreTextType::Italic => PyTextType::Italic,
            CoreTextType::Code => PyTextType::Code,
            CoreTextType::Link => PyTextType::Link,
            CoreTextType::Image => PyTextType::Image,
            CoreTextType::Underline => PyTextType::Underline,
        }
    }
}

impl From<PyTextType> for CoreTextType {
    fn from(t: PyTextType) -> Self {
        match t {
            PyTextType::Plain => CoreTextType::Plain,
            PyTextType::Bold => CoreTextType::Bold,
            PyTextType::Italic => CoreTextType::Italic,
            PyTextType::Code => CoreTextType::Code,
            PyTextType::Link => CoreTextType::Link,
            PyTextType::Image => CoreTextType::Image,
            PyTextType::Underline => CoreTextType::Underline,
        }
    }
}

// ============================================================================
// TextNode
// ============================================================================

/// A run of inline text with a single style.
///
/// Args:
///     text: The text content
///     text_type: TextType of the run
///     url: Link target or image source (default: None)
#[pyclass(frozen, eq, get_all, name = "TextNode")]
#[derive(Clone, PartialEq)]
pub struct PyTextNode {
    pub text: String,
    pub text_type: PyTextType,
    pub url: Option<String>,
}

#[pymethods]
impl PyTextNode {
    #[new]
    #[pyo3(signature = (text, text_type, url=None), text_signature = "(text, text_type, url=None)")]
    fn new(text: String, text_type: PyTextType, url: Option<String>) -> Self {
        PyTextNode {
            text,
            text_type,
            url,
        }
    }

    fn __repr__(&self) -> String {
        CoreTextNode::from(self).to_string()
    }
}

impl From<CoreTextNode> for PyTextNode {
    fn from(n: CoreTextNode) -> Self {
        PyTextNode {
            text: n.text,
            text_type: n.text_type.into(),
            url: n.url,
        }
    }
}

impl From<&PyTextNode> for CoreTextNode {
    fn from(n: &PyTextNode) -> Self {
        CoreTextNode {
            text: n.text.clone(),
            text_type: n.text_type.into(),
            url: n.url.clone(),
        }
    }
}

fn to_core_nodes(nodes: &[PyTextNode]) -> Vec<CoreTextNode> {
    nodes.iter().map(CoreTextNode::from).collect()
}

fn from_core_nodes(nodes: Vec<CoreTextNode>) -> Vec<PyTextNode> {
    nodes.into_iter().map(PyTextNode::from).collect()
}

// ============================================================================
// Module functions
// ============================================================================

/// Split plain nodes on a paired delimiter.
///
/// Args:
///     nodes: List of TextNode
///     delimiter: Non-empty delimiter string, e.g. "**"
///     text_type: TextType given to the delimited runs
///
/// Returns:
///     list[TextNode]: New node list; non-plain nodes are passed through
///
/// Raises:
///     ValueError: On an unbalanced or empty delimiter
#[pyfunction]
#[pyo3(text_signature = "(nodes, delimiter, text_type)")]
fn split_nodes_delimiter(
    nodes: Vec<PyTextNode>,
    delimiter: &str,
    text_type: PyTextType,
) -> PyResult<Vec<PyTextNode>> {
    leafmark_core::split_nodes_delimiter(&to_core_nodes(&nodes), delimiter, text_type.into())
        .map(from_core_nodes)
        .map_err(to_py_err)
}

/// List of (alt, src) for every ![alt](src) in text.
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    to_owned_pairs(leafmark_core::extract_markdown_images(text))
}

/// List of (label, url) for every [label](url) in text that is not an image.
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    to_owned_pairs(leafmark_core::extract_markdown_links(text))
}

fn to_owned_pairs(pairs: Vec<(&str, &str)>) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(label, url)| (label.to_string(), url.to_string()))
        .collect()
}

/// Lower a TextNode and serialize it. Raises ValueError for types with no
/// markup mapping and for links without a url.
#[pyfunction]
#[pyo3(text_signature = "(node)")]
fn text_node_to_html(node: PyTextNode) -> PyResult<String> {
    leafmark_core::text_node_to_leaf(&CoreTextNode::from(&node))
        .and_then(|leaf| leaf.serialize())
        .map_err(to_py_err)
}

/// Split one line of inline markdown into text nodes.
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn text_to_text_nodes(text: &str) -> PyResult<Vec<PyTextNode>> {
    leafmark_core::text_to_text_nodes(text)
        .map(from_core_nodes)
        .map_err(to_py_err)
}

/// Render inline markdown as a single <p> element.
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn render_inline(text: &str) -> PyResult<String> {
    leafmark_core::render_inline(text).map_err(to_py_err)
}

// ============================================================================
// Module
// ============================================================================

/// Leafmark - inline markdown to markup.
#[pymodule]
fn pylm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTextType>()?;
    m.add_class::<PyTextNode>()?;
    m.add_function(wrap_pyfunction!(split_nodes_delimiter, m)?)?;
    m.add_function(wrap_pyfunction!(extract_markdown_images, m)?)?;
    m.add_function(wrap_pyfunction!(extract_markdown_links, m)?)?;
    m.add_function(wrap_pyfunction!(text_node_to_html, m)?)?;
    m.add_function(wrap_pyfunction!(text_to_text_nodes, m)?)?;
    m.add_function(wrap_pyfunction!(render_inline, m)?)?;
    Ok(())
}
