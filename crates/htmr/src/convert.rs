//! Top-level HTML string conversion.

use serde::Serialize;

use htmr_parser::parse_html;

use crate::element::{ElementFactory, Rendered, VElement, VirtualDom};
use crate::error::HtmrError;
use crate::options::{PartialOptions, TransformOptions};
use crate::transform::transform;

/// Result of converting a fragment.
///
/// A fragment with one root converts to that root unwrapped; callers can tell
/// the cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Converted<E> {
    /// Nothing renderable (empty input)
    Empty,
    /// Exactly one root
    Single(Rendered<E>),
    /// More than one root, in document order
    Many(Vec<Rendered<E>>),
}

impl<E> Converted<E> {
    fn from_roots(mut roots: Vec<Rendered<E>>) -> Self {
        match roots.len() {
            0 => Converted::Empty,
            1 => Converted::Single(roots.remove(0)),
            _ => Converted::Many(roots),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Converted::Empty)
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        match self {
            Converted::Empty => 0,
            Converted::Single(_) => 1,
            Converted::Many(roots) => roots.len(),
        }
    }

    /// The root, if there is exactly one.
    pub fn single(&self) -> Option<&Rendered<E>> {
        match self {
            Converted::Single(root) => Some(root),
            _ => None,
        }
    }

    /// All roots as a list, whatever the shape.
    pub fn into_vec(self) -> Vec<Rendered<E>> {
        match self {
            Converted::Empty => Vec::new(),
            Converted::Single(root) => vec![root],
            Converted::Many(roots) => roots,
        }
    }
}

impl<E: Serialize> Converted<E> {
    /// Serialize to JSON; `Empty` becomes `null`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Converts HTML into elements built by a framework's element factory.
#[derive(Debug, Clone, Default)]
pub struct Converter<F> {
    factory: F,
}

impl<F: ElementFactory> Converter<F> {
    /// Create a converter for an element factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Convert an HTML string, merging `options` with defaults.
    pub fn convert(&self, html: &str, options: PartialOptions<F::Element>) -> Converted<F::Element> {
        self.convert_with(html, &options.normalize())
    }

    /// Convert an HTML string with already resolved options.
    pub fn convert_with(
        &self,
        html: &str,
        options: &TransformOptions<F::Element>,
    ) -> Converted<F::Element> {
        let nodes = parse_html(html.trim());
        tracing::debug!("Converting {} root nodes", nodes.len());

        let roots: Vec<_> = nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| transform(node, &index.to_string(), options, &self.factory))
            .collect();

        tracing::debug!("Converted into {} roots", roots.len());
        Converted::from_roots(roots)
    }

    /// Convert raw bytes, which must be UTF-8.
    pub fn convert_bytes(
        &self,
        html: &[u8],
        options: PartialOptions<F::Element>,
    ) -> Result<Converted<F::Element>, HtmrError> {
        let html = std::str::from_utf8(html).map_err(|e| HtmrError::InvalidInput(e.to_string()))?;
        Ok(self.convert(html, options))
    }
}

/// Convert an HTML string into virtual elements.
pub fn convert(html: &str, options: PartialOptions<VElement>) -> Converted<VElement> {
    Converter::new(VirtualDom).convert(html, options)
}

/// Convert UTF-8 bytes into virtual elements.
pub fn convert_bytes(
    html: &[u8],
    options: PartialOptions<VElement>,
) -> Result<Converted<VElement>, HtmrError> {
    Converter::new(VirtualDom).convert_bytes(html, options)
}
