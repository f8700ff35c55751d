//! Element model shared by the transform engine and element factories.

use indexmap::IndexMap;
use serde::Serialize;

/// Prop name carrying raw inner content for dangerous-children tags.
pub const INNER_HTML_PROP: &str = "dangerouslySetInnerHTML";

/// Prop name carrying the positional sibling key.
pub const KEY_PROP: &str = "key";

/// Props passed to an element, in attribute order.
pub type Props = IndexMap<String, PropValue>;

/// Children passed to an element; `None` means the element has no children.
pub type Children<E> = Option<Vec<Rendered<E>>>;

/// A prop value derived from an HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Plain attribute value: `href="/docs"`
    String(String),
    /// Attribute present without a value, or with its own name: `disabled`
    Boolean(bool),
    /// Parsed `style` attribute with camel-cased property names
    Style(IndexMap<String, String>),
    /// Raw content injected without escaping
    InnerHtml(InnerHtml),
}

/// Raw markup set as an element's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InnerHtml {
    #[serde(rename = "__html")]
    pub html: String,
}

impl InnerHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl PropValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as style declarations if this is a style value.
    pub fn as_style(&self) -> Option<&IndexMap<String, String>> {
        match self {
            PropValue::Style(style) => Some(style),
            _ => None,
        }
    }

    /// Get raw inner content if this is an inner HTML value.
    pub fn as_inner_html(&self) -> Option<&str> {
        match self {
            PropValue::InnerHtml(inner) => Some(&inner.html),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Boolean(value)
    }
}

/// What a single parsed node renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered<E> {
    Element(E),
    Text(String),
}

impl<E> Rendered<E> {
    pub fn as_element(&self) -> Option<&E> {
        match self {
            Rendered::Element(element) => Some(element),
            Rendered::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(text) => Some(text),
            Rendered::Element(_) => None,
        }
    }

    /// Empty text renders nothing and is dropped from child lists.
    pub fn is_blank(&self) -> bool {
        matches!(self, Rendered::Text(text) if text.is_empty())
    }
}

/// The UI framework's element constructor.
///
/// Receives a tag name, the mapped props (including `key`) and either the
/// transformed children or `None` when there are none.
pub trait ElementFactory {
    type Element;

    fn create_element(
        &self,
        tag: &str,
        props: Props,
        children: Children<Self::Element>,
    ) -> Self::Element;
}

/// Built-in factory producing a serializable virtual element tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualDom;

/// A virtual element created by [`VirtualDom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VElement {
    /// Tag name (e.g., "div")
    pub tag: String,

    /// Mapped props, including `key`
    pub props: Props,

    /// Child elements and text, absent for childless elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Children<VElement>,
}

impl ElementFactory for VirtualDom {
    type Element = VElement;

    fn create_element(&self, tag: &str, props: Props, children: Children<VElement>) -> VElement {
        VElement {
            tag: tag.to_string(),
            props,
            children,
        }
    }
}

impl VElement {
    /// Look up a prop by name.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// The positional key assigned during the transform.
    pub fn key(&self) -> Option<&str> {
        self.prop(KEY_PROP).and_then(PropValue::as_str)
    }

    /// Children as a slice, empty when there are none.
    pub fn children(&self) -> &[Rendered<VElement>] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            match child {
                Rendered::Text(text) => out.push_str(text),
                Rendered::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }
}
