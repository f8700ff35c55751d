//! Node types produced by the parser.

use indexmap::IndexMap;

/// Attribute name to raw (undecoded) value, in document order.
pub type Attributes = IndexMap<String, String>;

/// A node in the parsed forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNode {
    /// An element such as `<div class="a">...</div>`.
    Tag(TagNode),
    /// Raw character data.
    Text(TextNode),
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    /// Lower-cased tag name
    pub name: String,

    /// Attributes in document order; the first occurrence of a name wins
    pub attributes: Attributes,

    /// Child nodes in document order
    pub children: Vec<ParsedNode>,
}

/// A run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// Raw text, entities are left as written
    pub text: String,

    /// Tag name of the enclosing element, `None` at the root
    pub parent: Option<String>,
}

impl ParsedNode {
    /// Get as a tag node.
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            ParsedNode::Tag(tag) => Some(tag),
            ParsedNode::Text(_) => None,
        }
    }

    /// Get as a text node.
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            ParsedNode::Text(text) => Some(text),
            ParsedNode::Tag(_) => None,
        }
    }
}

impl TagNode {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute unless one with the same name is already present.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.entry(name.into()).or_insert_with(|| value.into());
        self
    }

    /// Append a text child, recording this element as its parent.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let child = TextNode::new(text, Some(self.name.clone()));
        self.children.push(ParsedNode::Text(child));
        self
    }

    /// Append an element child.
    pub fn with_child(mut self, child: TagNode) -> Self {
        self.children.push(ParsedNode::Tag(child));
        self
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[ParsedNode], out: &mut String) {
    for node in nodes {
        match node {
            ParsedNode::Text(text) => out.push_str(&text.text),
            ParsedNode::Tag(tag) => collect_text(&tag.children, out),
        }
    }
}

impl TextNode {
    pub fn new(text: impl Into<String>, parent: Option<String>) -> Self {
        Self {
            text: text.into(),
            parent,
        }
    }
}

impl From<TagNode> for ParsedNode {
    fn from(tag: TagNode) -> Self {
        ParsedNode::Tag(tag)
    }
}

impl From<TextNode> for ParsedNode {
    fn from(text: TextNode) -> Self {
        ParsedNode::Text(text)
    }
}
