//! Tree builder turning tokens into a node forest.
//!
//! Recovery is lenient rather than HTML5-exact: no elements are synthesized,
//! unmatched end tags are ignored, and open elements are closed at the end of
//! input.

use crate::ast::{ParsedNode, TagNode, TextNode};
use crate::lexer::{Lexer, Token};

/// Elements that never have children.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const FORM_TAGS: &[&str] = &[
    "input", "option", "optgroup", "select", "button", "datalist", "textarea",
];

/// Open elements that are implicitly closed when `name` starts.
fn implied_closes(name: &str) -> &'static [&'static str] {
    match name {
        "tr" => &["tr", "th", "td"],
        "th" | "td" => &["th", "td"],
        "thead" | "tbody" | "tfoot" => &["thead", "tbody", "tfoot"],
        "li" => &["li"],
        "dt" | "dd" => &["dt", "dd"],
        "option" => &["option"],
        "optgroup" => &["optgroup", "option"],
        "select" | "input" | "button" | "datalist" | "textarea" => FORM_TAGS,
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "address" | "article" | "aside"
        | "blockquote" | "details" | "div" | "dl" | "fieldset" | "figcaption" | "figure"
        | "footer" | "form" | "header" | "hr" | "main" | "nav" | "ol" | "pre" | "section"
        | "table" | "ul" => &["p"],
        _ => &[],
    }
}

/// Check whether an element is void.
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Builds the forest from a token stream.
#[derive(Debug, Default)]
struct TreeBuilder {
    roots: Vec<ParsedNode>,
    open: Vec<TagNode>,
}

impl TreeBuilder {
    fn append(&mut self, node: ParsedNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let siblings = match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        };

        if let Some(ParsedNode::Text(previous)) = siblings.last_mut() {
            previous.text.push_str(text);
            return;
        }

        let parent = self.open.last().map(|tag| tag.name.clone());
        self.append(ParsedNode::Text(TextNode::new(text, parent)));
    }

    fn close_top(&mut self) {
        if let Some(tag) = self.open.pop() {
            self.append(ParsedNode::Tag(tag));
        }
    }

    fn start_tag(&mut self, tag: TagNode, self_closing: bool) {
        let closes = implied_closes(&tag.name);
        while self
            .open
            .last()
            .is_some_and(|top| closes.contains(&top.name.as_str()))
        {
            self.close_top();
        }

        if self_closing || is_void(&tag.name) {
            self.append(ParsedNode::Tag(tag));
        } else {
            self.open.push(tag);
        }
    }

    fn end_tag(&mut self, name: &str) {
        match self.open.iter().rposition(|tag| tag.name == name) {
            Some(index) => {
                while self.open.len() > index {
                    self.close_top();
                }
            }
            None => tracing::trace!("Ignoring unmatched end tag </{}>", name),
        }
    }

    fn finish(mut self) -> Vec<ParsedNode> {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.roots
    }
}

/// Parse an HTML fragment into its ordered root nodes.
///
/// Comments and declarations are dropped, adjacent text is merged and text
/// nodes remember the tag name of their enclosing element.
pub fn parse_html(source: &str) -> Vec<ParsedNode> {
    let mut builder = TreeBuilder::default();

    for token in Lexer::new(source) {
        match token {
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let tag = TagNode {
                    name,
                    attributes,
                    children: Vec::new(),
                };
                builder.start_tag(tag, self_closing);
            }
            Token::EndTag { name } => builder.end_tag(&name),
            Token::Text(text) => builder.append_text(text),
            Token::Comment(_) | Token::Declaration(_) => {}
        }
    }

    builder.finish()
}
