//! Recursive transform from parsed nodes to framework elements.

use htmr_parser::{Attributes, ParsedNode, TagNode, TextNode};

use crate::attributes::map_attributes;
use crate::element::{
    Children, ElementFactory, InnerHtml, PropValue, Props, Rendered, INNER_HTML_PROP, KEY_PROP,
};
use crate::entities::decode_entities;
use crate::options::TransformOptions;

/// Parents in which whitespace-only text is not a valid child.
pub const TABLE_ELEMENTS: &[&str] = &["table", "tbody", "thead", "tfoot", "tr"];

/// Tags that never render.
const SKIPPED_ELEMENTS: &[&str] = &["script"];

/// Transform one node, returning `None` when it renders nothing.
///
/// `key` becomes the element's `key` prop; children receive their index.
pub fn transform<F>(
    node: &ParsedNode,
    key: &str,
    options: &TransformOptions<F::Element>,
    factory: &F,
) -> Option<Rendered<F::Element>>
where
    F: ElementFactory,
{
    match node {
        ParsedNode::Tag(tag) => transform_tag(tag, key, options, factory),
        ParsedNode::Text(text) => transform_text(text, options),
    }
}

fn transform_tag<F>(
    tag: &TagNode,
    key: &str,
    options: &TransformOptions<F::Element>,
    factory: &F,
) -> Option<Rendered<F::Element>>
where
    F: ElementFactory,
{
    if SKIPPED_ELEMENTS.contains(&tag.name.as_str()) {
        tracing::trace!("Skipping <{}>", tag.name);
        return None;
    }

    let attributes: Attributes = tag
        .attributes
        .iter()
        .map(|(name, value)| (name.clone(), decode_entities(value)))
        .collect();

    let mut props = map_attributes(&attributes, &options.preserve_attributes);
    props.insert(KEY_PROP.to_string(), PropValue::String(key.to_string()));

    if options.sets_children_dangerously(&tag.name) {
        let html = match tag.children.first() {
            Some(ParsedNode::Text(text)) => text.text.trim().to_string(),
            Some(ParsedNode::Tag(_)) | None => {
                tracing::warn!(
                    "<{}> has no text content to inject, rendering it empty",
                    tag.name
                );
                String::new()
            }
        };
        props.insert(
            INNER_HTML_PROP.to_string(),
            PropValue::InnerHtml(InnerHtml::new(html)),
        );

        tracing::trace!("Rendering <{}> with raw inner content", tag.name);
        return Some(resolve(&tag.name, props, None, options, factory));
    }

    let children: Vec<_> = tag
        .children
        .iter()
        .enumerate()
        .filter_map(|(index, child)| transform(child, &index.to_string(), options, factory))
        .filter(|child| !child.is_blank())
        .collect();

    let children = if children.is_empty() {
        None
    } else {
        Some(children)
    };

    tracing::trace!("Rendering <{}>", tag.name);
    Some(resolve(&tag.name, props, children, options, factory))
}

fn transform_text<E>(text: &TextNode, options: &TransformOptions<E>) -> Option<Rendered<E>> {
    let in_table = text
        .parent
        .as_deref()
        .is_some_and(|parent| TABLE_ELEMENTS.contains(&parent));

    let raw = if in_table {
        let trimmed = text.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
    } else {
        text.text.as_str()
    };

    let decoded = decode_entities(raw);

    Some(match options.transform.default_transform() {
        Some(fallback) => fallback.text(decoded),
        None => Rendered::Text(decoded),
    })
}

/// Specific override, then wildcard fallback, then the plain constructor.
fn resolve<F>(
    tag: &str,
    props: Props,
    children: Children<F::Element>,
    options: &TransformOptions<F::Element>,
    factory: &F,
) -> Rendered<F::Element>
where
    F: ElementFactory,
{
    if let Some(custom) = options.transform.get(tag) {
        return custom(tag, props, children);
    }

    if let Some(fallback) = options.transform.default_transform() {
        return fallback.element(tag, props, children);
    }

    Rendered::Element(factory.create_element(tag, props, children))
}
