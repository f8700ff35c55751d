//! Convert HTML strings into UI framework element trees.
//!
//! Markup is parsed with `htmr-parser`, then every node is mapped to an
//! element: attributes are decoded and renamed to framework props, text is
//! entity-decoded, and callers may replace the rendering of any tag.
//!
//! ```
//! use htmr::{convert, PartialOptions, PropValue, Rendered};
//!
//! let converted = convert(r#"<div class="a">Hi &amp; bye</div>"#, PartialOptions::new());
//! let div = converted.single().and_then(Rendered::as_element).unwrap();
//!
//! assert_eq!(div.prop("className"), Some(&PropValue::from("a")));
//! assert_eq!(div.text_content(), "Hi & bye");
//! ```

pub mod attributes;
pub mod config;
pub mod convert;
pub mod element;
pub mod entities;
pub mod error;
pub mod options;
pub mod transform;

pub use attributes::{map_attributes, parse_style};
pub use config::HtmrConfig;
pub use convert::{convert, convert_bytes, Converted, Converter};
pub use element::{
    Children, ElementFactory, InnerHtml, PropValue, Props, Rendered, VElement, VirtualDom,
    INNER_HTML_PROP, KEY_PROP,
};
pub use entities::decode_entities;
pub use error::HtmrError;
pub use options::{
    DefaultTransform, Overrides, PartialOptions, PreserveAttribute, TagTransform,
    TransformOptions,
};
pub use transform::transform;

pub use htmr_parser::{parse_html, ParsedNode, TagNode, TextNode};
