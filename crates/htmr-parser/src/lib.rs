//! Lenient HTML fragment parser.
//!
//! This crate turns an HTML string into an ordered forest of tag and text
//! nodes. It is not an HTML5-compliant parser: it never synthesizes elements
//! and it leaves character entities undecoded.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Attributes, ParsedNode, TagNode, TextNode};
pub use lexer::{tokenize, Lexer, Token};
pub use parser::{is_void, parse_html};
