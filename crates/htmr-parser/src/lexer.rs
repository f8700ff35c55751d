//! Tokenizer for HTML fragments.
//!
//! Splits markup into start tags, end tags, text, comments and declarations.
//! Entities are never decoded here; attribute values and text keep the exact
//! characters that were written.

use crate::ast::Attributes;

/// Elements whose content is raw text up to the matching end tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A lexical token borrowed from the source where possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name attr="value">` or `<name />`
    StartTag {
        name: String,
        attributes: Attributes,
        self_closing: bool,
    },
    /// `</name>`
    EndTag { name: String },
    /// Character data between tags
    Text(&'a str),
    /// `<!-- ... -->`, also used for bogus `</ ...>` constructs
    Comment(&'a str),
    /// `<!DOCTYPE ...>` or `<?xml ...?>`
    Declaration(&'a str),
}

/// Streaming tokenizer over an HTML string.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    /// Set after a raw text start tag until its content has been emitted
    raw_text: Option<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            raw_text: None,
        }
    }

    /// Whether the `<` at `at` opens markup rather than being literal text.
    fn starts_markup(&self, at: usize) -> bool {
        let bytes = self.source.as_bytes();
        if bytes.get(at) != Some(&b'<') {
            return false;
        }
        match bytes.get(at + 1) {
            Some(b) if b.is_ascii_alphabetic() => true,
            Some(b'!') | Some(b'?') => true,
            Some(b'/') => bytes.get(at + 2).is_some(),
            _ => false,
        }
    }

    fn lex_text(&mut self) -> Token<'a> {
        let source = self.source;
        let start = self.pos;

        let end = source[start..]
            .match_indices('<')
            .map(|(offset, _)| start + offset)
            .find(|&at| at > start && self.starts_markup(at))
            .unwrap_or(source.len());

        self.pos = end;
        Token::Text(&source[start..end])
    }

    fn lex_markup(&mut self) -> Token<'a> {
        let source = self.source;
        let rest = &source[self.pos..];

        if let Some(body) = rest.strip_prefix("<!--") {
            let (comment, consumed) = match body.find("-->") {
                Some(end) => (&body[..end], 4 + end + 3),
                None => (body, rest.len()),
            };
            self.pos += consumed;
            return Token::Comment(comment);
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let (declaration, consumed) = match rest.find('>') {
                Some(end) => (&rest[2..end], end + 1),
                None => (&rest[2..], rest.len()),
            };
            self.pos += consumed;
            return Token::Declaration(declaration);
        }

        if rest.starts_with("</") {
            return self.lex_end_tag();
        }

        self.lex_start_tag()
    }

    fn lex_end_tag(&mut self) -> Token<'a> {
        let source = self.source;
        let bytes = source.as_bytes();
        let start = self.pos + 2;

        let close = source[start..].find('>').map(|offset| start + offset);
        let after = close.map_or(source.len(), |at| at + 1);

        if !bytes.get(start).is_some_and(|b| b.is_ascii_alphabetic()) {
            let body = &source[start..close.unwrap_or(source.len())];
            self.pos = after;
            return Token::Comment(body);
        }

        let name_end = scan_name(bytes, start);
        let name = source[start..name_end].to_lowercase();
        self.pos = after;
        Token::EndTag { name }
    }

    fn lex_start_tag(&mut self) -> Token<'a> {
        let source = self.source;
        let bytes = source.as_bytes();
        let start = self.pos + 1;

        let mut i = scan_name(bytes, start);
        let name = source[start..i].to_lowercase();
        let mut attributes = Attributes::new();
        let mut self_closing = false;

        loop {
            i = skip_whitespace(bytes, i);
            match bytes.get(i) {
                None => break,
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') => {
                    if bytes.get(i + 1) == Some(&b'>') {
                        self_closing = true;
                        i += 2;
                        break;
                    }
                    i += 1;
                    continue;
                }
                Some(_) => {}
            }

            let name_start = i;
            while let Some(&b) = bytes.get(i) {
                if b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/') {
                    break;
                }
                i += 1;
            }

            if i == name_start {
                // Stray `=`
                i += 1;
                continue;
            }

            let attr_name = source[name_start..i].to_lowercase();
            let after_name = skip_whitespace(bytes, i);

            let value = if bytes.get(after_name) == Some(&b'=') {
                i = skip_whitespace(bytes, after_name + 1);
                match bytes.get(i) {
                    Some(&quote @ (b'"' | b'\'')) => {
                        let value_start = i + 1;
                        let value_end = source[value_start..]
                            .find(quote as char)
                            .map_or(source.len(), |offset| value_start + offset);
                        i = (value_end + 1).min(source.len());
                        source[value_start..value_end].to_string()
                    }
                    _ => {
                        let value_start = i;
                        while let Some(&b) = bytes.get(i) {
                            if b.is_ascii_whitespace() || b == b'>' {
                                break;
                            }
                            i += 1;
                        }
                        source[value_start..i].to_string()
                    }
                }
            } else {
                String::new()
            };

            attributes.entry(attr_name).or_insert(value);
        }

        self.pos = i;

        if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.raw_text = Some(name.clone());
        }

        Token::StartTag {
            name,
            attributes,
            self_closing,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.raw_text.take() {
            let source = self.source;
            let end = find_end_tag(source, self.pos, &name).unwrap_or(source.len());
            if end > self.pos {
                let text = &source[self.pos..end];
                self.pos = end;
                return Some(Token::Text(text));
            }
        }

        if self.pos >= self.source.len() {
            return None;
        }

        if self.starts_markup(self.pos) {
            Some(self.lex_markup())
        } else {
            Some(self.lex_text())
        }
    }
}

/// Tokenize a whole fragment.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

fn scan_name(bytes: &[u8], mut i: usize) -> usize {
    while let Some(&b) = bytes.get(i) {
        if b.is_ascii_whitespace() || b == b'/' || b == b'>' {
            break;
        }
        i += 1;
    }
    i
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

/// Position of the `</name` that closes a raw text element, case-insensitive.
fn find_end_tag(source: &str, from: usize, name: &str) -> Option<usize> {
    let bytes = source.as_bytes();

    source[from..]
        .match_indices("</")
        .map(|(offset, _)| from + offset)
        .find(|&at| {
            let name_start = at + 2;
            let name_end = name_start + name.len();
            bytes
                .get(name_start..name_end)
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name.as_bytes()))
                && bytes
                    .get(name_end)
                    .map_or(true, |b| b.is_ascii_whitespace() || matches!(b, b'>' | b'/'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn start(name: &str, attrs: &[(&str, &str)], self_closing: bool) -> Token<'static> {
        Token::StartTag {
            name: name.to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            self_closing,
        }
    }

    fn end(name: &str) -> Token<'static> {
        Token::EndTag {
            name: name.to_string(),
        }
    }

    #[test]
    fn tokenizes_element_with_text() {
        let tokens = tokenize(r#"<div class="a">Hi &amp; bye</div>"#);

        assert_eq!(
            tokens,
            vec![
                start("div", &[("class", "a")], false),
                Token::Text("Hi &amp; bye"),
                end("div"),
            ]
        );
    }

    #[test]
    fn reads_every_attribute_value_form() {
        let tokens = tokenize(r#"<input type='text' value=plain disabled data-x = "y">"#);

        assert_eq!(
            tokens,
            vec![start(
                "input",
                &[
                    ("type", "text"),
                    ("value", "plain"),
                    ("disabled", ""),
                    ("data-x", "y"),
                ],
                false
            )]
        );
    }

    #[test]
    fn lowercases_names_and_keeps_first_duplicate() {
        let tokens = tokenize(r#"<DIV ID="one" id="two"></Div>"#);

        assert_eq!(tokens, vec![start("div", &[("id", "one")], false), end("div")]);
    }

    #[test]
    fn recognises_self_closing_tags() {
        let tokens = tokenize(r#"<br/><img src="a.png" />"#);

        assert_eq!(
            tokens,
            vec![
                start("br", &[], true),
                start("img", &[("src", "a.png")], true),
            ]
        );
    }

    #[test]
    fn style_content_is_raw_text() {
        let tokens = tokenize("<style>a > b { content: '<b>'; }</STYLE>");

        assert_eq!(
            tokens,
            vec![
                start("style", &[], false),
                Token::Text("a > b { content: '<b>'; }"),
                end("style"),
            ]
        );
    }

    #[test]
    fn empty_raw_text_element_has_no_text() {
        let tokens = tokenize("<style></style>");

        assert_eq!(tokens, vec![start("style", &[], false), end("style")]);
    }

    #[test]
    fn literal_less_than_stays_in_text() {
        let tokens = tokenize("a < b <3 c<p>");

        assert_eq!(
            tokens,
            vec![Token::Text("a < b <3 c"), start("p", &[], false)]
        );
    }

    #[test]
    fn comments_and_declarations() {
        let tokens = tokenize("<!DOCTYPE html><!-- note --><?xml version=\"1.0\"?></ odd>");

        assert_eq!(
            tokens,
            vec![
                Token::Declaration("DOCTYPE html"),
                Token::Comment(" note "),
                Token::Declaration("xml version=\"1.0\"?"),
                Token::Comment(" odd"),
            ]
        );
    }

    #[test]
    fn unterminated_tag_runs_to_end() {
        let tokens = tokenize(r#"<a href="x"#);

        assert_eq!(tokens, vec![start("a", &[("href", "x")], false)]);
    }
}
