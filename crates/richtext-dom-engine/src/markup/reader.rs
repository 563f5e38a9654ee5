//! Builds document nodes from a token stream.
//!
//! The reader keeps a stack of open elements. Start tags push (unless they
//! are void or self-closing), end tags pop back to the nearest open element
//! with the same name, and anything still open at the end is closed
//! implicitly. Unmatched end tags are ignored.

use html_escape::decode_html_entities;

use super::lexer::{Token, TokenKind, lex};
use crate::dom::{Document, NodeData, NodeId};
use crate::error::DomError;

/// Parse markup into a new detached fragment.
pub fn parse_fragment(doc: &mut Document, markup: &str) -> Result<NodeId, DomError> {
    let fragment = doc.create_fragment();
    parse_into(doc, fragment, markup)?;
    Ok(fragment)
}

/// Parse markup and append the resulting nodes to `parent`.
pub fn parse_into(doc: &mut Document, parent: NodeId, markup: &str) -> Result<(), DomError> {
    let kind = doc.kind(parent);
    if kind.is_text_like() {
        return Err(DomError::UnsupportedNodeKind(kind));
    }
    let tokens = lex(markup);
    Reader::new(doc, parent).read(&tokens)
}

struct Reader<'d> {
    doc: &'d mut Document,
    open: Vec<NodeId>,
}

impl<'d> Reader<'d> {
    fn new(doc: &'d mut Document, root: NodeId) -> Self {
        Self {
            doc,
            open: vec![root],
        }
    }

    fn current(&self) -> NodeId {
        // The root is never popped.
        self.open[self.open.len() - 1]
    }

    fn read(mut self, tokens: &[Token<'_>]) -> Result<(), DomError> {
        for token in tokens {
            match token.kind {
                TokenKind::Text | TokenKind::Lt => self.text(&decode_html_entities(token.text))?,
                TokenKind::Comment => {
                    let body = strip(token.text, "<!--", "-->");
                    let node = self.doc.create_comment(body);
                    self.doc.append_child(self.current(), node)?;
                }
                TokenKind::CData => {
                    let body = strip(token.text, "<![CDATA[", "]]>");
                    let node = self.doc.create_cdata(body);
                    self.doc.append_child(self.current(), node)?;
                }
                TokenKind::StartTag => self.start_tag(token.text)?,
                TokenKind::EndTag => self.end_tag(token.text),
            }
        }
        Ok(())
    }

    /// Append text, merging with a preceding text sibling.
    fn text(&mut self, text: &str) -> Result<(), DomError> {
        let parent = self.current();
        if let Some(last) = self.doc.last_child(parent)
            && let NodeData::Text(existing) = self.doc.data_mut(last)
        {
            existing.push_str(text);
            return Ok(());
        }
        let node = self.doc.create_text(text);
        self.doc.append_child(parent, node)
    }

    fn start_tag(&mut self, source: &str) -> Result<(), DomError> {
        let tag = TagSource::parse(source);
        let element = self.doc.create_element(&tag.name);
        for (name, value) in &tag.attributes {
            self.doc.set_attribute(element, name, value.as_str())?;
        }
        self.doc.append_child(self.current(), element)?;
        if !tag.self_closing && self.doc.can_have_children(element) {
            self.open.push(element);
        }
        Ok(())
    }

    fn end_tag(&mut self, source: &str) {
        let name = source
            .trim_start_matches("</")
            .trim_end_matches('>')
            .trim()
            .to_ascii_lowercase();
        let matching = self
            .open
            .iter()
            .skip(1)
            .rposition(|&node| self.doc.tag_name(node) == Some(name.as_str()));
        if let Some(position) = matching {
            // `rposition` counts from the skipped root.
            self.open.truncate(position + 1);
        }
    }
}

fn strip<'a>(text: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let text = text.strip_prefix(prefix).unwrap_or(text);
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Name, attributes and self-closing flag scanned from `<name a="1" b>`.
struct TagSource {
    name: String,
    attributes: Vec<(String, String)>,
    self_closing: bool,
}

impl TagSource {
    fn parse(source: &str) -> Self {
        let inner = source.strip_prefix('<').unwrap_or(source);
        let inner = inner.strip_suffix('>').unwrap_or(inner);
        let (inner, self_closing) = match inner.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (inner, false),
        };

        let name_end = inner
            .find(|c: char| c.is_whitespace() || c == '/')
            .unwrap_or(inner.len());
        let name = inner[..name_end].to_ascii_lowercase();
        let attributes = scan_attributes(&inner[name_end..]);

        Self {
            name,
            attributes,
            self_closing,
        }
    }
}

fn scan_attributes(source: &str) -> Vec<(String, String)> {
    let mut attributes = Vec::new();
    let mut rest = source;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            return attributes;
        }

        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after_eq) => {
                let after_eq = after_eq.trim_start();
                let (raw, remaining) = split_value(after_eq);
                rest = remaining;
                decode_html_entities(raw).into_owned()
            }
            None => String::new(),
        };
        if !name.is_empty() {
            attributes.push((name, value));
        }
    }
}

/// Split a quoted or bare attribute value from the rest of the tag.
fn split_value(source: &str) -> (&str, &str) {
    match source.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &source[1..];
            match body.find(quote) {
                Some(end) => (&body[..end], &body[end + 1..]),
                None => (body, ""),
            }
        }
        _ => {
            let end = source.find(char::is_whitespace).unwrap_or(source.len());
            (&source[..end], &source[end..])
        }
    }
}
