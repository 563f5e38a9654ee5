use std::fmt;

/// Discriminant of [`NodeData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    CData,
    Fragment,
}

impl NodeKind {
    /// Text, comment and CDATA nodes carry a character payload and no children.
    pub fn is_text_like(self) -> bool {
        matches!(self, NodeKind::Text | NodeKind::Comment | NodeKind::CData)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
            NodeKind::CData => "cdata",
            NodeKind::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element payload: a lower-case tag name and attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_ascii_lowercase(),
                value,
            }),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self
            .attributes
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(index).value)
    }
}

/// The closed set of node kinds stored in the document arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
    /// Transient parentless carrier for cloned or extracted content.
    Fragment,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
            NodeData::CData(_) => NodeKind::CData,
            NodeData::Fragment => NodeKind::Fragment,
        }
    }

    /// Character payload of text-like nodes.
    pub fn payload(&self) -> Option<&str> {
        match self {
            NodeData::Text(s) | NodeData::Comment(s) | NodeData::CData(s) => Some(s),
            NodeData::Element(_) | NodeData::Fragment => None,
        }
    }

    pub(crate) fn payload_mut(&mut self) -> Option<&mut String> {
        match self {
            NodeData::Text(s) | NodeData::Comment(s) | NodeData::CData(s) => Some(s),
            NodeData::Element(_) | NodeData::Fragment => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Number of characters (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Substring of `s` between two character offsets. Offsets past the end clamp.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |offset: usize| {
        s.char_indices()
            .nth(offset)
            .map(|(byte, _)| byte)
            .unwrap_or(s.len())
    };
    let start = byte_at(start);
    let end = byte_at(end).max(start);
    &s[start..end]
}

/// `s` with the characters in `[start, end)` removed.
pub fn char_remove(s: &str, start: usize, end: usize) -> String {
    let mut result = String::with_capacity(s.len());
    result.push_str(char_slice(s, 0, start));
    result.push_str(char_slice(s, end, usize::MAX));
    result
}
