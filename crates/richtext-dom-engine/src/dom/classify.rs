//! Tag-based classification of nodes, driven by [`EngineConfig`] tables.
//!
//! [`EngineConfig`]: richtext_dom_config::EngineConfig

use super::{Document, NodeData, NodeId};

impl Document {
    /// Whether the node survives the derived serialization.
    ///
    /// Empty text nodes are dropped, and so is any element carrying the
    /// metadata attribute with an empty value. Comments and CDATA always stay.
    pub fn is_serializable(&self, node: NodeId) -> bool {
        match self.data(node) {
            NodeData::Text(text) => !text.is_empty(),
            NodeData::Element(element) => element
                .attribute(&self.config().metadata_attribute)
                .is_none_or(|value| !value.is_empty()),
            NodeData::Comment(_) | NodeData::CData(_) | NodeData::Fragment => true,
        }
    }

    /// False for non-elements and for void elements such as `br` or `img`.
    pub fn can_have_children(&self, node: NodeId) -> bool {
        self.tag_name(node)
            .is_some_and(|tag| !self.config().is_void_tag(tag))
    }

    pub fn is_flow_container(&self, node: NodeId) -> bool {
        self.tag_name(node)
            .is_some_and(|tag| self.config().is_flow_container_tag(tag))
    }

    pub fn is_block_level_inline_container(&self, node: NodeId) -> bool {
        self.tag_name(node)
            .is_some_and(|tag| self.config().is_block_inline_container_tag(tag))
    }

    pub fn is_special_block(&self, node: NodeId) -> bool {
        self.tag_name(node)
            .is_some_and(|tag| self.config().is_special_block_tag(tag))
    }

    pub fn is_block(&self, node: NodeId) -> bool {
        self.tag_name(node)
            .is_some_and(|tag| self.config().is_block_tag(tag))
    }

    /// Everything that is not block-level, including text and comments.
    pub fn is_inline(&self, node: NodeId) -> bool {
        !self.is_block(node)
    }

    pub fn is_line_break(&self, node: NodeId) -> bool {
        self.tag_name(node)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(&self.config().line_break_tag))
    }

    /// Elements flagged as not displayed: the hidden attribute, or an inline
    /// style declaring `display: none`.
    pub fn is_hidden(&self, node: NodeId) -> bool {
        let Some(element) = self.data(node).as_element() else {
            return false;
        };
        if element.has_attribute(&self.config().hidden_attribute) {
            return true;
        }
        element.attribute("style").is_some_and(|style| {
            style.split(';').any(|declaration| {
                let mut parts = declaration.splitn(2, ':');
                let property = parts.next().unwrap_or("").trim();
                let value = parts.next().unwrap_or("").trim();
                property.eq_ignore_ascii_case("display") && value.eq_ignore_ascii_case("none")
            })
        })
    }
}
