//! # Host document tree
//!
//! An arena of [`NodeData`] addressed by [`NodeId`] handles. The arena owns
//! every node; a child refers to its parent only through a non-owning index,
//! so moving, cloning and detaching subtrees never creates reference cycles.
//!
//! The editing components ([`crate::navigator`], [`crate::index`],
//! [`crate::editor`], [`crate::range`], [`crate::isolate`]) only go through
//! the narrow surface exposed here: node kind, parent/child/sibling
//! navigation, payload and attribute access, shallow/deep clone and
//! insert/remove.

mod classify;
mod node;

pub use indextree::NodeId;
pub use node::{Attribute, Element, NodeData, NodeKind, char_len, char_remove, char_slice};

use indextree::Arena;
use log::debug;
use richtext_dom_config::{ConfigError, EngineConfig};

use crate::error::DomError;

/// Payloads change only through the typed setters, so a node keeps the kind
/// it was created with:
///
/// ```compile_fail
/// use richtext_dom_engine::{Document, NodeData};
///
/// let mut doc = Document::new();
/// let p = doc.create_element("p");
/// *doc.data_mut(p) = NodeData::Text("x".to_string());
/// ```
pub struct Document {
    arena: Arena<NodeData>,
    config: EngineConfig,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            arena: Arena::new(),
            config,
        }
    }

    /// Document using the user's config file, see [`EngineConfig::load`].
    pub fn from_user_config() -> Result<Self, ConfigError> {
        let config = EngineConfig::load()?;
        debug!("loaded engine config from {}", EngineConfig::config_path().display());
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ============ Node creation ============

    pub fn create_node(&mut self, data: NodeData) -> NodeId {
        self.arena.new_node(data)
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.create_node(NodeData::Element(Element::new(tag)))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.create_node(NodeData::Text(text.into()))
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.create_node(NodeData::Comment(text.into()))
    }

    pub fn create_cdata(&mut self, text: impl Into<String>) -> NodeId {
        self.create_node(NodeData::CData(text.into()))
    }

    pub fn create_fragment(&mut self) -> NodeId {
        self.create_node(NodeData::Fragment)
    }

    // ============ Node data ============

    pub fn data(&self, node: NodeId) -> &NodeData {
        self.arena[node].get()
    }

    pub(crate) fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        self.arena[node].get_mut()
    }

    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.data(node).kind()
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.kind(node) == NodeKind::Element
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        self.kind(node) == NodeKind::Text
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.data(node).as_element().map(Element::tag)
    }

    /// Payload of a text, comment or CDATA node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.data(node).payload()
    }

    /// Replace the payload of a text-like node.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        let kind = self.kind(node);
        match self.data_mut(node).payload_mut() {
            Some(payload) => {
                *payload = text.into();
                Ok(())
            }
            None => Err(DomError::UnsupportedNodeKind(kind)),
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.data(node).as_element()?.attribute(name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        let kind = self.kind(node);
        let element = self
            .data_mut(node)
            .as_element_mut()
            .ok_or(DomError::UnsupportedNodeKind(kind))?;
        element.set_attribute(name, value);
        Ok(())
    }

    /// Remove an attribute; non-elements and missing attributes are ignored.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        self.data_mut(node).as_element_mut()?.remove_attribute(name)
    }

    /// Character count for text-like nodes, child count otherwise.
    pub fn length(&self, node: NodeId) -> usize {
        match self.text(node) {
            Some(payload) => char_len(payload),
            None => self.child_count(node),
        }
    }

    // ============ Navigation ============

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].parent()
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].first_child()
    }

    pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].last_child()
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].next_sibling()
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].previous_sibling()
    }

    pub fn has_children(&self, node: NodeId) -> bool {
        self.first_child(node).is_some()
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.children(node).count()
    }

    pub fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.children(node).nth(index)
    }

    pub fn is_removed(&self, node: NodeId) -> bool {
        node.is_removed(&self.arena)
    }

    // ============ Cloning ============

    /// Copy of the node without its children.
    pub fn shallow_clone(&mut self, node: NodeId) -> NodeId {
        let data = self.data(node).clone();
        self.create_node(data)
    }

    /// Copy of the node and its whole subtree, detached.
    pub fn deep_clone(&mut self, node: NodeId) -> NodeId {
        let clone = self.shallow_clone(node);
        let children: Vec<NodeId> = self.children(node).collect();
        for child in children {
            let child_clone = self.deep_clone(child);
            clone.append(child_clone, &mut self.arena);
        }
        clone
    }

    // ============ Structure edits ============
    //
    // Inserting a fragment inserts its children in order and leaves the
    // fragment empty and parentless.

    /// Append `child` as last child of `parent`, detaching it from its previous position.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.is_fragment(child) {
            parent.checked_append(child, &mut self.arena)?;
            return Ok(());
        }
        self.check_fragment_target(child, parent)?;
        while let Some(first) = self.first_child(child) {
            parent.checked_append(first, &mut self.arena)?;
        }
        Ok(())
    }

    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.is_fragment(child) {
            parent.checked_prepend(child, &mut self.arena)?;
            return Ok(());
        }
        self.check_fragment_target(child, parent)?;
        while let Some(last) = self.last_child(child) {
            parent.checked_prepend(last, &mut self.arena)?;
        }
        Ok(())
    }

    /// Insert `new_node` as previous sibling of `reference`.
    pub fn insert_before(&mut self, new_node: NodeId, reference: NodeId) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(DomError::DetachedNode)?;
        if !self.is_fragment(new_node) {
            reference.checked_insert_before(new_node, &mut self.arena)?;
            return Ok(());
        }
        self.check_fragment_target(new_node, parent)?;
        while let Some(first) = self.first_child(new_node) {
            reference.checked_insert_before(first, &mut self.arena)?;
        }
        Ok(())
    }

    /// Insert `new_node` as next sibling of `reference`.
    pub fn insert_after_sibling(
        &mut self,
        new_node: NodeId,
        reference: NodeId,
    ) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(DomError::DetachedNode)?;
        if !self.is_fragment(new_node) {
            reference.checked_insert_after(new_node, &mut self.arena)?;
            return Ok(());
        }
        self.check_fragment_target(new_node, parent)?;
        while let Some(last) = self.last_child(new_node) {
            reference.checked_insert_after(last, &mut self.arena)?;
        }
        Ok(())
    }

    fn is_fragment(&self, node: NodeId) -> bool {
        self.kind(node) == NodeKind::Fragment
    }

    /// A fragment cannot be emptied into its own subtree.
    fn check_fragment_target(&self, fragment: NodeId, target: NodeId) -> Result<(), DomError> {
        if target.ancestors(&self.arena).any(|node| node == fragment) {
            return Err(indextree::NodeError::AppendAncestor.into());
        }
        Ok(())
    }

    /// Unlink the node (and its subtree) from its parent; it stays alive in the arena.
    pub fn detach(&mut self, node: NodeId) {
        node.detach(&mut self.arena);
    }

    /// Detach the node and free its whole subtree.
    pub fn remove(&mut self, node: NodeId) {
        node.remove_subtree(&mut self.arena);
    }
}
