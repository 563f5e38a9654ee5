//! # Subtree editing
//!
//! Position-aware clone, extract, delete and split operations. Each comes in
//! up to three shapes:
//!
//! - **range**: `[start, end)` of one node (`clone_contents`, `clone_node`,
//!   `extract_node`, `delete_contents`, ...);
//! - **side**: everything left or right of an offset in one node
//!   (`clone_side`, `extract_side`, `delete_side`);
//! - **ascent**: the side operation applied from an inner descendant up to,
//!   but excluding, a bounding ancestor (`clone_upwards`, `extract_upwards`,
//!   `delete_upwards`, `split_upwards`).
//!
//! Offsets are character offsets for text, comment and CDATA nodes and child
//! indices for elements. Every operation checks its offsets, the node kinds
//! it will touch and the ancestor path before the first mutation, so an
//! `Err` always leaves the document untouched.

mod clone;
mod delete;
mod extract;
mod split;

pub use clone::{clone_contents, clone_node, clone_side, clone_upwards};
pub use delete::{delete_contents, delete_siblings, delete_side, delete_upwards};
pub use extract::{extract_contents, extract_node, extract_side, extract_upwards};
pub use split::{ensure_block_is_editable, split_keeping_editable, split_node, split_upwards};

use crate::dom::{Document, NodeId, NodeKind};
use crate::error::DomError;

/// Which part of a node, relative to an offset, an operation acts on.
///
/// `Left` is `[0, offset)`, `Right` is `[offset, length)`. For the sibling
/// and ascent forms it selects the siblings before or after the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// `[start, end)` of a node of the given length on this side of `offset`.
    fn bounds(self, offset: usize, length: usize) -> (usize, usize) {
        match self {
            Side::Left => (0, offset),
            Side::Right => (offset, length),
        }
    }

    /// Added to a path child's index to get the split point one level up.
    /// The path child itself is never part of the side.
    fn delta(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

// ============ Tree helpers ============

/// The child of `parent` whose subtree holds `descendant`.
pub fn child_containing(doc: &Document, parent: NodeId, descendant: NodeId) -> Option<NodeId> {
    let mut child = descendant;
    loop {
        let up = doc.parent(child)?;
        if up == parent {
            return Some(child);
        }
        child = up;
    }
}

/// Insert `new_node` right after `reference`.
pub fn insert_after(
    doc: &mut Document,
    new_node: NodeId,
    reference: NodeId,
) -> Result<(), DomError> {
    doc.insert_after_sibling(new_node, reference)
}

/// Insert `new_node` so it ends up at `index` among `parent`'s children,
/// appending when `index` is past the end.
pub fn insert_at(
    doc: &mut Document,
    parent: NodeId,
    new_node: NodeId,
    index: usize,
) -> Result<(), DomError> {
    match doc.child_at(parent, index) {
        Some(reference) if reference != new_node => doc.insert_before(new_node, reference),
        Some(_) => Ok(()),
        None => doc.append_child(parent, new_node),
    }
}

/// Remove `node` from its parent, if it has one.
pub fn detach(doc: &mut Document, node: NodeId) {
    if doc.parent(node).is_some() {
        doc.detach(node);
    }
}

/// Children of `node` with index in `[start, end)`; `end` is clamped.
pub fn child_nodes(doc: &Document, node: NodeId, start: usize, end: usize) -> Vec<NodeId> {
    doc.children(node)
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

// ============ Preconditions ============

fn check_kind(doc: &Document, node: NodeId) -> Result<(), DomError> {
    match doc.kind(node) {
        NodeKind::Fragment => Err(DomError::UnsupportedNodeKind(NodeKind::Fragment)),
        _ => Ok(()),
    }
}

fn check_offset(doc: &Document, node: NodeId, offset: usize) -> Result<(), DomError> {
    let length = doc.length(node);
    if offset > length {
        return Err(DomError::InvalidOffset { offset, length });
    }
    Ok(())
}

fn check_range(doc: &Document, node: NodeId, start: usize, end: usize) -> Result<(), DomError> {
    check_kind(doc, node)?;
    if start > end {
        return Err(DomError::InvalidRange { start, end });
    }
    check_offset(doc, node, end)
}

/// `descendant` followed by its ancestors strictly below `parent`.
///
/// Fails with `UnsupportedNodeKind` if `descendant` is a fragment and with
/// `DetachedNode` unless `parent` is a strict ancestor. Fragments never have
/// parents, so no other node on the path can be one.
fn ascent_path(
    doc: &Document,
    parent: NodeId,
    descendant: NodeId,
) -> Result<Vec<NodeId>, DomError> {
    check_kind(doc, descendant)?;
    let mut path = vec![descendant];
    let mut node = descendant;
    loop {
        let up = doc.parent(node).ok_or(DomError::DetachedNode)?;
        if up == parent {
            break;
        }
        path.push(up);
        node = up;
    }
    Ok(path)
}
