//! Leaves and nodes found relative to a range's boundaries.

use super::Range;
use crate::dom::{Document, NodeId};
use crate::navigator::{
    HiddenElements, first_leaf, last_ancestor, last_leaf, next_leaf, previous_leaf,
};

/// The first leaf inside the range.
///
/// A container without children is its own leaf. A collapsed range sitting
/// between children has no leaf at all.
pub fn first_leaf_of_range(doc: &Document, range: &Range) -> Option<NodeId> {
    let container = range.start_container();
    if !doc.has_children(container) {
        return Some(container);
    }
    if range.is_collapsed() {
        return None;
    }
    match doc.child_at(container, range.start_offset()) {
        Some(child) => Some(first_leaf(doc, child)),
        None => next_leaf(doc, container),
    }
}

/// The last leaf inside the range. Mirror of [`first_leaf_of_range`].
pub fn last_leaf_of_range(doc: &Document, range: &Range) -> Option<NodeId> {
    let container = range.end_container();
    if !doc.has_children(container) {
        return Some(container);
    }
    if range.is_collapsed() {
        return None;
    }
    match range.end_offset().checked_sub(1) {
        Some(index) => doc.child_at(container, index).map(|child| last_leaf(doc, child)),
        None => previous_leaf(doc, container),
    }
}

/// The first leaf after the range's end.
pub fn next_leaf_of_range(doc: &Document, range: &Range) -> Option<NodeId> {
    let container = range.end_container();
    if doc.is_element(container)
        && let Some(after) = doc.child_at(container, range.end_offset())
    {
        return Some(first_leaf(doc, after));
    }
    next_leaf(doc, container)
}

/// The last leaf before the range's start.
pub fn previous_leaf_of_range(doc: &Document, range: &Range) -> Option<NodeId> {
    let container = range.start_container();
    if doc.is_element(container)
        && let Some(index) = range.start_offset().checked_sub(1)
        && let Some(before) = doc.child_at(container, index)
    {
        return Some(last_leaf(doc, before));
    }
    previous_leaf(doc, container)
}

/// The node right after the range's end in document order.
pub fn next_node(doc: &Document, range: &Range) -> Option<NodeId> {
    let container = range.end_container();
    if let Some(child) = doc.child_at(container, range.end_offset()) {
        return Some(child);
    }
    let mut node = container;
    loop {
        if let Some(sibling) = doc.next_sibling(node) {
            return Some(sibling);
        }
        node = doc.parent(node)?;
    }
}

/// The node right before the range's start in document order.
pub fn previous_node(doc: &Document, range: &Range) -> Option<NodeId> {
    let container = range.start_container();
    if let Some(index) = range.start_offset().checked_sub(1)
        && let Some(child) = doc.child_at(container, index)
    {
        return Some(child);
    }
    let mut node = container;
    loop {
        if let Some(sibling) = doc.previous_sibling(node) {
            return Some(sibling);
        }
        node = doc.parent(node)?;
    }
}

/// The element to bring into view for this range.
///
/// Starts from the first leaf of the range, falling back to the leaf after
/// it and then the leaf before it when the range is collapsed between
/// nodes. Hidden ancestors are skipped and text resolves to its parent
/// element. `None` only when nothing displayable exists.
pub fn scroll_target(doc: &Document, range: &Range) -> Option<NodeId> {
    let leaf = first_leaf_of_range(doc, range)
        .or_else(|| next_leaf_of_range(doc, range))
        .or_else(|| previous_leaf_of_range(doc, range))?;

    let visible = match last_ancestor(doc, leaf, &HiddenElements) {
        Some(hidden) => doc.parent(hidden)?,
        None => leaf,
    };
    if doc.is_element(visible) {
        Some(visible)
    } else {
        doc.parent(visible).filter(|&parent| doc.is_element(parent))
    }
}
