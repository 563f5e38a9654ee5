use log::{debug, trace};

use super::{ascent_path, check_kind, check_offset, child_containing, insert_after};
use crate::dom::{Document, NodeId, char_slice};
use crate::error::DomError;
use crate::index::sibling_index;
use crate::navigator::{farthest_inline_ancestor, first_leaf, last_leaf};

/// Split `node` at `offset`: a shallow copy is inserted right after it and
/// receives everything from `offset` on. Returns the copy.
///
/// Element copies lose the id attribute so ids stay unique.
pub fn split_node(doc: &mut Document, node: NodeId, offset: usize) -> Result<NodeId, DomError> {
    check_kind(doc, node)?;
    check_offset(doc, node, offset)?;
    if doc.parent(node).is_none() {
        return Err(DomError::DetachedNode);
    }
    trace!("split_node: {node:?} at {offset}");

    let clone = doc.shallow_clone(node);
    if let Some(payload) = doc.text(node) {
        let head = char_slice(payload, 0, offset).to_owned();
        let tail = char_slice(payload, offset, usize::MAX).to_owned();
        doc.set_text(clone, tail)?;
        doc.set_text(node, head)?;
    } else {
        let id_attribute = doc.config().id_attribute.clone();
        doc.remove_attribute(clone, &id_attribute);
        while let Some(child) = doc.child_at(node, offset) {
            doc.append_child(clone, child)?;
        }
    }
    insert_after(doc, clone, node)?;
    Ok(clone)
}

/// Split every level from `descendant` up to, but excluding, `parent`.
///
/// Each ancestor is split right after the node split below it, so the path
/// ends up cut in two along its whole length. Returns the node that split
/// off `descendant` itself, or `descendant` when it is `parent`.
pub fn split_upwards(
    doc: &mut Document,
    parent: NodeId,
    descendant: NodeId,
    offset: usize,
) -> Result<NodeId, DomError> {
    if descendant == parent {
        return Ok(descendant);
    }
    let path = ascent_path(doc, parent, descendant)?;
    check_offset(doc, descendant, offset)?;
    debug!(
        "split_upwards: {descendant:?} at {offset}, {} levels",
        path.len()
    );

    let next_level_sibling = split_node(doc, descendant, offset)?;
    for pair in path.windows(2) {
        let (node, up) = (pair[0], pair[1]);
        let index = sibling_index(doc, node) + 1;
        split_node(doc, up, index)?;
    }
    Ok(next_level_sibling)
}

/// [`split_upwards`], then make sure a block left without content on either
/// side can still host a caret.
///
/// This only matters when the split point is at the very start or end of
/// `descendant`: the block on that side gets a filler child if the split
/// point was its only leaf.
pub fn split_keeping_editable(
    doc: &mut Document,
    parent: NodeId,
    descendant: NodeId,
    offset: usize,
) -> Result<NodeId, DomError> {
    let length = doc.length(descendant);
    let next_level_sibling = split_upwards(doc, parent, descendant, offset)?;
    if next_level_sibling == descendant {
        return Ok(next_level_sibling);
    }

    if offset == 0 {
        fill_if_only_leaf(doc, parent, descendant, first_leaf)?;
    }
    if offset == length {
        fill_if_only_leaf(doc, parent, next_level_sibling, last_leaf)?;
    }
    Ok(next_level_sibling)
}

fn fill_if_only_leaf(
    doc: &mut Document,
    parent: NodeId,
    split_point: NodeId,
    edge_leaf: fn(&Document, NodeId) -> NodeId,
) -> Result<(), DomError> {
    let Some(child) = child_containing(doc, parent, split_point) else {
        return Ok(());
    };
    if doc.is_inline(child) || edge_leaf(doc, child) != split_point {
        return Ok(());
    }
    let block = match farthest_inline_ancestor(doc, split_point) {
        None => Some(child),
        Some(ancestor) => doc.parent(ancestor),
    };
    match block {
        Some(block) => ensure_block_is_editable(doc, block),
        None => Ok(()),
    }
}

/// Append the configured filler element to `block` unless it is void.
pub fn ensure_block_is_editable(doc: &mut Document, block: NodeId) -> Result<(), DomError> {
    if !doc.can_have_children(block) {
        return Ok(());
    }
    debug!("ensure_block_is_editable: filling {block:?}");
    let filler_tag = doc.config().filler_tag.clone();
    let filler = doc.create_element(&filler_tag);
    doc.append_child(block, filler)
}
