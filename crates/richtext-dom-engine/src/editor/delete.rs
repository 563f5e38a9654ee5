//! Removing content. Deleted nodes are freed from the arena; handles to them
//! must not be used afterwards.

use log::{debug, trace};

use super::{Side, ascent_path, check_offset, check_range};
use crate::dom::{Document, NodeId, char_remove};
use crate::error::DomError;

/// Remove `[start, end)` of `node`: characters of a text-like node or
/// children of an element.
pub fn delete_contents(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<(), DomError> {
    check_range(doc, node, start, end)?;
    if start == end {
        return Ok(());
    }
    match doc.text(node) {
        Some(payload) => {
            let kept = char_remove(payload, start, end);
            doc.set_text(node, kept)?;
        }
        None => {
            // Later siblings shift down onto `start` as each one goes.
            for _ in start..end {
                if let Some(child) = doc.child_at(node, start) {
                    doc.remove(child);
                }
            }
        }
    }
    Ok(())
}

pub fn delete_side(
    doc: &mut Document,
    node: NodeId,
    offset: usize,
    side: Side,
) -> Result<(), DomError> {
    let (start, end) = side.bounds(offset, doc.length(node));
    delete_contents(doc, node, start, end)
}

/// Remove every sibling of `node` on the given side.
pub fn delete_siblings(doc: &mut Document, node: NodeId, side: Side) {
    while let Some(sibling) = sibling_on(doc, node, side) {
        doc.remove(sibling);
    }
}

fn sibling_on(doc: &Document, node: NodeId, side: Side) -> Option<NodeId> {
    match side {
        Side::Left => doc.previous_sibling(node),
        Side::Right => doc.next_sibling(node),
    }
}

/// Delete the content on one side of `offset` in `descendant`, then the
/// siblings on that side of every node on the path up to `parent`.
///
/// The path itself survives, so afterwards `parent`'s child on the path holds
/// only what lies on the other side.
pub fn delete_upwards(
    doc: &mut Document,
    parent: NodeId,
    descendant: NodeId,
    offset: usize,
    side: Side,
) -> Result<(), DomError> {
    let path = ascent_path(doc, parent, descendant)?;
    check_offset(doc, descendant, offset)?;
    debug!("delete_upwards: {side:?} of {descendant:?} at {offset}");

    delete_side(doc, descendant, offset, side)?;
    // The topmost path node is a child of `parent`; its siblings stay.
    for &node in &path[..path.len() - 1] {
        trace!("delete_upwards: siblings of {node:?}");
        delete_siblings(doc, node, side);
    }
    Ok(())
}
