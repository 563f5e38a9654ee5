//! Copying parts of a subtree. Nothing here mutates the source.

use log::trace;

use super::{Side, ascent_path, check_offset, check_range};
use crate::dom::{Document, NodeId, char_slice};
use crate::error::DomError;
use crate::index::sibling_index;

/// Fragment holding a copy of `[start, end)` of `node`.
///
/// A text-like node contributes one clone carrying the selected characters
/// (nothing when the range is empty); an element contributes deep clones of
/// the selected children.
pub fn clone_contents(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<NodeId, DomError> {
    check_range(doc, node, start, end)?;
    let contents = doc.create_fragment();
    if doc.text(node).is_some() {
        if start < end {
            let clone = copy_range(doc, node, start, end)?;
            doc.append_child(contents, clone)?;
        }
    } else {
        for child in super::child_nodes(doc, node, start, end) {
            let clone = doc.deep_clone(child);
            doc.append_child(contents, clone)?;
        }
    }
    Ok(contents)
}

/// Shallow copy of `node` holding `[start, end)` of its content.
pub fn clone_node(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<NodeId, DomError> {
    check_range(doc, node, start, end)?;
    copy_range(doc, node, start, end)
}

/// Shallow copy of `node` holding the content on one side of `offset`.
pub fn clone_side(
    doc: &mut Document,
    node: NodeId,
    offset: usize,
    side: Side,
) -> Result<NodeId, DomError> {
    let (start, end) = side.bounds(offset, doc.length(node));
    clone_node(doc, node, start, end)
}

/// Copy of everything inside `parent` on one side of the path from
/// `descendant` (split at `offset`) up to `parent`, as one detached subtree
/// rooted at a clone of `parent`'s child.
///
/// ```
/// use richtext_dom_engine::{Document, Side, editor, markup};
///
/// let mut doc = Document::new();
/// let root = markup::parse_fragment(&mut doc, "<p>ab<em>cd</em>ef</p>").unwrap();
/// let p = doc.first_child(root).unwrap();
/// let em = doc.child_at(p, 1).unwrap();
/// let cd = doc.first_child(em).unwrap();
///
/// let left = editor::clone_upwards(&mut doc, root, cd, 1, Side::Left).unwrap();
/// assert_eq!(markup::outer_markup(&doc, left), "<p>ab<em>c</em></p>");
/// ```
pub fn clone_upwards(
    doc: &mut Document,
    parent: NodeId,
    descendant: NodeId,
    offset: usize,
    side: Side,
) -> Result<NodeId, DomError> {
    let path = ascent_path(doc, parent, descendant)?;
    check_offset(doc, descendant, offset)?;

    let mut index = sibling_index(doc, descendant) + side.delta();
    let mut clone = clone_side(doc, descendant, offset, side)?;
    for &node in &path[1..] {
        trace!("clone_upwards: level {node:?}, split index {index}");
        let child = clone;
        clone = clone_side(doc, node, index, side)?;
        stitch(doc, clone, child, side)?;
        index = sibling_index(doc, node) + side.delta();
    }
    Ok(clone)
}

/// Attach the previous level's result next to this level's side content.
pub(super) fn stitch(
    doc: &mut Document,
    level: NodeId,
    child: NodeId,
    side: Side,
) -> Result<(), DomError> {
    match side {
        Side::Left => doc.append_child(level, child),
        Side::Right => doc.prepend_child(level, child),
    }
}

/// Unchecked: offsets already validated by the caller.
fn copy_range(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<NodeId, DomError> {
    let clone = doc.shallow_clone(node);
    if let Some(payload) = doc.text(node) {
        let part = char_slice(payload, start, end).to_owned();
        doc.set_text(clone, part)?;
    } else {
        for child in super::child_nodes(doc, node, start, end) {
            let child_clone = doc.deep_clone(child);
            doc.append_child(clone, child_clone)?;
        }
    }
    Ok(clone)
}
