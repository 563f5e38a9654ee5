//! Cutting parts of a subtree out. Same shapes as [`super::clone`], but the
//! selected content leaves the source.

use log::{debug, trace};

use super::clone::stitch;
use super::{Side, ascent_path, check_offset, check_range, child_nodes};
use crate::dom::{Document, NodeId, char_remove, char_slice};
use crate::error::DomError;
use crate::index::sibling_index;

/// Move `[start, end)` of `node` into a new fragment.
pub fn extract_contents(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<NodeId, DomError> {
    check_range(doc, node, start, end)?;
    debug!("extract_contents: [{start}, {end}) of {node:?}");
    let contents = doc.create_fragment();
    if doc.text(node).is_some() {
        if start < end {
            let piece = cut_range(doc, node, start, end)?;
            doc.append_child(contents, piece)?;
        }
    } else {
        for child in child_nodes(doc, node, start, end) {
            doc.append_child(contents, child)?;
        }
    }
    Ok(contents)
}

/// Shallow copy of `node` that takes over `[start, end)` of its content.
pub fn extract_node(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<NodeId, DomError> {
    check_range(doc, node, start, end)?;
    cut_range(doc, node, start, end)
}

pub fn extract_side(
    doc: &mut Document,
    node: NodeId,
    offset: usize,
    side: Side,
) -> Result<NodeId, DomError> {
    let (start, end) = side.bounds(offset, doc.length(node));
    extract_node(doc, node, start, end)
}

/// Cut everything inside `parent` on one side of the path from `descendant`
/// (split at `offset`) up to `parent`. The nodes on the path stay in place;
/// the returned subtree is rooted at a copy of `parent`'s child.
pub fn extract_upwards(
    doc: &mut Document,
    parent: NodeId,
    descendant: NodeId,
    offset: usize,
    side: Side,
) -> Result<NodeId, DomError> {
    let path = ascent_path(doc, parent, descendant)?;
    check_offset(doc, descendant, offset)?;
    debug!(
        "extract_upwards: {side:?} of {descendant:?} at {offset}, {} levels",
        path.len()
    );

    let mut index = sibling_index(doc, descendant) + side.delta();
    let mut extracted = extract_side(doc, descendant, offset, side)?;
    for &node in &path[1..] {
        trace!("extract_upwards: level {node:?}, split index {index}");
        let child = extracted;
        extracted = extract_side(doc, node, index, side)?;
        stitch(doc, extracted, child, side)?;
        index = sibling_index(doc, node) + side.delta();
    }
    Ok(extracted)
}

/// Unchecked: offsets already validated by the caller.
fn cut_range(
    doc: &mut Document,
    node: NodeId,
    start: usize,
    end: usize,
) -> Result<NodeId, DomError> {
    let piece = doc.shallow_clone(node);
    if let Some(payload) = doc.text(node) {
        let taken = char_slice(payload, start, end).to_owned();
        let kept = char_remove(payload, start, end);
        doc.set_text(piece, taken)?;
        doc.set_text(node, kept)?;
    } else {
        for child in child_nodes(doc, node, start, end) {
            doc.append_child(piece, child)?;
        }
    }
    Ok(piece)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{inner_markup, outer_markup};
    use crate::test_support::{container, html, node_at};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_contents_of_text() {
        let (mut doc, div) = container("hello");
        let text = node_at(&doc, div, &[0]);

        let contents = extract_contents(&mut doc, text, 1, 3).unwrap();

        assert_eq!(inner_markup(&doc, contents), "el");
        assert_eq!(doc.text(text), Some("hlo"));
    }

    #[test]
    fn test_extract_contents_of_element() {
        let (mut doc, div) = container("<p><b>A</b><i>B</i><u>C</u></p>");
        let p = node_at(&doc, div, &[0]);

        let contents = extract_contents(&mut doc, p, 1, 3).unwrap();

        assert_snapshot!(inner_markup(&doc, contents), @"<i>B</i><u>C</u>");
        assert_snapshot!(html(&doc, div), @"<p><b>A</b></p>");
    }

    #[test]
    fn test_extract_node() {
        let (mut doc, div) = container(r#"<span id="s">a<b>b</b>c</span>"#);
        let span = node_at(&doc, div, &[0]);

        let piece = extract_node(&mut doc, span, 1, 3).unwrap();

        assert_eq!(outer_markup(&doc, piece), r#"<span id="s"><b>b</b>c</span>"#);
        assert_eq!(html(&doc, div), r#"<span id="s">a</span>"#);
    }

    #[test]
    fn test_extract_side_of_multibyte_text() {
        let (mut doc, div) = container("żółw");
        let text = node_at(&doc, div, &[0]);

        let piece = extract_side(&mut doc, text, 2, Side::Left).unwrap();

        assert_eq!(doc.text(piece), Some("żó"));
        assert_eq!(doc.text(text), Some("łw"));
    }

    #[test]
    fn test_failed_extract_leaves_tree_alone() {
        let (mut doc, div) = container("<em>ab</em>");
        let ab = node_at(&doc, div, &[0, 0]);

        assert!(extract_upwards(&mut doc, div, ab, 3, Side::Right).is_err());
        assert!(extract_node(&mut doc, ab, 2, 1).is_err());
        assert_eq!(html(&doc, div), "<em>ab</em>");
    }

    #[test]
    fn test_extract_upwards() {
        let (mut doc, div) =
            container("a<del>b<em>c</em>d<strong>ef<ins>gh</ins>ij</strong>k</del>l");
        let gh = node_at(&doc, div, &[1, 3, 1, 0]);

        let right = extract_upwards(&mut doc, div, gh, 1, Side::Right).unwrap();

        assert_snapshot!(outer_markup(&doc, right), @"<del><strong><ins>h</ins>ij</strong>k</del>");
        assert_snapshot!(html(&doc, div), @"a<del>b<em>c</em>d<strong>ef<ins>g</ins></strong></del>l");
    }

    #[test]
    fn test_extract_upwards_left() {
        let (mut doc, div) = container("<p>ab<em>cd</em>ef</p>");
        let cd = node_at(&doc, div, &[0, 1, 0]);

        let left = extract_upwards(&mut doc, div, cd, 1, Side::Left).unwrap();

        assert_snapshot!(outer_markup(&doc, left), @"<p>ab<em>c</em></p>");
        assert_snapshot!(html(&doc, div), @"<p><em>d</em>ef</p>");
    }
}
