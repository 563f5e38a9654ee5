use log::debug;

use crate::dom::{Document, NodeId};
use crate::editor::insert_after;
use crate::error::DomError;

/// Make `node` the only child of its parent by moving its siblings into
/// copies of the parent placed on either side.
///
/// The original parent keeps `node` and its identity; the copies lose the id
/// attribute. A node without a parent or grandparent is left alone.
///
/// ```
/// use richtext_dom_engine::{Document, isolate, markup};
///
/// let mut doc = Document::new();
/// let root = markup::parse_fragment(&mut doc, "<ins>a<em>b</em>c</ins>").unwrap();
/// let ins = doc.first_child(root).unwrap();
/// let em = doc.child_at(ins, 1).unwrap();
///
/// isolate::isolate(&mut doc, em).unwrap();
/// assert_eq!(
///     markup::inner_markup(&doc, root),
///     "<ins>a</ins><ins><em>b</em></ins><ins>c</ins>"
/// );
/// ```
pub fn isolate(doc: &mut Document, node: NodeId) -> Result<(), DomError> {
    let Some(parent) = doc.parent(node) else {
        return Ok(());
    };
    if doc.parent(parent).is_none() {
        return Ok(());
    }
    debug!("isolate: {node:?} in {parent:?}");

    if doc.previous_sibling(node).is_some() {
        let left = wrapper(doc, parent);
        while let Some(sibling) = doc.first_child(parent) {
            if sibling == node {
                break;
            }
            doc.append_child(left, sibling)?;
        }
        doc.insert_before(left, parent)?;
    }
    if doc.next_sibling(node).is_some() {
        let right = wrapper(doc, parent);
        while let Some(sibling) = doc.next_sibling(node) {
            doc.append_child(right, sibling)?;
        }
        insert_after(doc, right, parent)?;
    }
    Ok(())
}

/// Empty copy of `parent` without its id.
fn wrapper(doc: &mut Document, parent: NodeId) -> NodeId {
    let wrapper = doc.shallow_clone(parent);
    let id_attribute = doc.config().id_attribute.clone();
    doc.remove_attribute(wrapper, &id_attribute);
    wrapper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{container, html, node_at};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_isolate_keeps_parent() {
        let (mut doc, div) =
            container(r#"<span id="foo" class="bar"><em>one</em><strong>two</strong>three</span>"#);
        let span = node_at(&doc, div, &[0]);
        let strong = node_at(&doc, div, &[0, 1]);

        isolate(&mut doc, strong).unwrap();

        assert_eq!(doc.child_at(div, 1), Some(span));
        assert_snapshot!(html(&doc, div), @r#"<span class="bar"><em>one</em></span><span id="foo" class="bar"><strong>two</strong></span><span class="bar">three</span>"#);
    }

    #[test]
    fn test_isolate_first_child() {
        let (mut doc, div) = container("<ins>a<em>b</em></ins>");
        let a = node_at(&doc, div, &[0, 0]);

        isolate(&mut doc, a).unwrap();

        assert_eq!(html(&doc, div), "<ins>a</ins><ins><em>b</em></ins>");
    }

    #[test]
    fn test_isolate_only_child_is_noop() {
        let (mut doc, div) = container("x<ins>a</ins>y");
        let a = node_at(&doc, div, &[1, 0]);

        isolate(&mut doc, a).unwrap();

        assert_eq!(html(&doc, div), "x<ins>a</ins>y");
    }

    #[test]
    fn test_isolate_without_grandparent_is_noop() {
        let (mut doc, div) = container("a<em>b</em>c");
        let em = node_at(&doc, div, &[1]);

        isolate(&mut doc, em).unwrap();
        isolate(&mut doc, div).unwrap();

        assert_eq!(html(&doc, div), "a<em>b</em>c");
    }
}
