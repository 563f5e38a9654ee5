use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::dom::{Document, NodeData, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every node is written.
    Live,
    /// Nodes that are not serializable are skipped with their subtree.
    Serializable,
}

/// Markup of the node itself and its subtree.
pub fn outer_markup(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, Mode::Live, &mut out);
    out
}

/// Markup of the node's children.
pub fn inner_markup(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_children(doc, node, Mode::Live, &mut out);
    out
}

/// Markup of the node's children as the derived serialization sees them:
/// empty text nodes and hidden-metadata elements are left out.
pub fn serializable_inner_markup(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_children(doc, node, Mode::Serializable, &mut out);
    out
}

fn write_children(doc: &Document, node: NodeId, mode: Mode, out: &mut String) {
    for child in doc.children(node) {
        write_node(doc, child, mode, out);
    }
}

fn write_node(doc: &Document, node: NodeId, mode: Mode, out: &mut String) {
    if mode == Mode::Serializable && !doc.is_serializable(node) {
        return;
    }
    match doc.data(node) {
        NodeData::Element(element) => {
            out.push('<');
            out.push_str(element.tag());
            for attribute in element.attributes() {
                out.push(' ');
                out.push_str(&attribute.name);
                out.push_str("=\"");
                out.push_str(&encode_double_quoted_attribute(&attribute.value));
                out.push('"');
            }
            out.push('>');
            if doc.config().is_void_tag(element.tag()) && !doc.has_children(node) {
                return;
            }
            write_children(doc, node, mode, out);
            out.push_str("</");
            out.push_str(element.tag());
            out.push('>');
        }
        NodeData::Text(text) => out.push_str(&encode_text(text)),
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeData::CData(text) => {
            out.push_str("<![CDATA[");
            out.push_str(text);
            out.push_str("]]>");
        }
        NodeData::Fragment => write_children(doc, node, mode, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_fragment;
    use insta::assert_snapshot;

    #[test]
    fn test_outer_markup_escapes() {
        let mut doc = Document::new();
        let span = doc.create_element("span");
        doc.set_attribute(span, "title", "say \"hi\"").unwrap();
        let text = doc.create_text("a < b & c");
        doc.append_child(span, text).unwrap();

        assert_snapshot!(outer_markup(&doc, span), @r#"<span title="say &quot;hi&quot;">a &lt; b &amp; c</span>"#);
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let mut doc = Document::new();
        let fragment = parse_fragment(&mut doc, "x<br/><hr>y").unwrap();

        assert_snapshot!(inner_markup(&doc, fragment), @"x<br><hr>y");
    }

    #[test]
    fn test_serializable_markup_skips_hidden_metadata() {
        let mut doc = Document::new();
        let fragment =
            parse_fragment(&mut doc, r#"a<span metadata="">meta</span>b<!--c-->"#).unwrap();
        let empty = doc.create_text("");
        doc.append_child(fragment, empty).unwrap();

        assert_snapshot!(inner_markup(&doc, fragment), @r#"a<span metadata="">meta</span>b<!--c-->"#);
        assert_snapshot!(serializable_inner_markup(&doc, fragment), @"ab<!--c-->");
    }
}
