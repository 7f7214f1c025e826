//! Markup serialization

use std::fmt::Write;

use super::tree::{NodeId, Tree};

pub(crate) fn serialize(tree: &Tree, root: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, root, &mut out);
    out
}

fn write_node(tree: &Tree, id: NodeId, out: &mut String) {
    let node = tree.node(id);
    out.push('<');
    out.push_str(&node.tag);
    if !node.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&node.classes.join(" ")));
    }
    for (key, value) in &node.data {
        let _ = write!(out, " data-{}=\"{}\"", escape(key), escape(value));
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in &node.children {
        write_node(tree, *child, out);
    }
    let _ = write!(out, "</{}>", node.tag);
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
