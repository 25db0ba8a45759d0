//! String engine: one growable buffer per top-level call, threaded by
//! mutable borrow through the whole recursive walk.

use log::warn;

use ramita_helpers::helpers::escape;

use crate::node::{split_props, Node};
use crate::Mode;

const DOCTYPE_HTML: &str = "<!DOCTYPE html>";
const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

#[cfg(windows)]
pub(crate) const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const EOL: &str = "\n";

pub(crate) fn preamble(mode: Mode) -> &'static str {
    match mode {
        Mode::Html => DOCTYPE_HTML,
        Mode::Xml => XML_DECL,
    }
}

/// Serialize one node.
pub fn node_to_string(mode: Mode, node: &Node) -> String {
    let mut buf = String::new();
    write_node(&mut buf, mode, node);
    buf
}

/// Serialize a sequence of root nodes in order, with no separator.
pub fn nodes_to_string(mode: Mode, nodes: &[Node]) -> String {
    let mut buf = String::new();
    for node in nodes {
        write_node(&mut buf, mode, node);
    }
    buf
}

/// Serialize a whole document: the mode's preamble line, then the root node.
pub fn document_to_string(mode: Mode, node: &Node) -> String {
    let mut buf = String::new();
    buf.push_str(preamble(mode));
    buf.push_str(EOL);
    write_node(&mut buf, mode, node);
    buf
}

fn write_node(buf: &mut String, mode: Mode, node: &Node) {
    match node {
        Node::Text(text) => buf.push_str(&escape(text)),
        Node::List(nodes) => {
            for node in nodes {
                write_node(buf, mode, node);
            }
        }
        Node::VoidElement(tag, props) => {
            let split = split_props(props);
            if !split.children.is_empty() || split.text.is_some() {
                warn!("content of void element <{}> is ignored", tag);
            }
            write_open_tag(buf, tag, &split.attrs);
            buf.push_str(match mode {
                Mode::Html => ">",
                Mode::Xml => " />",
            });
        }
        Node::Element(tag, props) => {
            let split = split_props(props);
            write_open_tag(buf, tag, &split.attrs);
            buf.push('>');
            if let Some(text) = split.text {
                buf.push_str(&escape(text));
            }
            for child in &split.children {
                write_node(buf, mode, child);
            }
            buf.push_str("</");
            buf.push_str(tag);
            buf.push('>');
        }
    }
}

fn write_open_tag(buf: &mut String, tag: &str, attrs: &[(&str, &str)]) {
    buf.push('<');
    buf.push_str(tag);
    for (name, value) in attrs {
        buf.push(' ');
        buf.push_str(name);
        buf.push_str("=\"");
        // values go through verbatim, callers sanitize
        buf.push_str(value);
        buf.push('"');
    }
}
