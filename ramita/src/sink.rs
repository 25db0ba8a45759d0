//! Sink engine: the same walk as the string engine, writing UTF-8 fragments
//! into a caller-owned [`Buffer`] and threading the running byte total as an
//! accumulator through every recursive step.

use buf_min::Buffer;
use log::warn;

use ramita_helpers::helpers::escape;

use crate::node::{split_props, Node};
use crate::serialize::{preamble, EOL};
use crate::Mode;

/// Append one fragment, returning its encoded length.
#[inline]
fn emit<B: Buffer>(buf: &mut B, fragment: &str) -> usize {
    buf.extend(fragment);
    fragment.len()
}

/// Serialize one node into `buf`, returning the bytes written.
pub fn node_to_buffer<B: Buffer>(buf: &mut B, mode: Mode, node: &Node) -> usize {
    write_node(buf, mode, node, 0)
}

/// Serialize a sequence of root nodes in order, returning the bytes written.
pub fn nodes_to_buffer<B: Buffer>(buf: &mut B, mode: Mode, nodes: &[Node]) -> usize {
    nodes
        .iter()
        .fold(0, |written, node| write_node(buf, mode, node, written))
}

/// Serialize a whole document: preamble line, then the root node.
pub fn document_to_buffer<B: Buffer>(buf: &mut B, mode: Mode, node: &Node) -> usize {
    let mut written = emit(buf, preamble(mode));
    written += emit(buf, EOL);
    write_node(buf, mode, node, written)
}

fn write_node<B: Buffer>(buf: &mut B, mode: Mode, node: &Node, written: usize) -> usize {
    match node {
        Node::Text(text) => written + emit(buf, &escape(text)),
        Node::List(nodes) => nodes
            .iter()
            .fold(written, |w, node| write_node(buf, mode, node, w)),
        Node::VoidElement(tag, props) => {
            let split = split_props(props);
            if !split.children.is_empty() || split.text.is_some() {
                warn!("content of void element <{}> is ignored", tag);
            }
            let w = write_open_tag(buf, tag, &split.attrs, written);
            w + emit(
                buf,
                match mode {
                    Mode::Html => ">",
                    Mode::Xml => " />",
                },
            )
        }
        Node::Element(tag, props) => {
            let split = split_props(props);
            let mut w = write_open_tag(buf, tag, &split.attrs, written);
            w += emit(buf, ">");
            if let Some(text) = split.text {
                w += emit(buf, &escape(text));
            }
            let w = split
                .children
                .iter()
                .fold(w, |w, child| write_node(buf, mode, child, w));
            w + emit(buf, "</") + emit(buf, tag) + emit(buf, ">")
        }
    }
}

fn write_open_tag<B: Buffer>(
    buf: &mut B,
    tag: &str,
    attrs: &[(&str, &str)],
    written: usize,
) -> usize {
    let mut w = written + emit(buf, "<") + emit(buf, tag);
    for (name, value) in attrs {
        w += emit(buf, " ");
        w += emit(buf, name);
        w += emit(buf, "=\"");
        // values go through verbatim, callers sanitize
        w += emit(buf, value);
        w += emit(buf, "\"");
    }
    w
}

/// Serializer facade bound to one output sink for its whole lifetime.
///
/// The sink is exclusively borrowed and only ever appended to; it is never
/// read, rewound or truncated. Every call returns the bytes written during
/// that call alone.
pub struct Renderer<'a, B: Buffer> {
    buf: &'a mut B,
}

impl<'a, B: Buffer> Renderer<'a, B> {
    pub fn new(buf: &'a mut B) -> Self {
        Renderer { buf }
    }

    pub fn html_view(&mut self, node: &Node) -> usize {
        node_to_buffer(self.buf, Mode::Html, node)
    }

    pub fn html_views(&mut self, nodes: &[Node]) -> usize {
        nodes_to_buffer(self.buf, Mode::Html, nodes)
    }

    pub fn xml_view(&mut self, node: &Node) -> usize {
        node_to_buffer(self.buf, Mode::Xml, node)
    }

    pub fn xml_views(&mut self, nodes: &[Node]) -> usize {
        nodes_to_buffer(self.buf, Mode::Xml, nodes)
    }

    pub fn html_document(&mut self, node: &Node) -> usize {
        document_to_buffer(self.buf, Mode::Html, node)
    }

    pub fn xml_document(&mut self, node: &Node) -> usize {
        document_to_buffer(self.buf, Mode::Xml, node)
    }
}
