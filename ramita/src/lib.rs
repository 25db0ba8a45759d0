//!
//! Ramita serializes an in-memory markup tree into HTML or XML, either as a
//! `String` or straight into a caller-owned append-only buffer, reporting
//! the number of bytes written. Trees are plain immutable values, so one
//! tree can be rendered any number of times, to either target.
//!
//! ```rust
//! use ramita::{node_to_string, Mode, Node, Property};
//!
//! let view = Node::Element(
//!     "p".into(),
//!     vec![
//!         Property::attr("class", "main"),
//!         Property::Children(vec![Node::text("hello")]),
//!     ],
//! );
//! assert_eq!(node_to_string(Mode::Html, &view), r#"<p class="main">hello</p>"#);
//! ```
//!
//! Text content is escaped on output; attribute values are emitted verbatim,
//! so sanitizing untrusted attribute values stays with the caller.
//!

pub use buf_min::Buffer;
pub use ramita_helpers::helpers::{escape, Render};

pub mod node;
pub mod serialize;
pub mod sink;

pub use node::{Node, Property};
pub use serialize::{document_to_string, node_to_string, nodes_to_string};
pub use sink::{document_to_buffer, node_to_buffer, nodes_to_buffer, Renderer};

/// Output syntax, fixed for the whole of one serializer call. The two modes
/// only differ in how void elements close and in the document preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Html,
    Xml,
}
