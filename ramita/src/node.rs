use ramita_helpers::helpers::Render;

/// One property of an element: an attribute, nested content, or a text
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Attribute name and already-stringified value. Values are emitted
    /// verbatim, never escaped.
    Attr(String, String),
    /// Nested content, concatenated in property order.
    Children(Vec<Node>),
    /// Inline text. Renders before any explicit children; when several are
    /// given, the last one wins.
    Text(String),
}

/// One item of the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Container element, always rendered with opening and closing tag.
    Element(String, Vec<Property>),
    /// Element with no content and no closing tag, like `br` or `img`.
    /// Content properties are accepted and ignored; attributes are honored.
    VoidElement(String, Vec<Property>),
    /// Literal text, always escaped on output.
    Text(String),
    /// Transparent grouping with no wrapping markup.
    List(Vec<Node>),
}

impl Property {
    /// Build an attribute, printing `value` in its universal string form.
    pub fn attr(name: impl Into<String>, value: impl Render) -> Property {
        let mut v = String::new();
        value.render(&mut v);
        Property::Attr(name.into(), v)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }
}

/// Element properties split by role, orders preserved.
pub(crate) struct SplitProps<'a> {
    pub attrs: Vec<(&'a str, &'a str)>,
    pub children: Vec<&'a Node>,
    pub text: Option<&'a str>,
}

/// Split element properties into attributes, children and text payload.
///
/// Folds right to left so the last text payload wins while attribute and
/// child order stays exactly as supplied.
pub(crate) fn split_props(props: &[Property]) -> SplitProps<'_> {
    let mut attrs = Vec::new();
    let mut children = Vec::new();
    let mut text = None;
    for prop in props.iter().rev() {
        match prop {
            Property::Attr(name, value) => attrs.push((name.as_str(), value.as_str())),
            Property::Children(nodes) => children.extend(nodes.iter().rev()),
            Property::Text(t) => {
                if text.is_none() {
                    text = Some(t.as_str());
                }
            }
        }
    }
    attrs.reverse();
    children.reverse();
    SplitProps {
        attrs,
        children,
        text,
    }
}
