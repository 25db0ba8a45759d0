use ramita::{document_to_string, node_to_string, nodes_to_string, Mode, Node, Property};

fn element(tag: &str, props: Vec<Property>) -> Node {
    Node::Element(tag.into(), props)
}

fn void(tag: &str, props: Vec<Property>) -> Node {
    Node::VoidElement(tag.into(), props)
}

#[test]
fn test_void_element() {
    assert_eq!(node_to_string(Mode::Html, &void("br", vec![])), "<br>");
    assert_eq!(node_to_string(Mode::Xml, &void("br", vec![])), "<br />");
}

#[test]
fn test_void_element_attrs() {
    let img = void(
        "img",
        vec![Property::attr("src", "a.png"), Property::attr("width", 100u32)],
    );
    assert_eq!(
        node_to_string(Mode::Html, &img),
        "<img src=\"a.png\" width=\"100\">"
    );
    assert_eq!(
        node_to_string(Mode::Xml, &img),
        "<img src=\"a.png\" width=\"100\" />"
    );
}

#[test]
fn test_void_element_ignores_content() {
    let br = void(
        "br",
        vec![
            Property::Text("dropped".into()),
            Property::Children(vec![Node::text("also dropped")]),
            Property::attr("class", "x"),
        ],
    );
    assert_eq!(node_to_string(Mode::Html, &br), "<br class=\"x\">");
}

#[test]
fn test_text_escaped() {
    assert_eq!(
        node_to_string(Mode::Html, &element("p", vec![Property::Text("te>st".into())])),
        "<p>te&gt;st</p>"
    );
    assert_eq!(
        node_to_string(Mode::Html, &Node::text("<&\"'>")),
        "&lt;&amp;&quot;&apos;&gt;"
    );
}

#[test]
fn test_attr_and_children() {
    let p = element(
        "p",
        vec![
            Property::attr("class", "main"),
            Property::Children(vec![Node::text("test")]),
        ],
    );
    assert_eq!(node_to_string(Mode::Html, &p), "<p class=\"main\">test</p>");
}

#[test]
fn test_attr_order_preserved() {
    let link = element(
        "link",
        vec![
            Property::attr("rel", "stylesheet"),
            Property::attr("type", "text/css"),
            Property::attr("href", "main.css"),
        ],
    );
    assert_eq!(
        node_to_string(Mode::Html, &link),
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"main.css\"></link>"
    );
}

#[test]
fn test_attr_values_not_escaped() {
    let a = element("a", vec![Property::attr("href", "/?a=1&b=<2>")]);
    assert_eq!(
        node_to_string(Mode::Html, &a),
        "<a href=\"/?a=1&b=<2>\"></a>"
    );
}

#[test]
fn test_list_is_transparent() {
    let div = element(
        "div",
        vec![Property::Children(vec![Node::List(vec![
            element("p", vec![Property::Text("a".into())]),
            element("span", vec![Property::Text("b".into())]),
        ])])],
    );
    assert_eq!(
        node_to_string(Mode::Html, &div),
        "<div><p>a</p><span>b</span></div>"
    );
}

#[test]
fn test_text_renders_before_children() {
    let p = element(
        "p",
        vec![
            Property::Children(vec![element("b", vec![Property::Text("bold".into())])]),
            Property::Text("lead".into()),
        ],
    );
    assert_eq!(node_to_string(Mode::Html, &p), "<p>lead<b>bold</b></p>");
}

#[test]
fn test_last_text_wins() {
    let p = element(
        "p",
        vec![
            Property::Text("first".into()),
            Property::Text("second".into()),
        ],
    );
    assert_eq!(node_to_string(Mode::Html, &p), "<p>second</p>");
}

#[test]
fn test_nodes_concatenated() {
    let nodes = vec![
        element("p", vec![Property::Text("a".into())]),
        void("hr", vec![]),
        Node::text("tail"),
    ];
    assert_eq!(
        nodes_to_string(Mode::Html, &nodes),
        "<p>a</p><hr>tail"
    );
    assert_eq!(nodes_to_string(Mode::Html, &[]), "");
}

#[test]
fn test_empty_inputs() {
    assert_eq!(node_to_string(Mode::Html, &Node::List(vec![])), "");
    assert_eq!(node_to_string(Mode::Html, &Node::text("")), "");
    assert_eq!(node_to_string(Mode::Html, &element("p", vec![])), "<p></p>");
}

#[test]
fn test_html_document_preamble() {
    let out = document_to_string(Mode::Html, &element("html", vec![]));
    assert!(out.starts_with("<!DOCTYPE html>"));
    let rest = &out["<!DOCTYPE html>".len()..];
    assert!(rest.starts_with('\n') || rest.starts_with("\r\n"));
    assert!(out.ends_with("<html></html>"));
}

#[test]
fn test_xml_document_preamble() {
    let out = document_to_string(Mode::Xml, &element("root", vec![]));
    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(out.ends_with("<root></root>"));
}

#[test]
fn test_nested_document() {
    let doc = element(
        "html",
        vec![Property::Children(vec![
            element(
                "head",
                vec![Property::Children(vec![element(
                    "title",
                    vec![Property::Text("Ramita".into())],
                )])],
            ),
            element(
                "body",
                vec![Property::Children(vec![
                    element("h1", vec![Property::Text("héllo".into())]),
                    void("br", vec![]),
                ])],
            ),
        ])],
    );
    assert_eq!(
        node_to_string(Mode::Html, &doc),
        "<html><head><title>Ramita</title></head>\
         <body><h1>héllo</h1><br></body></html>"
    );
}

#[test]
fn test_tree_reusable_across_calls() {
    let p = element("p", vec![Property::Text("x".into())]);
    let first = node_to_string(Mode::Html, &p);
    let second = node_to_string(Mode::Xml, &p);
    assert_eq!(first, second);
    assert_eq!(first, "<p>x</p>");
}
