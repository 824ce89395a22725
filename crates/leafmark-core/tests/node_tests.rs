//! Integration tests for text nodes, the markup tree and lowering

use leafmark_core::node::props_to_markup_attributes;
use leafmark_core::{text_node_to_leaf, ErrorKind, Leaf, Node, Parent, TextNode, TextType};
use pretty_assertions::assert_eq;

// ============================================================================
// TextNode Tests
// ============================================================================

#[test]
fn test_text_node_eq_same_values() {
    let a = TextNode::new("This is a text node", TextType::Bold);
    let b = TextNode::new("This is a text node", TextType::Bold);
    assert_eq!(a, b);
}

#[test]
fn test_text_node_default_url_is_none() {
    assert_eq!(TextNode::new("hello", TextType::Plain).url, None);
}

#[test]
fn test_text_node_not_equal_different_text() {
    assert_ne!(TextNode::plain("hello"), TextNode::plain("HELLO"));
}

#[test]
fn test_text_node_not_equal_different_type() {
    assert_ne!(
        TextNode::new("hello", TextType::Bold),
        TextNode::new("hello", TextType::Italic)
    );
}

#[test]
fn test_text_node_not_equal_different_url() {
    assert_ne!(
        TextNode::link("click", "https://a.com"),
        TextNode::link("click", "https://b.com")
    );
    assert_ne!(
        TextNode::new("click", TextType::Link),
        TextNode::link("click", "https://a.com")
    );
}

#[test]
fn test_text_node_eq_when_both_urls_unset() {
    assert_eq!(
        TextNode::new("x", TextType::Underline),
        TextNode::new("x", TextType::Underline)
    );
}

#[test]
fn test_text_node_display() {
    let node = TextNode::link("click", "https://example.com");
    assert_eq!(
        node.to_string(),
        "TextNode('click', TextType.LINK, 'https://example.com')"
    );
    assert_eq!(
        TextNode::plain("x").to_string(),
        "TextNode('x', TextType.PLAIN, None)"
    );
}

#[test]
fn test_text_node_display_quoting() {
    assert_eq!(
        TextNode::new("it's", TextType::Bold).to_string(),
        r#"TextNode("it's", TextType.BOLD, None)"#
    );
    assert_eq!(
        TextNode::new("say \"it's\"", TextType::Italic).to_string(),
        r#"TextNode('say "it\'s"', TextType.ITALIC, None)"#
    );
    assert_eq!(
        TextNode::new("a\\b\nc", TextType::Code).to_string(),
        r#"TextNode('a\\b\nc', TextType.CODE, None)"#
    );
}

#[test]
fn test_text_type_names_round_trip() {
    for text_type in TextType::ALL {
        assert_eq!(text_type.as_str().parse::<TextType>().unwrap(), text_type);
    }
    assert_eq!("BOLD".parse::<TextType>().unwrap(), TextType::Bold);
}

#[test]
fn test_text_type_unknown_name() {
    let err = "strikethrough".parse::<TextType>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedTextType);
    assert!(err.message.contains("strikethrough"));
}

// ============================================================================
// Props Tests
// ============================================================================

#[test]
fn test_props_empty() {
    assert_eq!(props_to_markup_attributes(&[]), "");
    assert_eq!(Leaf::raw("x").props_to_markup_attributes(), "");
}

#[test]
fn test_props_keep_insertion_order() {
    let leaf = Leaf::element("a", "x")
        .with_prop("href", "https://www.google.com")
        .with_prop("target", "_blank");
    assert_eq!(
        leaf.props_to_markup_attributes(),
        r#" href="https://www.google.com" target="_blank""#
    );
}

#[test]
fn test_props_are_not_escaped() {
    let leaf = Leaf::element("a", "x").with_prop("title", "<\"&>");
    assert_eq!(leaf.props_to_markup_attributes(), r#" title="<"&>""#);
}

// ============================================================================
// Leaf Tests
// ============================================================================

#[test]
fn test_leaf_raw_text() {
    assert_eq!(Leaf::raw("just text").serialize().unwrap(), "just text");
}

#[test]
fn test_leaf_element() {
    assert_eq!(Leaf::element("p", "Hello").serialize().unwrap(), "<p>Hello</p>");
}

#[test]
fn test_leaf_with_props() {
    let leaf = Leaf::element("a", "Click me!").with_prop("href", "https://www.google.com");
    assert_eq!(
        leaf.serialize().unwrap(),
        r#"<a href="https://www.google.com">Click me!</a>"#
    );
}

#[test]
fn test_leaf_empty_value_is_not_missing() {
    assert_eq!(Leaf::element("b", "").serialize().unwrap(), "<b></b>");
}

#[test]
fn test_leaf_missing_value() {
    let leaf = Leaf {
        tag: Some("b".to_string()),
        ..Leaf::default()
    };
    let err = leaf.serialize().unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingValue);

    let err = Leaf::default().serialize().unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingValue);
}

#[test]
fn test_leaf_has_no_children() {
    let node = Node::from(Leaf::raw("x"));
    assert!(node.children().is_empty());
    assert_eq!(node.tag(), None);
}

// ============================================================================
// Parent Tests
// ============================================================================

#[test]
fn test_parent_mixed_children() {
    let parent = Parent::new(
        "p",
        vec![
            Leaf::element("b", "Bold").into(),
            Leaf::raw(" and ").into(),
            Leaf::element("i", "italic").into(),
        ],
    )
    .unwrap();
    assert_eq!(
        parent.serialize().unwrap(),
        "<p><b>Bold</b> and <i>italic</i></p>"
    );
}

#[test]
fn test_parent_nested() {
    let inner = Parent::new("span", vec![Leaf::element("b", "x").into()]).unwrap();
    let outer = Parent::with_props(
        "div",
        vec![inner.into(), Leaf::raw("y").into()],
        vec![("class".to_string(), "box".to_string())],
    )
    .unwrap();
    let node = Node::from(outer);
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.tag(), Some("div"));
    assert_eq!(
        node.serialize().unwrap(),
        r#"<div class="box"><span><b>x</b></span>y</div>"#
    );
}

#[test]
fn test_parent_missing_tag() {
    let err = Parent::new("", vec![Leaf::raw("x").into()]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidShape);
}

#[test]
fn test_parent_missing_children() {
    let err = Parent::new("p", Vec::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidShape);
}

#[test]
fn test_parent_propagates_child_error() {
    let parent = Parent::new("p", vec![Leaf::raw("ok").into(), Leaf::default().into()]).unwrap();
    let err = parent.serialize().unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingValue);
}

// ============================================================================
// Lowering Tests
// ============================================================================

#[test]
fn test_lower_plain() {
    let leaf = text_node_to_leaf(&TextNode::plain("hi")).unwrap();
    assert_eq!(leaf, Leaf::raw("hi"));
}

#[test]
fn test_lower_bold_and_italic() {
    let bold = text_node_to_leaf(&TextNode::new("b", TextType::Bold)).unwrap();
    let italic = text_node_to_leaf(&TextNode::new("i", TextType::Italic)).unwrap();
    assert_eq!(bold.serialize().unwrap(), "<b>b</b>");
    assert_eq!(italic.serialize().unwrap(), "<i>i</i>");
}

#[test]
fn test_lower_link() {
    let leaf = text_node_to_leaf(&TextNode::link("Click", "https://ex.com")).unwrap();
    assert_eq!(leaf.serialize().unwrap(), r#"<a href="https://ex.com">Click</a>"#);
}

#[test]
fn test_lower_link_without_url() {
    let err = text_node_to_leaf(&TextNode::new("Click", TextType::Link)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingUrl);

    let err = text_node_to_leaf(&TextNode::link("Click", "")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingUrl);
}

#[test]
fn test_lower_unsupported_types() {
    for text_type in [TextType::Code, TextType::Image, TextType::Underline] {
        let err = text_node_to_leaf(&TextNode::new("x", text_type).with_url("u")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedTextType);
        assert!(err.message.contains(text_type.as_str()));
    }
}
