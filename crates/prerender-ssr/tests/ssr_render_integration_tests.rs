//! String renderer integration tests
//!
//! Success Criteria:
//! 1. Text and attribute values are entity-encoded
//! 2. Void elements self-close and never carry content
//! 3. Boolean attributes follow HTML or XML conventions
//! 4. Raw inner markup replaces children
//! 5. SVG context rewrites xlink attributes only inside `<svg>`
//! 6. Invalid tag names fail with the partial opening tag
//!
//! Test Categories:
//! - Happy Path: 5 tests
//! - Error Path: 2 tests
//! - Edge Cases: 6 tests
//! - Decision Table: 8 tests

use prerender_core::{AttrValue, Element, IntoVNode, StyleValue, VNode, style};
use prerender_ssr::{RenderError, RenderOptions, StringRenderer, render, render_to_string};
use rstest::*;
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn xml_renderer() -> StringRenderer {
	StringRenderer::with_options(RenderOptions::new().xml(true))
}

fn html(node: impl IntoVNode) -> String {
	render_to_string(&node.into_vnode()).unwrap()
}

// ============================================================================
// Happy Path Tests (5 tests)
// ============================================================================

/// Tests that text content is entity-encoded
#[rstest]
fn test_text_is_encoded() {
	let node = Element::new("p").child("<script>alert(\"x\") & 'y'</script>");
	assert_eq!(
		html(node),
		"<p>&lt;script&gt;alert(&quot;x&quot;) &amp; 'y'&lt;/script&gt;</p>"
	);
}

/// Tests a nested document with mixed child kinds
#[rstest]
fn test_nested_document() {
	let node = Element::new("article")
		.attr("id", "post")
		.child(Element::new("h1").child("Title"))
		.child(
			Element::new("p")
				.child("Read ")
				.child(Element::new("a").attr("href", "/more?a=1&b=2").child("more"))
				.child(" (")
				.child(3)
				.child(")"),
		);
	assert_eq!(
		html(node),
		"<article id=\"post\"><h1>Title</h1><p>Read <a href=\"/more?a=1&amp;b=2\">more</a> (3)</p></article>"
	);
}

/// Tests className mapping and inline styles
#[rstest]
fn test_class_name_and_style() {
	let node = Element::new("div")
		.attr("className", "card")
		.style(style([
			("backgroundColor", StyleValue::from("#fff")),
			("zIndex", 2.into()),
			("margin", StyleValue::Null),
		]));
	assert_eq!(
		html(node),
		"<div class=\"card\" style=\"background-color: #fff; z-index: 2;\"></div>"
	);
}

/// Tests that raw inner markup is emitted verbatim and replaces children
#[rstest]
fn test_inner_html_replaces_children() {
	let node = Element::new("div")
		.inner_html("<b>bold</b> & raw")
		.child("ignored");
	assert_eq!(html(node), "<div><b>bold</b> & raw</div>");
}

/// Tests that event handlers never reach the markup
#[rstest]
fn test_handlers_are_dropped() {
	let node = Element::new("button")
		.on("onClick", Arc::new(|| {}))
		.attr("type", "button")
		.child("Go");
	assert_eq!(html(node), "<button type=\"button\">Go</button>");
}

// ============================================================================
// Error Path Tests (2 tests)
// ============================================================================

/// Tests that an unsafe tag name fails with the partial opening tag
#[rstest]
#[case("div onload=x", "<div onload=x class=\"a\">")]
#[case("a/b", "<a/b class=\"a\">")]
#[case("x>", "<x> class=\"a\">")]
fn test_invalid_tag_name(#[case] tag: &'static str, #[case] fragment: &str) {
	let node = Element::new(tag).attr("className", "a").into_vnode();
	let err = render_to_string(&node).unwrap_err();
	assert!(matches!(err, RenderError::InvalidTagName { .. }));
	assert_eq!(err.fragment(), Some(fragment));
	assert_eq!(err.to_string(), format!("Invalid tag name: {fragment}"));
}

/// Tests that an invalid tag deep in the tree aborts the whole render
#[rstest]
fn test_invalid_nested_tag_aborts() {
	let node = Element::new("ul")
		.child(Element::new("li").child("ok"))
		.child(Element::new("li").child(Element::new("bad tag")))
		.into_vnode();
	let err = render_to_string(&node).unwrap_err();
	assert_eq!(err.fragment(), Some("<bad tag>"));
}

// ============================================================================
// Edge Cases (6 tests)
// ============================================================================

/// Tests that null and false children are skipped
#[rstest]
fn test_null_and_false_children_skipped() {
	let node = Element::new("p")
		.child(VNode::Null)
		.child(false)
		.child(true)
		.child(None::<&str>)
		.child("a")
		.child(0);
	assert_eq!(html(node), "<p>a0</p>");
}

/// Tests that bare primitives render as text
#[rstest]
#[case(VNode::text("plain"), "plain")]
#[case(VNode::Number(1.5), "1.5")]
#[case(VNode::Number(-0.0), "0")]
#[case(VNode::Number(f64::NAN), "NaN")]
#[case(VNode::Number(1e21), "1e+21")]
#[case(VNode::Number(1e-7), "1e-7")]
#[case(VNode::Null, "")]
fn test_primitive_roots(#[case] node: VNode, #[case] expected: &str) {
	assert_eq!(render_to_string(&node).unwrap(), expected);
}

/// Tests that void elements drop children and raw markup
#[rstest]
#[case(Element::new("img").attr("src", "a.png"), "<img src=\"a.png\" />")]
#[case(Element::new("br").child("text"), "<br />")]
#[case(Element::new("hr").inner_html("<b>x</b>"), "<hr />")]
#[case(Element::new("input").attr("disabled", true), "<input disabled />")]
fn test_void_elements(#[case] element: Element, #[case] expected: &str) {
	assert_eq!(html(element), expected);
}

/// Tests that void matching is case-sensitive
#[rstest]
fn test_void_matching_is_case_sensitive() {
	assert_eq!(html(Element::new("BR")), "<BR></BR>");
}

/// Tests that `key`, `ref` and `children` attributes stay out of the markup
#[rstest]
fn test_bookkeeping_attributes() {
	let node = Element::new("li")
		.attr("key", "1")
		.attr("ref", "r")
		.attr("children", "c")
		.child("item")
		.into_vnode();
	assert_eq!(render_to_string(&node).unwrap(), "<li>item</li>");

	let options = RenderOptions::new().all_attributes(true);
	assert_eq!(
		render(&node, &Default::default(), &options).unwrap(),
		"<li key=\"1\" ref=\"r\">item</li>"
	);
}

/// Tests that rendering the same tree twice yields the same string
#[rstest]
fn test_rendering_is_repeatable() {
	let node = Element::new("div")
		.attr("title", "t")
		.child(Element::new("span").child("x"))
		.into_vnode();
	let first = render_to_string(&node).unwrap();
	let second = render_to_string(&node).unwrap();
	assert_eq!(first, second);
}

// ============================================================================
// Decision Table: XML mode and SVG context (8 tests)
// ============================================================================

/// Tests XML-mode self-closing against content kinds
#[rstest]
#[case(Element::new("div"), "<div />")]
#[case(Element::new("div").child(VNode::Null), "<div />")]
#[case(Element::new("div").child(""), "<div />")]
#[case(Element::new("div").inner_html(""), "<div />")]
#[case(Element::new("div").inner_html("<i />"), "<div><i /></div>")]
#[case(Element::new("div").attr("hidden", true), "<div hidden=\"hidden\" />")]
#[case(
	Element::new("p").child(Element::new("span")),
	"<p><span /></p>"
)]
fn test_xml_mode(xml_renderer: StringRenderer, #[case] element: Element, #[case] expected: &str) {
	assert_eq!(xml_renderer.render(&element.into_vnode()).unwrap(), expected);
}

/// Tests that xlink attributes are rewritten only in SVG context
#[rstest]
fn test_svg_context() {
	let node = Element::new("div")
		.attr("xlinkHref", "#outside")
		.child(
			Element::new("svg")
				.attr("xlinkHref", "#root")
				.child(Element::new("use").attr("xlinkHref", "#icon"))
				.child(
					Element::new("foreignObject")
						.attr("xlinkHref", "#fo")
						.child(Element::new("div").attr("xlinkHref", "#html")),
				),
		);
	assert_eq!(
		html(node),
		concat!(
			"<div xlinkHref=\"#outside\">",
			"<svg xlinkHref=\"#root\">",
			"<use xlink:href=\"#icon\"></use>",
			"<foreignObject xlink:href=\"#fo\">",
			"<div xlinkHref=\"#html\"></div>",
			"</foreignObject>",
			"</svg>",
			"</div>"
		)
	);
}

/// Tests that a non-style attribute holding a style map is skipped
#[rstest]
fn test_style_map_under_other_key() {
	let node = Element::new("div").attr("data-style", AttrValue::Style(style([("color", "red")])));
	assert_eq!(html(node), "<div></div>");
}
