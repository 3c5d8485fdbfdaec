//! Property-based tests for the string renderer
//!
//! Success Criteria:
//! 1. Encoded text never contains raw markup characters and decodes back
//! 2. Sorted attribute output does not depend on insertion order
//! 3. Rendering is deterministic
//! 4. Compact output of a flat element never contains inserted whitespace

use prerender_core::{AttrValue, Element, IntoVNode, Store, VNode};
use prerender_ssr::{RenderOptions, encode_entities, render, render_to_string};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn decode(s: &str) -> String {
	s.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&amp;", "&")
}

fn element_with(attrs: impl IntoIterator<Item = (String, String)>) -> Element {
	attrs
		.into_iter()
		.fold(Element::new("div"), |el, (k, v)| el.attr(k, AttrValue::from(v)))
}

proptest! {
	#[test]
	fn prop_text_encoding_is_reversible(text in ".*") {
		let out = render_to_string(&VNode::text(text.clone())).unwrap();
		prop_assert!(!out.contains('<'));
		prop_assert!(!out.contains('>'));
		prop_assert!(!out.contains('"'));
		prop_assert_eq!(decode(&out), text);
	}

	#[test]
	fn prop_encoding_borrows_clean_input(text in "[a-zA-Z0-9 '.,-]*") {
		let encoded = encode_entities(&text);
		prop_assert!(matches!(encoded, std::borrow::Cow::Borrowed(_)));
		prop_assert_eq!(encoded.as_ref(), text.as_str());
	}

	#[test]
	fn prop_sorted_attributes_ignore_insertion_order(
		attrs in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9 &<]{0,8}", 1..8)
	) {
		let attrs: BTreeMap<String, String> = attrs;
		let forward = element_with(attrs.clone()).into_vnode();
		let backward = element_with(attrs.into_iter().rev()).into_vnode();
		let options = RenderOptions::new().sort_attributes(true);
		let store = Store::new();

		prop_assert_eq!(
			render(&forward, &store, &options).unwrap(),
			render(&backward, &store, &options).unwrap()
		);
	}

	#[test]
	fn prop_rendering_is_deterministic(
		words in prop::collection::vec("[a-z<>&\"]{0,12}", 0..6),
		xml in any::<bool>(),
		pretty in any::<bool>()
	) {
		let tree = Element::new("ul")
			.children(words.into_iter().map(|w| Element::new("li").child(w)))
			.into_vnode();
		let options = RenderOptions::new().xml(xml).pretty(pretty);
		let store = Store::new();

		prop_assert_eq!(
			render(&tree, &store, &options).unwrap(),
			render(&tree, &store, &options).unwrap()
		);
	}

	#[test]
	fn prop_compact_output_adds_no_whitespace(text in "[a-z]{0,80}") {
		let tree = Element::new("p").child(text.clone()).into_vnode();
		prop_assert_eq!(render_to_string(&tree).unwrap(), format!("<p>{text}</p>"));
	}
}
