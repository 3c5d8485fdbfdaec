//! Attribute emitter.
//!
//! Turns an element's attribute map into the fragment placed between the tag
//! name and the closing `>` of an opening tag. Each entry is emitted as
//! ` name="value"`, or as a bare ` name` for boolean attributes outside XML
//! mode.
//!
//! Per attribute, in order:
//!
//! 1. `children` is always skipped, as is any name containing a markup-unsafe
//!    character. `key` and `ref` are skipped unless `all_attributes` is set.
//! 2. `className` becomes `class` unless a truthy `class` is present, in which
//!    case it is dropped. In SVG mode `xlinkHref`-style names become
//!    `xlink:href`.
//! 3. A style object under `style` is flattened to CSS.
//! 4. The attribute hook, when set, may replace the formatting.
//! 5. `dangerouslySetInnerHTML` is captured for the content step.
//! 6. Handlers, `false`, `null` and `NaN` are dropped; everything else is
//!    entity-encoded.

use crate::escape::encode_entities;
use crate::options::RenderOptions;
use crate::style::style_to_css;
use crate::util::has_unsafe_chars;
use prerender_core::{AttrValue, Attributes, Store};
use std::borrow::Cow;

/// Attribute key holding raw inner markup.
pub const INNER_HTML_ATTR: &str = "dangerouslySetInnerHTML";

/// Output of the attribute emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmittedAttributes {
	/// The attribute fragment, each entry with a leading space.
	pub markup: String,
	/// Raw inner markup captured from `dangerouslySetInnerHTML`.
	pub inner_html: Option<String>,
}

/// Where the attributes being emitted come from.
#[derive(Debug, Clone, Copy)]
pub struct AttributeContext<'a> {
	/// Active render options.
	pub options: &'a RenderOptions,
	/// Render store, handed to the attribute hook.
	pub store: &'a Store,
	/// Whether the owning element is inside an `<svg>` subtree.
	pub svg_mode: bool,
	/// Component flag handed to the attribute hook.
	pub is_component: bool,
}

/// Emits the attribute fragment for an element.
pub fn emit_attributes(attrs: &Attributes, cx: AttributeContext<'_>) -> EmittedAttributes {
	let mut emitted = EmittedAttributes::default();

	let mut names: Vec<&str> = attrs.keys().map(String::as_str).collect();
	if cx.options.sort_attributes {
		// UTF-16 code unit order, so astral names sort below U+E000..U+FFFF.
		names.sort_unstable_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
	}

	for original in names {
		let Some(value) = attrs.get(original) else {
			continue;
		};

		if original == "children" {
			continue;
		}
		if has_unsafe_chars(original) {
			tracing::trace!(attribute = original, "skipping attribute with unsafe name");
			continue;
		}
		if !cx.options.all_attributes && matches!(original, "key" | "ref") {
			continue;
		}

		let name: Cow<'_, str> = if original == "className" {
			if attrs.get("class").is_some_and(AttrValue::is_truthy) {
				continue;
			}
			Cow::Borrowed("class")
		} else if cx.svg_mode && is_xlink_name(original) {
			Cow::Owned(normalize_xlink(original))
		} else {
			Cow::Borrowed(original)
		};

		let value: Cow<'_, AttrValue> = match value {
			AttrValue::Style(style) if name == "style" => Cow::Owned(
				style_to_css(style).map_or(AttrValue::Null, AttrValue::from),
			),
			_ => Cow::Borrowed(value),
		};

		if let Some(hook) = &cx.options.attribute_hook
			&& let Some(hooked) = hook(&*name, &*value, cx.store, cx.options, cx.is_component)
		{
			emitted.markup.push_str(&hooked);
			continue;
		}

		if name == INNER_HTML_ATTR {
			emitted.inner_html = match value.as_ref() {
				AttrValue::InnerHtml(html) => Some(html.clone()),
				_ => None,
			};
			continue;
		}

		push_attribute(&mut emitted.markup, &name, &*value, cx.options.xml);
	}

	emitted
}

fn push_attribute(out: &mut String, name: &str, value: &AttrValue, xml: bool) {
	let emits = value.is_truthy() || matches!(value, AttrValue::Number(n) if *n == 0.0);
	if !emits || value.is_handler() {
		return;
	}

	let is_flag = matches!(value, AttrValue::Bool(true))
		|| matches!(value, AttrValue::Str(s) if s.is_empty());
	if is_flag {
		out.push(' ');
		out.push_str(name);
		if xml {
			out.push_str("=\"");
			out.push_str(&encode_entities(name));
			out.push('"');
		}
		return;
	}

	// Styles under other keys and stray raw payloads have no text form.
	let Some(text) = value.to_text() else {
		return;
	};
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(&encode_entities(&text));
	out.push('"');
}

fn is_xlink_name(name: &str) -> bool {
	name.starts_with("xlink") && name.len() > "xlink".len()
}

fn normalize_xlink(name: &str) -> String {
	let lower = name.to_lowercase();
	let rest = lower.strip_prefix("xlink").unwrap_or(&lower);
	let rest = rest.strip_prefix(':').unwrap_or(rest);
	format!("xlink:{rest}")
}
