//! Inline style flattening.

use prerender_core::StyleMap;
use std::borrow::Cow;

/// Flattens a style object into a CSS declaration string.
///
/// Declarations follow the map's order as `property: value;`, separated by a
/// single space. `Null` values are skipped. Returns `None` when nothing is
/// left, in which case the `style` attribute is omitted.
///
/// ```
/// use prerender_core::style;
/// use prerender_ssr::style::style_to_css;
///
/// let css = style_to_css(&style([("backgroundColor", "red"), ("zIndex", "2")]));
/// assert_eq!(css.as_deref(), Some("background-color: red; z-index: 2;"));
/// ```
pub fn style_to_css(style: &StyleMap) -> Option<String> {
	let mut css = String::new();
	for (prop, value) in style {
		let Some(value) = value.to_css() else {
			continue;
		};
		if !css.is_empty() {
			css.push(' ');
		}
		css.push_str(&property_to_css(prop));
		css.push_str(": ");
		css.push_str(&value);
		css.push(';');
	}
	(!css.is_empty()).then_some(css)
}

/// Converts a camelCase property name to kebab-case.
///
/// Names starting with `-` (vendor prefixes already in kebab-case, custom
/// properties) are returned unchanged.
pub fn property_to_css(prop: &str) -> Cow<'_, str> {
	if prop.starts_with('-') || !prop.contains(|c: char| c.is_ascii_uppercase()) {
		return Cow::Borrowed(prop);
	}
	let mut out = String::with_capacity(prop.len() + 4);
	for c in prop.chars() {
		if c.is_ascii_uppercase() {
			out.push('-');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	Cow::Owned(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use prerender_core::{StyleValue, style};
	use rstest::rstest;

	#[rstest]
	#[case("color", "color")]
	#[case("fontSize", "font-size")]
	#[case("WebkitTransition", "-webkit-transition")]
	#[case("--main-color", "--main-color")]
	#[case("-moz-appearance", "-moz-appearance")]
	fn test_property_to_css(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(property_to_css(input), expected);
	}

	#[test]
	fn test_numbers_have_no_unit() {
		let css = style_to_css(&style([("width", StyleValue::from(10)), ("opacity", 0.5.into())]));
		assert_eq!(css.as_deref(), Some("width: 10; opacity: 0.5;"));
	}

	#[test]
	fn test_null_values_skipped() {
		let css = style_to_css(&style([
			("color", StyleValue::Null),
			("margin", "0 auto".into()),
		]));
		assert_eq!(css.as_deref(), Some("margin: 0 auto;"));
	}

	#[test]
	fn test_empty_style_is_none() {
		assert_eq!(style_to_css(&StyleMap::new()), None);
		assert_eq!(style_to_css(&style([("color", StyleValue::Null)])), None);
	}
}
