//! Attribute values carried by virtual elements.
//!
//! Attribute values are loosely typed on purpose: a virtual tree mirrors what a
//! component layer hands over, so a value may be text, a number, a flag, an
//! inline style object, a raw HTML payload, or an event handler. The
//! serializer decides per variant whether and how the value reaches markup.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::sync::Arc;

/// Event handler stored on an element. Never serialized.
pub type EventHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Ordered attribute mapping. Iteration follows insertion order.
pub type Attributes = IndexMap<String, AttrValue>;

/// Ordered inline style mapping, keyed by camelCase or kebab-case property.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single attribute value.
#[derive(Clone)]
pub enum AttrValue {
	/// Explicitly absent value.
	Null,
	/// Boolean flag. `true` collapses to a bare attribute, `false` is omitted.
	Bool(bool),
	/// Numeric value.
	Number(f64),
	/// Text value.
	Str(Cow<'static, str>),
	/// Inline style object, flattened to CSS declarations under `style`.
	Style(StyleMap),
	/// Raw markup payload for `dangerouslySetInnerHTML`.
	InnerHtml(String),
	/// Event handler. Has no markup representation.
	Handler(EventHandler),
}

impl std::fmt::Debug for AttrValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Null => f.write_str("Null"),
			Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
			Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
			Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
			Self::Style(map) => f.debug_tuple("Style").field(map).finish(),
			Self::InnerHtml(html) => f.debug_tuple("InnerHtml").field(html).finish(),
			Self::Handler(_) => f.write_str("Handler(..)"),
		}
	}
}

impl AttrValue {
	/// Returns `true` for values a script host would treat as truthy.
	///
	/// `false`, `null`, `0`, `NaN` and the empty string are falsy; objects,
	/// raw payloads and handlers are always truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Null => false,
			Self::Bool(b) => *b,
			Self::Number(n) => *n != 0.0 && !n.is_nan(),
			Self::Str(s) => !s.is_empty(),
			Self::Style(_) | Self::InnerHtml(_) | Self::Handler(_) => true,
		}
	}

	/// Returns `true` if the value is a handler.
	pub fn is_handler(&self) -> bool {
		matches!(self, Self::Handler(_))
	}

	/// Returns the text of a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number of a numeric value.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the flag of a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Stringifies a primitive value the way it appears in markup.
	///
	/// Returns `None` for styles, raw payloads and handlers.
	pub fn to_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Null => Some(Cow::Borrowed("null")),
			Self::Bool(true) => Some(Cow::Borrowed("true")),
			Self::Bool(false) => Some(Cow::Borrowed("false")),
			Self::Number(n) => Some(Cow::Owned(format_number(*n))),
			Self::Str(s) => Some(Cow::Borrowed(s)),
			Self::Style(_) | Self::InnerHtml(_) | Self::Handler(_) => None,
		}
	}
}

/// A single inline style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
	/// Skipped when flattening.
	Null,
	/// Numeric value, emitted without a unit.
	Number(f64),
	/// Text value, emitted verbatim.
	Str(String),
}

impl StyleValue {
	/// Returns the CSS text for the value, or `None` when it is skipped.
	pub fn to_css(&self) -> Option<String> {
		match self {
			Self::Null => None,
			Self::Number(n) => Some(format_number(*n)),
			Self::Str(s) => Some(s.clone()),
		}
	}
}

/// Formats a number the way a script host stringifies it.
///
/// Integral values print without a fraction, negative zero prints as `0`,
/// and infinities print as `Infinity` / `-Infinity`. Magnitudes of at least
/// `1e21` or below `1e-6` use exponent notation with a signed exponent
/// (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		"NaN".to_string()
	} else if n.is_infinite() {
		if n > 0.0 {
			"Infinity".to_string()
		} else {
			"-Infinity".to_string()
		}
	} else if n == 0.0 {
		"0".to_string()
	} else if n.abs() >= 1e21 || n.abs() < 1e-6 {
		let formatted = format!("{n:e}");
		match formatted.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
			_ => formatted,
		}
	} else {
		n.to_string()
	}
}

impl From<&'static str> for AttrValue {
	fn from(value: &'static str) -> Self {
		Self::Str(Cow::Borrowed(value))
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Str(Cow::Owned(value))
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Str(Cow::Owned(value.clone()))
	}
}

impl From<Cow<'static, str>> for AttrValue {
	fn from(value: Cow<'static, str>) -> Self {
		Self::Str(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<StyleMap> for AttrValue {
	fn from(value: StyleMap) -> Self {
		Self::Style(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

macro_rules! number_into_attr {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}

			impl From<$ty> for StyleValue {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)*
	};
}

number_into_attr!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<&str> for StyleValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for StyleValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Builds a [`StyleMap`] from `(property, value)` pairs.
///
/// ```
/// use prerender_core::attr::{style, StyleValue};
///
/// let map = style([("fontSize", StyleValue::from(12)), ("color", "red".into())]);
/// assert_eq!(map.len(), 2);
/// ```
pub fn style<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> StyleMap
where
	K: Into<String>,
	V: Into<StyleValue>,
{
	entries
		.into_iter()
		.map(|(k, v)| (k.into(), v.into()))
		.collect()
}
