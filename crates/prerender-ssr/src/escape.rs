//! Entity encoding for text content and attribute values.

use std::borrow::Cow;

/// Escapes the markup-significant characters `&`, `<`, `>` and `"`.
///
/// Ampersands are replaced as part of the same single pass, so entity
/// references produced for the other characters are never escaped twice.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// ```
/// use prerender_ssr::escape::encode_entities;
///
/// assert_eq!(encode_entities("&<"), "&amp;&lt;");
/// assert_eq!(encode_entities("plain"), "plain");
/// ```
pub fn encode_entities(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
