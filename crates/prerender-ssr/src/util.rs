//! Name checks shared by the attribute emitter and the serializer.

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Checks whether a tag name is a void element. Case-sensitive.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Checks whether a tag or attribute name contains a character that would
/// break out of its position in markup: whitespace, `\`, `/`, `=`, quotes,
/// NUL, `<` or `>`.
pub fn has_unsafe_chars(name: &str) -> bool {
	name.chars().any(|c| {
		c.is_whitespace() || matches!(c, '\\' | '/' | '=' | '\'' | '"' | '\0' | '<' | '>')
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("div", false)]
	#[case("my-element", false)]
	#[case("xlink:href", false)]
	#[case("a b", true)]
	#[case("a\nb", true)]
	#[case("a/b", true)]
	#[case("a\\b", true)]
	#[case("a=b", true)]
	#[case("a'b", true)]
	#[case("a\"b", true)]
	#[case("a\0b", true)]
	#[case("<a", true)]
	#[case("a>", true)]
	fn test_has_unsafe_chars(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(has_unsafe_chars(name), expected);
	}

	#[test]
	fn test_void_elements() {
		assert!(is_void_element("img"));
		assert!(is_void_element("param"));
		assert!(!is_void_element("IMG"));
		assert!(!is_void_element("div"));
	}
}
