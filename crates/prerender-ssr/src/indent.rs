//! Indentation engine for pretty output.
//!
//! Pretty mode only inserts whitespace around content that is "large": a
//! fragment containing a newline or longer than [`LARGE_FRAGMENT_LEN`]
//! characters. Small inline content stays on the parent's line.

/// Fragments longer than this many characters are placed on their own line.
pub const LARGE_FRAGMENT_LEN: usize = 40;

/// Checks whether a rendered fragment needs its own indented line.
pub fn is_large(fragment: &str) -> bool {
	fragment.contains('\n') || fragment.chars().count() > LARGE_FRAGMENT_LEN
}

/// Appends `unit` after every run of newlines in `s`.
pub fn indent(s: &str, unit: &str) -> String {
	let mut out = String::with_capacity(s.len() + unit.len() * 4);
	let mut chars = s.chars().peekable();
	while let Some(c) = chars.next() {
		out.push(c);
		if c == '\n' && chars.peek() != Some(&'\n') {
			out.push_str(unit);
		}
	}
	out
}

/// Places a fragment on its own line, one indentation unit deeper than its
/// parent. Newlines inside the fragment are indented by the same unit.
pub fn indent_block(fragment: &str, unit: &str) -> String {
	let body = indent(fragment, unit);
	let mut out = String::with_capacity(body.len() + unit.len() + 1);
	out.push('\n');
	out.push_str(unit);
	out.push_str(&body);
	out
}

/// Normalizes an attribute fragment that picked up newlines from an
/// attribute hook.
///
/// A fragment whose only newline is a leading one (plus the whitespace after
/// it) collapses to a single leading space. Any other fragment containing a
/// newline gets a trailing newline so the closing `>` sits on its own line.
pub fn normalize_attribute_newlines(attrs: String) -> String {
	if let Some(rest) = attrs.strip_prefix('\n') {
		let rest = rest.trim_start();
		if !rest.contains('\n') {
			let mut collapsed = String::with_capacity(rest.len() + 1);
			collapsed.push(' ');
			collapsed.push_str(rest);
			return collapsed;
		}
	}
	if attrs.contains('\n') {
		let mut attrs = attrs;
		attrs.push('\n');
		return attrs;
	}
	attrs
}
