//! HTML escaping for text content and attribute values.
//!
//! A single policy covers both contexts. The following characters are
//! replaced and nothing else is ever altered:
//!
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&#34;`
//! - `'` → `&#39;`
//! - NUL → U+FFFD (replacement character)

use std::borrow::Cow;
use std::io::{self, Write};

const REPLACEMENT_CHARACTER: &str = "\u{FFFD}";

#[inline]
fn replacement(byte: u8) -> Option<&'static str> {
	match byte {
		b'&' => Some("&amp;"),
		b'<' => Some("&lt;"),
		b'>' => Some("&gt;"),
		b'"' => Some("&#34;"),
		b'\'' => Some("&#39;"),
		0 => Some(REPLACEMENT_CHARACTER),
		_ => None,
	}
}

/// Returns `true` if `s` contains a character that the escaping policy replaces.
///
/// # Examples
///
/// ```
/// use rio_dom::needs_escaping;
///
/// assert!(needs_escaping("a < b"));
/// assert!(!needs_escaping("plain text"));
/// ```
pub fn needs_escaping(s: &str) -> bool {
	s.bytes().any(|b| replacement(b).is_some())
}

/// Escapes `s`, borrowing it unchanged when nothing needs replacing.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use rio_dom::escape_html;
///
/// assert_eq!(escape_html("<b>"), "&lt;b&gt;");
/// assert!(matches!(escape_html("safe"), Cow::Borrowed("safe")));
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if !needs_escaping(s) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	let mut last = 0;
	for (i, b) in s.bytes().enumerate() {
		if let Some(entity) = replacement(b) {
			escaped.push_str(&s[last..i]);
			escaped.push_str(entity);
			last = i + 1;
		}
	}
	escaped.push_str(&s[last..]);
	Cow::Owned(escaped)
}

/// Writes `s` to `w` with every special character replaced.
///
/// Runs of safe bytes between special characters are written straight from
/// `s`; no intermediate string is built. All special characters are ASCII, so
/// each run is itself valid UTF-8.
pub fn write_escaped(w: &mut dyn Write, s: &str) -> io::Result<()> {
	let mut last = 0;
	for (i, b) in s.bytes().enumerate() {
		if let Some(entity) = replacement(b) {
			if last < i {
				w.write_all(&s.as_bytes()[last..i])?;
			}
			w.write_all(entity.as_bytes())?;
			last = i + 1;
		}
	}
	if last < s.len() {
		w.write_all(&s.as_bytes()[last..])?;
	}
	Ok(())
}

/// Writes `s` to `w` under the escaping policy.
///
/// Strings that need no escaping go out in a single write. The output is
/// byte-identical to [`write_escaped`] for every input.
pub fn write_text(w: &mut dyn Write, s: &str) -> io::Result<()> {
	if needs_escaping(s) {
		write_escaped(w, s)
	} else {
		w.write_all(s.as_bytes())
	}
}
