//! Text leaves.

use std::borrow::Cow;

use crate::node::Node;

/// Creates a text node whose content is escaped on render.
///
/// # Examples
///
/// ```
/// use rio_dom::{Render, text};
///
/// assert_eq!(text("1 < 2").render_to_string(), "1 &lt; 2");
/// ```
pub fn text(value: impl Into<Cow<'static, str>>) -> Node {
	Node::Text(value.into())
}

/// Creates a text node written verbatim.
///
/// The content is never inspected. Use it only for markup that is already
/// trusted.
///
/// # Examples
///
/// ```
/// use rio_dom::{Render, raw};
///
/// assert_eq!(raw("<b>bold</b>").render_to_string(), "<b>bold</b>");
/// ```
pub fn raw(value: impl Into<Cow<'static, str>>) -> Node {
	Node::Raw(value.into())
}

/// Same as [`text`].
pub fn create_string(value: impl Into<Cow<'static, str>>) -> Node {
	text(value)
}

/// Same as [`raw`].
pub fn create_string_raw(value: impl Into<Cow<'static, str>>) -> Node {
	raw(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::Render;
	use rstest::rstest;

	#[rstest]
	#[case("<", "&lt;", "<")]
	#[case("Tom & Jerry", "Tom &amp; Jerry", "Tom & Jerry")]
	#[case("it's \"quoted\"", "it&#39;s &#34;quoted&#34;", "it's \"quoted\"")]
	#[case("", "", "")]
	fn test_text_and_raw(#[case] input: &'static str, #[case] escaped: &str, #[case] verbatim: &str) {
		assert_eq!(text(input).render_to_string(), escaped);
		assert_eq!(create_string(input).render_to_string(), escaped);
		assert_eq!(raw(input).render_to_string(), verbatim);
		assert_eq!(create_string_raw(input).render_to_string(), verbatim);
	}

	#[rstest]
	fn test_text_from_owned_string() {
		let name = String::from("<admin>");
		assert_eq!(text(name).render_to_string(), "&lt;admin&gt;");
	}
}
