//! Attribute nodes.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::escape::write_text;
use crate::node::{Node, Render};

/// An HTML attribute.
///
/// An empty value renders as a bare boolean attribute (` disabled`), so an
/// attribute explicitly set to the empty string is indistinguishable from a
/// boolean one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	name: Cow<'static, str>,
	value: Cow<'static, str>,
}

impl Attribute {
	/// Creates an attribute with a value.
	pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Creates a boolean attribute (empty value).
	pub fn boolean(name: impl Into<Cow<'static, str>>) -> Self {
		Self::new(name, "")
	}

	/// Returns the attribute name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the attribute value; empty for boolean attributes.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Returns `true` when the value is empty.
	pub fn is_boolean(&self) -> bool {
		self.value.is_empty()
	}
}

impl Render for Attribute {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		w.write_all(b" ")?;
		w.write_all(self.name.as_bytes())?;

		if self.value.is_empty() {
			return Ok(());
		}

		w.write_all(b"=\"")?;
		write_text(w, &self.value)?;
		w.write_all(b"\"")
	}
}

/// Creates an attribute node.
pub fn create_attr(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Node {
	Node::Attribute(Attribute::new(name, value))
}

/// Creates a boolean attribute node.
pub fn create_attr_boolean(name: impl Into<Cow<'static, str>>) -> Node {
	Node::Attribute(Attribute::boolean(name))
}
