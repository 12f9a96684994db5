//! The node tree and its render contract.
//!
//! ## Overview
//!
//! [`Node`] is a closed set of variants. Trees are built bottom-up from
//! leaves ([`Node::Text`], [`Node::Raw`], [`Node::Attribute`]) and
//! [`Element`]s, composed with combinators ([`Node::Group`],
//! [`Node::Mapper`], [`Node::Doctype`]), and then rendered depth-first into
//! any [`std::io::Write`] sink.
//!
//! The absent node is `Option<Node>::None`. It renders as zero bytes and
//! never fails, and converts into [`Node::EMPTY`] wherever a concrete
//! [`Node`] is required.
//!
//! ## Example
//!
//! ```
//! use rio_dom::{Render, class, div, p, text};
//!
//! let page = div([class("container"), p([text("Hello, World!")])]);
//!
//! let mut out = Vec::new();
//! page.render(&mut out).unwrap();
//! assert_eq!(out, b"<div class=\"container\"><p>Hello, World!</p></div>");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::attribute::Attribute;
use crate::combinators::Mapper;
use crate::element::Element;
use crate::escape::write_text;

/// Literal written ahead of a [`Node::Doctype`] child.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// A renderable HTML node.
///
/// Nodes are immutable once built. Rendering takes `&self`, so one tree can be
/// rendered any number of times, from any number of threads.
#[derive(Debug, Clone)]
pub enum Node {
	/// An element with a tag name, void flag and ordered children.
	Element(Element),
	/// A `name="value"` attribute, or a bare `name` when the value is empty.
	Attribute(Attribute),
	/// Text that is escaped on render.
	Text(Cow<'static, str>),
	/// Text written verbatim, without inspection.
	Raw(Cow<'static, str>),
	/// Nodes rendered one after another with no wrapper.
	Group(Vec<Node>),
	/// Items transformed into nodes one at a time while rendering.
	Mapper(Mapper),
	/// `<!DOCTYPE html>` followed by a single child.
	Doctype(Box<Node>),
	/// Renders nothing.
	Empty,
}

impl Node {
	/// The shared empty node.
	pub const EMPTY: Node = Node::Empty;

	/// Returns `true` for the [`Node::Attribute`] variant.
	pub fn is_attribute(&self) -> bool {
		matches!(self, Node::Attribute(_))
	}

	/// Returns `true` for [`Node::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Node::Empty)
	}

	/// Returns the attribute if this node is one.
	pub fn as_attribute(&self) -> Option<&Attribute> {
		match self {
			Node::Attribute(attr) => Some(attr),
			_ => None,
		}
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}
}

/// The render contract shared by every node.
///
/// `render` writes exactly the bytes this value contributes, in document
/// order. The first error from the sink stops rendering and is returned
/// unchanged.
pub trait Render {
	/// Writes this value to `w`.
	///
	/// # Errors
	///
	/// Returns the first error reported by `w`.
	fn render(&self, w: &mut dyn Write) -> io::Result<()>;

	/// Renders into an in-memory buffer and returns it as a string.
	fn render_to_string(&self) -> String {
		let mut buf = Vec::new();
		// In-memory writes cannot fail.
		let _ = self.render(&mut buf);
		String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
	}
}

impl Render for Node {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		match self {
			Node::Element(el) => el.render(w),
			Node::Attribute(attr) => attr.render(w),
			Node::Text(value) => write_text(w, value),
			Node::Raw(value) => w.write_all(value.as_bytes()),
			Node::Group(nodes) => {
				for node in nodes {
					node.render(w)?;
				}
				Ok(())
			}
			Node::Mapper(mapper) => mapper.render(w),
			Node::Doctype(child) => {
				w.write_all(DOCTYPE.as_bytes())?;
				child.render(w)
			}
			Node::Empty => Ok(()),
		}
	}
}

impl<T: Render> Render for Option<T> {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		match self {
			Some(node) => node.render(w),
			None => Ok(()),
		}
	}
}

impl<T: Render + ?Sized> Render for &T {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		(**self).render(w)
	}
}

impl<T: Render + ?Sized> Render for Box<T> {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		(**self).render(w)
	}
}

impl<T: Render + ?Sized> Render for Arc<T> {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		(**self).render(w)
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_to_string())
	}
}

/// Conversion into a [`Node`].
///
/// Strings convert into escaped text and `None` converts into the empty
/// node, so both can be passed anywhere a node is expected.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for Attribute {
	fn into_node(self) -> Node {
		Node::Attribute(self)
	}
}

impl IntoNode for Mapper {
	fn into_node(self) -> Node {
		Node::Mapper(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::EMPTY,
		}
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::EMPTY
	}
}

impl From<Element> for Node {
	fn from(el: Element) -> Self {
		Node::Element(el)
	}
}

impl From<Attribute> for Node {
	fn from(attr: Attribute) -> Self {
		Node::Attribute(attr)
	}
}

impl From<Option<Node>> for Node {
	fn from(node: Option<Node>) -> Self {
		node.unwrap_or(Node::EMPTY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_renders_nothing() {
		assert_eq!(Node::EMPTY.render_to_string(), "");
		assert!(Node::EMPTY.is_empty());
	}

	#[rstest]
	fn test_none_renders_nothing() {
		let absent: Option<Node> = None;
		let mut buf = Vec::new();
		absent.render(&mut buf).unwrap();
		assert!(buf.is_empty());
	}

	#[rstest]
	fn test_text_is_escaped() {
		let node = Node::Text("<".into());
		assert_eq!(node.render_to_string(), "&lt;");
	}

	#[rstest]
	fn test_raw_is_verbatim() {
		let node = Node::Raw("<".into());
		assert_eq!(node.render_to_string(), "<");
	}

	#[rstest]
	fn test_display_matches_render() {
		let node = Node::Group(vec![Node::Raw("<b>".into()), Node::Text("&".into())]);
		assert_eq!(node.to_string(), "<b>&amp;");
		assert_eq!(format!("{}", node), node.render_to_string());
	}

	#[rstest]
	fn test_doctype_without_child() {
		let node = Node::Doctype(Box::new(None::<Node>.into_node()));
		assert_eq!(node.render_to_string(), "<!DOCTYPE html>");
	}

	#[rstest]
	#[case("Hello".into_node(), "Hello")]
	#[case(String::from("a < b").into_node(), "a &lt; b")]
	#[case(Some("x").into_node(), "x")]
	#[case(None::<&'static str>.into_node(), "")]
	#[case(().into_node(), "")]
	fn test_into_node(#[case] node: Node, #[case] expected: &str) {
		assert_eq!(node.render_to_string(), expected);
	}

	#[rstest]
	fn test_from_option_node() {
		assert!(Node::from(None::<Node>).is_empty());
		let node = Node::from(Some(Node::Raw("x".into())));
		assert_eq!(node.render_to_string(), "x");
	}

	#[rstest]
	fn test_node_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Node>();
	}
}
