//! Element nodes.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::attribute::Attribute;
use crate::node::{IntoNode, Node, Render};

/// An HTML element.
///
/// Children may mix [`Node::Attribute`] entries with content in any order.
/// Rendering always emits the attributes first, in their relative order, then
/// the content. A void element emits no content and no closing tag; any
/// content children it was given are dropped silently.
#[derive(Debug, Clone)]
pub struct Element {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// Whether this is a void element (no content, no closing tag).
	is_void: bool,
	/// Attribute and content children, in construction order.
	children: Vec<Node>,
}

impl Element {
	/// Creates a normal element.
	pub fn new(
		tag: impl Into<Cow<'static, str>>,
		children: impl IntoIterator<Item = Node>,
	) -> Self {
		Self {
			tag: tag.into(),
			is_void: false,
			children: children.into_iter().collect(),
		}
	}

	/// Creates a void element.
	pub fn void(
		tag: impl Into<Cow<'static, str>>,
		children: impl IntoIterator<Item = Node>,
	) -> Self {
		Self {
			tag: tag.into(),
			is_void: true,
			children: children.into_iter().collect(),
		}
	}

	/// Appends a child while building.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns all children, attributes included.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Iterates over the attribute children in order.
	pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
		self.children.iter().filter_map(Node::as_attribute)
	}

	/// Iterates over the content (non-attribute) children in order.
	pub fn content(&self) -> impl Iterator<Item = &Node> {
		self.children.iter().filter(|child| !child.is_attribute())
	}
}

impl Render for Element {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		w.write_all(b"<")?;
		w.write_all(self.tag.as_bytes())?;

		for attr in self.attributes() {
			attr.render(w)?;
		}

		w.write_all(b">")?;

		if self.is_void {
			return Ok(());
		}

		for child in self.content() {
			child.render(w)?;
		}

		w.write_all(b"</")?;
		w.write_all(self.tag.as_bytes())?;
		w.write_all(b">")
	}
}

/// Creates an element node.
pub fn create_element(
	name: impl Into<Cow<'static, str>>,
	children: impl IntoIterator<Item = Node>,
) -> Node {
	Node::Element(Element::new(name, children))
}

/// Creates a void element node.
pub fn create_element_void(
	name: impl Into<Cow<'static, str>>,
	children: impl IntoIterator<Item = Node>,
) -> Node {
	Node::Element(Element::void(name, children))
}
