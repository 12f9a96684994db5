//! Combinators: nodes whose only job is composing other nodes.
//!
//! None of these know the concrete variant of what they compose; they rely on
//! [`Render`] alone.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::node::{IntoNode, Node, Render};

/// Renders each node in order with no wrapper.
///
/// # Examples
///
/// ```
/// use rio_dom::{Render, div, group, text};
///
/// let nodes = group([div([text("foo")]), div([text("bar")])]);
/// assert_eq!(nodes.render_to_string(), "<div>foo</div><div>bar</div>");
/// ```
pub fn group(nodes: impl IntoIterator<Item = Node>) -> Node {
	Node::Group(nodes.into_iter().collect())
}

/// Writes `<!DOCTYPE html>` and then `child`.
///
/// An absent child (`None`) leaves only the literal.
pub fn doctype(child: impl IntoNode) -> Node {
	Node::Doctype(Box::new(child.into_node()))
}

/// Returns the shared empty node.
pub const fn empty() -> Node {
	Node::EMPTY
}

/// Returns `node` when `condition` holds, otherwise the empty node.
///
/// `node` is an ordinary argument, so it is built before the call whether or
/// not it is used.
pub fn if_then(condition: bool, node: impl IntoNode) -> Node {
	if condition { node.into_node() } else { Node::EMPTY }
}

/// Returns `then_node` when `condition` holds, otherwise `else_node`.
///
/// Both branches are built before the call.
pub fn if_else(condition: bool, then_node: impl IntoNode, else_node: impl IntoNode) -> Node {
	if condition {
		then_node.into_node()
	} else {
		else_node.into_node()
	}
}

/// Item source behind a [`Mapper`].
trait MapSource: Send + Sync {
	fn render_each(&self, w: &mut dyn Write) -> io::Result<()>;
	fn len(&self) -> usize;
}

struct MappedItems<T, F> {
	items: Vec<T>,
	transform: F,
}

impl<T, F, N> MapSource for MappedItems<T, F>
where
	T: Send + Sync,
	F: Fn(&T) -> N + Send + Sync,
	N: IntoNode,
{
	fn render_each(&self, w: &mut dyn Write) -> io::Result<()> {
		for item in &self.items {
			(self.transform)(item).into_node().render(w)?;
		}
		Ok(())
	}

	fn len(&self) -> usize {
		self.items.len()
	}
}

/// A sequence of items turned into nodes while rendering.
///
/// The transformed nodes are never collected: each item is transformed and
/// rendered before the next one is touched, so rendering n items holds at
/// most one produced node at a time. Every render walks the items again from
/// the start, which is repeatable as long as the transform has no side
/// effects.
#[derive(Clone)]
pub struct Mapper {
	source: Arc<dyn MapSource>,
}

impl Mapper {
	/// Creates a mapper over `items`.
	pub fn new<T, F, N>(items: impl IntoIterator<Item = T>, transform: F) -> Self
	where
		T: Send + Sync + 'static,
		F: Fn(&T) -> N + Send + Sync + 'static,
		N: IntoNode + 'static,
	{
		Self {
			source: Arc::new(MappedItems {
				items: items.into_iter().collect(),
				transform,
			}),
		}
	}

	/// Returns the number of input items.
	pub fn len(&self) -> usize {
		self.source.len()
	}

	/// Returns `true` if there are no input items.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Render for Mapper {
	fn render(&self, w: &mut dyn Write) -> io::Result<()> {
		self.source.render_each(w)
	}
}

impl fmt::Debug for Mapper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mapper")
			.field("items", &self.len())
			.field("transform", &"<closure>")
			.finish()
	}
}

/// Maps `items` to nodes lazily at render time.
///
/// The transform may return `None` (or any other empty node) for items that
/// should contribute nothing.
///
/// # Examples
///
/// ```
/// use rio_dom::{Render, li, map, text, ul};
///
/// let list = ul([map(vec!["foo", "bar"], |s| li([text(*s)]))]);
/// assert_eq!(list.render_to_string(), "<ul><li>foo</li><li>bar</li></ul>");
/// ```
pub fn map<T, F, N>(items: impl IntoIterator<Item = T>, transform: F) -> Node
where
	T: Send + Sync + 'static,
	F: Fn(&T) -> N + Send + Sync + 'static,
	N: IntoNode + 'static,
{
	Node::Mapper(Mapper::new(items, transform))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attribute::create_attr;
	use crate::element::create_element;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn div(children: impl IntoIterator<Item = Node>) -> Node {
		create_element("div", children)
	}

	fn text(s: &'static str) -> Node {
		Node::Text(s.into())
	}

	#[rstest]
	fn test_group() {
		let node = group([div([text("foo")]), div([text("bar")])]);
		assert_eq!(node.render_to_string(), "<div>foo</div><div>bar</div>");
	}

	#[rstest]
	fn test_empty_group() {
		assert_eq!(group([]).render_to_string(), "");
	}

	#[rstest]
	fn test_group_skips_absent_entries() {
		let node = group([Node::EMPTY, text("a"), None::<Node>.into_node(), text("b")]);
		assert_eq!(node.render_to_string(), "ab");
	}

	#[rstest]
	fn test_map() {
		let node = map(vec!["foo", "bar"], |s| div([text(*s)]));
		assert_eq!(node.render_to_string(), "<div>foo</div><div>bar</div>");
	}

	#[rstest]
	fn test_map_empty_input() {
		let node = map(Vec::<u32>::new(), |n| Node::Text(n.to_string().into()));
		assert_eq!(node.render_to_string(), "");
	}

	#[rstest]
	fn test_map_transform_returning_none() {
		let node = map(1..=5, |n: &i32| {
			if n % 2 == 1 {
				Some(Node::Text(n.to_string().into()))
			} else {
				None
			}
		});
		assert_eq!(node.render_to_string(), "135");
	}

	#[rstest]
	fn test_map_renders_repeatably() {
		let node = map(["a", "b"], |s| create_attr("data-x", *s));
		let first = node.render_to_string();
		assert_eq!(first, node.render_to_string());
		assert_eq!(first, r#" data-x="a" data-x="b""#);
	}

	#[rstest]
	fn test_map_calls_transform_once_per_item_per_render() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let node = map(0..4, move |n: &u32| {
			counter.fetch_add(1, Ordering::SeqCst);
			Node::Text(n.to_string().into())
		});

		assert_eq!(calls.load(Ordering::SeqCst), 0);
		assert_eq!(node.render_to_string(), "0123");
		assert_eq!(calls.load(Ordering::SeqCst), 4);
		node.render_to_string();
		assert_eq!(calls.load(Ordering::SeqCst), 8);
	}

	#[rstest]
	fn test_mapper_len_and_debug() {
		let mapper = Mapper::new(vec![1, 2, 3], |n: &i32| Node::Text(n.to_string().into()));
		assert_eq!(mapper.len(), 3);
		assert!(!mapper.is_empty());
		assert!(format!("{:?}", mapper).contains("items: 3"));
	}

	#[rstest]
	fn test_doctype() {
		let node = doctype(create_element("html", []));
		assert_eq!(node.render_to_string(), "<!DOCTYPE html><html></html>");
	}

	#[rstest]
	fn test_doctype_absent_child() {
		assert_eq!(doctype(None::<Node>).render_to_string(), "<!DOCTYPE html>");
	}

	#[rstest]
	#[case(true, "<div>foo</div>")]
	#[case(false, "")]
	fn test_if_then(#[case] condition: bool, #[case] expected: &str) {
		let node = if_then(condition, div([text("foo")]));
		assert_eq!(node.render_to_string(), expected);
	}

	#[rstest]
	#[case(true, "<div>foo</div>")]
	#[case(false, "<div>bar</div>")]
	fn test_if_else(#[case] condition: bool, #[case] expected: &str) {
		let node = if_else(condition, div([text("foo")]), div([text("bar")]));
		assert_eq!(node.render_to_string(), expected);
	}

	#[rstest]
	fn test_if_then_false_is_shared_empty() {
		assert!(if_then(false, text("x")).is_empty());
		assert!(empty().is_empty());
	}

	#[rstest]
	fn test_conditional_branches_are_built_eagerly() {
		let built = AtomicUsize::new(0);
		let build = |label: &'static str| {
			built.fetch_add(1, Ordering::SeqCst);
			text(label)
		};

		let node = if_else(true, build("yes"), build("no"));
		assert_eq!(node.render_to_string(), "yes");
		assert_eq!(built.load(Ordering::SeqCst), 2);

		let node = if_then(false, build("skipped"));
		assert_eq!(node.render_to_string(), "");
		assert_eq!(built.load(Ordering::SeqCst), 3);
	}
}
