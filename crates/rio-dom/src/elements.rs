//! Element constructors, one per HTML tag.
//!
//! Every constructor takes its children as any iterable of [`Node`]s and
//! returns a [`Node::Element`]. Void tags are built with
//! [`create_element_void`], which drops content children when rendering.
//!
//! A few names carry an `_el` suffix because an attribute or combinator
//! already uses the bare name: [`data_el`], [`map_el`], [`slot_el`],
//! [`style_el`] and [`title_el`].

use crate::element::{create_element, create_element_void};
use crate::node::Node;

macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
			create_element($tag, children)
		}
	};
}

macro_rules! define_void_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
			create_element_void($tag, children)
		}
	};
}

define_element!(
	/// Creates an `<a>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let link = a([href("/about"), text("About")]);
	/// assert_eq!(link.render_to_string(), r#"<a href="/about">About</a>"#);
	/// ```
	a, "a"
);

define_element!(
	/// Creates an `<abbr>` element.
	abbr, "abbr"
);

define_element!(
	/// Creates an `<address>` element.
	address, "address"
);

define_void_element!(
	/// Creates an `<area>` element.
	area, "area"
);

define_element!(
	/// Creates an `<article>` element.
	article, "article"
);

define_element!(
	/// Creates an `<aside>` element.
	aside, "aside"
);

define_element!(
	/// Creates an `<audio>` element.
	audio, "audio"
);

define_element!(
	/// Creates a `<b>` element.
	b, "b"
);

define_void_element!(
	/// Creates a `<base>` element.
	base, "base"
);

define_element!(
	/// Creates a `<bdi>` element.
	bdi, "bdi"
);

define_element!(
	/// Creates a `<bdo>` element.
	bdo, "bdo"
);

define_element!(
	/// Creates a `<blockquote>` element.
	blockquote, "blockquote"
);

define_element!(
	/// Creates a `<body>` element.
	body, "body"
);

define_void_element!(
	/// Creates a `<br>` element.
	///
	/// Content children are dropped; `br` never has a closing tag.
	br, "br"
);

define_element!(
	/// Creates a `<button>` element.
	button, "button"
);

define_element!(
	/// Creates a `<canvas>` element.
	canvas, "canvas"
);

define_element!(
	/// Creates a `<caption>` element.
	caption, "caption"
);

define_element!(
	/// Creates a `<cite>` element.
	cite, "cite"
);

define_element!(
	/// Creates a `<code>` element.
	code, "code"
);

define_void_element!(
	/// Creates a `<col>` element.
	col, "col"
);

define_element!(
	/// Creates a `<colgroup>` element.
	colgroup, "colgroup"
);

define_element!(
	/// Creates a `<data>` element.
	///
	/// Named `data_el` so that [`data`](crate::data) stays the `data-*` attribute.
	data_el, "data"
);

define_element!(
	/// Creates a `<datalist>` element.
	datalist, "datalist"
);

define_element!(
	/// Creates a `<dd>` element.
	dd, "dd"
);

define_element!(
	/// Creates a `<del>` element.
	del, "del"
);

define_element!(
	/// Creates a `<details>` element.
	details, "details"
);

define_element!(
	/// Creates a `<dfn>` element.
	dfn, "dfn"
);

define_element!(
	/// Creates a `<dialog>` element.
	dialog, "dialog"
);

define_element!(
	/// Creates a `<div>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let node = div([class("container"), text("Content")]);
	/// assert_eq!(node.render_to_string(), r#"<div class="container">Content</div>"#);
	/// ```
	div, "div"
);

define_element!(
	/// Creates a `<dl>` element.
	dl, "dl"
);

define_element!(
	/// Creates a `<dt>` element.
	dt, "dt"
);

define_element!(
	/// Creates an `<em>` element.
	em, "em"
);

define_void_element!(
	/// Creates an `<embed>` element.
	embed, "embed"
);

define_element!(
	/// Creates a `<fieldset>` element.
	fieldset, "fieldset"
);

define_element!(
	/// Creates a `<figcaption>` element.
	figcaption, "figcaption"
);

define_element!(
	/// Creates a `<figure>` element.
	figure, "figure"
);

define_element!(
	/// Creates a `<footer>` element.
	footer, "footer"
);

define_element!(
	/// Creates a `<form>` element.
	form, "form"
);

define_element!(
	/// Creates an `<h1>` element.
	h1, "h1"
);

define_element!(
	/// Creates an `<h2>` element.
	h2, "h2"
);

define_element!(
	/// Creates an `<h3>` element.
	h3, "h3"
);

define_element!(
	/// Creates an `<h4>` element.
	h4, "h4"
);

define_element!(
	/// Creates an `<h5>` element.
	h5, "h5"
);

define_element!(
	/// Creates an `<h6>` element.
	h6, "h6"
);

define_element!(
	/// Creates a `<head>` element.
	head, "head"
);

define_element!(
	/// Creates a `<header>` element.
	header, "header"
);

define_void_element!(
	/// Creates an `<hr>` element.
	hr, "hr"
);

define_element!(
	/// Creates an `<html>` element.
	html, "html"
);

define_element!(
	/// Creates an `<i>` element.
	i, "i"
);

define_element!(
	/// Creates an `<iframe>` element.
	///
	/// Rendered with a closing tag, as the HTML standard requires.
	iframe, "iframe"
);

define_void_element!(
	/// Creates an `<img>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let image = img([src("logo.png"), alt("Logo")]);
	/// assert_eq!(image.render_to_string(), r#"<img src="logo.png" alt="Logo">"#);
	/// ```
	img, "img"
);

define_void_element!(
	/// Creates an `<input>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let field = input([type_attr("email"), name("email"), required()]);
	/// assert_eq!(field.render_to_string(), r#"<input type="email" name="email" required>"#);
	/// ```
	input, "input"
);

define_element!(
	/// Creates an `<ins>` element.
	ins, "ins"
);

define_element!(
	/// Creates a `<kbd>` element.
	kbd, "kbd"
);

define_element!(
	/// Creates a `<label>` element.
	label, "label"
);

define_element!(
	/// Creates a `<legend>` element.
	legend, "legend"
);

define_element!(
	/// Creates an `<li>` element.
	li, "li"
);

define_void_element!(
	/// Creates a `<link>` element.
	link, "link"
);

define_element!(
	/// Creates a `<main>` element.
	main, "main"
);

define_element!(
	/// Creates a `<map>` element.
	///
	/// Named `map_el` so that [`map`](crate::map) stays the lazy list combinator.
	map_el, "map"
);

define_element!(
	/// Creates a `<mark>` element.
	mark, "mark"
);

define_element!(
	/// Creates a `<menu>` element.
	menu, "menu"
);

define_void_element!(
	/// Creates a `<meta>` element.
	meta, "meta"
);

define_element!(
	/// Creates a `<meter>` element.
	meter, "meter"
);

define_element!(
	/// Creates a `<nav>` element.
	nav, "nav"
);

define_element!(
	/// Creates a `<noscript>` element.
	noscript, "noscript"
);

define_element!(
	/// Creates an `<object>` element.
	object, "object"
);

define_element!(
	/// Creates an `<ol>` element.
	ol, "ol"
);

define_element!(
	/// Creates an `<optgroup>` element.
	optgroup, "optgroup"
);

define_element!(
	/// Creates an `<option>` element.
	option, "option"
);

define_element!(
	/// Creates an `<output>` element.
	output, "output"
);

define_element!(
	/// Creates a `<p>` element.
	p, "p"
);

define_void_element!(
	/// Creates a `<param>` element.
	param, "param"
);

define_element!(
	/// Creates a `<picture>` element.
	picture, "picture"
);

define_element!(
	/// Creates a `<pre>` element.
	pre, "pre"
);

define_element!(
	/// Creates a `<progress>` element.
	progress, "progress"
);

define_element!(
	/// Creates a `<q>` element.
	q, "q"
);

define_element!(
	/// Creates an `<s>` element.
	s, "s"
);

define_element!(
	/// Creates a `<samp>` element.
	samp, "samp"
);

define_element!(
	/// Creates a `<script>` element.
	///
	/// Children are escaped like any other text; wrap inline code in [`raw`](crate::raw).
	script, "script"
);

define_element!(
	/// Creates a `<section>` element.
	section, "section"
);

define_element!(
	/// Creates a `<select>` element.
	select, "select"
);

define_element!(
	/// Creates a `<slot>` element.
	///
	/// Named `slot_el` so that [`slot`](crate::slot) stays the attribute.
	slot_el, "slot"
);

define_element!(
	/// Creates a `<small>` element.
	small, "small"
);

define_void_element!(
	/// Creates a `<source>` element.
	source, "source"
);

define_element!(
	/// Creates a `<span>` element.
	span, "span"
);

define_element!(
	/// Creates a `<strong>` element.
	strong, "strong"
);

define_element!(
	/// Creates a `<style>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let css = style_el([raw("p > a { color: red; }")]);
	/// assert_eq!(css.render_to_string(), r#"<style>p > a { color: red; }</style>"#);
	/// ```
	style_el, "style"
);

define_element!(
	/// Creates a `<sub>` element.
	sub, "sub"
);

define_element!(
	/// Creates a `<summary>` element.
	summary, "summary"
);

define_element!(
	/// Creates a `<sup>` element.
	sup, "sup"
);

define_element!(
	/// Creates a `<table>` element.
	table, "table"
);

define_element!(
	/// Creates a `<tbody>` element.
	tbody, "tbody"
);

define_element!(
	/// Creates a `<td>` element.
	td, "td"
);

define_element!(
	/// Creates a `<template>` element.
	template, "template"
);

define_element!(
	/// Creates a `<textarea>` element.
	textarea, "textarea"
);

define_element!(
	/// Creates a `<tfoot>` element.
	tfoot, "tfoot"
);

define_element!(
	/// Creates a `<th>` element.
	th, "th"
);

define_element!(
	/// Creates a `<thead>` element.
	thead, "thead"
);

define_element!(
	/// Creates a `<time>` element.
	time, "time"
);

define_element!(
	/// Creates a `<title>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let node = title_el([text("Home")]);
	/// assert_eq!(node.render_to_string(), r#"<title>Home</title>"#);
	/// ```
	title_el, "title"
);

define_element!(
	/// Creates a `<tr>` element.
	tr, "tr"
);

define_void_element!(
	/// Creates a `<track>` element.
	track, "track"
);

define_element!(
	/// Creates a `<u>` element.
	u, "u"
);

define_element!(
	/// Creates a `<ul>` element.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let list = ul([li([text("one")]), li([text("two")])]);
	/// assert_eq!(list.render_to_string(), r#"<ul><li>one</li><li>two</li></ul>"#);
	/// ```
	ul, "ul"
);

define_element!(
	/// Creates a `<var>` element.
	var, "var"
);

define_element!(
	/// Creates a `<video>` element.
	video, "video"
);

define_void_element!(
	/// Creates a `<wbr>` element.
	///
	/// A void element; it never has content or a closing tag.
	wbr, "wbr"
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attributes::{class, href, src};
	use crate::node::Render;
	use crate::text::text;
	use rstest::rstest;

	#[rstest]
	#[case(div([]), "<div></div>")]
	#[case(span([text("x")]), "<span>x</span>")]
	#[case(h1([text("Title")]), "<h1>Title</h1>")]
	#[case(data_el([]), "<data></data>")]
	#[case(map_el([]), "<map></map>")]
	#[case(slot_el([]), "<slot></slot>")]
	#[case(style_el([]), "<style></style>")]
	#[case(title_el([]), "<title></title>")]
	#[case(iframe([src("/embed")]), r#"<iframe src="/embed"></iframe>"#)]
	#[case(a([href("/"), text("Home")]), r#"<a href="/">Home</a>"#)]
	fn test_normal_elements(#[case] node: Node, #[case] expected: &str) {
		assert_eq!(node.render_to_string(), expected);
	}

	#[rstest]
	#[case(area([]), "area")]
	#[case(base([]), "base")]
	#[case(br([]), "br")]
	#[case(col([]), "col")]
	#[case(embed([]), "embed")]
	#[case(hr([]), "hr")]
	#[case(img([]), "img")]
	#[case(input([]), "input")]
	#[case(link([]), "link")]
	#[case(meta([]), "meta")]
	#[case(param([]), "param")]
	#[case(source([]), "source")]
	#[case(track([]), "track")]
	#[case(wbr([]), "wbr")]
	fn test_void_elements(#[case] node: Node, #[case] tag: &str) {
		let el = node.as_element().unwrap();
		assert!(el.is_void());
		assert_eq!(el.tag_name(), tag);
		assert_eq!(node.render_to_string(), format!("<{}>", tag));
	}

	#[rstest]
	fn test_void_element_keeps_attributes_drops_text() {
		let node = br([class("gap"), text("lost")]);
		assert_eq!(node.render_to_string(), r#"<br class="gap">"#);
	}
}
