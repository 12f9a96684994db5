//! Attribute constructors.
//!
//! Valued attributes take anything convertible into a string and escape it on
//! render. Boolean attributes take no value and render as a bare name.
//!
//! Names that are Rust keywords, or that an element constructor already uses,
//! carry an `_attr` suffix: [`as_attr`], [`async_attr`], [`cite_attr`],
//! [`for_attr`], [`form_attr`], [`loop_attr`] and [`type_attr`].

use std::borrow::Cow;

use crate::attribute::{create_attr, create_attr_boolean};
use crate::node::Node;

macro_rules! define_attr {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name(value: impl Into<Cow<'static, str>>) -> Node {
			create_attr($attr, value)
		}
	};
}

macro_rules! define_bool_attr {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name() -> Node {
			create_attr_boolean($attr)
		}
	};
}

/// Sets a `data-*` attribute.
///
/// # Examples
///
/// ```
/// use rio_dom::{Render, data, div};
///
/// let node = div([data("user-id", "42")]);
/// assert_eq!(node.render_to_string(), r#"<div data-user-id="42"></div>"#);
/// ```
pub fn data(name: &str, value: impl Into<Cow<'static, str>>) -> Node {
	create_attr(format!("data-{}", name), value)
}

/// Sets an `aria-*` attribute.
pub fn aria(name: &str, value: impl Into<Cow<'static, str>>) -> Node {
	create_attr(format!("aria-{}", name), value)
}

define_attr!(
	/// Sets the `accept` attribute.
	accept, "accept"
);

define_attr!(
	/// Sets the `accesskey` attribute.
	accesskey, "accesskey"
);

define_attr!(
	/// Sets the `action` attribute.
	action, "action"
);

define_bool_attr!(
	/// Sets the boolean `allowfullscreen` attribute.
	allowfullscreen, "allowfullscreen"
);

define_attr!(
	/// Sets the `alt` attribute.
	alt, "alt"
);

define_attr!(
	/// Sets the `as` attribute.
	as_attr, "as"
);

define_bool_attr!(
	/// Sets the boolean `async` attribute.
	async_attr, "async"
);

define_attr!(
	/// Sets the `autocapitalize` attribute.
	autocapitalize, "autocapitalize"
);

define_attr!(
	/// Sets the `autocomplete` attribute.
	autocomplete, "autocomplete"
);

define_bool_attr!(
	/// Sets the boolean `autofocus` attribute.
	autofocus, "autofocus"
);

define_bool_attr!(
	/// Sets the boolean `autoplay` attribute.
	autoplay, "autoplay"
);

define_attr!(
	/// Sets the `charset` attribute.
	charset, "charset"
);

define_bool_attr!(
	/// Sets the boolean `checked` attribute.
	checked, "checked"
);

define_attr!(
	/// Sets the `cite` attribute.
	cite_attr, "cite"
);

define_attr!(
	/// Sets the `class` attribute.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let node = div([class("btn btn-primary")]);
	/// assert_eq!(node.render_to_string(), r#"<div class="btn btn-primary"></div>"#);
	/// ```
	class, "class"
);

define_attr!(
	/// Sets the `cols` attribute.
	cols, "cols"
);

define_attr!(
	/// Sets the `colspan` attribute.
	colspan, "colspan"
);

define_attr!(
	/// Sets the `content` attribute.
	content, "content"
);

define_attr!(
	/// Sets the `contenteditable` attribute.
	contenteditable, "contenteditable"
);

define_bool_attr!(
	/// Sets the boolean `controls` attribute.
	controls, "controls"
);

define_attr!(
	/// Sets the `crossorigin` attribute.
	crossorigin, "crossorigin"
);

define_attr!(
	/// Sets the `datetime` attribute.
	datetime, "datetime"
);

define_bool_attr!(
	/// Sets the boolean `defer` attribute.
	defer, "defer"
);

define_attr!(
	/// Sets the `dir` attribute.
	dir, "dir"
);

define_bool_attr!(
	/// Sets the boolean `disabled` attribute.
	///
	/// ## Example
	///
	/// ```
	/// use rio_dom::*;
	///
	/// let node = button([disabled(), text("Save")]);
	/// assert_eq!(node.render_to_string(), r#"<button disabled>Save</button>"#);
	/// ```
	disabled, "disabled"
);

define_attr!(
	/// Sets the `download` attribute.
	download, "download"
);

define_attr!(
	/// Sets the `draggable` attribute.
	draggable, "draggable"
);

define_attr!(
	/// Sets the `enctype` attribute.
	enctype, "enctype"
);

define_attr!(
	/// Sets the `enterkeyhint` attribute.
	enterkeyhint, "enterkeyhint"
);

define_attr!(
	/// Sets the `for` attribute.
	for_attr, "for"
);

define_attr!(
	/// Sets the `form` attribute.
	form_attr, "form"
);

define_bool_attr!(
	/// Sets the boolean `formnovalidate` attribute.
	formnovalidate, "formnovalidate"
);

define_attr!(
	/// Sets the `headers` attribute.
	headers, "headers"
);

define_attr!(
	/// Sets the `height` attribute.
	height, "height"
);

define_bool_attr!(
	/// Sets the boolean `hidden` attribute.
	hidden, "hidden"
);

define_attr!(
	/// Sets the `href` attribute. The value is escaped, not validated.
	href, "href"
);

define_attr!(
	/// Sets the `hreflang` attribute.
	hreflang, "hreflang"
);

define_attr!(
	/// Sets the `http-equiv` attribute.
	http_equiv, "http-equiv"
);

define_attr!(
	/// Sets the `id` attribute.
	id, "id"
);

define_bool_attr!(
	/// Sets the boolean `inert` attribute.
	inert, "inert"
);

define_attr!(
	/// Sets the `inputmode` attribute.
	inputmode, "inputmode"
);

define_attr!(
	/// Sets the `integrity` attribute.
	integrity, "integrity"
);

define_attr!(
	/// Sets the `itemid` attribute.
	itemid, "itemid"
);

define_attr!(
	/// Sets the `itemprop` attribute.
	itemprop, "itemprop"
);

define_attr!(
	/// Sets the `itemref` attribute.
	itemref, "itemref"
);

define_bool_attr!(
	/// Sets the boolean `itemscope` attribute.
	itemscope, "itemscope"
);

define_attr!(
	/// Sets the `itemtype` attribute.
	itemtype, "itemtype"
);

define_attr!(
	/// Sets the `lang` attribute.
	lang, "lang"
);

define_attr!(
	/// Sets the `list` attribute.
	list, "list"
);

define_attr!(
	/// Sets the `loading` attribute.
	loading, "loading"
);

define_bool_attr!(
	/// Sets the boolean `loop` attribute.
	loop_attr, "loop"
);

define_attr!(
	/// Sets the `max` attribute.
	max, "max"
);

define_attr!(
	/// Sets the `maxlength` attribute.
	maxlength, "maxlength"
);

define_attr!(
	/// Sets the `media` attribute.
	media, "media"
);

define_attr!(
	/// Sets the `method` attribute.
	method, "method"
);

define_attr!(
	/// Sets the `min` attribute.
	min, "min"
);

define_attr!(
	/// Sets the `minlength` attribute.
	minlength, "minlength"
);

define_bool_attr!(
	/// Sets the boolean `multiple` attribute.
	multiple, "multiple"
);

define_bool_attr!(
	/// Sets the boolean `muted` attribute.
	muted, "muted"
);

define_attr!(
	/// Sets the `name` attribute.
	name, "name"
);

define_bool_attr!(
	/// Sets the boolean `nomodule` attribute.
	nomodule, "nomodule"
);

define_attr!(
	/// Sets the `nonce` attribute.
	nonce, "nonce"
);

define_bool_attr!(
	/// Sets the boolean `novalidate` attribute.
	novalidate, "novalidate"
);

define_attr!(
	/// Sets the `onload` attribute. The handler source is escaped like any other value.
	onload, "onload"
);

define_bool_attr!(
	/// Sets the boolean `open` attribute.
	open, "open"
);

define_attr!(
	/// Sets the `part` attribute.
	part, "part"
);

define_attr!(
	/// Sets the `pattern` attribute.
	pattern, "pattern"
);

define_attr!(
	/// Sets the `placeholder` attribute.
	placeholder, "placeholder"
);

define_attr!(
	/// Sets the `popover` attribute.
	popover, "popover"
);

define_attr!(
	/// Sets the `poster` attribute.
	poster, "poster"
);

define_attr!(
	/// Sets the `preload` attribute.
	preload, "preload"
);

define_attr!(
	/// Sets the `property` attribute.
	property, "property"
);

define_bool_attr!(
	/// Sets the boolean `readonly` attribute.
	readonly, "readonly"
);

define_attr!(
	/// Sets the `referrerpolicy` attribute.
	referrerpolicy, "referrerpolicy"
);

define_attr!(
	/// Sets the `rel` attribute.
	rel, "rel"
);

define_bool_attr!(
	/// Sets the boolean `required` attribute.
	required, "required"
);

define_attr!(
	/// Sets the `role` attribute.
	role, "role"
);

define_attr!(
	/// Sets the `rows` attribute.
	rows, "rows"
);

define_attr!(
	/// Sets the `rowspan` attribute.
	rowspan, "rowspan"
);

define_attr!(
	/// Sets the `sandbox` attribute.
	sandbox, "sandbox"
);

define_attr!(
	/// Sets the `scope` attribute.
	scope, "scope"
);

define_bool_attr!(
	/// Sets the boolean `selected` attribute.
	selected, "selected"
);

define_attr!(
	/// Sets the `size` attribute.
	size, "size"
);

define_attr!(
	/// Sets the `sizes` attribute.
	sizes, "sizes"
);

define_attr!(
	/// Sets the `slot` attribute.
	slot, "slot"
);

define_attr!(
	/// Sets the `spellcheck` attribute.
	spellcheck, "spellcheck"
);

define_attr!(
	/// Sets the `src` attribute.
	src, "src"
);

define_attr!(
	/// Sets the `srcset` attribute.
	srcset, "srcset"
);

define_attr!(
	/// Sets the `step` attribute.
	step, "step"
);

define_attr!(
	/// Sets the inline `style` attribute.
	///
	/// The `<style>` element is [`style_el`](crate::style_el).
	style, "style"
);

define_attr!(
	/// Sets the `tabindex` attribute.
	tabindex, "tabindex"
);

define_attr!(
	/// Sets the `target` attribute.
	target, "target"
);

define_attr!(
	/// Sets the `title` attribute.
	///
	/// The `<title>` element is [`title_el`](crate::title_el).
	title, "title"
);

define_attr!(
	/// Sets the `translate` attribute.
	translate, "translate"
);

define_attr!(
	/// Sets the `type` attribute.
	type_attr, "type"
);

define_attr!(
	/// Sets the `value` attribute.
	value, "value"
);

define_attr!(
	/// Sets the `width` attribute.
	width, "width"
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::Render;
	use rstest::rstest;

	#[rstest]
	#[case(class("a b"), r#" class="a b""#)]
	#[case(id("main"), r#" id="main""#)]
	#[case(for_attr("email"), r#" for="email""#)]
	#[case(type_attr("submit"), r#" type="submit""#)]
	#[case(as_attr("font"), r#" as="font""#)]
	#[case(cite_attr("https://example.com"), r#" cite="https://example.com""#)]
	#[case(form_attr("signup"), r#" form="signup""#)]
	#[case(http_equiv("refresh"), r#" http-equiv="refresh""#)]
	#[case(data("id", "7"), r#" data-id="7""#)]
	#[case(aria("label", "Close"), r#" aria-label="Close""#)]
	fn test_valued_attributes(#[case] node: Node, #[case] expected: &str) {
		assert_eq!(node.render_to_string(), expected);
	}

	#[rstest]
	#[case(async_attr(), " async")]
	#[case(loop_attr(), " loop")]
	#[case(checked(), " checked")]
	#[case(disabled(), " disabled")]
	#[case(hidden(), " hidden")]
	#[case(required(), " required")]
	fn test_boolean_attributes(#[case] node: Node, #[case] expected: &str) {
		assert!(node.as_attribute().unwrap().is_boolean());
		assert_eq!(node.render_to_string(), expected);
	}

	#[rstest]
	fn test_attribute_value_is_escaped() {
		assert_eq!(
			value(r#""><script>"#).render_to_string(),
			r#" value="&#34;&gt;&lt;script&gt;""#
		);
	}

	#[rstest]
	fn test_owned_value() {
		let width_px = format!("{}", 640);
		assert_eq!(width(width_px).render_to_string(), r#" width="640""#);
	}
}
