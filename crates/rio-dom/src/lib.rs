//! Rio DOM - HTML document trees rendered straight into a byte sink
//!
//! Pages are plain values: a small closed set of node variants composed into a
//! tree in memory, then serialized depth-first into any [`std::io::Write`].
//! Nothing is buffered unless the sink buffers.
//!
//! ## Features
//!
//! - **Contextual escaping**: text and attribute values are escaped, raw text
//!   is not, and tag and attribute names are trusted as given
//! - **Attribute hoisting**: attribute children render inside the opening tag
//!   regardless of where they appear among an element's children
//! - **Void elements**: `<img>`, `<br>` and friends never emit content or a
//!   closing tag
//! - **Lazy lists**: [`map`] transforms one item at a time during render
//! - **Fail fast**: the first sink error stops rendering and is returned as is
//!
//! ## Architecture
//!
//! - [`node`]: the [`Node`] enum, the [`Render`] contract and [`IntoNode`]
//! - [`element`] / [`attribute`]: the two structured leaves and their
//!   constructors
//! - [`text`]: escaped and raw text
//! - [`combinators`]: [`group`], [`map`], [`doctype`], [`if_then`], [`if_else`]
//! - [`elements`] / [`attributes`]: one constructor per tag and attribute
//! - [`escape`]: the escaping policy
//!
//! ## Example
//!
//! ```
//! use rio_dom::*;
//!
//! let page = doctype(html([
//!     head([title_el([text("Home")])]),
//!     body([div([class("container"), id("main"), p([text("Hello, World!")])])]),
//! ]));
//!
//! assert_eq!(
//!     page.render_to_string(),
//!     concat!(
//!         "<!DOCTYPE html><html><head><title>Home</title></head>",
//!         r#"<body><div class="container" id="main"><p>Hello, World!</p></div></body></html>"#,
//!     )
//! );
//! ```

pub mod attribute;
pub mod attributes;
pub mod combinators;
pub mod element;
pub mod elements;
pub mod escape;
pub mod node;
pub mod text;

pub use attribute::{Attribute, create_attr, create_attr_boolean};
pub use attributes::*;
pub use combinators::{Mapper, doctype, empty, group, if_else, if_then, map};
pub use element::{Element, create_element, create_element_void};
pub use elements::*;
pub use escape::{escape_html, needs_escaping, write_escaped, write_text};
pub use node::{DOCTYPE, IntoNode, Node, Render};
pub use text::{create_string, create_string_raw, raw, text};
