//! # Rio
//!
//! Build HTML documents as Rust values and stream them straight into HTTP
//! responses.
//!
//! ## Crates
//!
//! - [`dom`]: the node tree, escaping, and one constructor per HTML element
//!   and attribute (`rio-dom`)
//! - [`http`]: response sinks, the DOM handler adapter and error responses
//!   (`rio-http`, behind the default `http` feature)
//!
//! ## Example
//!
//! ```
//! use rio::prelude::*;
//!
//! let page = doctype(html([body([
//!     h1([text("Todos")]),
//!     ul([map(vec!["write", "ship"], |t| li([text(*t)]))]),
//! ])]));
//!
//! assert_eq!(
//!     page.render_to_string(),
//!     "<!DOCTYPE html><html><body><h1>Todos</h1><ul><li>write</li><li>ship</li></ul></body></html>"
//! );
//! ```

pub mod dom;
#[cfg(feature = "http")]
pub mod http;

pub use rio_dom::{IntoNode, Node, Render};

#[cfg(feature = "http")]
pub use rio_http::{Error, Handler, Request, Response, Result, dom_handler};

/// Everything needed to build and render pages.
pub mod prelude {
	pub use rio_dom::*;

	#[cfg(feature = "http")]
	pub use rio_http::{Handler, HandlerOptions, Request, ResponseWriter, dom_handler};
}
