//! Serving node trees over HTTP
//!
//! Re-exports `rio-http`: [`DomHandler`] for callbacks that return trees,
//! [`ResponseWriter`] sinks, and the plain-text and JSON error helpers.

pub use rio_http::*;
