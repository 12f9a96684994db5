//! Rio HTTP - serve `rio-dom` trees over HTTP
//!
//! ## Overview
//!
//! - [`DomHandler`]: turns a `(sink, request) -> Option<Node>` callback into
//!   a [`Handler`], rendering buffered or streamed
//! - [`ResponseWriter`]: the response sink, with [`ResponseRecorder`]
//!   (in memory) and [`StreamingWriter`] (channel-backed) implementations
//! - [`http_error`] / [`AppError`]: plain-text and JSON error responses
//! - [`json`] and the status writers in [`responses`] (`http_not_found`,
//!   `json_created`, ...), plus [`basic_http`] / [`basic_json`] handlers
//! - [`Request`] / [`Response`] / [`StreamingResponse`]: request metadata and
//!   responses convertible into `hyper` types
//! - [`HandlerOptions`]: default content type and streaming buffer sizes
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use rio_dom::{li, map, text, ul};
//! use rio_http::{Request, dom_handler};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let handler = Arc::new(dom_handler(|_w, req| {
//!     let path = req.path().to_string();
//!     Some(ul([map(vec![path], |p| li([text(p.clone())]))]))
//! }));
//!
//! let response = handler.stream(Request::builder().uri("/docs").build().unwrap()).await.unwrap();
//! let body: Vec<_> = response.stream.map(|chunk| chunk.unwrap()).collect().await;
//! assert_eq!(body.concat(), b"<ul><li>/docs</li></ul>");
//! # });
//! ```

pub mod dom;
pub mod error;
pub mod handler;
pub mod options;
pub mod recorder;
pub mod request;
pub mod response;
pub mod responses;
pub mod streaming;
pub mod writer;

pub use dom::{DomHandler, dom_handler};
pub use error::{AppError, Error, Result};
pub use handler::{BasicHandler, Handler, basic_http, basic_json};
pub use options::HandlerOptions;
pub use recorder::ResponseRecorder;
pub use request::{Request, RequestBuilder};
pub use response::{BoxError, Response, StreamingResponse};
pub use responses::{
	http_bad_request, http_forbidden, http_moved_permanently, http_not_found, http_ok,
	http_unauthorized, json, json_bad_request, json_created, json_forbidden,
	json_internal_server_error, json_moved_permanently, json_no_content, json_not_found, json_ok,
	json_status, json_unauthorized,
};
pub use streaming::{BodyStream, ResponseHead, StreamingWriter};
pub use writer::{ResponseWriter, http_error, internal_server_error};
