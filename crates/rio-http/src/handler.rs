//! The request handler abstraction.
//!
//! ```rust
//! use rio_http::{Handler, Request, Response, Result};
//! use async_trait::async_trait;
//!
//! struct Ping;
//!
//! #[async_trait]
//! impl Handler for Ping {
//!     async fn handle(&self, _request: Request) -> Result<Response> {
//!         Ok(Response::ok().with_body("pong"))
//!     }
//! }
//! ```

use async_trait::async_trait;
use hyper::StatusCode;
use std::sync::Arc;

use crate::error::Result;
use crate::recorder::ResponseRecorder;
use crate::request::Request;
use crate::response::Response;
use crate::responses::json;
use crate::writer::http_error;

/// Handler trait for processing requests.
///
/// Handlers receive a request and produce a response or an error.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed.
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Lets `Arc<dyn Handler>` be shared across tasks and still be a handler.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// A handler that answers every request with the same `200 OK` message.
///
/// Built by [`basic_http`] or [`basic_json`].
#[derive(Debug, Clone)]
pub struct BasicHandler {
	message: String,
	is_json: bool,
}

/// Answers with `message` as plain text.
///
/// # Examples
///
/// ```
/// use rio_http::{Handler, Request, basic_http};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let response = basic_http("hi").handle(Request::builder().build().unwrap()).await.unwrap();
/// assert_eq!(response.body, "hi\n");
/// # });
/// ```
pub fn basic_http(message: impl Into<String>) -> BasicHandler {
	BasicHandler {
		message: message.into(),
		is_json: false,
	}
}

/// Answers with `{"message": message}`.
pub fn basic_json(message: impl Into<String>) -> BasicHandler {
	BasicHandler {
		message: message.into(),
		is_json: true,
	}
}

#[async_trait]
impl Handler for BasicHandler {
	async fn handle(&self, _request: Request) -> Result<Response> {
		let mut recorder = ResponseRecorder::new();
		if self.is_json {
			json(&mut recorder, StatusCode::OK, Some(self.message.as_str()))?;
		} else {
			http_error(&mut recorder, &self.message, StatusCode::OK)?;
		}
		Ok(recorder.into_response())
	}
}
