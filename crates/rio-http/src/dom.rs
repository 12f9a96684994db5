//! Serving node trees as HTTP responses.
//!
//! A [`DomHandler`] wraps a callback that inspects the request, may set
//! headers or a status on the response sink, and returns the tree to render.
//! The tree is rendered straight into the sink. If the callback returns
//! `None`, rendering fails, or either one panics, the handler answers with a
//! plain `500 Internal Server Error` instead.
//!
//! Nothing already written is ever taken back. When a render fails halfway,
//! the bytes that went out before the failure stay in the response and the
//! error text follows them.
//!
//! ## Example
//!
//! ```
//! use rio_dom::{div, text};
//! use rio_http::{Handler, Request, dom_handler};
//!
//! # tokio_test_block(async {
//! let handler = dom_handler(|_w, _req| Some(div([text("Hello, World!")])));
//! let response = handler.handle(Request::builder().build().unwrap()).await.unwrap();
//! assert_eq!(response.body, "<div>Hello, World!</div>");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use hyper::header::{CONNECTION, CONTENT_TYPE, HeaderValue};
use rio_dom::{Node, Render};

use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::options::HandlerOptions;
use crate::recorder::ResponseRecorder;
use crate::request::Request;
use crate::response::{Response, StreamingResponse};
use crate::streaming::{BodyStream, StreamingWriter};
use crate::writer::{ResponseWriter, internal_server_error};

/// Adapts a node-producing callback into an HTTP handler.
pub struct DomHandler<F> {
	render: F,
	options: HandlerOptions,
}

/// Wraps `render` in a [`DomHandler`] with default options.
pub fn dom_handler<F>(render: F) -> DomHandler<F>
where
	F: Fn(&mut dyn ResponseWriter, &Request) -> Option<Node> + Send + Sync,
{
	DomHandler::new(render)
}

impl<F> DomHandler<F>
where
	F: Fn(&mut dyn ResponseWriter, &Request) -> Option<Node> + Send + Sync,
{
	/// Creates a handler with [`HandlerOptions::default`].
	pub fn new(render: F) -> Self {
		Self {
			render,
			options: HandlerOptions::default(),
		}
	}

	/// Replaces the handler options.
	pub fn with_options(mut self, options: HandlerOptions) -> Self {
		self.options = options;
		self
	}

	/// Returns the options this handler renders with.
	pub fn options(&self) -> &HandlerOptions {
		&self.options
	}

	/// Runs the callback and renders its tree into `w`.
	///
	/// On success the response carries whatever status the callback set
	/// (`200 OK` if none) and, unless the callback chose one, the configured
	/// content type.
	///
	/// # Errors
	///
	/// Returns [`Error::NilNode`] if the callback returned `None`,
	/// [`Error::Render`] with the sink's error if rendering failed, or
	/// [`Error::Panic`] if the callback or the render panicked. In every case
	/// the 500 response has already been written to `w`.
	pub fn serve(&self, w: &mut dyn ResponseWriter, request: &Request) -> Result<()> {
		let result = self.render_into(w, request);
		if let Err(err) = &result {
			self.write_failure(w, request, err);
		}
		result
	}

	/// Runs the callback and the render, catching panics from either.
	fn render_into(&self, w: &mut dyn ResponseWriter, request: &Request) -> Result<()> {
		let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<()> {
			let node = (self.render)(&mut *w, request).ok_or(Error::NilNode)?;
			self.apply_content_type(&mut *w);
			node.render(&mut *w).and_then(|()| w.flush())?;
			Ok(())
		}));

		outcome.unwrap_or_else(|payload| Err(Error::Panic(panic_message(payload.as_ref()))))
	}

	fn apply_content_type(&self, w: &mut dyn ResponseWriter) {
		if w.is_committed() || w.headers().contains_key(CONTENT_TYPE) {
			return;
		}
		match HeaderValue::from_str(&self.options.content_type) {
			Ok(value) => {
				w.headers_mut().insert(CONTENT_TYPE, value);
			}
			Err(e) => {
				tracing::warn!(
					content_type = %self.options.content_type,
					error = %e,
					"invalid default content type"
				);
			}
		}
	}

	fn write_failure(&self, w: &mut dyn ResponseWriter, request: &Request, err: &Error) {
		tracing::error!(
			method = %request.method,
			uri = %request.uri,
			committed = w.is_committed(),
			error = %err,
			"failed to serve dom node"
		);

		if matches!(err, Error::Panic(_)) && !w.is_committed() {
			w.headers_mut()
				.insert(CONNECTION, HeaderValue::from_static("close"));
		}
		if let Err(e) = internal_server_error(w) {
			tracing::debug!(error = %e, "could not write error response");
		}
	}
}

impl<F> DomHandler<F>
where
	F: Fn(&mut dyn ResponseWriter, &Request) -> Option<Node> + Send + Sync + 'static,
{
	/// Renders on the blocking pool and streams the body as it is produced.
	///
	/// Resolves as soon as the response head commits, which is before the
	/// body is complete. If the render fails or panics after that point, the
	/// error text is appended and the body stream then ends with an error
	/// item instead of a clean end.
	///
	/// # Errors
	///
	/// Returns [`Error::Join`] if the render task died before the head was
	/// committed.
	pub async fn stream(self: Arc<Self>, request: Request) -> Result<StreamingResponse<BodyStream>> {
		let (mut writer, head_rx, body) = StreamingWriter::new(&self.options);

		let task = tokio::task::spawn_blocking(move || {
			let outcome = self.render_into(&mut writer, &request);
			let closed = match &outcome {
				Ok(()) => writer.finish(),
				Err(err) => {
					let truncated = writer.is_committed();
					self.write_failure(&mut writer, &request, err);
					if truncated {
						writer.abort(err.to_string())
					} else {
						writer.finish()
					}
				}
			};
			if let Err(e) = closed {
				tracing::debug!(error = %e, "response stream closed before completion");
			}
			outcome
		});

		match head_rx.await {
			Ok(head) => Ok(StreamingResponse {
				status: head.status,
				headers: head.headers,
				stream: body,
			}),
			Err(_) => match task.await {
				Err(e) => Err(Error::Join(e.to_string())),
				Ok(Err(e)) => Err(e),
				Ok(Ok(())) => Err(Error::Join("response head was never sent".to_string())),
			},
		}
	}
}

#[async_trait]
impl<F> Handler for DomHandler<F>
where
	F: Fn(&mut dyn ResponseWriter, &Request) -> Option<Node> + Send + Sync,
{
	/// Renders into memory and returns the complete response.
	///
	/// Failures, panics included, are already reflected in the response, so
	/// this never returns `Err`.
	async fn handle(&self, request: Request) -> Result<Response> {
		let mut recorder = ResponseRecorder::new();
		if let Err(e) = self.serve(&mut recorder, &request) {
			tracing::debug!(error = %e, "dom handler answered with an error response");
		}
		Ok(recorder.into_response())
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic payload".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::StatusCode;
	use rio_dom::{div, li, map, text, ul};
	use rstest::rstest;

	fn request() -> Request {
		Request::builder().uri("/").build().unwrap()
	}

	#[rstest]
	fn test_serve_renders_node() {
		let handler = dom_handler(|_w, _req| Some(div([text("Hello, World!")])));
		let mut recorder = ResponseRecorder::new();

		handler.serve(&mut recorder, &request()).unwrap();

		assert_eq!(recorder.status(), StatusCode::OK);
		assert_eq!(recorder.body_string(), "<div>Hello, World!</div>");
		assert_eq!(
			recorder.headers().get(CONTENT_TYPE).unwrap(),
			"text/html; charset=utf-8"
		);
	}

	#[rstest]
	fn test_serve_nil_node_writes_500() {
		let handler = dom_handler(|_w, _req| None);
		let mut recorder = ResponseRecorder::new();

		let err = handler.serve(&mut recorder, &request()).unwrap_err();

		assert!(matches!(err, Error::NilNode));
		assert_eq!(recorder.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(recorder.body_string(), "Internal Server Error\n");
	}

	#[rstest]
	fn test_callback_status_and_content_type_are_kept() {
		let handler = dom_handler(|w, _req| {
			w.headers_mut()
				.insert(CONTENT_TYPE, HeaderValue::from_static("image/svg+xml"));
			w.write_header(StatusCode::NOT_FOUND);
			Some(text("missing"))
		});
		let mut recorder = ResponseRecorder::new();

		handler.serve(&mut recorder, &request()).unwrap();

		assert_eq!(recorder.status(), StatusCode::NOT_FOUND);
		assert_eq!(recorder.headers().get(CONTENT_TYPE).unwrap(), "image/svg+xml");
		assert_eq!(recorder.body_string(), "missing");
	}

	#[rstest]
	fn test_options_content_type() {
		let handler = dom_handler(|_w, _req| Some(text("x")))
			.with_options(HandlerOptions::new().with_content_type("text/plain"));
		let mut recorder = ResponseRecorder::new();

		handler.serve(&mut recorder, &request()).unwrap();

		assert_eq!(handler.options().content_type, "text/plain");
		assert_eq!(recorder.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
	}

	#[rstest]
	fn test_serve_panicking_callback_writes_500() {
		let handler = dom_handler(|_w, _req| -> Option<Node> { panic!("callback exploded") });
		let mut recorder = ResponseRecorder::new();

		let err = handler.serve(&mut recorder, &request()).unwrap_err();

		assert!(matches!(&err, Error::Panic(message) if message == "callback exploded"));
		assert_eq!(recorder.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(recorder.headers().get(CONNECTION).unwrap(), "close");
		assert_eq!(recorder.body_string(), "Internal Server Error\n");
	}

	#[rstest]
	fn test_serve_panic_mid_render_keeps_partial_body() {
		let handler = dom_handler(|_w, _req| {
			Some(ul([map(0..3u32, |n: &u32| {
				if *n == 2 {
					panic!("item {} is broken", n);
				}
				li([text(n.to_string())])
			})]))
		});
		let mut recorder = ResponseRecorder::new();

		let err = handler.serve(&mut recorder, &request()).unwrap_err();

		assert!(matches!(&err, Error::Panic(message) if message == "item 2 is broken"));
		assert_eq!(recorder.status(), StatusCode::OK);
		assert!(recorder.headers().get(CONNECTION).is_none());
		assert_eq!(
			recorder.body_string(),
			"<ul><li>0</li><li>1</li>Internal Server Error\n"
		);
	}
}
