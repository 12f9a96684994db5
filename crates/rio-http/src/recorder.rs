//! An in-memory response sink.

use std::io;

use bytes::BytesMut;
use hyper::{HeaderMap, StatusCode};

use crate::response::Response;
use crate::writer::ResponseWriter;

/// A [`ResponseWriter`] that keeps the whole response in memory.
///
/// The headers seen at commit time are kept apart from the live map, so
/// [`into_response`](Self::into_response) returns what a client would have
/// received even if a callback kept editing headers afterwards.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use hyper::StatusCode;
/// use rio_http::{ResponseRecorder, ResponseWriter};
///
/// let mut recorder = ResponseRecorder::new();
/// recorder.write_header(StatusCode::CREATED);
/// recorder.write_all(b"done").unwrap();
///
/// let response = recorder.into_response();
/// assert_eq!(response.status, StatusCode::CREATED);
/// assert_eq!(response.body, "done");
/// ```
#[derive(Debug, Default)]
pub struct ResponseRecorder {
	status: Option<StatusCode>,
	headers: HeaderMap,
	committed_headers: Option<HeaderMap>,
	body: BytesMut,
}

impl ResponseRecorder {
	/// Creates an empty recorder with nothing committed.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the body written so far.
	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Returns the body written so far as text, replacing invalid UTF-8.
	pub fn body_string(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	/// Converts the recorded response into a [`Response`].
	pub fn into_response(self) -> Response {
		let mut response = Response::new(self.status.unwrap_or(StatusCode::OK));
		response.headers = self.committed_headers.unwrap_or(self.headers);
		response.with_body(self.body.freeze())
	}
}

impl io::Write for ResponseRecorder {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.status.is_none() {
			self.write_header(StatusCode::OK);
		}
		self.body.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl ResponseWriter for ResponseRecorder {
	fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	fn headers_mut(&mut self) -> &mut HeaderMap {
		&mut self.headers
	}

	fn write_header(&mut self, status: StatusCode) {
		if let Some(committed) = self.status {
			tracing::warn!(
				committed = %committed,
				ignored = %status,
				"superfluous write_header call"
			);
			return;
		}
		self.status = Some(status);
		self.committed_headers = Some(self.headers.clone());
	}

	fn status(&self) -> StatusCode {
		self.status.unwrap_or(StatusCode::OK)
	}

	fn is_committed(&self) -> bool {
		self.status.is_some()
	}
}
