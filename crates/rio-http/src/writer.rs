//! The response sink handed to handler callbacks.

use std::io;

use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue, X_CONTENT_TYPE_OPTIONS};
use hyper::{HeaderMap, StatusCode};

/// A byte sink for one HTTP response.
///
/// Headers may be changed until the response commits. The response commits
/// on the first body write or on an explicit [`write_header`], whichever
/// comes first; a body write without a prior status commits `200 OK`. After
/// commit the status and headers are fixed and bytes already written cannot
/// be taken back.
///
/// [`write_header`]: ResponseWriter::write_header
pub trait ResponseWriter: io::Write + Send {
	/// Returns the response headers.
	fn headers(&self) -> &HeaderMap;

	/// Returns the response headers for modification.
	///
	/// Changes made after commit are not sent.
	fn headers_mut(&mut self) -> &mut HeaderMap;

	/// Sets the status and commits the response head.
	///
	/// Only the first call has any effect.
	fn write_header(&mut self, status: StatusCode);

	/// Returns the committed status, or `200 OK` if nothing is committed yet.
	fn status(&self) -> StatusCode;

	/// Returns `true` once the status and headers have been committed.
	fn is_committed(&self) -> bool;
}

/// Writes a plain-text error response.
///
/// Sets `content-type: text/plain; charset=utf-8` and
/// `x-content-type-options: nosniff`, drops any `content-length`, then
/// writes `status` and `message` followed by a newline. If the response has
/// already committed the status cannot change and the message is appended to
/// whatever was sent.
///
/// # Examples
///
/// ```
/// use hyper::StatusCode;
/// use rio_http::{ResponseRecorder, ResponseWriter, http_error};
///
/// let mut recorder = ResponseRecorder::new();
/// http_error(&mut recorder, "Gone", StatusCode::GONE).unwrap();
///
/// assert_eq!(recorder.status(), StatusCode::GONE);
/// assert_eq!(recorder.body_string(), "Gone\n");
/// ```
pub fn http_error(w: &mut dyn ResponseWriter, message: &str, status: StatusCode) -> io::Result<()> {
	let headers = w.headers_mut();
	headers.remove(CONTENT_LENGTH);
	headers.insert(
		CONTENT_TYPE,
		HeaderValue::from_static("text/plain; charset=utf-8"),
	);
	headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

	w.write_header(status);
	w.write_all(message.as_bytes())?;
	w.write_all(b"\n")?;
	w.flush()
}

/// Writes the generic `500 Internal Server Error` response.
pub fn internal_server_error(w: &mut dyn ResponseWriter) -> io::Result<()> {
	let status = StatusCode::INTERNAL_SERVER_ERROR;
	http_error(w, status.canonical_reason().unwrap_or("Internal Server Error"), status)
}
