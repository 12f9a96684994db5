//! Buffered and streaming responses.

use bytes::Bytes;
use futures::stream::{Stream, TryStreamExt};
use http_body_util::{Full, StreamBody};
use hyper::body::Frame;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::error::{Error, Result};

/// Boxed error carried by streamed body chunks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::ok();
	/// assert_eq!(response.status, StatusCode::OK);
	/// ```
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 400 Bad Request status
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::bad_request();
	/// assert_eq!(response.status, StatusCode::BAD_REQUEST);
	/// ```
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	/// Create a Response with HTTP 404 Not Found status
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::not_found();
	/// assert_eq!(response.status, StatusCode::NOT_FOUND);
	/// ```
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("<p>Hello</p>");
	/// assert_eq!(response.body, Bytes::from("<p>Hello</p>"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a header, skipping names or values that are not valid HTTP.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Set the `content-type` header.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidHeader`] if `content_type` is not a valid header value.
	pub fn with_content_type(mut self, content_type: &str) -> Result<Self> {
		let value = HeaderValue::from_str(content_type)
			.map_err(|e| Error::InvalidHeader(format!("content-type: {}", e)))?;
		self.headers.insert(CONTENT_TYPE, value);
		Ok(self)
	}

	/// Set the response body to JSON and add appropriate Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"ok": true})).unwrap();
	///
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> Result<Self> {
		let json = serde_json::to_vec(data).map_err(|e| Error::Serialization(e.to_string()))?;
		self.body = Bytes::from(json);
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		Ok(self)
	}

	/// Converts into a hyper response with a full body.
	pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
		let mut response = hyper::Response::new(Full::new(self.body));
		*response.status_mut() = self.status;
		*response.headers_mut() = self.headers;
		response
	}
}

impl From<Error> for Response {
	fn from(error: Error) -> Self {
		let status =
			StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let body = serde_json::json!({
			"error": error.to_string(),
		});

		Response::new(status)
			.with_json(&body)
			.unwrap_or_else(|_| Response::internal_server_error())
	}
}

/// A response whose body arrives as a stream of chunks.
pub struct StreamingResponse<S> {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub stream: S,
}

impl<S> StreamingResponse<S>
where
	S: Stream<Item = std::result::Result<Bytes, BoxError>> + Send + 'static,
{
	/// Create a new streaming response with OK status
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::StreamingResponse;
	/// use hyper::StatusCode;
	/// use futures::stream;
	/// use bytes::Bytes;
	///
	/// let data = vec![Ok(Bytes::from("<p>")), Ok(Bytes::from("</p>"))];
	/// let response = StreamingResponse::new(stream::iter(data));
	///
	/// assert_eq!(response.status, StatusCode::OK);
	/// ```
	pub fn new(stream: S) -> Self {
		Self::with_status(stream, StatusCode::OK)
	}

	/// Create a new streaming response with the given status
	pub fn with_status(stream: S, status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			stream,
		}
	}

	/// Set the status code
	pub fn status(mut self, status: StatusCode) -> Self {
		self.status = status;
		self
	}

	/// Set the `content-type` header, ignoring values that are not valid HTTP.
	pub fn media_type(mut self, media_type: &str) -> Self {
		if let Ok(value) = HeaderValue::from_str(media_type) {
			self.headers.insert(CONTENT_TYPE, value);
		}
		self
	}

	/// Converts into a hyper response whose body frames follow the stream.
	pub fn into_hyper(
		self,
	) -> hyper::Response<
		StreamBody<impl Stream<Item = std::result::Result<Frame<Bytes>, BoxError>> + Send + 'static>,
	> {
		let body = StreamBody::new(self.stream.map_ok(Frame::data));
		let mut response = hyper::Response::new(body);
		*response.status_mut() = self.status;
		*response.headers_mut() = self.headers;
		response
	}
}
