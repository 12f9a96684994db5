//! Request metadata passed to handler callbacks.

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Body;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};

use crate::error::{Error, Result};

/// An HTTP request with its body already collected.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Request {
	/// Starts building a request.
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .uri("/items?page=2")
	///     .header("accept", "text/html")
	///     .body("name=rio")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/items");
	/// assert_eq!(request.query(), Some("page=2"));
	/// assert_eq!(request.header("accept"), Some("text/html"));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Converts a hyper request, collecting its body.
	///
	/// # Errors
	///
	/// Returns [`Error::Body`] if reading the body fails.
	pub async fn from_hyper<B>(request: hyper::Request<B>) -> Result<Self>
	where
		B: Body,
		B::Error: std::fmt::Display,
	{
		let (parts, body) = request.into_parts();
		let body = body
			.collect()
			.await
			.map_err(|e| Error::Body(e.to_string()))?
			.to_bytes();

		Ok(Self {
			method: parts.method,
			uri: parts.uri,
			version: parts.version,
			headers: parts.headers,
			body,
		})
	}

	/// Returns the URI path, without the query.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Returns the raw query string, if any.
	pub fn query(&self) -> Option<&str> {
		self.uri.query()
	}

	/// Returns a header value if present and valid ASCII.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}
}

/// Builder for [`Request`].
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	error: Option<Error>,
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			uri: String::from("/"),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			error: None,
		}
	}
}

impl RequestBuilder {
	/// Sets the method. Defaults to `GET`.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Sets the URI. It is parsed by [`build`](Self::build) and defaults to `/`.
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	/// Sets the HTTP version. Defaults to HTTP/1.1.
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Adds a header. An invalid name or value is reported by [`build`](Self::build).
	pub fn header(mut self, name: &str, value: &str) -> Self {
		match (HeaderName::from_bytes(name.as_bytes()), value.parse::<HeaderValue>()) {
			(Ok(name), Ok(value)) => {
				self.headers.append(name, value);
			}
			_ => {
				self.error
					.get_or_insert_with(|| Error::InvalidHeader(format!("{}: {}", name, value)));
			}
		}
		self
	}

	/// Replaces every header added so far.
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Sets the body.
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Builds the request.
	///
	/// # Errors
	///
	/// Returns the first invalid header, or [`Error::InvalidUri`].
	pub fn build(self) -> Result<Request> {
		if let Some(err) = self.error {
			return Err(err);
		}
		let uri = self
			.uri
			.parse::<Uri>()
			.map_err(|e| Error::InvalidUri(format!("{}: {}", self.uri, e)))?;

		Ok(Request {
			method: self.method,
			uri,
			version: self.version,
			headers: self.headers,
			body: self.body,
		})
	}
}
