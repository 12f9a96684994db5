//! Error types for the HTTP adapter.

use std::io;

use hyper::StatusCode;
use thiserror::Error;

use crate::responses::json;
use crate::writer::{ResponseWriter, http_error};

/// Errors raised while serving a node tree over HTTP.
#[derive(Debug, Error)]
pub enum Error {
	/// The sink failed while a tree was being written.
	#[error("Render error: {0}")]
	Render(#[from] io::Error),

	/// The callback produced no node.
	#[error("Handler returned no node")]
	NilNode,

	#[error("Serialization error: {0}")]
	Serialization(String),

	#[error("Invalid header: {0}")]
	InvalidHeader(String),

	#[error("Invalid URI: {0}")]
	InvalidUri(String),

	#[error("Body error: {0}")]
	Body(String),

	/// The callback or the render panicked.
	#[error("Handler panicked: {0}")]
	Panic(String),

	/// A blocking render task panicked or was cancelled.
	#[error("Task join error: {0}")]
	Join(String),
}

/// Result alias used across this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// Returns the HTTP status code this error maps to.
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::Error;
	///
	/// assert_eq!(Error::NilNode.status_code(), 500);
	/// assert_eq!(Error::InvalidUri("::".into()).status_code(), 400);
	/// ```
	pub fn status_code(&self) -> u16 {
		match self {
			Error::InvalidHeader(_) | Error::InvalidUri(_) | Error::Body(_) => 400,
			Error::Render(_)
			| Error::NilNode
			| Error::Serialization(_)
			| Error::Panic(_)
			| Error::Join(_) => 500,
		}
	}
}

/// An error meant to be shown to the client, as plain text or JSON.
///
/// # Examples
///
/// ```
/// use hyper::StatusCode;
/// use rio_http::{AppError, ResponseRecorder, ResponseWriter};
///
/// let mut recorder = ResponseRecorder::new();
/// AppError::json_error("not allowed", StatusCode::FORBIDDEN)
///     .write_to(&mut recorder)
///     .unwrap();
///
/// assert_eq!(recorder.status(), StatusCode::FORBIDDEN);
/// assert_eq!(recorder.body_string(), r#"{"message":"not allowed"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
	pub message: String,
	pub status: StatusCode,
	pub is_json: bool,
}

impl AppError {
	/// Creates a plain-text error.
	pub fn http_error(message: impl Into<String>, status: StatusCode) -> Self {
		Self {
			message: message.into(),
			status,
			is_json: false,
		}
	}

	/// Creates a JSON error whose body is `{"message": ...}`.
	pub fn json_error(message: impl Into<String>, status: StatusCode) -> Self {
		Self {
			message: message.into(),
			status,
			is_json: true,
		}
	}

	/// Writes this error as a complete response.
	pub fn write_to(&self, w: &mut dyn ResponseWriter) -> Result<()> {
		if self.is_json {
			json(w, self.status, Some(self.message.as_str()))
		} else {
			http_error(w, &self.message, self.status).map_err(Error::Render)
		}
	}
}
