//! Status and JSON response writers.
//!
//! The plain-text writers go through [`http_error`], so they share its
//! headers and its trailing newline. The JSON writers all follow the rules
//! of [`json`]:
//!
//! - no data: `{"message":"<reason phrase>"}`
//! - a string: `{"message":"<string>"}`
//! - any other value: the value itself
//!
//! ## Example
//!
//! ```
//! use hyper::StatusCode;
//! use rio_http::{ResponseRecorder, ResponseWriter, json_not_found, json_status};
//!
//! let mut recorder = ResponseRecorder::new();
//! json_not_found(&mut recorder, "no such page").unwrap();
//! assert_eq!(recorder.body_string(), r#"{"message":"no such page"}"#);
//!
//! let mut recorder = ResponseRecorder::new();
//! json_status(&mut recorder, StatusCode::FORBIDDEN).unwrap();
//! assert_eq!(recorder.body_string(), r#"{"message":"Forbidden"}"#);
//! ```

use std::io;

use hyper::StatusCode;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::writer::{ResponseWriter, http_error};

#[derive(Serialize)]
struct Message<'a> {
	message: &'a str,
}

fn encode<T>(status: StatusCode, data: Option<&T>) -> serde_json::Result<Vec<u8>>
where
	T: Serialize + ?Sized,
{
	let Some(data) = data else {
		return serde_json::to_vec(&Message {
			message: status.canonical_reason().unwrap_or_default(),
		});
	};

	let body = serde_json::to_vec(data)?;
	if body.first() != Some(&b'"') {
		return Ok(body);
	}
	let message: String = serde_json::from_slice(&body)?;
	serde_json::to_vec(&Message { message: &message })
}

/// Writes `data` as a JSON response with the given status.
///
/// Nothing is written if `data` fails to serialize.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if `data` cannot be serialized, or
/// [`Error::Render`] if the sink fails.
///
/// # Examples
///
/// ```
/// use hyper::StatusCode;
/// use rio_http::{ResponseRecorder, ResponseWriter, json};
///
/// let mut recorder = ResponseRecorder::new();
/// json(&mut recorder, StatusCode::CREATED, Some(&vec![1, 2, 3])).unwrap();
///
/// assert_eq!(recorder.status(), StatusCode::CREATED);
/// assert_eq!(recorder.body_string(), "[1,2,3]");
/// ```
pub fn json<T>(w: &mut dyn ResponseWriter, status: StatusCode, data: Option<&T>) -> Result<()>
where
	T: Serialize + ?Sized,
{
	let body = encode(status, data).map_err(|e| Error::Serialization(e.to_string()))?;

	w.headers_mut()
		.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
	w.write_header(status);
	w.write_all(&body)?;
	Ok(())
}

/// Writes `{"message":"<reason phrase>"}` with the given status.
pub fn json_status(w: &mut dyn ResponseWriter, status: StatusCode) -> Result<()> {
	json::<()>(w, status, None)
}

macro_rules! define_text_writer {
	($(#[$meta:meta])* $name:ident, $status:ident) => {
		$(#[$meta])*
		pub fn $name(w: &mut dyn ResponseWriter, message: &str) -> io::Result<()> {
			http_error(w, message, StatusCode::$status)
		}
	};
}

macro_rules! define_json_writer {
	($(#[$meta:meta])* $name:ident, $status:ident) => {
		$(#[$meta])*
		pub fn $name<T>(w: &mut dyn ResponseWriter, data: &T) -> Result<()>
		where
			T: Serialize + ?Sized,
		{
			json(w, StatusCode::$status, Some(data))
		}
	};
}

define_text_writer!(
	/// Writes `message` as plain text with `200 OK`.
	http_ok,
	OK
);
define_text_writer!(http_moved_permanently, MOVED_PERMANENTLY);
define_text_writer!(http_bad_request, BAD_REQUEST);
define_text_writer!(http_unauthorized, UNAUTHORIZED);
define_text_writer!(http_forbidden, FORBIDDEN);
define_text_writer!(
	/// Writes `message` as plain text with `404 Not Found`.
	http_not_found,
	NOT_FOUND
);

define_json_writer!(
	/// Writes `data` as JSON with `200 OK`.
	json_ok,
	OK
);
define_json_writer!(json_created, CREATED);
define_json_writer!(json_no_content, NO_CONTENT);
define_json_writer!(json_moved_permanently, MOVED_PERMANENTLY);
define_json_writer!(json_bad_request, BAD_REQUEST);
define_json_writer!(json_unauthorized, UNAUTHORIZED);
define_json_writer!(json_forbidden, FORBIDDEN);
define_json_writer!(json_not_found, NOT_FOUND);

/// Writes `{"message":"Internal Server Error"}` with a 500 status.
pub fn json_internal_server_error(w: &mut dyn ResponseWriter) -> Result<()> {
	json_status(w, StatusCode::INTERNAL_SERVER_ERROR)
}
