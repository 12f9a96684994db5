//! Handler configuration.

use std::borrow::Cow;

/// Configuration for [`DomHandler`](crate::DomHandler).
///
/// # Examples
///
/// ```
/// use rio_http::HandlerOptions;
///
/// let options = HandlerOptions::new()
///     .with_content_type("application/xhtml+xml")
///     .with_chunk_size(16 * 1024);
/// assert_eq!(options.chunk_size, 16 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOptions {
	/// Content type set on responses that did not choose one.
	pub content_type: Cow<'static, str>,
	/// Bytes buffered before a streamed body frame is sent.
	pub chunk_size: usize,
	/// Frames that may wait in the channel before the renderer blocks.
	pub channel_capacity: usize,
}

impl Default for HandlerOptions {
	fn default() -> Self {
		Self {
			content_type: Cow::Borrowed("text/html; charset=utf-8"),
			chunk_size: 8 * 1024,
			channel_capacity: 16,
		}
	}
}

impl HandlerOptions {
	/// Creates options with default values.
	///
	/// # Examples
	///
	/// ```
	/// use rio_http::HandlerOptions;
	///
	/// let options = HandlerOptions::new();
	/// assert_eq!(options.content_type, "text/html; charset=utf-8");
	/// assert_eq!(options.chunk_size, 8192);
	/// assert_eq!(options.channel_capacity, 16);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the default content type.
	pub fn with_content_type(mut self, content_type: impl Into<Cow<'static, str>>) -> Self {
		self.content_type = content_type.into();
		self
	}

	/// Sets the streamed frame size. Zero sends every write as its own frame.
	pub fn with_chunk_size(mut self, size: usize) -> Self {
		self.chunk_size = size;
		self
	}

	/// Sets the body channel capacity, clamped to at least one frame.
	pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
		self.channel_capacity = capacity.max(1);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_builder_methods() {
		let options = HandlerOptions::new()
			.with_content_type(String::from("text/plain"))
			.with_chunk_size(0)
			.with_channel_capacity(4);

		assert_eq!(options.content_type, "text/plain");
		assert_eq!(options.chunk_size, 0);
		assert_eq!(options.channel_capacity, 4);
	}

	#[rstest]
	fn test_channel_capacity_is_clamped() {
		assert_eq!(HandlerOptions::new().with_channel_capacity(0).channel_capacity, 1);
	}
}
