//! A response sink that forwards the body as it is rendered.
//!
//! The writer lives on a blocking thread and the body stream on the async
//! side. Body bytes are buffered into frames of `chunk_size` and sent over a
//! bounded channel, so a slow client eventually blocks the renderer instead
//! of letting the body pile up in memory. The response head is sent once, at
//! commit time, through a separate one-shot channel.

use std::io;

use bytes::{Bytes, BytesMut};
use hyper::{HeaderMap, StatusCode};
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::ReceiverStream;

use crate::options::HandlerOptions;
use crate::response::BoxError;
use crate::writer::ResponseWriter;

/// Body chunks produced by a [`StreamingWriter`].
pub type BodyStream = ReceiverStream<Result<Bytes, BoxError>>;

/// Status and headers as committed by a [`StreamingWriter`].
#[derive(Debug, Clone)]
pub struct ResponseHead {
	pub status: StatusCode,
	pub headers: HeaderMap,
}

/// A [`ResponseWriter`] whose body goes out through a channel.
///
/// Writes block when the channel is full, so this writer must be driven from
/// a blocking thread such as one from `tokio::task::spawn_blocking`, never
/// from inside an async task. Once the body stream is dropped every write
/// fails with [`io::ErrorKind::BrokenPipe`].
#[derive(Debug)]
pub struct StreamingWriter {
	head_tx: Option<oneshot::Sender<ResponseHead>>,
	body_tx: mpsc::Sender<Result<Bytes, BoxError>>,
	status: Option<StatusCode>,
	headers: HeaderMap,
	buffer: BytesMut,
	chunk_size: usize,
}

impl StreamingWriter {
	/// Creates a writer with the receiving ends for its head and body.
	pub fn new(options: &HandlerOptions) -> (Self, oneshot::Receiver<ResponseHead>, BodyStream) {
		let (head_tx, head_rx) = oneshot::channel();
		let (body_tx, body_rx) = mpsc::channel(options.channel_capacity.max(1));

		let writer = Self {
			head_tx: Some(head_tx),
			body_tx,
			status: None,
			headers: HeaderMap::new(),
			buffer: BytesMut::with_capacity(options.chunk_size),
			chunk_size: options.chunk_size,
		};
		(writer, head_rx, ReceiverStream::new(body_rx))
	}

	/// Commits the head if nothing was written and sends any buffered bytes.
	///
	/// Dropping the writer afterwards ends the body stream.
	pub fn finish(mut self) -> io::Result<()> {
		if self.status.is_none() {
			self.write_header(StatusCode::OK);
		}
		self.send_buffered()
	}

	/// Sends any buffered bytes, then ends the body stream with `reason` as
	/// an error item.
	///
	/// Commits `500 Internal Server Error` if nothing was committed yet.
	pub fn abort(mut self, reason: impl Into<BoxError>) -> io::Result<()> {
		if self.status.is_none() {
			self.write_header(StatusCode::INTERNAL_SERVER_ERROR);
		}
		self.send_buffered()?;
		self.body_tx
			.blocking_send(Err(reason.into()))
			.map_err(|_| stream_closed())
	}

	fn send_buffered(&mut self) -> io::Result<()> {
		if self.buffer.is_empty() {
			return Ok(());
		}
		let chunk = self.buffer.split().freeze();
		self.body_tx
			.blocking_send(Ok(chunk))
			.map_err(|_| stream_closed())
	}
}

fn stream_closed() -> io::Error {
	io::Error::new(io::ErrorKind::BrokenPipe, "response body stream closed")
}

impl io::Write for StreamingWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.status.is_none() {
			self.write_header(StatusCode::OK);
		}
		if self.body_tx.is_closed() {
			return Err(stream_closed());
		}

		self.buffer.extend_from_slice(buf);
		if self.buffer.len() >= self.chunk_size {
			self.send_buffered()?;
		}
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		self.send_buffered()
	}
}

impl ResponseWriter for StreamingWriter {
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

		let head = ResponseHead {
			status,
			headers: self.headers.clone(),
		};
		if let Some(tx) = self.head_tx.take()
			&& tx.send(head).is_err()
		{
			tracing::debug!(%status, "response head receiver dropped");
		}
	}

	fn status(&self) -> StatusCode {
		self.status.unwrap_or(StatusCode::OK)
	}

	fn is_committed(&self) -> bool {
		self.status.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::StreamExt;
	use hyper::header::{CONTENT_TYPE, HeaderValue};
	use rstest::rstest;
	use std::io::Write;

	async fn collect_body(body: BodyStream) -> Vec<Bytes> {
		body.map(|chunk| chunk.unwrap()).collect().await
	}

	#[rstest]
	#[tokio::test]
	async fn test_head_is_sent_on_first_write() {
		let (mut writer, head_rx, body) = StreamingWriter::new(&HandlerOptions::new());

		let task = tokio::task::spawn_blocking(move || {
			writer
				.headers_mut()
				.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
			writer.write_all(b"<p>streamed</p>")?;
			writer
				.headers_mut()
				.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
			writer.finish()
		});

		let head = head_rx.await.unwrap();
		assert_eq!(head.status, StatusCode::OK);
		assert_eq!(head.headers.get(CONTENT_TYPE).unwrap(), "text/html");

		let chunks = collect_body(body).await;
		task.await.unwrap().unwrap();
		assert_eq!(chunks.concat(), b"<p>streamed</p>");
	}

	#[rstest]
	#[tokio::test]
	async fn test_writes_are_split_into_frames() {
		let options = HandlerOptions::new().with_chunk_size(4);
		let (mut writer, _head_rx, body) = StreamingWriter::new(&options);

		let task = tokio::task::spawn_blocking(move || {
			for word in ["ab", "cd", "ef", "gh", "i"] {
				writer.write_all(word.as_bytes())?;
			}
			writer.finish()
		});

		let chunks = collect_body(body).await;
		task.await.unwrap().unwrap();
		assert_eq!(
			chunks,
			vec![Bytes::from("abcd"), Bytes::from("efgh"), Bytes::from("i")]
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_finish_without_writes_commits_ok() {
		let (writer, head_rx, body) = StreamingWriter::new(&HandlerOptions::new());

		tokio::task::spawn_blocking(move || writer.finish())
			.await
			.unwrap()
			.unwrap();

		assert_eq!(head_rx.await.unwrap().status, StatusCode::OK);
		assert!(collect_body(body).await.is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_dropped_body_is_broken_pipe() {
		let (mut writer, _head_rx, body) = StreamingWriter::new(&HandlerOptions::new());
		drop(body);

		let err = tokio::task::spawn_blocking(move || writer.write_all(b"lost"))
			.await
			.unwrap()
			.unwrap_err();

		assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
	}

	#[rstest]
	#[tokio::test]
	async fn test_abort_ends_stream_with_error() {
		let (mut writer, head_rx, body) = StreamingWriter::new(&HandlerOptions::new());

		let task = tokio::task::spawn_blocking(move || {
			writer.write_all(b"<p>partial")?;
			writer.flush()?;
			writer.write_all(b"</p>")?;
			writer.abort("render failed")
		});

		assert_eq!(head_rx.await.unwrap().status, StatusCode::OK);
		let items: Vec<_> = body.collect().await;
		task.await.unwrap().unwrap();

		assert_eq!(items.len(), 3);
		assert_eq!(items[0].as_ref().unwrap(), &Bytes::from("<p>partial"));
		assert_eq!(items[1].as_ref().unwrap(), &Bytes::from("</p>"));
		assert_eq!(items[2].as_ref().unwrap_err().to_string(), "render failed");
	}

	#[rstest]
	#[tokio::test]
	async fn test_abort_before_commit_is_500() {
		let (writer, head_rx, body) = StreamingWriter::new(&HandlerOptions::new());

		tokio::task::spawn_blocking(move || writer.abort("nothing rendered"))
			.await
			.unwrap()
			.unwrap();

		assert_eq!(head_rx.await.unwrap().status, StatusCode::INTERNAL_SERVER_ERROR);
		let items: Vec<_> = body.collect().await;
		assert_eq!(items.len(), 1);
		assert!(items[0].is_err());
	}
}
