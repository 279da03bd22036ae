//! `discogs_client.call` spans.
//!
//! Every dispatcher call and handshake step runs inside one span carrying `operation` (the
//! verb such as `GET`, or a step such as `request_token`) and `stage` (the public method name).
//! Without the `tracing` feature the span is a zero-sized stand-in and instrumented futures
//! are returned untouched.

// self
use crate::{_prelude::*, obs::Operation};

/// Future returned by [`CallSpan::instrument`].
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`CallSpan::instrument`].
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span for one call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens an `info` span; nothing is entered until a future is instrumented.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("discogs_client.call", operation = operation.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Attaches the span to `fut`. The span is entered on each poll, never across an `.await`.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrumented_futures_keep_their_output() {
		let span = CallSpan::new(Operation::AccessToken, "access_token");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
