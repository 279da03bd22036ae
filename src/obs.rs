//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `discogs_client.call` with the `operation`
//!   (verb or OAuth step) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `discogs_client_call_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, endpoint::Method};

/// Call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Dispatcher call issued with the given verb.
	Dispatch(Method),
	/// OAuth request-token step.
	RequestToken,
	/// OAuth access-token step.
	AccessToken,
	/// OAuth identity check.
	Identity,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::Dispatch(method) => method.as_str(),
			Operation::RequestToken => "request_token",
			Operation::AccessToken => "access_token",
			Operation::Identity => "identity",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<Method> for Operation {
	fn from(method: Method) -> Self {
		Self::Dispatch(method)
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a call span and records attempt plus success or failure around it.
pub(crate) async fn observe<T, Fut>(operation: Operation, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(operation, stage);

	record_call_outcome(operation, CallOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_call_outcome(operation, CallOutcome::Success),
		Err(_) => record_call_outcome(operation, CallOutcome::Failure),
	}

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn operation_labels_are_stable() {
		assert_eq!(Operation::from(Method::Put).as_str(), "PUT");
		assert_eq!(Operation::RequestToken.to_string(), "request_token");
		assert_eq!(CallOutcome::Failure.to_string(), "failure");
	}

	#[tokio::test]
	async fn observe_passes_results_through() {
		let value = observe(Operation::Identity, "observe_passes_results_through", async { Ok(7) })
			.await
			.expect("Observed future should succeed.");

		assert_eq!(value, 7);
	}
}
