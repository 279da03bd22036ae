//! `discogs_client_call_total` counter.

// self
use crate::obs::{CallOutcome, Operation};

/// Bumps `discogs_client_call_total{operation, outcome}` on the installed recorder.
///
/// Each call records `attempt` once, followed by exactly one of `success` or `failure`. Without
/// the `metrics` feature this compiles to nothing.
pub fn record_call_outcome(operation: Operation, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"discogs_client_call_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
