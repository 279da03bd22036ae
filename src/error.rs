//! Client-level error types shared across the request builder, transport, and OAuth flow.

// self
use crate::{_prelude::*, auth::FlowStage, endpoint::Method};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (transport construction, body encoding, header values).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Non-2xx status, unreadable reply, or transport failure.
	#[error(transparent)]
	BadResponse(#[from] ResponseError),

	/// Path and query items do not form a valid URL.
	#[error("URL `{url}` is malformed: {reason}.")]
	BadUrl {
		/// URL text that failed to parse, as far as it was assembled.
		url: String,
		/// Why the URL was rejected.
		reason: String,
	},
	/// The endpoint does not accept the requested verb; raised before any I/O.
	#[error("Endpoint `{path}` does not support the {method} method.")]
	BadMethod {
		/// Path of the rejecting endpoint.
		path: String,
		/// Verb that was requested.
		method: Method,
	},
	/// Neither a personal token nor a consumer key/secret pair is available.
	#[error("No usable credentials: {reason}.")]
	BadAuth {
		/// Which credential is missing.
		reason: String,
	},
	/// An OAuth step ran before the step it depends on.
	#[error("OAuth step `{step}` requires the flow to reach `{required}` first.")]
	MissingStep {
		/// Step that was invoked.
		step: &'static str,
		/// Stage the flow must have reached.
		required: FlowStage,
	},
}
impl Error {
	/// HTTP status attached to a non-2xx response, if this error carries one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::BadResponse(ResponseError::Status { status, .. }) => Some(*status),
			_ => None,
		}
	}

	/// Returns true for every [`Error::BadResponse`] variant.
	pub fn is_bad_response(&self) -> bool {
		matches!(self, Self::BadResponse(_))
	}
}

/// Configuration and construction failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be encoded as JSON.")]
	BodyEncode {
		/// Serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// A header value contains bytes HTTP does not allow.
	#[error("Header `{name}` has an invalid value.")]
	InvalidHeader {
		/// Header name.
		name: &'static str,
		/// Underlying validation failure.
		#[source]
		source: ::http::header::InvalidHeaderValue,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures observed while calling the API or reading its reply.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// The API answered with a status outside `200..=299`.
	#[error("Discogs API returned HTTP {status}: {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body as lossy UTF-8 text.
		body: String,
		/// `message` field of the provider's JSON error, when the body has one.
		message: Option<String>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Discogs API.")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The call did not finish within the configured timeout.
	#[error("Request timed out while calling the Discogs API.")]
	Timeout,
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Discogs API.")]
	Io(#[from] std::io::Error),
	/// The reply could not be interpreted.
	#[error("Discogs API returned a malformed response: {reason}.")]
	Malformed {
		/// What was wrong with the reply.
		reason: String,
	},
}
impl ResponseError {
	/// Wraps a transport-specific network error.
	pub fn transport(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Transport { source: Box::new(src) }
	}

	/// Builds a [`ResponseError::Malformed`] from any displayable reason.
	pub fn malformed(reason: impl Display) -> Self {
		Self::Malformed { reason: reason.to_string() }
	}
}
