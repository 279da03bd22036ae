//! Transport primitives: the [`HttpTransport`] seam, the [`ApiResponse`] it yields, and status
//! validation.
//!
//! The client depends on an HTTP stack only through [`HttpTransport`]. Transports return raw
//! responses for every status; [`validate_status`] turns anything outside `200..=299` into
//! [`ResponseError::Status`], and a [`TransportErrorMapper`] folds transport-native failures
//! into the crate taxonomy so custom stacks can plug in without touching the dispatcher.

// std
use std::borrow::Cow;
// crates.io
use ::http::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
#[cfg(feature = "reqwest")] use crate::{config::ClientConfig, error::ConfigError};
use crate::{_prelude::*, error::ResponseError, request::BuiltRequest};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing a [`BuiltRequest`].
///
/// Implementations must be `Send + Sync + 'static` so one transport can back many clients,
/// and the futures they return must be `Send` so client calls can hop executors.
/// Transports report every received status as a successful [`ApiResponse`]; only failures to
/// obtain a response belong in [`Self::TransportError`].
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends the request and collects the full response body.
	fn execute(
		&self,
		request: BuiltRequest,
	) -> TransportFuture<'_, Result<ApiResponse, Self::TransportError>>;
}

/// Maps transport-native errors into [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an error emitted by the transport into a client error.
	fn map_transport_error(&self, error: E) -> Error;
}

/// `{"message": "..."}` error shape returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
	/// Human-readable explanation supplied by the provider.
	pub message: String,
}

/// Response as received from the transport.
#[derive(Clone, Debug, Default)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response with no headers.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, headers: HeaderMap::new(), body: body.into() }
	}

	/// Replaces the header map.
	pub fn with_headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;

		self
	}

	/// Returns true for statuses in `200..=299`.
	pub fn is_success(&self) -> bool {
		(200..=299).contains(&self.status)
	}

	/// Body as lossy UTF-8 text.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}

	/// Decodes the body as JSON, reporting the failing path on error.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut de).map_err(|e| {
			ResponseError::malformed(format!("JSON decode failed at `{}`: {}", e.path(), e.inner()))
				.into()
		})
	}

	/// `message` field of a JSON error body, if present.
	pub fn error_message(&self) -> Option<String> {
		serde_json::from_slice::<ResponseMessage>(&self.body).ok().map(|m| m.message)
	}

	/// Retry-After hint as a relative duration.
	pub fn retry_after(&self) -> Option<Duration> {
		parse_retry_after(&self.headers)
	}
}

/// Passes 2xx responses through and converts every other status into
/// [`ResponseError::Status`].
pub fn validate_status(response: ApiResponse) -> Result<ApiResponse> {
	if response.is_success() {
		return Ok(response);
	}

	let body = response.text().into_owned();

	#[cfg(feature = "tracing")]
	tracing::warn!(status = response.status, body = %body, "Discogs API returned an error status.");

	Err(ResponseError::Status {
		status: response.status,
		message: response.error_message(),
		retry_after: response.retry_after(),
		body,
	}
	.into())
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Finishes `builder` with the per-request timeout from `config`, when one is set.
	pub fn from_config(
		builder: ReqwestClientBuilder,
		config: &ClientConfig,
	) -> Result<Self, ConfigError> {
		let builder = match config.timeout {
			Some(timeout) => builder.timeout(timeout),
			None => builder,
		};

		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(
		&self,
		request: BuiltRequest,
	) -> TransportFuture<'_, Result<ApiResponse, Self::TransportError>> {
		let client = self.0.clone();

		Box::pin(async move {
			let (method, url, headers, body) = request.into_parts();
			let mut builder = client.request(method.into(), url).headers(headers);

			if let Some(body) = body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let headers = response.headers().to_owned();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, headers, body })
		})
	}
}
#[cfg(feature = "reqwest")]
impl Debug for ReqwestHttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ReqwestHttpClient(..)")
	}
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, err: ReqwestError) -> Error {
		if err.is_builder() {
			return ConfigError::from(err).into();
		}
		if err.is_timeout() {
			return ResponseError::Timeout.into();
		}

		ResponseError::transport(err).into()
	}
}

/// Parses a `Retry-After` header given either as delta seconds or as an HTTP date.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(secs.into()));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// crates.io
	use ::http::HeaderValue;
	// self
	use super::*;

	#[test]
	fn status_boundaries_follow_the_2xx_range() {
		assert!(validate_status(ApiResponse::new(200, "{}")).is_ok());
		assert!(validate_status(ApiResponse::new(299, "{}")).is_ok());

		for status in [199, 300, 404, 500] {
			let err = validate_status(ApiResponse::new(status, "nope"))
				.expect_err("Statuses outside 2xx should fail.");

			assert!(err.is_bad_response());
			assert_eq!(err.status(), Some(status));
		}
	}

	#[test]
	fn error_status_carries_message_and_retry_after() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));

		let response =
			ApiResponse::new(429, r#"{"message":"You are making requests too quickly."}"#)
				.with_headers(headers);
		let err = validate_status(response).expect_err("429 should fail.");

		match err {
			Error::BadResponse(ResponseError::Status { status, body, message, retry_after }) => {
				assert_eq!(status, 429);
				assert!(body.contains("too quickly"));
				assert_eq!(message.as_deref(), Some("You are making requests too quickly."));
				assert_eq!(retry_after, Some(Duration::seconds(30)));
			},
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[test]
	fn non_json_error_bodies_have_no_message() {
		assert!(ApiResponse::new(502, "<html>Bad Gateway</html>").error_message().is_none());
	}

	#[test]
	fn json_decode_reports_the_failing_path() {
		#[derive(Debug, Deserialize)]
		struct Release {
			#[allow(dead_code)]
			id: u64,
		}

		let err = ApiResponse::new(200, r#"{"id":"not-a-number"}"#)
			.json::<Release>()
			.expect_err("Mistyped fields should fail to decode.");

		assert!(err.to_string().contains("`id`"));
	}

	#[test]
	fn retry_after_ignores_garbage() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));

		assert!(parse_retry_after(&headers).is_none());
	}
}
