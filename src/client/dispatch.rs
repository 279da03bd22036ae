//! Verb-specific dispatch: build, send, validate, and optionally decode.
//!
//! Raw calls (`*_raw`, [`Client::send`], [`Client::send_path`]) surface every failure as an
//! [`Error`]. Typed calls additionally decode the body and degrade a decode failure to
//! `Ok(None)`; transport, status, and auth failures still propagate.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	client::Client,
	endpoint::{Body, Endpoint, EndpointHost, Method, QueryItem},
	http::{self, ApiResponse, HttpTransport, TransportErrorMapper},
	obs::{self, Operation},
	request::{self, BuiltRequest, RequestParts},
};

impl<C, M> Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// GETs `endpoint` and decodes the body; `Ok(None)` when the body does not decode as `T`.
	pub async fn get<T>(&self, endpoint: &impl Endpoint) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		self.typed(endpoint, Method::Get, "get").await
	}

	/// POSTs `endpoint` and decodes the body; `Ok(None)` when the body does not decode as `T`.
	pub async fn post<T>(&self, endpoint: &impl Endpoint) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		self.typed(endpoint, Method::Post, "post").await
	}

	/// PUTs `endpoint` and decodes the body; `Ok(None)` when the body does not decode as `T`.
	pub async fn put<T>(&self, endpoint: &impl Endpoint) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		self.typed(endpoint, Method::Put, "put").await
	}

	/// DELETEs `endpoint` and decodes the body; `Ok(None)` when the body does not decode as `T`.
	pub async fn delete<T>(&self, endpoint: &impl Endpoint) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		self.typed(endpoint, Method::Delete, "delete").await
	}

	/// GETs `endpoint` and returns the raw response.
	pub async fn get_raw<E>(&self, endpoint: &E) -> Result<ApiResponse>
	where
		E: ?Sized + Endpoint,
	{
		self.observed_send(endpoint, Method::Get, "get_raw").await
	}

	/// POSTs `endpoint` and returns the raw response.
	pub async fn post_raw<E>(&self, endpoint: &E) -> Result<ApiResponse>
	where
		E: ?Sized + Endpoint,
	{
		self.observed_send(endpoint, Method::Post, "post_raw").await
	}

	/// PUTs `endpoint` and returns the raw response.
	pub async fn put_raw<E>(&self, endpoint: &E) -> Result<ApiResponse>
	where
		E: ?Sized + Endpoint,
	{
		self.observed_send(endpoint, Method::Put, "put_raw").await
	}

	/// DELETEs `endpoint` and returns the raw response.
	pub async fn delete_raw<E>(&self, endpoint: &E) -> Result<ApiResponse>
	where
		E: ?Sized + Endpoint,
	{
		self.observed_send(endpoint, Method::Delete, "delete_raw").await
	}

	/// Sends `endpoint` with any verb it allows and returns the raw response.
	pub async fn send<E>(&self, endpoint: &E, method: Method) -> Result<ApiResponse>
	where
		E: ?Sized + Endpoint,
	{
		self.observed_send(endpoint, method, "send").await
	}

	/// Sends an ad-hoc request to `path` under the API host.
	///
	/// No verb check is applied; the path must start with `/`.
	pub async fn send_path(
		&self,
		path: &str,
		method: Method,
		query: &[QueryItem],
		body: Option<&Body>,
	) -> Result<ApiResponse> {
		obs::observe(Operation::Dispatch(method), "send_path", async move {
			let parts =
				RequestParts::new(path, method).query(query).body(body).host(EndpointHost::Api);
			let request = request::build(&self.config, parts, &self.auth)?;

			self.execute(request).await
		})
		.await
	}

	/// Builds the request for `endpoint` without sending it.
	///
	/// Fails with [`Error::BadMethod`] when the endpoint does not allow `method`.
	pub fn build<E>(&self, endpoint: &E, method: Method) -> Result<BuiltRequest>
	where
		E: ?Sized + Endpoint,
	{
		if !endpoint.methods().contains(method) {
			return Err(Error::BadMethod { path: endpoint.path(), method });
		}

		request::build_endpoint(&self.config, endpoint, method, &self.auth)
	}

	/// Executes a previously built request and validates its status.
	pub async fn execute(&self, request: BuiltRequest) -> Result<ApiResponse> {
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| self.transport_mapper.map_transport_error(e))?;

		http::validate_status(response)
	}

	async fn observed_send<E>(
		&self,
		endpoint: &E,
		method: Method,
		stage: &'static str,
	) -> Result<ApiResponse>
	where
		E: ?Sized + Endpoint,
	{
		obs::observe(Operation::Dispatch(method), stage, async move {
			let request = self.build(endpoint, method)?;

			self.execute(request).await
		})
		.await
	}

	async fn typed<T, E>(&self, endpoint: &E, method: Method, stage: &'static str) -> Result<Option<T>>
	where
		T: DeserializeOwned,
		E: ?Sized + Endpoint,
	{
		let response = self.observed_send(endpoint, method, stage).await?;

		Ok(decode(&response))
	}
}

fn decode<T>(response: &ApiResponse) -> Option<T>
where
	T: DeserializeOwned,
{
	match response.json() {
		Ok(value) => Some(value),
		Err(e) => {
			#[cfg(feature = "tracing")]
			tracing::debug!(error = %e, "Response body did not decode into the requested type.");
			#[cfg(not(feature = "tracing"))]
			let _ = e;

			None
		},
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;
	use crate::{
		auth::Credentials,
		config::ClientConfig,
		endpoint::{RawEndpoint, Releases},
		error::ResponseError,
		http::TransportFuture,
	};

	#[derive(Debug, Default)]
	struct CountingTransport {
		calls: AtomicUsize,
		status: u16,
		body: &'static str,
		seen: Mutex<Vec<BuiltRequest>>,
	}
	impl CountingTransport {
		fn replying(status: u16, body: &'static str) -> Arc<Self> {
			Arc::new(Self { status, body, ..Default::default() })
		}
	}
	impl HttpTransport for CountingTransport {
		type TransportError = std::io::Error;

		fn execute(
			&self,
			request: BuiltRequest,
		) -> TransportFuture<'_, Result<ApiResponse, Self::TransportError>> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.seen.lock().push(request);

			let response = ApiResponse::new(self.status, self.body);

			Box::pin(async move { Ok(response) })
		}
	}

	#[derive(Debug)]
	struct IoMapper;
	impl TransportErrorMapper<std::io::Error> for IoMapper {
		fn map_transport_error(&self, error: std::io::Error) -> Error {
			ResponseError::Io(error).into()
		}
	}

	#[derive(Debug, Deserialize)]
	struct Release {
		id: u64,
		title: String,
	}

	fn client(transport: Arc<CountingTransport>) -> Client<CountingTransport, IoMapper> {
		let config = ClientConfig::builder("DiscogsClientTests", "1.0.0")
			.build()
			.expect("Default configuration should be valid.");

		Client::with_http_client(config, Credentials::personal_token("abc"), transport, IoMapper)
	}

	#[tokio::test]
	async fn disallowed_verbs_fail_before_any_io() {
		let transport = CountingTransport::replying(200, "{}");
		let client = client(transport.clone());
		let err = client
			.post_raw(&Releases::Get { id: 123 })
			.await
			.expect_err("POST is not allowed on a release.");

		assert!(matches!(err, Error::BadMethod { method: Method::Post, .. }));
		assert_eq!(transport.calls.load(Ordering::SeqCst), 0);

		let err = client
			.send(&Releases::Stats { id: 1 }, Method::Delete)
			.await
			.expect_err("DELETE is not allowed on release stats.");

		assert!(matches!(err, Error::BadMethod { method: Method::Delete, .. }));
		assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn typed_get_decodes_the_body() {
		let transport = CountingTransport::replying(200, r#"{"id":123,"title":"Blue Train"}"#);
		let client = client(transport.clone());
		let release = client
			.get::<Release>(&Releases::Get { id: 123 })
			.await
			.expect("GET should succeed.")
			.expect("Body should decode.");

		assert_eq!(release.id, 123);
		assert_eq!(release.title, "Blue Train");

		let seen = transport.seen.lock();

		assert_eq!(seen[0].url().as_str(), "https://api.discogs.com/releases/123");
		assert_eq!(seen[0].header("authorization"), Some("Discogs token=abc"));
	}

	#[tokio::test]
	async fn typed_decode_failure_degrades_to_none() {
		let client = client(CountingTransport::replying(200, r#"{"unexpected":true}"#));
		let release = client
			.get::<Release>(&Releases::Get { id: 123 })
			.await
			.expect("A decodable status should not fail the call.");

		assert!(release.is_none());
	}

	#[tokio::test]
	async fn error_statuses_fail_typed_and_raw_calls() {
		let client = client(CountingTransport::replying(404, r#"{"message":"Release not found."}"#));
		let err = client
			.get::<Release>(&Releases::Get { id: 9 })
			.await
			.expect_err("404 should fail typed calls.");

		assert_eq!(err.status(), Some(404));

		let err = client
			.delete_raw(&Releases::Get { id: 9 })
			.await
			.expect_err("404 should fail raw calls.");

		match err {
			Error::BadResponse(ResponseError::Status { message, .. }) =>
				assert_eq!(message.as_deref(), Some("Release not found.")),
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[tokio::test]
	async fn send_path_skips_the_verb_check() {
		let transport = CountingTransport::replying(204, "");
		let client = client(transport.clone());
		let query = [QueryItem::pair("page", 2), QueryItem::absent("per_page")];
		let response = client
			.send_path("/users/digger/wants", Method::Get, &query, None)
			.await
			.expect("Raw path calls should succeed.");

		assert_eq!(response.status, 204);
		assert_eq!(
			transport.seen.lock()[0].url().as_str(),
			"https://api.discogs.com/users/digger/wants?page=2"
		);
	}

	#[tokio::test]
	async fn build_then_execute_matches_send() {
		let transport = CountingTransport::replying(201, "{}");
		let client = client(transport.clone());
		let endpoint = RawEndpoint::new("/users/digger/collection/folders", Method::Post)
			.with_body(Body::from(serde_json::json!({ "name": "Jazz" })));
		let request = client.build(&endpoint, Method::Post).expect("Request should build.");

		assert_eq!(request.body(), Some(br#"{"name":"Jazz"}"#.as_slice()));

		client.execute(request).await.expect("Execution should succeed.");

		assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
	}
}
