//! Request builder: turns endpoint parts plus auth state into a [`BuiltRequest`].
//!
//! Building never mutates the [`AuthContext`]. The URL is composed first, so a malformed path
//! is reported as [`Error::BadUrl`] even when credentials are also missing.

pub mod signature;

pub use signature::*;

// crates.io
use ::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
// self
use crate::{
	_prelude::*,
	auth::{AuthContext, AuthMode},
	config::ClientConfig,
	endpoint::{self, Body, Endpoint, EndpointHost, Method, QueryItem},
	error::ConfigError,
};

/// Content type of JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type announced by the OAuth token-exchange steps.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Everything needed to build one call apart from credentials.
#[derive(Clone, Copy, Debug)]
pub struct RequestParts<'a> {
	/// Path under the host base.
	pub path: &'a str,
	/// Verb to send.
	pub method: Method,
	/// Ordered query items; absent values are dropped.
	pub query: &'a [QueryItem],
	/// JSON body for POST/PUT; `None` sends `{}`.
	pub body: Option<&'a Body>,
	/// Host family the path belongs to.
	pub host: EndpointHost,
}
impl<'a> RequestParts<'a> {
	/// Parts for `method` on `path` under the API host, with no query or body.
	pub fn new(path: &'a str, method: Method) -> Self {
		Self { path, method, query: &[], body: None, host: EndpointHost::Api }
	}

	/// Sets the query items.
	pub fn query(mut self, query: &'a [QueryItem]) -> Self {
		self.query = query;

		self
	}

	/// Sets the body.
	pub fn body(mut self, body: Option<&'a Body>) -> Self {
		self.body = body;

		self
	}

	/// Sets the host family.
	pub fn host(mut self, host: EndpointHost) -> Self {
		self.host = host;

		self
	}
}

/// Fully formed request, consumed by a single transport call.
#[derive(Clone, Debug)]
pub struct BuiltRequest {
	url: Url,
	method: Method,
	headers: HeaderMap,
	body: Option<Vec<u8>>,
}
impl BuiltRequest {
	/// Target URL.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Verb.
	pub fn method(&self) -> Method {
		self.method
	}

	/// Header map.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Header value as text, when present and valid UTF-8.
	pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
		self.headers.get(name.as_ref()).and_then(|value| value.to_str().ok())
	}

	/// Body bytes; always `None` for GET and DELETE.
	pub fn body(&self) -> Option<&[u8]> {
		self.body.as_deref()
	}

	/// Splits the request into its parts.
	pub fn into_parts(self) -> (Method, Url, HeaderMap, Option<Vec<u8>>) {
		(self.method, self.url, self.headers, self.body)
	}
}

/// Builds a signed request for `parts` with the credentials currently in `auth`.
pub fn build(config: &ClientConfig, parts: RequestParts<'_>, auth: &AuthContext) -> Result<BuiltRequest> {
	let url = endpoint::compose_url(config.base(parts.host), parts.path, parts.query)?;
	let authorization = match auth.mode()? {
		AuthMode::PersonalToken { token } => format!("Discogs token={}", token.expose()),
		AuthMode::OAuth { consumer_key, consumer_secret, access } => {
			let mut header = OAuthHeader::new(consumer_key, consumer_secret);

			if let Some(access) = access {
				header = header.with_token(access.token, access.secret);
			}

			header.render()
		},
	};
	let body = if parts.method.has_body() {
		let empty = Body::empty();

		Some(parts.body.unwrap_or(&empty).to_bytes()?)
	} else {
		None
	};

	assemble(config, url, parts.method, &authorization, body.map(|bytes| (JSON_CONTENT_TYPE, bytes)))
}

/// Builds a request for `endpoint` and `method` without checking the endpoint's verb set.
pub fn build_endpoint<E>(
	config: &ClientConfig,
	endpoint: &E,
	method: Method,
	auth: &AuthContext,
) -> Result<BuiltRequest>
where
	E: ?Sized + Endpoint,
{
	let path = endpoint.path();
	let query = endpoint.query();
	let body = endpoint.body();
	let parts =
		RequestParts::new(&path, method).query(&query).body(body.as_ref()).host(endpoint.host());

	build(config, parts, auth)
}

/// Builds an OAuth token-exchange request signed by `header`.
///
/// These steps always use the OAuth header, even when a personal token is configured, and send
/// an empty form-encoded payload.
pub(crate) fn build_token_step(
	config: &ClientConfig,
	parts: RequestParts<'_>,
	header: &OAuthHeader,
) -> Result<BuiltRequest> {
	let url = endpoint::compose_url(config.base(parts.host), parts.path, parts.query)?;
	let body = parts.method.has_body().then(|| (FORM_CONTENT_TYPE, Vec::new()));

	assemble(config, url, parts.method, &header.render(), body)
}

fn assemble(
	config: &ClientConfig,
	url: Url,
	method: Method,
	authorization: &str,
	body: Option<(&'static str, Vec<u8>)>,
) -> Result<BuiltRequest> {
	let mut headers = HeaderMap::new();

	headers.insert(USER_AGENT, header_value("user-agent", &config.user_agent())?);
	headers.insert(AUTHORIZATION, header_value("authorization", authorization)?);

	let body = body.map(|(content_type, bytes)| {
		headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

		bytes
	});

	Ok(BuiltRequest { url, method, headers, body })
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
	HeaderValue::from_str(value).map_err(|source| ConfigError::InvalidHeader { name, source }.into())
}
