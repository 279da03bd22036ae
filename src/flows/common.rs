//! Shared plumbing for the token-exchange legs of the handshake.

// self
use crate::{
	_prelude::*,
	client::Client,
	endpoint::{Endpoint, Method, OAuthEndpoint},
	http::{ApiResponse, HttpTransport, TransportErrorMapper},
	request::{self, OAuthHeader, RequestParts},
};

/// Sends one signed token-exchange POST and validates its status.
pub(crate) async fn send_token_step<C, M>(
	client: &Client<C, M>,
	endpoint: OAuthEndpoint,
	header: &OAuthHeader,
) -> Result<ApiResponse>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	let path = endpoint.path();
	let parts = RequestParts::new(&path, Method::Post).host(endpoint.host());
	let request = request::build_token_step(client.config(), parts, header)?;

	client.execute(request).await
}
