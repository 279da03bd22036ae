//! OAuth handshake and identity endpoints.

// self
use crate::endpoint::{Endpoint, EndpointHost, Method, MethodSet};

/// Endpoints under `/oauth/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OAuthEndpoint {
	/// Issues a temporary request token.
	RequestToken,
	/// Exchanges a verified request token for an access token.
	AccessToken,
	/// Returns the user the current credentials belong to.
	Identity,
	/// User-facing authorize page; only usable as a redirect target.
	Authorize,
}
impl Endpoint for OAuthEndpoint {
	fn path(&self) -> String {
		match self {
			OAuthEndpoint::RequestToken => "/oauth/request_token",
			OAuthEndpoint::AccessToken => "/oauth/access_token",
			OAuthEndpoint::Identity => "/oauth/identity",
			OAuthEndpoint::Authorize => "/oauth/authorize",
		}
		.into()
	}

	fn methods(&self) -> MethodSet {
		match self {
			OAuthEndpoint::RequestToken | OAuthEndpoint::AccessToken => Method::Post.into(),
			OAuthEndpoint::Identity => Method::Get.into(),
			OAuthEndpoint::Authorize => MethodSet::NONE,
		}
	}

	fn host(&self) -> EndpointHost {
		match self {
			OAuthEndpoint::Authorize => EndpointHost::Web,
			_ => EndpointHost::Api,
		}
	}
}
