//! Second leg: send the user to the provider and capture the verifier from its redirect.

pub mod session;

pub use session::*;

// self
use crate::{
	_prelude::*,
	auth::{FlowStage, VerifierGrant},
	client::Client,
	endpoint::{self, Endpoint, OAuthEndpoint, QueryItem},
	error::ResponseError,
	http::{HttpTransport, TransportErrorMapper},
};

impl<C, M> Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the authorize URL for the stored request token.
	///
	/// Fails with [`Error::MissingStep`] when no request token is held.
	pub fn authorize_url(&self) -> Result<AuthorizationSession> {
		let request_token = self.auth().request_token().ok_or(Error::MissingStep {
			step: "authorize_url",
			required: FlowStage::RequestTokenIssued,
		})?;
		let endpoint = OAuthEndpoint::Authorize;
		let authorize_url = endpoint::compose_url(
			self.config().base(endpoint.host()),
			&endpoint.path(),
			&[QueryItem::pair("oauth_token", &request_token.token)],
		)?;

		Ok(AuthorizationSession::new(authorize_url, request_token))
	}

	/// Requests a token for `callback` and returns the authorize URL in one step.
	pub async fn start_authorization(&self, callback: &str) -> Result<AuthorizationSession> {
		self.request_token(callback).await?;

		self.authorize_url()
	}

	/// Reads `oauth_token` and `oauth_verifier` from the provider's redirect.
	///
	/// The echoed token must match the stored request token. On success the flow moves to
	/// [`FlowStage::UserAuthorized`].
	pub async fn complete_authorization(&self, callback_url: &Url) -> Result<VerifierGrant> {
		let _guard = self.flow_guard().lock().await;
		let issued = self.auth().request_token().ok_or(Error::MissingStep {
			step: "complete_authorization",
			required: FlowStage::RequestTokenIssued,
		})?;
		let grant = VerifierGrant::from_callback(callback_url)?;

		if grant.token != issued.token {
			return Err(ResponseError::malformed(
				"callback `oauth_token` does not match the issued request token",
			)
			.into());
		}

		self.auth().mark_user_authorized()?;

		Ok(grant)
	}
}
