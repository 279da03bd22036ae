//! Third leg: trade the verified request token for an access token.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Secret, VerifierGrant},
	client::Client,
	endpoint::OAuthEndpoint,
	flows::common,
	http::{HttpTransport, TransportErrorMapper},
	obs::{self, Operation},
	request::OAuthHeader,
};

impl<C, M> Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges `oauth_token` plus `verifier` and returns the provider's raw reply.
	///
	/// Requires a stored request-token secret, otherwise fails with [`Error::MissingStep`]. The
	/// call is signed with `<consumer secret>&<request token secret>`. On success the flow is
	/// marked authenticated; parse the reply with [`AccessToken::parse`] and install it with
	/// [`AuthContext::set_access_token`](crate::auth::AuthContext::set_access_token), or use
	/// [`Client::exchange_access_token`] to do both.
	pub async fn access_token(&self, oauth_token: &str, verifier: &str) -> Result<Vec<u8>> {
		obs::observe(Operation::AccessToken, "access_token", async move {
			let _guard = self.flow_guard().lock().await;
			let body = self.access_token_locked(oauth_token, Secret::new(verifier)).await?;

			self.auth().mark_authenticated();

			Ok(body)
		})
		.await
	}

	/// Completes the handshake for a captured grant and stores the resulting access token.
	pub async fn exchange_access_token(&self, grant: &VerifierGrant) -> Result<AccessToken> {
		obs::observe(Operation::AccessToken, "exchange_access_token", async move {
			let _guard = self.flow_guard().lock().await;
			let body = self.access_token_locked(&grant.token, grant.verifier.clone()).await?;
			let access = AccessToken::parse(&body)?;

			self.auth().set_access_token(&access);

			Ok(access)
		})
		.await
	}

	async fn access_token_locked(&self, oauth_token: &str, verifier: Secret) -> Result<Vec<u8>> {
		let request_secret = self.auth().request_token_secret("access_token")?;
		let (consumer_key, consumer_secret) = self.auth().consumer()?;
		let header = OAuthHeader::new(consumer_key, consumer_secret)
			.with_token(oauth_token, request_secret)
			.with_verifier(verifier);
		let response = common::send_token_step(self, OAuthEndpoint::AccessToken, &header).await?;

		Ok(response.body)
	}
}
