//! First leg: obtain a request token for a callback URL.

// self
use crate::{
	_prelude::*,
	auth::RequestToken,
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
	/// Requests temporary credentials and stores them in the auth context.
	///
	/// The call is signed with the consumer pair alone (`<consumer secret>&`) and carries
	/// `oauth_callback`. It may be issued from any stage; a previous handshake is discarded.
	/// Fails with [`Error::BadAuth`] when no consumer pair is configured and with
	/// [`Error::BadResponse`] when the provider rejects the call or its reply cannot be parsed.
	pub async fn request_token(&self, callback: &str) -> Result<RequestToken> {
		obs::observe(Operation::RequestToken, "request_token", async move {
			let _guard = self.flow_guard().lock().await;

			self.request_token_locked(callback).await
		})
		.await
	}

	async fn request_token_locked(&self, callback: &str) -> Result<RequestToken> {
		let (consumer_key, consumer_secret) = self.auth().consumer()?;
		let header = OAuthHeader::new(consumer_key, consumer_secret).with_callback(callback);
		let response = common::send_token_step(self, OAuthEndpoint::RequestToken, &header).await?;
		let request_token = RequestToken::parse(&response.body)?;

		#[cfg(feature = "tracing")]
		tracing::debug!(
			callback_confirmed = request_token.callback_confirmed,
			"Request token issued."
		);

		self.auth().store_request_token(request_token.clone());

		Ok(request_token)
	}
}
