//! Identity check for a completed handshake.

// self
use crate::{
	_prelude::*,
	client::Client,
	endpoint::{Method, OAuthEndpoint},
	http::{HttpTransport, TransportErrorMapper},
	obs::{self, Operation},
};

/// Account the access token belongs to, as reported by `/oauth/identity`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Numeric user id.
	pub id: u64,
	/// Username.
	pub username: String,
	/// API resource describing the user.
	pub resource_url: String,
	/// Name of the consumer application the token was issued to.
	pub consumer_name: String,
}

impl<C, M> Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Fetches the identity behind the current credentials.
	///
	/// Unlike the typed dispatch helpers, a reply that does not decode fails with
	/// [`Error::BadResponse`].
	pub async fn identity(&self) -> Result<Identity> {
		obs::observe(Operation::Identity, "identity", async move {
			let request = self.build(&OAuthEndpoint::Identity, Method::Get)?;

			self.execute(request).await?.json()
		})
		.await
	}
}
