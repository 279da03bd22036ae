//! Browser hand-off state for the authorize step.

// self
use crate::{_prelude::*, auth::RequestToken};

/// Browser hand-off produced by [`Client::authorize_url`](crate::client::Client::authorize_url).
#[derive(Clone, Debug)]
pub struct AuthorizationSession {
	/// Provider page the user must visit to approve access.
	pub authorize_url: Url,
	/// Request token the URL was issued for.
	pub request_token: RequestToken,
}
impl AuthorizationSession {
	pub(crate) fn new(authorize_url: Url, request_token: RequestToken) -> Self {
		Self { authorize_url, request_token }
	}

	/// Whether the provider acknowledged the callback supplied with the request token.
	pub fn callback_confirmed(&self) -> bool {
		self.request_token.callback_confirmed
	}

	/// Returns true when `callback_url` echoes this session's request token.
	pub fn matches_callback(&self, callback_url: &Url) -> bool {
		callback_url
			.query_pairs()
			.any(|(name, value)| name == "oauth_token" && value == self.request_token.token)
	}
}
