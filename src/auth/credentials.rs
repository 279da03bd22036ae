//! Credentials supplied when a client is constructed.

// self
use crate::{_prelude::*, auth::Secret};

/// Credentials a client starts with.
///
/// Either a personal access token or a consumer key/secret pair must be present for calls to
/// be built. A stored access token pair may be supplied to skip the OAuth handshake.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// OAuth consumer key of the registered application.
	#[serde(default)]
	pub consumer_key: Option<String>,
	/// OAuth consumer secret of the registered application.
	#[serde(default)]
	pub consumer_secret: Option<Secret>,
	/// Personal access token; takes precedence over consumer credentials.
	#[serde(default)]
	pub personal_token: Option<Secret>,
	/// Access token obtained from a completed OAuth handshake.
	#[serde(default)]
	pub oauth_token: Option<String>,
	/// Access token secret obtained from a completed OAuth handshake.
	#[serde(default)]
	pub oauth_token_secret: Option<Secret>,
}
impl Credentials {
	/// Credentials backed by a personal access token.
	pub fn personal_token(token: impl Into<Secret>) -> Self {
		Self { personal_token: Some(token.into()), ..Default::default() }
	}

	/// Credentials backed by an OAuth consumer key/secret pair.
	pub fn consumer(key: impl Into<String>, secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: Some(key.into()),
			consumer_secret: Some(secret.into()),
			..Default::default()
		}
	}

	/// Attaches a previously issued access token pair.
	pub fn with_access_token(mut self, token: impl Into<String>, secret: impl Into<Secret>) -> Self {
		self.oauth_token = Some(token.into());
		self.oauth_token_secret = Some(secret.into());

		self
	}

	/// Returns true when both halves of an access token pair are present.
	pub fn has_access_token(&self) -> bool {
		self.oauth_token.is_some() && self.oauth_token_secret.is_some()
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret_set", &self.consumer_secret.is_some())
			.field("personal_token_set", &self.personal_token.is_some())
			.field("oauth_token", &self.oauth_token)
			.field("oauth_token_secret_set", &self.oauth_token_secret.is_some())
			.finish()
	}
}
