//! Token pairs exchanged during the OAuth 1.0a handshake.
//!
//! The provider answers both token steps with `application/x-www-form-urlencoded` bodies,
//! e.g. `oauth_token=...&oauth_token_secret=...&oauth_callback_confirmed=true`.

// std
use std::collections::HashMap;
// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, auth::Secret, error::ResponseError};

/// Temporary credentials issued by the request-token step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestToken {
	/// Public request token, sent to the authorize page.
	pub token: String,
	/// Request token secret, used to sign the access-token exchange.
	pub secret: Secret,
	/// Whether the provider acknowledged the callback URL.
	pub callback_confirmed: bool,
}
impl RequestToken {
	/// Parses the form-encoded reply of the request-token endpoint.
	pub fn parse(body: &[u8]) -> Result<Self> {
		let mut fields = form_fields(body);
		let token = take_field(&mut fields, "oauth_token")?;
		let secret = take_field(&mut fields, "oauth_token_secret")?;
		let callback_confirmed =
			fields.get("oauth_callback_confirmed").is_some_and(|value| value == "true");

		Ok(Self { token, secret: Secret::new(secret), callback_confirmed })
	}
}

/// Long-lived credentials issued by the access-token step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Access token sent as `oauth_token` on every authenticated call.
	pub token: String,
	/// Access token secret, the second half of the PLAINTEXT signature.
	pub secret: Secret,
}
impl AccessToken {
	/// Parses the form-encoded reply of the access-token endpoint.
	pub fn parse(body: &[u8]) -> Result<Self> {
		let mut fields = form_fields(body);
		let token = take_field(&mut fields, "oauth_token")?;
		let secret = take_field(&mut fields, "oauth_token_secret")?;

		Ok(Self { token, secret: Secret::new(secret) })
	}
}

/// Token and verifier captured from the provider's redirect after the user approved access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierGrant {
	/// Request token echoed back by the provider.
	pub token: String,
	/// Verifier proving the user approved the request token.
	pub verifier: Secret,
}
impl VerifierGrant {
	/// Extracts `oauth_token` and `oauth_verifier` from a callback URL's query.
	pub fn from_callback(callback: &Url) -> Result<Self> {
		let mut fields: HashMap<String, String> = callback.query_pairs().into_owned().collect();
		let token = take_field(&mut fields, "oauth_token")?;
		let verifier = take_field(&mut fields, "oauth_verifier")?;

		Ok(Self { token, verifier: Secret::new(verifier) })
	}
}

fn form_fields(body: &[u8]) -> HashMap<String, String> {
	form_urlencoded::parse(body).into_owned().collect()
}

fn take_field(fields: &mut HashMap<String, String>, name: &str) -> Result<String> {
	fields
		.remove(name)
		.filter(|value| !value.is_empty())
		.ok_or_else(|| ResponseError::malformed(format!("missing `{name}`")).into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_token_parses_form_reply() {
		let token = RequestToken::parse(
			b"oauth_token=req-token&oauth_token_secret=req-secret&oauth_callback_confirmed=true",
		)
		.expect("Request token reply should parse.");

		assert_eq!(token.token, "req-token");
		assert_eq!(token.secret.expose(), "req-secret");
		assert!(token.callback_confirmed);
	}

	#[test]
	fn missing_secret_is_a_bad_response() {
		let err = AccessToken::parse(b"oauth_token=only-token")
			.expect_err("Replies without a secret should be rejected.");

		assert!(matches!(err, Error::BadResponse(ResponseError::Malformed { .. })));
	}

	#[test]
	fn verifier_is_read_from_callback_query() {
		let callback = Url::parse("myapp://callback?oauth_token=req-token&oauth_verifier=v123")
			.expect("Callback URL should parse.");
		let grant = VerifierGrant::from_callback(&callback).expect("Verifier should be found.");

		assert_eq!(grant.token, "req-token");
		assert_eq!(grant.verifier.expose(), "v123");
	}
}
