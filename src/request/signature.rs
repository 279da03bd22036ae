//! OAuth 1.0a `Authorization` header with the PLAINTEXT signature method.

// crates.io
use uuid::Uuid;
// self
use crate::{_prelude::*, auth::Secret};

/// Signature method advertised in every OAuth header.
pub const SIGNATURE_METHOD: &str = "PLAINTEXT";
/// OAuth protocol version advertised in every OAuth header.
pub const OAUTH_VERSION: &str = "1.0";

/// PLAINTEXT signature: `<consumer secret>&<token secret or empty>`.
pub fn plaintext_signature(consumer_secret: &str, token_secret: Option<&str>) -> String {
	format!("{consumer_secret}&{}", token_secret.unwrap_or_default())
}

/// Fields of an OAuth `Authorization` header.
///
/// The nonce and timestamp are generated on construction; tests may pin them with
/// [`with_nonce`](Self::with_nonce) and [`with_timestamp`](Self::with_timestamp).
#[derive(Clone)]
pub struct OAuthHeader {
	consumer_key: String,
	consumer_secret: Secret,
	nonce: String,
	timestamp: i64,
	callback: Option<String>,
	token: Option<String>,
	token_secret: Option<Secret>,
	verifier: Option<Secret>,
}
impl OAuthHeader {
	/// Header for the consumer pair with a fresh nonce and the current timestamp.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: Secret) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret,
			nonce: Uuid::new_v4().to_string(),
			timestamp: OffsetDateTime::now_utc().unix_timestamp(),
			callback: None,
			token: None,
			token_secret: None,
			verifier: None,
		}
	}

	/// Pins the nonce.
	pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
		self.nonce = nonce.into();

		self
	}

	/// Pins the timestamp (Unix seconds).
	pub fn with_timestamp(mut self, timestamp: i64) -> Self {
		self.timestamp = timestamp;

		self
	}

	/// Adds `oauth_callback`, sent with the request-token step.
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = Some(callback.into());

		self
	}

	/// Adds `oauth_token` and folds its secret into the signature.
	pub fn with_token(mut self, token: impl Into<String>, token_secret: Secret) -> Self {
		self.token = Some(token.into());
		self.token_secret = Some(token_secret);

		self
	}

	/// Adds `oauth_verifier`, sent with the access-token step.
	pub fn with_verifier(mut self, verifier: Secret) -> Self {
		self.verifier = Some(verifier);

		self
	}

	/// PLAINTEXT signature for the configured secrets.
	pub fn signature(&self) -> String {
		plaintext_signature(
			self.consumer_secret.expose(),
			self.token_secret.as_ref().map(Secret::expose),
		)
	}

	/// Renders the header value.
	pub fn render(&self) -> String {
		let mut fields = vec![
			("oauth_consumer_key", self.consumer_key.clone()),
			("oauth_nonce", self.nonce.clone()),
			("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp", self.timestamp.to_string()),
			("oauth_version", OAUTH_VERSION.to_owned()),
		];

		if let Some(callback) = &self.callback {
			fields.push(("oauth_callback", callback.clone()));
		}
		if let Some(token) = &self.token {
			fields.push(("oauth_token", token.clone()));
		}
		if let Some(verifier) = &self.verifier {
			fields.push(("oauth_verifier", verifier.expose().to_owned()));
		}

		fields.push(("oauth_signature", self.signature()));

		let rendered: Vec<String> =
			fields.into_iter().map(|(name, value)| format!("{name}=\"{value}\"")).collect();

		format!("OAuth {}", rendered.join(","))
	}
}
impl Debug for OAuthHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthHeader")
			.field("consumer_key", &self.consumer_key)
			.field("nonce", &self.nonce)
			.field("timestamp", &self.timestamp)
			.field("callback", &self.callback)
			.field("token", &self.token)
			.field("verifier_set", &self.verifier.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn plaintext_signature_joins_secrets() {
		assert_eq!(plaintext_signature("S", None), "S&");
		assert_eq!(plaintext_signature("S", Some("T")), "S&T");
	}

	#[test]
	fn request_token_header_lists_fields_in_order() {
		let header = OAuthHeader::new("key", Secret::new("S"))
			.with_nonce("nonce-1")
			.with_timestamp(1_700_000_000)
			.with_callback("myapp://callback");

		assert_eq!(
			header.render(),
			"OAuth oauth_consumer_key=\"key\",oauth_nonce=\"nonce-1\",\
			 oauth_signature_method=\"PLAINTEXT\",oauth_timestamp=\"1700000000\",\
			 oauth_version=\"1.0\",oauth_callback=\"myapp://callback\",oauth_signature=\"S&\""
		);
	}

	#[test]
	fn access_token_header_carries_token_verifier_and_combined_signature() {
		let header = OAuthHeader::new("key", Secret::new("S"))
			.with_nonce("nonce-2")
			.with_timestamp(1_700_000_001)
			.with_token("req-token", Secret::new("T"))
			.with_verifier(Secret::new("v123"));
		let rendered = header.render();

		assert!(rendered.ends_with(
			"oauth_token=\"req-token\",oauth_verifier=\"v123\",oauth_signature=\"S&T\""
		));
		assert!(!format!("{header:?}").contains("v123"));
	}

	#[test]
	fn fresh_headers_use_uuid_nonces() {
		let first = OAuthHeader::new("key", Secret::new("S"));
		let second = OAuthHeader::new("key", Secret::new("S"));

		assert_ne!(first.nonce, second.nonce);
		assert!(Uuid::parse_str(&first.nonce).is_ok());
	}
}
