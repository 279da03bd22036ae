//! Client configuration: application identity, base URLs, and transport tuning.
//!
//! The API asks every caller to identify itself with a `User-Agent` of the form
//! `<name>/<version> +<about URL>`. [`ClientConfig`] carries that identity together with the
//! API and web base URLs so tests and proxies can point the client elsewhere.

// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	endpoint::{DEFAULT_API_BASE, DEFAULT_WEB_BASE, EndpointHost},
};

/// About URL used when the application does not supply one.
pub const DEFAULT_ABOUT_URL: &str = "https://github.com/discogs-client";

/// Errors raised while validating a [`ClientConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ClientConfigError {
	/// Application name is empty or whitespace.
	#[error("Application name must not be empty.")]
	EmptyName,
	/// Application version is empty or whitespace.
	#[error("Application version must not be empty.")]
	EmptyVersion,
	/// A base URL cannot carry endpoint paths.
	#[error("The {base} base URL must be an absolute http(s) URL: {url}.")]
	InvalidBase {
		/// Which base failed validation.
		base: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// A built-in default failed to parse.
	#[error("Default {base} base URL failed to parse.")]
	DefaultBase {
		/// Which base failed to parse.
		base: &'static str,
	},
}

/// Identity reported in the `User-Agent` header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
	/// Application name.
	pub name: String,
	/// Application version.
	pub version: String,
	/// Page describing the application.
	pub about_url: Url,
}
impl AppIdentity {
	/// Renders `<name>/<version> +<about URL>`.
	pub fn user_agent(&self) -> String {
		format!("{}/{} +{}", self.name, self.version, self.about_url)
	}
}

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Application identity.
	pub identity: AppIdentity,
	/// Base URL for API calls.
	pub api_base: Url,
	/// Base URL for user-facing pages.
	pub web_base: Url,
	/// Per-request timeout applied by the default transport.
	#[serde(default)]
	pub timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Creates a new builder for the provided application name and version.
	pub fn builder(name: impl Into<String>, version: impl Into<String>) -> ClientConfigBuilder {
		ClientConfigBuilder::new(name, version)
	}

	/// Base URL for the given host family.
	pub fn base(&self, host: EndpointHost) -> &Url {
		match host {
			EndpointHost::Api => &self.api_base,
			EndpointHost::Web => &self.web_base,
		}
	}

	/// Rendered `User-Agent` header value.
	pub fn user_agent(&self) -> String {
		self.identity.user_agent()
	}

	/// Validates invariants for the configuration.
	pub fn validate(&self) -> Result<(), ClientConfigError> {
		if self.identity.name.trim().is_empty() {
			return Err(ClientConfigError::EmptyName);
		}
		if self.identity.version.trim().is_empty() {
			return Err(ClientConfigError::EmptyVersion);
		}

		validate_base("api", &self.api_base)?;
		validate_base("web", &self.web_base)?;

		Ok(())
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Application name.
	pub name: String,
	/// Application version.
	pub version: String,
	/// Optional about URL; defaults to [`DEFAULT_ABOUT_URL`].
	pub about_url: Option<Url>,
	/// Optional API base; defaults to [`DEFAULT_API_BASE`].
	pub api_base: Option<Url>,
	/// Optional web base; defaults to [`DEFAULT_WEB_BASE`].
	pub web_base: Option<Url>,
	/// Optional per-request timeout.
	pub timeout: Option<StdDuration>,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the application name and version.
	pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			version: version.into(),
			about_url: None,
			api_base: None,
			web_base: None,
			timeout: None,
		}
	}

	/// Sets the about URL reported in the `User-Agent`.
	pub fn about_url(mut self, url: Url) -> Self {
		self.about_url = Some(url);

		self
	}

	/// Overrides the API base URL.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(url);

		self
	}

	/// Overrides the web base URL.
	pub fn web_base(mut self, url: Url) -> Self {
		self.web_base = Some(url);

		self
	}

	/// Sets a per-request timeout for the default transport.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		let about_url = match self.about_url {
			Some(url) => url,
			None => parse_default("about", DEFAULT_ABOUT_URL)?,
		};
		let api_base = match self.api_base {
			Some(url) => url,
			None => parse_default("api", DEFAULT_API_BASE)?,
		};
		let web_base = match self.web_base {
			Some(url) => url,
			None => parse_default("web", DEFAULT_WEB_BASE)?,
		};
		let config = ClientConfig {
			identity: AppIdentity { name: self.name, version: self.version, about_url },
			api_base,
			web_base,
			timeout: self.timeout,
		};

		config.validate()?;

		Ok(config)
	}
}

fn parse_default(base: &'static str, raw: &str) -> Result<Url, ClientConfigError> {
	Url::parse(raw).map_err(|_| ClientConfigError::DefaultBase { base })
}

fn validate_base(base: &'static str, url: &Url) -> Result<(), ClientConfigError> {
	let http_scheme = matches!(url.scheme(), "http" | "https");

	if !http_scheme || url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some()
	{
		Err(ClientConfigError::InvalidBase { base, url: url.to_string() })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_point_at_discogs() {
		let config = ClientConfig::builder("DiscogsClientTests", "1.0.0")
			.build()
			.expect("Default configuration should be valid.");

		assert_eq!(config.api_base.as_str(), "https://api.discogs.com/");
		assert_eq!(config.web_base.as_str(), "https://www.discogs.com/");
		assert_eq!(
			config.user_agent(),
			"DiscogsClientTests/1.0.0 +https://github.com/discogs-client"
		);
	}

	#[test]
	fn blank_identity_is_rejected() {
		let err = ClientConfig::builder(" ", "1.0.0").build().expect_err("Blank names fail.");

		assert_eq!(err, ClientConfigError::EmptyName);

		let err = ClientConfig::builder("app", "").build().expect_err("Blank versions fail.");

		assert_eq!(err, ClientConfigError::EmptyVersion);
	}

	#[test]
	fn non_http_bases_are_rejected() {
		let err = ClientConfig::builder("app", "1.0")
			.api_base(Url::parse("mailto:ops@example.com").expect("Fixture URL should parse."))
			.build()
			.expect_err("Non-http bases should fail validation.");

		assert!(matches!(err, ClientConfigError::InvalidBase { base: "api", .. }));
	}
}
