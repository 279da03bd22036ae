//! Async Discogs API client: declarative endpoints, PLAINTEXT OAuth 1.0a handshakes, and typed
//! dispatch over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod request;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Credentials,
		client::{Client, DiscogsClient},
		config::ClientConfig,
		http::{ReqwestHttpClient, ReqwestTransportErrorMapper},
	};

	/// Application name reported in the `User-Agent` of test clients.
	pub const TEST_APP_NAME: &str = "DiscogsClientTests";
	/// Application version reported in the `User-Agent` of test clients.
	pub const TEST_APP_VERSION: &str = "1.0.0";

	/// Reqwest builder that accepts the self-signed certificates produced by `httpmock`.
	pub fn test_reqwest_builder() -> ReqwestClientBuilder {
		ReqwestClient::builder().danger_accept_invalid_certs(true).danger_accept_invalid_hostnames(true)
	}

	/// Builds a client configuration whose API and web hosts both point at `base_url`.
	pub fn test_config(base_url: &str) -> ClientConfig {
		let base = Url::parse(base_url).expect("Mock server base URL should parse.");

		ClientConfig::builder(TEST_APP_NAME, TEST_APP_VERSION)
			.api_base(base.clone())
			.web_base(base)
			.build()
			.expect("Test client configuration should be valid.")
	}

	/// Constructs a [`DiscogsClient`] that talks to the mock server at `base_url` with the
	/// provided credentials.
	pub fn build_reqwest_test_client(base_url: &str, credentials: Credentials) -> DiscogsClient {
		build_reqwest_test_client_with_config(test_config(base_url), credentials)
	}

	/// Constructs a [`DiscogsClient`] from `config`, applying its timeout the same way
	/// [`DiscogsClient::new`] does but over the insecure test builder.
	pub fn build_reqwest_test_client_with_config(
		config: ClientConfig,
		credentials: Credentials,
	) -> DiscogsClient {
		let http_client = ReqwestHttpClient::from_config(test_reqwest_builder(), &config)
			.expect("Failed to build insecure Reqwest client for tests.");

		Client::with_http_client(
			config,
			credentials,
			http_client,
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	#[cfg(test)] pub use parking_lot::Mutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{
		Client as ReqwestClient, ClientBuilder as ReqwestClientBuilder, Error as ReqwestError,
	};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use ::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
