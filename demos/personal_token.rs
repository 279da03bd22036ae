//! Demonstrates typed and raw dispatch with a personal access token against a mock API.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde::Deserialize;
use url::Url;
// self
use discogs_client::{
	auth::Credentials,
	client::DiscogsClient,
	config::ClientConfig,
	endpoint::{Releases, WantChange, Wantlist},
	http::{ReqwestHttpClient, ReqwestTransportErrorMapper},
	reqwest::Client as ReqwestClient,
};

#[derive(Debug, Deserialize)]
struct Release {
	id: u64,
	title: String,
	year: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let release_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/releases/249504").header("authorization", "Discogs token=demo");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":249504,\"title\":\"Never Gonna Give You Up\",\"year\":1987}");
		})
		.await;
	let want_mock = server
		.mock_async(|when, then| {
			when.method(PUT).path("/users/digger/wants/249504").query_param("rating", "4");
			then.status(201).header("content-type", "application/json").body("{\"id\":249504}");
		})
		.await;
	let config = ClientConfig::builder("DiscogsClientDemo", "0.1.0")
		.api_base(Url::parse(&server.base_url())?)
		.build()?;
	// httpmock serves a self-signed certificate, so the demo transport skips verification.
	let http_client = ReqwestHttpClient::with_client(
		ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = DiscogsClient::with_http_client(
		config,
		Credentials::personal_token("demo"),
		http_client,
		Arc::new(ReqwestTransportErrorMapper),
	);

	if let Some(release) = client.get::<Release>(&Releases::Get { id: 249504 }).await? {
		println!("Release {}: {} ({:?}).", release.id, release.title, release.year);
	}

	let response =
		client.put_raw(&Wantlist::Add(WantChange::new("digger", 249504).rating(4))).await?;

	println!("Wantlist add returned HTTP {}: {}.", response.status, response.text());

	release_mock.assert_async().await;
	want_mock.assert_async().await;

	Ok(())
}
