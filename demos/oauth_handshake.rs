//! Walks through the three-legged OAuth handshake against a mock provider.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use discogs_client::{
	auth::Credentials,
	client::DiscogsClient,
	config::ClientConfig,
	http::{ReqwestHttpClient, ReqwestTransportErrorMapper},
	reqwest::Client as ReqwestClient,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let request_token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(200).body(
				"oauth_token=demo-request&oauth_token_secret=demo-request-secret&oauth_callback_confirmed=true",
			);
		})
		.await;
	let access_token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=demo-access&oauth_token_secret=demo-access-secret");
		})
		.await;
	let identity_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/identity");
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":1,\"username\":\"digger\",\"resource_url\":\"https://api.discogs.com/users/digger\",\"consumer_name\":\"DiscogsClientDemo\"}",
			);
		})
		.await;
	let base = Url::parse(&server.base_url())?;
	let config = ClientConfig::builder("DiscogsClientDemo", "0.1.0")
		.api_base(base.clone())
		.web_base(base)
		.build()?;
	let http_client = ReqwestHttpClient::with_client(
		ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = DiscogsClient::with_http_client(
		config,
		Credentials::consumer("demo-key", "demo-consumer-secret"),
		http_client,
		Arc::new(ReqwestTransportErrorMapper),
	);
	let session = client.start_authorization("myapp://callback").await?;

	println!("Send the user to {}.", session.authorize_url);

	// The provider redirects back to the callback with the verifier appended.
	let callback = Url::parse("myapp://callback?oauth_token=demo-request&oauth_verifier=demo")?;
	let grant = client.complete_authorization(&callback).await?;
	let access = client.exchange_access_token(&grant).await?;

	println!("Authenticated with access token {}.", access.token);

	let identity = client.identity().await?;

	println!("Signed in as {} (id {}).", identity.username, identity.id);

	request_token_mock.assert_async().await;
	access_token_mock.assert_async().await;
	identity_mock.assert_async().await;

	Ok(())
}
