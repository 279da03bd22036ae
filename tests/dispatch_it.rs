#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use discogs_client::{
	_preludet::*,
	auth::Credentials,
	endpoint::{Artists, Releases, SortOrder, Wantlist},
	error::ResponseError,
};

#[derive(Debug, Deserialize)]
struct Release {
	id: u64,
	title: String,
}

#[tokio::test]
async fn personal_token_get_decodes_release() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/releases/123")
				.header("authorization", "Discogs token=abc")
				.header("user-agent", "DiscogsClientTests/1.0.0 +https://github.com/discogs-client");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":123,\"title\":\"Kind of Blue\",\"year\":1959}");
		})
		.await;
	let release = client
		.get::<Release>(&Releases::Get { id: 123 })
		.await
		.expect("Release lookup should succeed.")
		.expect("Release body should decode.");

	assert_eq!(release.id, 123);
	assert_eq!(release.title, "Kind of Blue");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn rating_put_sends_clamped_json_body() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/releases/123/rating/digger")
				.header("content-type", "application/json")
				.body("{\"rating\":5}");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"username\":\"digger\",\"release_id\":123,\"rating\":5}");
		})
		.await;
	let response = client
		.put_raw(&Releases::SetRating { id: 123, user: "digger".into(), rating: 9 })
		.await
		.expect("Rating update should succeed.");

	assert_eq!(response.status, 201);
	assert!(response.text().contains("\"rating\":5"));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn paged_queries_only_send_present_items() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/artists/45/releases")
				.query_param("page", "2")
				.query_param("sort_order", "desc");
			then.status(200).header("content-type", "application/json").body("{\"releases\":[]}");
		})
		.await;
	let endpoint = Artists::Releases {
		id: 45,
		page: Some(2),
		per_page: None,
		sort: None,
		order: Some(SortOrder::Descending),
	};
	let response = client.get_raw(&endpoint).await.expect("Artist releases should load.");

	assert_eq!(response.status, 200);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn rate_limited_calls_surface_status_message_and_retry_after() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/users/digger/wants");
			then.status(429)
				.header("content-type", "application/json")
				.header("retry-after", "60")
				.body("{\"message\":\"You are making requests too quickly.\"}");
		})
		.await;
	let err = client
		.get::<serde_json::Value>(&Wantlist::List {
			username: "digger".into(),
			page: None,
			per_page: None,
		})
		.await
		.expect_err("A 429 reply should fail the call.");

	match err {
		Error::BadResponse(ResponseError::Status { status, message, retry_after, .. }) => {
			assert_eq!(status, 429);
			assert_eq!(message.as_deref(), Some("You are making requests too quickly."));
			assert_eq!(retry_after, Some(Duration::seconds(60)));
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn undecodable_bodies_yield_none_for_typed_calls() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/releases/7");
			then.status(200).header("content-type", "application/json").body("[1,2,3]");
		})
		.await;
	let release = client
		.get::<Release>(&Releases::Get { id: 7 })
		.await
		.expect("A 200 reply should not fail the call.");

	assert!(release.is_none());

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn delete_sends_no_body() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/users/digger/wants/42").body("");
			then.status(204);
		})
		.await;
	let response = client
		.delete_raw(&Wantlist::Remove { username: "digger".into(), release_id: 42 })
		.await
		.expect("Want removal should succeed.");

	assert_eq!(response.status, 204);
	assert!(response.body.is_empty());

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn configured_timeout_surfaces_as_timeout_error() {
	let server = MockServer::start_async().await;
	let mut config = test_config(&server.base_url());

	config.timeout = Some(std::time::Duration::from_millis(200));

	let client = build_reqwest_test_client_with_config(config, Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/releases/1");
			then.status(200)
				.delay(std::time::Duration::from_millis(1_500))
				.header("content-type", "application/json")
				.body("{\"id\":1,\"title\":\"Late\"}");
		})
		.await;
	let err = client
		.get_raw(&Releases::Get { id: 1 })
		.await
		.expect_err("A reply slower than the timeout should fail the call.");

	assert!(matches!(err, Error::BadResponse(ResponseError::Timeout)));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn spawned_calls_on_clones_share_one_client() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/releases/123").header("authorization", "Discogs token=abc");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":123,\"title\":\"Kind of Blue\"}");
		})
		.await;
	let raw = tokio::spawn({
		let client = client.clone();

		async move { client.get_raw(&Releases::Get { id: 123 }).await }
	});
	let typed = tokio::spawn({
		let client = client.clone();

		async move { client.get::<Release>(&Releases::Get { id: 123 }).await }
	});
	let (raw, typed) = tokio::join!(raw, typed);

	assert_eq!(raw.expect("Task should not panic.").expect("Raw call should succeed.").status, 200);
	assert_eq!(
		typed
			.expect("Task should not panic.")
			.expect("Typed call should succeed.")
			.expect("Body should decode.")
			.id,
		123
	);

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn reserved_characters_in_usernames_reach_the_right_path() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), Credentials::personal_token("abc"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path_includes("/users/dj")
				.path_includes("/wants")
				.query_param("page", "2");
			then.status(200).header("content-type", "application/json").body("{\"wants\":[]}");
		})
		.await;
	let response = client
		.get_raw(&Wantlist::List { username: "dj#1".into(), page: Some(2), per_page: None })
		.await
		.expect("Wantlist lookup should succeed.");

	assert_eq!(response.status, 200);

	mock.assert_calls_async(1).await;
}
