//! Declarative endpoint descriptors (data) consumed by the request builder.
//!
//! An [`Endpoint`] describes one call shape: a path under the API host, the verbs the path
//! accepts, ordered query items whose values may be absent, and an optional JSON body. The
//! catalog types in this module are closed enums over related paths; [`RawEndpoint`] covers
//! anything the catalog does not name.

pub mod artists;
pub mod body;
pub mod method;
pub mod oauth;
pub mod query;
pub mod raw;
pub mod releases;
pub mod wantlist;

pub use artists::*;
pub use body::*;
pub use method::*;
pub use oauth::*;
pub use query::*;
pub use raw::*;
pub use releases::*;
pub use wantlist::*;

// self
use crate::_prelude::*;

/// Default base URL for API calls.
pub const DEFAULT_API_BASE: &str = "https://api.discogs.com";
/// Default base URL for user-facing pages such as the OAuth authorize screen.
pub const DEFAULT_WEB_BASE: &str = "https://www.discogs.com";

/// Host family an endpoint lives on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointHost {
	#[default]
	/// `api.discogs.com`, used for every programmatic call.
	Api,
	/// `www.discogs.com`, used for browser redirects.
	Web,
}
impl EndpointHost {
	/// Parses the default base URL for the host.
	pub fn default_base(self) -> Option<Url> {
		match self {
			EndpointHost::Api => Url::parse(DEFAULT_API_BASE).ok(),
			EndpointHost::Web => Url::parse(DEFAULT_WEB_BASE).ok(),
		}
	}
}

/// Capability contract every endpoint descriptor implements.
///
/// Only [`path`](Endpoint::path) and [`methods`](Endpoint::methods) are required. An
/// endpoint with an empty method set can only be used as a redirect target through
/// [`url`](Endpoint::url).
pub trait Endpoint
where
	Self: Send + Sync,
{
	/// Path appended to the host's base URL; always starts with `/`.
	fn path(&self) -> String;

	/// Verbs the endpoint accepts.
	fn methods(&self) -> MethodSet;

	/// Ordered query items. Items without a value are omitted from the URL.
	fn query(&self) -> Vec<QueryItem> {
		Vec::new()
	}

	/// JSON body sent with POST and PUT calls.
	fn body(&self) -> Option<Body> {
		None
	}

	/// Host family the path belongs to.
	fn host(&self) -> EndpointHost {
		EndpointHost::Api
	}

	/// Absolute URL against the host's default base, or `None` when it cannot be formed.
	fn url(&self) -> Option<Url> {
		let base = self.host().default_base()?;

		compose_url(&base, &self.path(), &self.query()).ok()
	}
}

/// Joins `base`, `path`, and the present query items into a URL.
///
/// Items whose value is `None` are dropped entirely; when nothing remains the URL carries no
/// query string at all.
pub fn compose_url(base: &Url, path: &str, query: &[QueryItem]) -> Result<Url> {
	let raw = format!("{}{path}", base.as_str().trim_end_matches('/'));

	if !path.starts_with('/') {
		return Err(Error::BadUrl { url: raw, reason: "path must start with `/`".into() });
	}
	if path.contains(['?', '#']) {
		return Err(Error::BadUrl {
			url: raw,
			reason: "path must not contain `?` or `#`; encode the segment or use query items".into(),
		});
	}

	let mut url =
		Url::parse(&raw).map_err(|e| Error::BadUrl { url: raw.clone(), reason: e.to_string() })?;

	if url.cannot_be_a_base() {
		return Err(Error::BadUrl { url: raw, reason: "URL cannot carry a path".into() });
	}

	let mut present = query.iter().filter_map(QueryItem::as_pair).peekable();

	if present.peek().is_some() {
		url.query_pairs_mut().extend_pairs(present);
	}

	Ok(url)
}

/// Percent-encodes `segment` so it occupies exactly one path segment.
///
/// Catalog endpoints run every caller-supplied name through this, so `/`, `?`, `#`, and `%`
/// inside a username never change the request target.
pub fn path_segment(segment: &str) -> String {
	let Ok(mut scratch) = Url::parse(DEFAULT_API_BASE) else {
		return segment.to_owned();
	};

	if let Ok(mut segments) = scratch.path_segments_mut() {
		segments.clear().push(segment);
	}

	scratch.path().trim_start_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn api_base() -> Url {
		Url::parse(DEFAULT_API_BASE).expect("Default API base should parse.")
	}

	#[test]
	fn absent_query_values_are_dropped() {
		let query = [QueryItem::from(("page", Some("2"))), QueryItem::from(("per_page", None))];
		let url = compose_url(&api_base(), "/artists/1/releases", &query)
			.expect("Composed URL should be valid.");

		assert_eq!(url.as_str(), "https://api.discogs.com/artists/1/releases?page=2");
	}

	#[test]
	fn all_absent_query_values_leave_no_query_string() {
		let query = [QueryItem::absent("page"), QueryItem::absent("per_page")];
		let url =
			compose_url(&api_base(), "/releases/1", &query).expect("Composed URL should be valid.");

		assert_eq!(url.query(), None);
		assert_eq!(url.as_str(), "https://api.discogs.com/releases/1");
	}

	#[test]
	fn relative_paths_are_rejected() {
		let err = compose_url(&api_base(), "releases/1", &[])
			.expect_err("Paths without a leading slash should be rejected.");

		assert!(matches!(err, Error::BadUrl { .. }));
	}

	#[test]
	fn composed_urls_round_trip_path_and_query() {
		let query = [
			QueryItem::pair("notes", "first pressing & sleeve"),
			QueryItem::absent("rating"),
			QueryItem::pair("sort_order", SortOrder::Descending),
		];
		let url = compose_url(&api_base(), "/users/some one/wants/42", &query)
			.expect("Composed URL should be valid.");
		let reparsed = Url::parse(url.as_str()).expect("Composed URL should re-parse.");
		let pairs: Vec<(String, String)> = reparsed.query_pairs().into_owned().collect();

		assert_eq!(reparsed.path(), "/users/some%20one/wants/42");
		assert_eq!(
			pairs,
			vec![
				("notes".to_owned(), "first pressing & sleeve".to_owned()),
				("sort_order".to_owned(), "desc".to_owned()),
			]
		);
	}

	#[test]
	fn raw_query_and_fragment_markers_are_rejected() {
		for path in ["/users/a#b/wants", "/users/a?b/wants"] {
			let err = compose_url(&api_base(), path, &[QueryItem::pair("page", 2)])
				.expect_err("Paths with `?` or `#` should be rejected.");

			assert!(matches!(err, Error::BadUrl { .. }));
		}
	}

	#[test]
	fn encoded_segments_keep_the_request_target() {
		let segment = path_segment("dj#1?x/y%");

		assert_eq!(segment, "dj%231%3Fx%2Fy%25");

		let path = format!("/users/{segment}/wants");
		let url = compose_url(&api_base(), &path, &[QueryItem::pair("page", 2)])
			.expect("Encoded paths should compose.");
		let reparsed = Url::parse(url.as_str()).expect("Composed URL should re-parse.");

		assert_eq!(reparsed.path(), path);
		assert_eq!(reparsed.query(), Some("page=2"));
		assert_eq!(reparsed.fragment(), None);
	}

	#[test]
	fn redirect_only_endpoints_resolve_on_the_web_host() {
		let url = OAuthEndpoint::Authorize.url().expect("Authorize URL should be formed.");

		assert!(OAuthEndpoint::Authorize.methods().is_empty());
		assert_eq!(url.as_str(), "https://www.discogs.com/oauth/authorize");
	}
}
