//! Releases, release ratings, and release statistics.

// crates.io
use serde_json::json;
// self
use crate::endpoint::{self, Body, Endpoint, Method, MethodSet};

/// Highest rating the API accepts.
pub const MAX_RATING: u8 = 5;

/// Endpoints under `/releases/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Releases {
	/// A single release.
	Get {
		/// Release ID.
		id: u64,
	},
	/// A user's rating of a release.
	Rating {
		/// Release ID.
		id: u64,
		/// Username whose rating is requested.
		user: String,
	},
	/// Updates a user's rating of a release; requires authenticating as that user.
	SetRating {
		/// Release ID.
		id: u64,
		/// Username whose rating is updated.
		user: String,
		/// New rating; values above [`MAX_RATING`] are clamped.
		rating: u8,
	},
	/// Deletes a user's rating of a release.
	DeleteRating {
		/// Release ID.
		id: u64,
		/// Username whose rating is removed.
		user: String,
	},
	/// Community rating average and count.
	CommunityRating {
		/// Release ID.
		id: u64,
	},
	/// "Have" and "want" counts.
	Stats {
		/// Release ID.
		id: u64,
	},
}
impl Endpoint for Releases {
	fn path(&self) -> String {
		match self {
			Releases::Get { id } => format!("/releases/{id}"),
			Releases::Rating { id, user }
			| Releases::SetRating { id, user, .. }
			| Releases::DeleteRating { id, user } =>
				format!("/releases/{id}/rating/{}", endpoint::path_segment(user)),
			Releases::CommunityRating { id } => format!("/releases/{id}/rating"),
			Releases::Stats { id } => format!("/releases/{id}/stats"),
		}
	}

	fn methods(&self) -> MethodSet {
		match self {
			Releases::Get { .. } => MethodSet::of([Method::Get, Method::Delete]),
			Releases::Rating { .. } | Releases::CommunityRating { .. } | Releases::Stats { .. } =>
				Method::Get.into(),
			Releases::SetRating { .. } => Method::Put.into(),
			Releases::DeleteRating { .. } => Method::Delete.into(),
		}
	}

	fn body(&self) -> Option<Body> {
		match self {
			Releases::SetRating { rating, .. } =>
				Some(Body::from(json!({ "rating": (*rating).min(MAX_RATING) }))),
			_ => None,
		}
	}
}
