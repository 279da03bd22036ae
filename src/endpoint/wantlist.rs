//! A user's wantlist.

// self
use crate::endpoint::{self, Endpoint, Method, MethodSet, QueryItem, query};

/// Endpoints under `/users/{username}/wants`.
///
/// Mutations require authenticating as the wantlist owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Wantlist {
	/// Lists the releases in a wantlist; paginated.
	List {
		/// Wantlist owner.
		username: String,
		/// Page to fetch.
		page: Option<u32>,
		/// Items per page.
		per_page: Option<u32>,
	},
	/// Adds a release.
	Add(WantChange),
	/// Edits the notes or rating of a wanted release.
	Edit(WantChange),
	/// Removes a release.
	Remove {
		/// Wantlist owner.
		username: String,
		/// Release ID.
		release_id: u64,
	},
}

/// Release reference plus the optional fields sent when adding or editing a want.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WantChange {
	/// Wantlist owner.
	pub username: String,
	/// Release ID.
	pub release_id: u64,
	/// Free-form notes.
	pub notes: Option<String>,
	/// Rating from 0 (unrated) to 5.
	pub rating: Option<u8>,
}
impl WantChange {
	/// Change with no notes or rating.
	pub fn new(username: impl Into<String>, release_id: u64) -> Self {
		Self { username: username.into(), release_id, notes: None, rating: None }
	}

	/// Sets the notes.
	pub fn notes(mut self, notes: impl Into<String>) -> Self {
		self.notes = Some(notes.into());

		self
	}

	/// Sets the rating.
	pub fn rating(mut self, rating: u8) -> Self {
		self.rating = Some(rating);

		self
	}
}

impl Endpoint for Wantlist {
	fn path(&self) -> String {
		match self {
			Wantlist::List { username, .. } =>
				format!("/users/{}/wants", endpoint::path_segment(username)),
			Wantlist::Add(WantChange { username, release_id, .. })
			| Wantlist::Edit(WantChange { username, release_id, .. })
			| Wantlist::Remove { username, release_id } =>
				format!("/users/{}/wants/{release_id}", endpoint::path_segment(username)),
		}
	}

	fn methods(&self) -> MethodSet {
		match self {
			Wantlist::List { .. } => Method::Get.into(),
			Wantlist::Add(_) => Method::Put.into(),
			Wantlist::Edit(_) => Method::Post.into(),
			Wantlist::Remove { .. } => Method::Delete.into(),
		}
	}

	fn query(&self) -> Vec<QueryItem> {
		match self {
			Wantlist::List { page, per_page, .. } => query::pagination(*page, *per_page).to_vec(),
			Wantlist::Add(change) | Wantlist::Edit(change) => vec![
				QueryItem::optional("notes", change.notes.as_deref()),
				QueryItem::optional("rating", change.rating),
			],
			Wantlist::Remove { .. } => Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn want_changes_only_send_present_fields() {
		let endpoint = Wantlist::Add(WantChange::new("digger", 42).rating(4));
		let url = endpoint.url().expect("Wantlist URL should be formed.");

		assert_eq!(url.as_str(), "https://api.discogs.com/users/digger/wants/42?rating=4");
		assert_eq!(endpoint.methods(), MethodSet::from(Method::Put));
	}

	#[test]
	fn reserved_characters_in_usernames_stay_in_the_path() {
		let endpoint = Wantlist::List { username: "a?b".into(), page: Some(2), per_page: None };
		let url = endpoint.url().expect("Wantlist URL should be formed.");

		assert_eq!(url.path(), "/users/a%3Fb/wants");
		assert_eq!(url.query(), Some("page=2"));
	}
}
