//! Artist lookups and artist release listings.

// self
use crate::{
	_prelude::*,
	endpoint::{Endpoint, Method, MethodSet, QueryItem, SortOrder, query},
};

/// Fields an artist's release list can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtistReleaseSort {
	/// Release year.
	Year,
	/// Release title.
	Title,
	/// Release format.
	Format,
}
impl ArtistReleaseSort {
	/// Wire value of the sort field.
	pub const fn as_str(self) -> &'static str {
		match self {
			ArtistReleaseSort::Year => "year",
			ArtistReleaseSort::Title => "title",
			ArtistReleaseSort::Format => "format",
		}
	}
}
impl Display for ArtistReleaseSort {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Endpoints under `/artists/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Artists {
	/// A single artist.
	Get {
		/// Artist ID.
		id: u64,
	},
	/// Releases and masters credited to an artist; paginated.
	Releases {
		/// Artist ID.
		id: u64,
		/// Page to fetch.
		page: Option<u32>,
		/// Items per page.
		per_page: Option<u32>,
		/// Sort field.
		sort: Option<ArtistReleaseSort>,
		/// Sort direction.
		order: Option<SortOrder>,
	},
}
impl Endpoint for Artists {
	fn path(&self) -> String {
		match self {
			Artists::Get { id } => format!("/artists/{id}"),
			Artists::Releases { id, .. } => format!("/artists/{id}/releases"),
		}
	}

	fn methods(&self) -> MethodSet {
		Method::Get.into()
	}

	fn query(&self) -> Vec<QueryItem> {
		match self {
			Artists::Get { .. } => Vec::new(),
			Artists::Releases { page, per_page, sort, order, .. } => {
				let mut items = query::pagination(*page, *per_page).to_vec();

				items.push(QueryItem::optional("sort", *sort));
				items.push(SortOrder::query(*order));

				items
			},
		}
	}
}
