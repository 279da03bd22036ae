//! Query items whose values may be absent.

// self
use crate::_prelude::*;

/// One query parameter whose value may be absent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryItem {
	/// Parameter name.
	pub name: String,
	/// Parameter value; `None` drops the item from the URL.
	pub value: Option<String>,
}
impl QueryItem {
	/// Item with a present value.
	pub fn pair(name: impl Into<String>, value: impl Display) -> Self {
		Self { name: name.into(), value: Some(value.to_string()) }
	}

	/// Item with an optional value.
	pub fn optional<T>(name: impl Into<String>, value: Option<T>) -> Self
	where
		T: Display,
	{
		Self { name: name.into(), value: value.map(|v| v.to_string()) }
	}

	/// Item without a value.
	pub fn absent(name: impl Into<String>) -> Self {
		Self { name: name.into(), value: None }
	}

	/// Borrowed `(name, value)` pair when the value is present.
	pub fn as_pair(&self) -> Option<(&str, &str)> {
		self.value.as_deref().map(|value| (self.name.as_str(), value))
	}
}
impl From<(&str, Option<&str>)> for QueryItem {
	fn from((name, value): (&str, Option<&str>)) -> Self {
		Self { name: name.to_owned(), value: value.map(str::to_owned) }
	}
}
impl From<(&str, &str)> for QueryItem {
	fn from((name, value): (&str, &str)) -> Self {
		Self::pair(name, value)
	}
}

/// Ascending or descending ordering, sent as `sort_order`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
	/// Smallest first.
	#[serde(rename = "asc")]
	Ascending,
	/// Largest first.
	#[serde(rename = "desc")]
	Descending,
}
impl SortOrder {
	/// Wire value of the ordering.
	pub const fn as_str(self) -> &'static str {
		match self {
			SortOrder::Ascending => "asc",
			SortOrder::Descending => "desc",
		}
	}

	/// `sort_order` query item for an optional ordering.
	pub fn query(order: Option<Self>) -> QueryItem {
		QueryItem::optional("sort_order", order)
	}
}
impl Display for SortOrder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Shared `page` / `per_page` pagination items.
pub(crate) fn pagination(page: Option<u32>, per_page: Option<u32>) -> [QueryItem; 2] {
	[QueryItem::optional("page", page), QueryItem::optional("per_page", per_page)]
}
