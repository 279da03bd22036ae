//! HTTP verbs and the per-endpoint verb set.

// self
use crate::_prelude::*;

/// HTTP verbs accepted by the Discogs API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Every verb, in declaration order.
	pub const ALL: [Method; 4] = [Method::Get, Method::Post, Method::Put, Method::Delete];

	/// Returns the wire name of the verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}

	/// True for POST and PUT, the only verbs that carry a body.
	pub const fn has_body(self) -> bool {
		matches!(self, Method::Post | Method::Put)
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<Method> for ::http::Method {
	fn from(method: Method) -> Self {
		match method {
			Method::Get => ::http::Method::GET,
			Method::Post => ::http::Method::POST,
			Method::Put => ::http::Method::PUT,
			Method::Delete => ::http::Method::DELETE,
		}
	}
}

/// Set of verbs an endpoint accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSet {
	/// Accepts `GET`.
	pub get: bool,
	/// Accepts `POST`.
	pub post: bool,
	/// Accepts `PUT`.
	pub put: bool,
	/// Accepts `DELETE`.
	pub delete: bool,
}
impl MethodSet {
	/// Empty set, for redirect-only endpoints.
	pub const NONE: Self = Self { get: false, post: false, put: false, delete: false };

	/// Builds a set from the provided verbs.
	pub fn of<I>(methods: I) -> Self
	where
		I: IntoIterator<Item = Method>,
	{
		methods.into_iter().fold(Self::NONE, Self::enable)
	}

	/// Returns true if the verb is part of the set.
	pub const fn contains(self, method: Method) -> bool {
		match method {
			Method::Get => self.get,
			Method::Post => self.post,
			Method::Put => self.put,
			Method::Delete => self.delete,
		}
	}

	/// Adds a verb to the set.
	pub const fn enable(mut self, method: Method) -> Self {
		match method {
			Method::Get => self.get = true,
			Method::Post => self.post = true,
			Method::Put => self.put = true,
			Method::Delete => self.delete = true,
		}

		self
	}

	/// Returns true when no verb is enabled.
	pub const fn is_empty(self) -> bool {
		!self.get && !self.post && !self.put && !self.delete
	}

	/// Iterates over the enabled verbs.
	pub fn iter(self) -> impl Iterator<Item = Method> {
		Method::ALL.into_iter().filter(move |method| self.contains(*method))
	}
}
impl From<Method> for MethodSet {
	fn from(method: Method) -> Self {
		Self::NONE.enable(method)
	}
}
impl<const N: usize> From<[Method; N]> for MethodSet {
	fn from(methods: [Method; N]) -> Self {
		Self::of(methods)
	}
}
