//! Descriptor for arbitrary paths.

// self
use crate::endpoint::{Body, Endpoint, EndpointHost, MethodSet, QueryItem};

/// Ad-hoc descriptor for paths the built-in catalog does not cover.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEndpoint {
	/// Path under the host base; must start with `/`.
	pub path: String,
	/// Accepted verbs.
	pub methods: MethodSet,
	/// Ordered query items.
	pub query: Vec<QueryItem>,
	/// Optional JSON body.
	pub body: Option<Body>,
	/// Host family.
	pub host: EndpointHost,
}
impl RawEndpoint {
	/// Creates a descriptor for `path` accepting `methods`.
	pub fn new(path: impl Into<String>, methods: impl Into<MethodSet>) -> Self {
		Self {
			path: path.into(),
			methods: methods.into(),
			query: Vec::new(),
			body: None,
			host: EndpointHost::Api,
		}
	}

	/// Appends a query item.
	pub fn with_query(mut self, item: impl Into<QueryItem>) -> Self {
		self.query.push(item.into());

		self
	}

	/// Sets the JSON body.
	pub fn with_body(mut self, body: Body) -> Self {
		self.body = Some(body);

		self
	}

	/// Moves the descriptor to another host family.
	pub fn with_host(mut self, host: EndpointHost) -> Self {
		self.host = host;

		self
	}
}
impl Endpoint for RawEndpoint {
	fn path(&self) -> String {
		self.path.clone()
	}

	fn methods(&self) -> MethodSet {
		self.methods
	}

	fn query(&self) -> Vec<QueryItem> {
		self.query.clone()
	}

	fn body(&self) -> Option<Body> {
		self.body.clone()
	}

	fn host(&self) -> EndpointHost {
		self.host
	}
}
