//! Type-erased JSON request bodies.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, error::ConfigError};

/// JSON payload attached to POST and PUT calls.
///
/// Any `Serialize` value can be erased into a [`Body`] so endpoint enums can return bodies of
/// different shapes through one trait method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(Value);
impl Body {
	/// Erases a serializable value into a body.
	pub fn encode<T>(value: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		serde_json::to_value(value)
			.map(Self)
			.map_err(|source| ConfigError::BodyEncode { source }.into())
	}

	/// The `{}` payload sent when a POST/PUT endpoint declares no body.
	pub fn empty() -> Self {
		Self(Value::Object(Map::new()))
	}

	/// Borrows the JSON value.
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Serializes the body into wire bytes.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		serde_json::to_vec(&self.0).map_err(|source| ConfigError::BodyEncode { source }.into())
	}
}
impl From<Value> for Body {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Serialize)]
	struct Note<'a> {
		value: &'a str,
	}

	#[test]
	fn encode_erases_structs_into_json_objects() {
		let body = Body::encode(&Note { value: "From the shelf" })
			.expect("Serializable structs should encode.");

		assert_eq!(
			body.to_bytes().expect("Body should serialize."),
			br#"{"value":"From the shelf"}"#.to_vec()
		);
	}

	#[test]
	fn empty_body_is_an_empty_object() {
		assert_eq!(Body::empty().to_bytes().expect("Empty body should serialize."), b"{}".to_vec());
	}
}
