//! Operation definitions and request/response payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GraphqlClientError, GraphqlError};

/// Typed GraphQL operation.
///
/// Implemented once per query document; the client uses the associated types to
/// encode variables and decode `data`.
pub trait GraphqlOperation {
	/// Variables accepted by the operation.
	type Variables: Serialize + Send + Sync;
	/// Shape of the response `data` field.
	type ResponseData: DeserializeOwned + Send;

	/// Query document text.
	const QUERY: &'static str;
	/// Operation name, sent as `operationName`.
	const OPERATION_NAME: &'static str;

	/// Builds the untyped request for the given variables.
	fn request(variables: &Self::Variables) -> Result<GraphqlRequest, GraphqlClientError> {
		Ok(GraphqlRequest::new(Self::QUERY, serde_json::to_value(variables)?).with_operation_name(Self::OPERATION_NAME))
	}
}

/// How a request may use the response cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
	/// Answer from the cache when possible, otherwise hit the network.
	#[default]
	CacheFirst,
	/// Always hit the network, refreshing the cache on success.
	NetworkOnly,
}

/// Request payload as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
	/// Query document.
	pub query: String,
	/// Variables object.
	pub variables: serde_json::Value,
	/// Operation name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operation_name: Option<String>,
	/// Cache policy; never serialized.
	#[serde(skip)]
	pub policy: FetchPolicy,
}

impl GraphqlRequest {
	/// Creates a request with the default cache-first policy.
	#[must_use]
	pub fn new(query: impl Into<String>, variables: serde_json::Value) -> Self {
		Self {
			query: query.into(),
			variables,
			operation_name: None,
			policy: FetchPolicy::default(),
		}
	}

	/// Attaches an operation name.
	#[must_use]
	pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
		self.operation_name = Some(name.into());
		self
	}

	/// Overrides the cache policy.
	#[must_use]
	pub const fn with_policy(mut self, policy: FetchPolicy) -> Self {
		self.policy = policy;
		self
	}
}

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlResponse<T = serde_json::Value> {
	/// `data` field; absent when the request failed as a whole.
	#[serde(default)]
	pub data: Option<T>,
	/// `errors` field.
	#[serde(default)]
	pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
	/// Returns `true` when the server reported no errors.
	pub fn is_ok(&self) -> bool {
		self.errors.is_empty()
	}

	/// Converts into the `data` payload, treating any reported error as a failure.
	pub fn into_data(self) -> Result<T, GraphqlClientError> {
		if !self.errors.is_empty() {
			return Err(GraphqlClientError::GraphqlErrors { errors: self.errors });
		}
		self.data.ok_or_else(|| GraphqlClientError::Protocol {
			message: "response carried neither data nor errors".to_string(),
		})
	}
}

impl GraphqlResponse {
	/// Decodes the untyped `data` payload into an operation's response type.
	pub fn decode<T: DeserializeOwned>(self) -> Result<GraphqlResponse<T>, GraphqlClientError> {
		let data = self.data.map(serde_json::from_value).transpose()?;
		Ok(GraphqlResponse { data, errors: self.errors })
	}
}
