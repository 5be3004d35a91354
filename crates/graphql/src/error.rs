//! Error types for GraphQL requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport failure captured from reqwest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpErrorInfo {
	/// Error message.
	pub message: String,
	/// Whether the request timed out.
	pub is_timeout: bool,
	/// Whether the connection could not be established.
	pub is_connect: bool,
}

impl From<reqwest::Error> for HttpErrorInfo {
	fn from(err: reqwest::Error) -> Self {
		Self {
			message: err.to_string(),
			is_timeout: err.is_timeout(),
			is_connect: err.is_connect(),
		}
	}
}

/// Location of a GraphQL error within the query document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
	/// 1-based line.
	pub line: u32,
	/// 1-based column.
	pub column: u32,
}

/// A single entry of a response's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
	/// Human-readable message.
	pub message: String,
	/// Locations within the query.
	#[serde(default)]
	pub locations: Vec<GraphqlErrorLocation>,
	/// Response path the error applies to.
	#[serde(default)]
	pub path: Vec<serde_json::Value>,
	/// Server-specific metadata.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extensions: Option<serde_json::Value>,
}

/// Failure answering a GraphQL request.
#[derive(Debug, Clone, Error)]
pub enum GraphqlClientError {
	/// Network or transport failure.
	#[error("{}", .0.message)]
	Http(HttpErrorInfo),

	/// Non-success HTTP status.
	#[error("HTTP status {status}: {body}")]
	HttpStatus {
		/// Status code.
		status: u16,
		/// Response body, truncated.
		body: String,
	},

	/// Request or response body could not be (de)serialized.
	#[error("invalid JSON: {0}")]
	Json(String),

	/// The server answered with a non-empty `errors` array.
	#[error("{}", graphql_errors_message(.errors))]
	GraphqlErrors {
		/// Errors reported by the server.
		errors: Vec<GraphqlError>,
	},

	/// Response did not follow the GraphQL response format.
	#[error("GraphQL protocol error: {message}")]
	Protocol {
		/// Details.
		message: String,
	},
}

impl From<reqwest::Error> for GraphqlClientError {
	fn from(err: reqwest::Error) -> Self {
		Self::Http(HttpErrorInfo::from(err))
	}
}

impl From<serde_json::Error> for GraphqlClientError {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err.to_string())
	}
}

fn graphql_errors_message(errors: &[GraphqlError]) -> String {
	match errors {
		[] => "GraphQL error".to_string(),
		[only] => only.message.clone(),
		[first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
	}
}
