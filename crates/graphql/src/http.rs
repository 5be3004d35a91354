//! HTTP transport for GraphQL-over-POST.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::GraphqlClientError;
use crate::operation::{GraphqlRequest, GraphqlResponse};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_ERROR_BODY: usize = 4096;

/// Settings for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
	/// Headers sent with every request.
	pub headers: HeaderMap,
	/// Per-request timeout; a hung request resolves to a transport error.
	pub timeout: Duration,
	/// `User-Agent` header.
	pub user_agent: String,
}

impl Default for HttpClientConfig {
	fn default() -> Self {
		let mut headers = HeaderMap::new();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		Self {
			headers,
			timeout: DEFAULT_TIMEOUT,
			user_agent: concat!("multiverse/", env!("CARGO_PKG_VERSION")).to_string(),
		}
	}
}

/// Builder for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
	endpoint: String,
	config: HttpClientConfig,
}

impl HttpClientBuilder {
	/// Starts a builder for the given endpoint URL.
	#[must_use]
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			config: HttpClientConfig::default(),
		}
	}

	/// Sets the per-request timeout.
	#[must_use]
	pub const fn with_timeout(mut self, timeout: Duration) -> Self {
		self.config.timeout = timeout;
		self
	}

	/// Sets the `User-Agent` header.
	#[must_use]
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.config.user_agent = user_agent.into();
		self
	}

	/// Builds the client.
	pub fn build(self) -> Result<HttpClient, GraphqlClientError> {
		HttpClient::with_config(self.endpoint, self.config)
	}
}

/// GraphQL client posting JSON bodies to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpClient {
	endpoint: String,
	http: reqwest::Client,
}

impl HttpClient {
	/// Creates a client with explicit settings.
	pub fn with_config(endpoint: impl Into<String>, config: HttpClientConfig) -> Result<Self, GraphqlClientError> {
		let http = reqwest::Client::builder()
			.default_headers(config.headers)
			.timeout(config.timeout)
			.user_agent(config.user_agent)
			.build()?;
		Ok(Self {
			endpoint: endpoint.into(),
			http,
		})
	}

	/// Endpoint URL requests are posted to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl ApiClient for HttpClient {
	async fn fetch(&self, request: GraphqlRequest) -> Result<GraphqlResponse, GraphqlClientError> {
		let operation = request.operation_name.clone().unwrap_or_default();
		debug!(%operation, variables = %request.variables, "graphql.request");

		let response = self.http.post(&self.endpoint).json(&request).send().await?;
		let status = response.status();
		let bytes = response.bytes().await?;

		// GraphQL servers commonly answer validation failures with 4xx plus an `errors` body.
		if !status.is_success() {
			if let Ok(parsed) = serde_json::from_slice::<GraphqlResponse>(&bytes)
				&& !parsed.errors.is_empty()
			{
				return Err(GraphqlClientError::GraphqlErrors { errors: parsed.errors });
			}
			return Err(GraphqlClientError::HttpStatus {
				status: status.as_u16(),
				body: truncate_body(&bytes),
			});
		}

		let parsed: GraphqlResponse = serde_json::from_slice(&bytes)?;
		debug!(%operation, errors = parsed.errors.len(), "graphql.response");
		Ok(parsed)
	}
}

fn truncate_body(bytes: &[u8]) -> String {
	let mut body = String::from_utf8_lossy(bytes).into_owned();
	if body.len() > MAX_ERROR_BODY {
		let mut cut = MAX_ERROR_BODY;
		while !body.is_char_boundary(cut) {
			cut -= 1;
		}
		body.truncate(cut);
		body.push('…');
	}
	body
}
