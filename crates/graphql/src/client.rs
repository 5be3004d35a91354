//! Client abstraction and the caching layer on top of it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::cache::{CacheKey, ResponseCache};
use crate::error::GraphqlClientError;
use crate::operation::{FetchPolicy, GraphqlOperation, GraphqlRequest, GraphqlResponse};

/// Conduit to a GraphQL endpoint.
///
/// Consumers hold this as `Arc<dyn ApiClient>` so tests can substitute a scripted
/// implementation for the network.
#[async_trait]
pub trait ApiClient: Send + Sync {
	/// Executes one request and returns the raw response envelope.
	async fn fetch(&self, request: GraphqlRequest) -> Result<GraphqlResponse, GraphqlClientError>;
}

#[async_trait]
impl<C: ApiClient + ?Sized> ApiClient for Arc<C> {
	async fn fetch(&self, request: GraphqlRequest) -> Result<GraphqlResponse, GraphqlClientError> {
		(**self).fetch(request).await
	}
}

/// Typed helpers over any [`ApiClient`].
#[async_trait]
pub trait ApiClientExt: ApiClient {
	/// Executes a typed operation and returns its decoded `data`.
	///
	/// A non-empty `errors` array fails the call even when partial data is present.
	async fn query<O>(&self, variables: &O::Variables, policy: FetchPolicy) -> Result<O::ResponseData, GraphqlClientError>
	where
		O: GraphqlOperation,
	{
		let request = O::request(variables)?.with_policy(policy);
		self.fetch(request).await?.decode::<O::ResponseData>()?.into_data()
	}
}

impl<C: ApiClient + ?Sized> ApiClientExt for C {}

/// Wraps a client with a shared [`ResponseCache`].
#[derive(Debug, Clone)]
pub struct CachedClient<C> {
	inner: C,
	cache: Arc<ResponseCache>,
}

impl<C: ApiClient> CachedClient<C> {
	/// Wraps `inner` with a fresh cache of the given capacity.
	pub fn new(inner: C, capacity: usize) -> Self {
		Self::with_cache(inner, Arc::new(ResponseCache::new(capacity)))
	}

	/// Wraps `inner` with an existing, possibly shared, cache.
	pub fn with_cache(inner: C, cache: Arc<ResponseCache>) -> Self {
		Self { inner, cache }
	}

	/// The cache backing this client.
	pub fn cache(&self) -> &Arc<ResponseCache> {
		&self.cache
	}
}

#[async_trait]
impl<C: ApiClient> ApiClient for CachedClient<C> {
	async fn fetch(&self, request: GraphqlRequest) -> Result<GraphqlResponse, GraphqlClientError> {
		let key = CacheKey::for_request(&request);
		if request.policy == FetchPolicy::CacheFirst
			&& let Some(hit) = self.cache.get(key)
		{
			trace!(operation = request.operation_name.as_deref().unwrap_or("anonymous"), "graphql.cache.hit");
			return Ok(hit);
		}

		let response = self.inner.fetch(request).await?;
		self.cache.insert(key, response.clone());
		Ok(response)
	}
}
