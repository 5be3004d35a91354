//! In-memory response cache keyed by operation and variables.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::operation::{GraphqlRequest, GraphqlResponse};

/// Default number of responses retained.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Identity of a cached response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
	/// Derives the key for a request from its operation name, document and variables.
	pub fn for_request(request: &GraphqlRequest) -> Self {
		let mut hasher = DefaultHasher::new();
		request.operation_name.hash(&mut hasher);
		request.query.hash(&mut hasher);
		// serde_json maps are ordered, so equal variables render identically.
		request.variables.to_string().hash(&mut hasher);
		Self(hasher.finish())
	}
}

/// Bounded LRU cache of successful responses.
///
/// Shared across every consumer of one client; mutations are serialized by the
/// inner lock.
#[derive(Debug)]
pub struct ResponseCache {
	entries: Mutex<LruCache<CacheKey, GraphqlResponse>>,
}

impl Default for ResponseCache {
	fn default() -> Self {
		Self::new(DEFAULT_CACHE_CAPACITY)
	}
}

impl ResponseCache {
	/// Creates a cache holding at most `capacity` responses; zero is treated as one.
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
		Self {
			entries: Mutex::new(LruCache::new(capacity)),
		}
	}

	/// Returns a copy of the cached response, refreshing its recency.
	pub fn get(&self, key: CacheKey) -> Option<GraphqlResponse> {
		self.entries.lock().get(&key).cloned()
	}

	/// Stores a response. Responses carrying errors are not cached.
	pub fn insert(&self, key: CacheKey, response: GraphqlResponse) -> bool {
		if !response.is_ok() || response.data.is_none() {
			return false;
		}
		self.entries.lock().put(key, response);
		true
	}

	/// Drops every entry.
	pub fn clear(&self) {
		self.entries.lock().clear();
	}

	/// Number of cached responses.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	/// Returns `true` when nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::error::GraphqlError;

	fn request(page: u32) -> GraphqlRequest {
		GraphqlRequest::new("query getEpisodes($page: Int) { episodes(page: $page) { info { pages } } }", json!({ "page": page }))
			.with_operation_name("getEpisodes")
	}

	fn ok_response(pages: u32) -> GraphqlResponse {
		GraphqlResponse {
			data: Some(json!({ "episodes": { "info": { "pages": pages } } })),
			errors: Vec::new(),
		}
	}

	#[test]
	fn key_depends_on_variables() {
		assert_eq!(CacheKey::for_request(&request(1)), CacheKey::for_request(&request(1)));
		assert_ne!(CacheKey::for_request(&request(1)), CacheKey::for_request(&request(2)));
	}

	#[test]
	fn key_ignores_variable_insertion_order() {
		let a = GraphqlRequest::new("q", json!({ "page": 1, "filter": { "name": "Pilot" } }));
		let b = GraphqlRequest::new("q", json!({ "filter": { "name": "Pilot" }, "page": 1 }));
		assert_eq!(CacheKey::for_request(&a), CacheKey::for_request(&b));
	}

	#[test]
	fn errored_responses_are_not_cached() {
		let cache = ResponseCache::new(4);
		let key = CacheKey::for_request(&request(1));
		let failed = GraphqlResponse {
			data: None,
			errors: vec![GraphqlError {
				message: "boom".to_string(),
				locations: Vec::new(),
				path: Vec::new(),
				extensions: None,
			}],
		};
		assert!(!cache.insert(key, failed));
		assert!(cache.get(key).is_none());
		assert!(cache.insert(key, ok_response(3)));
		assert_eq!(cache.get(key), Some(ok_response(3)));
	}

	#[test]
	fn evicts_least_recently_used() {
		let cache = ResponseCache::new(2);
		let (k1, k2, k3) = (CacheKey::for_request(&request(1)), CacheKey::for_request(&request(2)), CacheKey::for_request(&request(3)));
		cache.insert(k1, ok_response(1));
		cache.insert(k2, ok_response(2));
		assert!(cache.get(k1).is_some());
		cache.insert(k3, ok_response(3));
		assert!(cache.get(k2).is_none());
		assert!(cache.get(k1).is_some());
		assert_eq!(cache.len(), 2);
	}

	#[test]
	fn zero_capacity_still_holds_one_entry() {
		let cache = ResponseCache::new(0);
		let key = CacheKey::for_request(&request(1));
		cache.insert(key, ok_response(1));
		assert_eq!(cache.len(), 1);
		cache.clear();
		assert!(cache.is_empty());
	}
}
