//! GraphQL plumbing for the episode browser.
//!
//! * [`GraphqlOperation`]: typed query documents
//! * [`ApiClient`]: injectable conduit to an endpoint, with [`HttpClient`] as the network implementation
//! * [`CachedClient`]: cache-first layer over any client, backed by a shared [`ResponseCache`]

#![warn(missing_docs)]

mod cache;
mod client;
mod error;
mod http;
mod operation;

pub use cache::{CacheKey, DEFAULT_CACHE_CAPACITY, ResponseCache};
pub use client::{ApiClient, ApiClientExt, CachedClient};
pub use error::{GraphqlClientError, GraphqlError, GraphqlErrorLocation, HttpErrorInfo};
pub use http::{DEFAULT_TIMEOUT, HttpClient, HttpClientBuilder, HttpClientConfig};
pub use operation::{FetchPolicy, GraphqlOperation, GraphqlRequest, GraphqlResponse};
