//! The `getEpisodes` query document and its variables.

use multiverse_graphql::GraphqlOperation;
use serde::{Deserialize, Serialize};

use crate::model::{EpisodesData, PageNumber};

/// Query document requesting one page of episodes with pagination metadata.
pub const GET_EPISODES: &str = "query getEpisodes($page: Int, $filter: FilterEpisode) {
  episodes(page: $page, filter: $filter) {
    info {
      pages
      next
      prev
      count
    }
    results {
      id
      name
      air_date
      episode
    }
  }
}";

/// `FilterEpisode` input type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterEpisode {
	/// Substring match on the episode title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Substring match on the episode code, e.g. `S02`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub episode: Option<String>,
}

impl FilterEpisode {
	/// Returns `true` when no criterion is set.
	pub fn is_empty(&self) -> bool {
		self.name.is_none() && self.episode.is_none()
	}
}

/// Variables of `getEpisodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodesVariables {
	/// Requested page; the API defaults to 1 when omitted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page: Option<PageNumber>,
	/// Optional filter.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filter: Option<FilterEpisode>,
}

impl EpisodesVariables {
	/// Variables for one page with an optional filter; an empty filter is omitted.
	pub fn page(page: PageNumber, filter: Option<FilterEpisode>) -> Self {
		Self {
			page: Some(page),
			filter: filter.filter(|f| !f.is_empty()),
		}
	}
}

/// Typed handle for the `getEpisodes` operation.
#[derive(Debug, Clone, Copy)]
pub struct GetEpisodes;

impl GraphqlOperation for GetEpisodes {
	type Variables = EpisodesVariables;
	type ResponseData = EpisodesData;

	const QUERY: &'static str = GET_EPISODES;
	const OPERATION_NAME: &'static str = "getEpisodes";
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn document_requests_consumed_fields() {
		for field in ["pages", "next", "prev", "count", "id", "name", "air_date", "episode"] {
			assert!(GET_EPISODES.contains(field), "missing field {field}");
		}
		assert!(GET_EPISODES.starts_with("query getEpisodes($page: Int, $filter: FilterEpisode)"));
	}

	#[test]
	fn request_carries_page_and_operation_name() {
		let vars = EpisodesVariables::page(PageNumber::saturating(2), None);
		let request = GetEpisodes::request(&vars).unwrap();
		assert_eq!(request.operation_name.as_deref(), Some("getEpisodes"));
		assert_eq!(request.variables, json!({ "page": 2 }));
	}

	#[test]
	fn filter_is_serialized_without_empty_fields() {
		let filter = FilterEpisode {
			name: None,
			episode: Some("S02".to_string()),
		};
		let vars = EpisodesVariables::page(PageNumber::FIRST, Some(filter));
		assert_eq!(serde_json::to_value(&vars).unwrap(), json!({ "page": 1, "filter": { "episode": "S02" } }));
	}

	#[test]
	fn empty_filter_is_dropped() {
		let vars = EpisodesVariables::page(PageNumber::FIRST, Some(FilterEpisode::default()));
		assert_eq!(vars.filter, None);
	}
}
