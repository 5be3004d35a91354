//! Response model of the `getEpisodes` operation.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// One-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
	/// The first page.
	pub const FIRST: Self = Self(NonZeroU32::MIN);

	/// Returns `None` for zero.
	pub const fn new(page: u32) -> Option<Self> {
		match NonZeroU32::new(page) {
			Some(page) => Some(Self(page)),
			None => None,
		}
	}

	/// Clamps zero up to the first page.
	pub const fn saturating(page: u32) -> Self {
		match Self::new(page) {
			Some(page) => page,
			None => Self::FIRST,
		}
	}

	/// Raw page number.
	pub const fn get(self) -> u32 {
		self.0.get()
	}

	/// Returns `true` for page 1.
	pub const fn is_first(self) -> bool {
		self.get() == 1
	}

	/// The previous page, staying on page 1.
	pub const fn previous(self) -> Self {
		Self::saturating(self.get() - 1)
	}

	/// The next page, never past `last`.
	pub fn next_within(self, last: u32) -> Self {
		if self.get() >= last { self } else { Self::saturating(self.get() + 1) }
	}

	/// Clamps into `[1, last]`; a `last` of zero yields page 1.
	pub fn clamp_to(self, last: u32) -> Self {
		Self::saturating(self.get().min(last))
	}
}

impl Default for PageNumber {
	fn default() -> Self {
		Self::FIRST
	}
}

impl fmt::Display for PageNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// A single episode as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
	/// API identifier.
	pub id: String,
	/// Episode title.
	pub name: String,
	/// Broadcast date as formatted by the API, e.g. `December 2, 2013`.
	pub air_date: String,
	/// Season/episode code, e.g. `S01E01`.
	pub episode: String,
}

/// Pagination metadata returned alongside results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
	/// Total number of pages.
	pub pages: u32,
	/// Next page, absent on the last page.
	pub next: Option<PageNumber>,
	/// Previous page, absent on the first page.
	pub prev: Option<PageNumber>,
	/// Total number of episodes across all pages.
	pub count: u32,
}

impl PageInfo {
	/// Returns `true` when `page` is the last page.
	pub fn is_last(&self, page: PageNumber) -> bool {
		page.get() >= self.pages
	}
}

/// The `episodes` field. Every member is nullable in the remote schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpisodesConnection {
	/// Pagination metadata.
	#[serde(default)]
	pub info: Option<PageInfo>,
	/// Episodes on the requested page, in API order.
	#[serde(default)]
	pub results: Option<Vec<Episode>>,
}

/// `data` payload of `getEpisodes`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpisodesData {
	/// Connection, null when the API has nothing for the request.
	#[serde(default)]
	pub episodes: Option<EpisodesConnection>,
}

impl EpisodesData {
	/// Pagination metadata when present.
	pub fn page_info(&self) -> Option<PageInfo> {
		self.episodes.as_ref().and_then(|episodes| episodes.info)
	}
}
