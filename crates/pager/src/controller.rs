//! Page state, fetch issuing and stale-completion filtering.

use multiverse_episodes::{EpisodesData, EpisodesVariables, FilterEpisode, PageInfo, PageNumber};
use multiverse_graphql::{FetchPolicy, GraphqlClientError};
use tracing::debug;

use crate::ticket::{FetchRequest, FetchTicket, GenerationClock};

/// Result of the fetch for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
	/// A fetch is in flight.
	Loading,
	/// The latest fetch failed with this message.
	Failed(String),
	/// The latest fetch succeeded.
	Ready(EpisodesData),
}

/// What [`PaginationController::resolve`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The completion became the displayed state.
	Applied,
	/// The completion belonged to a superseded fetch and was dropped.
	Stale,
	/// The page turned out to be past the last page; it was clamped and a new fetch issued.
	Redirected(FetchRequest),
}

/// Owns the current page and turns page changes into fetches.
///
/// The controller performs no I/O. Every method that changes the page returns the
/// [`FetchRequest`] the host has to execute; the host feeds the completion back through
/// [`Self::resolve`]. Only the completion of the most recently issued request is applied,
/// so responses arriving out of order never overwrite a newer page.
#[derive(Debug, Clone)]
pub struct PaginationController {
	page: PageNumber,
	page_info: Option<PageInfo>,
	state: QueryState,
	filter: Option<FilterEpisode>,
	clock: GenerationClock,
	latest: Option<FetchTicket>,
}

impl Default for PaginationController {
	fn default() -> Self {
		Self::new()
	}
}

impl PaginationController {
	/// Controller starting on page 1 without a filter.
	pub fn new() -> Self {
		Self::with_start(PageNumber::FIRST, None)
	}

	/// Controller starting on `page`, filtering every fetch with `filter`.
	pub fn with_start(page: PageNumber, filter: Option<FilterEpisode>) -> Self {
		Self {
			page,
			page_info: None,
			state: QueryState::Loading,
			filter,
			clock: GenerationClock::default(),
			latest: None,
		}
	}

	/// Issues the initial fetch.
	pub fn mount(&mut self) -> FetchRequest {
		self.issue(FetchPolicy::CacheFirst)
	}

	/// Current page.
	pub fn page(&self) -> PageNumber {
		self.page
	}

	/// Pagination metadata from the last response that carried it.
	pub fn page_info(&self) -> Option<PageInfo> {
		self.page_info
	}

	/// Current query state.
	pub fn state(&self) -> &QueryState {
		&self.state
	}

	/// Active filter.
	pub fn filter(&self) -> Option<&FilterEpisode> {
		self.filter.as_ref()
	}

	/// Ticket of the fetch whose completion is awaited, if any.
	pub fn in_flight(&self) -> Option<FetchTicket> {
		self.latest
	}

	/// Returns `true` unless on page 1.
	pub fn can_go_previous(&self) -> bool {
		!self.page.is_first()
	}

	/// Returns `true` when the page count is known and the current page is not the last.
	pub fn can_go_next(&self) -> bool {
		self.page_info.is_some_and(|info| !info.is_last(self.page))
	}

	/// Moves one page back. No fetch is issued on page 1.
	pub fn go_to_previous_page(&mut self) -> Option<FetchRequest> {
		let target = self.page.previous();
		self.change_page(target)
	}

	/// Moves one page forward. No fetch is issued on the last page or before the page count is known.
	pub fn go_to_next_page(&mut self) -> Option<FetchRequest> {
		let info = self.page_info?;
		let target = self.page.next_within(info.pages);
		self.change_page(target)
	}

	/// Re-issues the fetch for the current page, bypassing the response cache.
	pub fn retry(&mut self) -> FetchRequest {
		self.issue(FetchPolicy::NetworkOnly)
	}

	/// Applies the completion of a fetch issued by this controller.
	pub fn resolve(&mut self, ticket: FetchTicket, outcome: Result<EpisodesData, GraphqlClientError>) -> Resolution {
		if self.latest != Some(ticket) {
			debug!(
				generation = ticket.generation(),
				page = %ticket.page(),
				current = %self.page,
				"pager.stale"
			);
			return Resolution::Stale;
		}
		self.latest = None;

		match outcome {
			Ok(data) => {
				if let Some(info) = data.page_info() {
					self.page_info = Some(info);
					if info.pages > 0 && self.page.get() > info.pages {
						debug!(page = %self.page, pages = info.pages, "pager.clamp");
						self.page = self.page.clamp_to(info.pages);
						return Resolution::Redirected(self.issue(FetchPolicy::CacheFirst));
					}
				}
				debug!(page = %self.page, generation = ticket.generation(), "pager.ready");
				self.state = QueryState::Ready(data);
			}
			Err(err) => {
				debug!(page = %self.page, error = %err, "pager.failed");
				self.state = QueryState::Failed(err.to_string());
			}
		}
		Resolution::Applied
	}

	fn change_page(&mut self, target: PageNumber) -> Option<FetchRequest> {
		if target == self.page {
			return None;
		}
		self.page = target;
		Some(self.issue(FetchPolicy::CacheFirst))
	}

	fn issue(&mut self, policy: FetchPolicy) -> FetchRequest {
		let ticket = FetchTicket::new(self.clock.advance(), self.page);
		self.latest = Some(ticket);
		self.state = QueryState::Loading;
		debug!(page = %self.page, generation = ticket.generation(), ?policy, "pager.fetch");
		FetchRequest {
			ticket,
			variables: EpisodesVariables::page(self.page, self.filter.clone()),
			policy,
		}
	}
}
