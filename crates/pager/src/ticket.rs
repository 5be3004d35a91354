use multiverse_episodes::{EpisodesVariables, PageNumber};
use multiverse_graphql::FetchPolicy;

/// Monotonic generation counter for issued fetches.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct GenerationClock(u64);

impl GenerationClock {
	/// Returns the next generation, starting at 1.
	pub(crate) fn advance(&mut self) -> u64 {
		self.0 = self.0.wrapping_add(1);
		self.0
	}
}

/// Identifies one issued fetch; completions are matched against the latest ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
	generation: u64,
	page: PageNumber,
}

impl FetchTicket {
	pub(crate) const fn new(generation: u64, page: PageNumber) -> Self {
		Self { generation, page }
	}

	/// Generation the fetch was issued in.
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	/// Page the fetch was issued for.
	pub const fn page(&self) -> PageNumber {
		self.page
	}
}

/// A fetch the host must execute and hand back through `PaginationController::resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
	/// Ticket to resolve with.
	pub ticket: FetchTicket,
	/// `getEpisodes` variables.
	pub variables: EpisodesVariables,
	/// Cache policy.
	pub policy: FetchPolicy,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clock_is_monotonic_from_one() {
		let mut clock = GenerationClock::default();
		assert_eq!(clock.advance(), 1);
		assert_eq!(clock.advance(), 2);
		assert_eq!(clock.advance(), 3);
	}

	#[test]
	fn tickets_for_same_page_differ_by_generation() {
		let a = FetchTicket::new(1, PageNumber::FIRST);
		let b = FetchTicket::new(2, PageNumber::FIRST);
		assert_ne!(a, b);
		assert_eq!(a.page(), b.page());
	}
}
