//! Rendering of the episodes page for each query state.

use multiverse_episodes::{Episode, EpisodesData};
use multiverse_view::{Action, Button, CardView, EpisodeCard, RenderError, Tone, View};

use crate::controller::{PaginationController, QueryState};

const PAGE: &str = "EpisodesPage";
const GRID: &str = "EpisodeGrid";

/// Page title.
pub const TITLE: &str = "Rick and Morty Episodes";
/// Tagline under the title.
pub const SUBTITLE: &str = "Explore the multiverse of adventures!";
/// Footer line.
pub const FOOTER: &str = "© 2024 Rick and Morty Fan Page";
/// Shown while a fetch is in flight.
pub const LOADING: &str = "Loading...";

impl PaginationController {
	/// Renders the page for the current state.
	///
	/// Loading and failed states replace the whole page with a single message. A ready
	/// state missing `episodes`, `info` or `results` is a render error.
	pub fn render(&self) -> Result<View, RenderError> {
		match self.state() {
			QueryState::Loading => Ok(View::heading(LOADING)),
			QueryState::Failed(message) => Ok(View::Stack(vec![
				View::Heading {
					text: format!("Error: {message}"),
					tone: Tone::Error,
				},
				View::Controls(vec![Button::new("Retry", Action::Retry)]),
			])),
			QueryState::Ready(data) => self.render_ready(data),
		}
	}

	fn render_ready(&self, data: &EpisodesData) -> Result<View, RenderError> {
		let episodes = data.episodes.as_ref().ok_or_else(|| RenderError::missing_field(PAGE, "episodes"))?;
		let info = episodes.info.ok_or_else(|| RenderError::missing_field(PAGE, "info"))?;
		let results = episodes.results.as_deref().ok_or_else(|| RenderError::missing_field(PAGE, "results"))?;

		let grid = render_grid(results).map_err(|err| err.within(GRID).within(PAGE))?;
		let summary = format!("Page {} of {} · {} episodes", self.page(), info.pages, info.count);

		Ok(View::Stack(vec![
			View::Header {
				title: TITLE.to_string(),
				subtitle: Some(SUBTITLE.to_string()),
			},
			View::Grid(grid),
			View::Controls(vec![
				Button::new("Previous", Action::PreviousPage).disabled(!self.can_go_previous()),
				Button::new("Next", Action::NextPage).disabled(!self.can_go_next()),
			]),
			View::text(summary, Tone::Muted),
			View::Footer(FOOTER.to_string()),
		]))
	}
}

fn render_grid(results: &[Episode]) -> Result<Vec<CardView>, RenderError> {
	results.iter().map(|episode| EpisodeCard::new(episode).render()).collect()
}
