use std::sync::Arc;

use multiverse_episodes::{FilterEpisode, PageNumber};
use multiverse_graphql::ApiClient;
use multiverse_pager::{FetchRequest, PaginationController, Resolution};
use multiverse_view::{Action, ErrorBoundary, Reporter, View};
use tokio::sync::mpsc;
use tracing::debug;

use crate::loader::{Completion, PageLoader};

/// Startup options of the episodes page.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
	/// Page shown first.
	pub start_page: Option<PageNumber>,
	/// Filter applied to every fetch.
	pub filter: Option<FilterEpisode>,
}

/// Error boundary wrapped around the episodes page, wired to an API client.
pub struct App {
	boundary: ErrorBoundary,
	controller: PaginationController,
	loader: PageLoader,
	completions: mpsc::UnboundedReceiver<Completion>,
}

impl App {
	/// Builds the application tree. Nothing is fetched until [`Self::start`].
	pub fn new(client: Arc<dyn ApiClient>, reporter: Arc<dyn Reporter>, options: AppOptions) -> Self {
		let (loader, completions) = PageLoader::new(client);
		Self {
			boundary: ErrorBoundary::new(reporter),
			controller: PaginationController::with_start(options.start_page.unwrap_or_default(), options.filter),
			loader,
			completions,
		}
	}

	/// Mounts the page, issuing the initial fetch. Must run inside a tokio runtime.
	pub fn start(&mut self) {
		let request = self.controller.mount();
		self.load(request);
	}

	/// The page controller.
	pub fn controller(&self) -> &PaginationController {
		&self.controller
	}

	/// The top-level error boundary.
	pub fn boundary(&self) -> &ErrorBoundary {
		&self.boundary
	}

	/// Renders the whole tree.
	pub fn view(&mut self) -> View {
		let controller = &self.controller;
		self.boundary.render(|| controller.render())
	}

	/// Handles a user action. Returns `true` when something changed and a redraw is due.
	///
	/// Navigation is ignored while the boundary shows its fallback, since no controls of
	/// the page are on screen then.
	pub fn dispatch(&mut self, action: Action) -> bool {
		if self.boundary.is_faulted() {
			return action == Action::TryAgain && self.boundary.try_again();
		}

		let request = match action {
			Action::PreviousPage => self.controller.go_to_previous_page(),
			Action::NextPage => self.controller.go_to_next_page(),
			Action::Retry => Some(self.controller.retry()),
			Action::TryAgain => None,
		};

		match request {
			Some(request) => {
				self.load(request);
				true
			}
			None => false,
		}
	}

	/// Applies a finished fetch. Returns `true` when the displayed state changed.
	pub fn apply(&mut self, completion: Completion) -> bool {
		match self.controller.resolve(completion.ticket, completion.outcome) {
			Resolution::Applied => true,
			Resolution::Stale => false,
			Resolution::Redirected(request) => {
				self.load(request);
				true
			}
		}
	}

	/// Waits for the next finished fetch.
	pub async fn next_completion(&mut self) -> Option<Completion> {
		self.completions.recv().await
	}

	/// Applies every completion already received. Returns `true` when any changed the display.
	pub fn drain_completions(&mut self) -> bool {
		let mut changed = false;
		while let Ok(completion) = self.completions.try_recv() {
			changed |= self.apply(completion);
		}
		changed
	}

	fn load(&self, request: FetchRequest) {
		debug!(page = %request.ticket.page(), "app.load");
		self.loader.load(request);
	}
}
