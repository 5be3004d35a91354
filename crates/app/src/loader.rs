use std::sync::Arc;

use multiverse_episodes::{EpisodesData, GetEpisodes};
use multiverse_graphql::{ApiClient, ApiClientExt, GraphqlClientError};
use multiverse_pager::{FetchRequest, FetchTicket};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A finished fetch, tagged with the ticket it was issued under.
#[derive(Debug)]
pub struct Completion {
	/// Ticket of the originating request.
	pub ticket: FetchTicket,
	/// Decoded data or the failure.
	pub outcome: Result<EpisodesData, GraphqlClientError>,
}

/// Executes fetch requests in background tasks and posts completions to a channel.
///
/// Requests are never cancelled; the controller discards superseded completions.
#[derive(Clone)]
pub struct PageLoader {
	client: Arc<dyn ApiClient>,
	completions: mpsc::UnboundedSender<Completion>,
}

impl PageLoader {
	/// Creates a loader and the receiving end of its completion channel.
	pub fn new(client: Arc<dyn ApiClient>) -> (Self, mpsc::UnboundedReceiver<Completion>) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self { client, completions: tx }, rx)
	}

	/// Spawns the fetch for `request` on the current runtime.
	pub fn load(&self, request: FetchRequest) -> tokio::task::JoinHandle<()> {
		let client = Arc::clone(&self.client);
		let tx = self.completions.clone();
		debug!(generation = request.ticket.generation(), page = %request.ticket.page(), "loader.spawn");
		tokio::spawn(async move {
			let outcome = client.query::<GetEpisodes>(&request.variables, request.policy).await;
			if tx.send(Completion { ticket: request.ticket, outcome }).is_err() {
				warn!(generation = request.ticket.generation(), "completion dropped: receiver closed");
			}
		})
	}
}
