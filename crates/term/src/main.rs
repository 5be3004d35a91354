mod cli;
mod keys;
mod logging;
mod terminal;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use keys::Command;
use multiverse_app::{App, AppOptions};
use multiverse_config::{Config, ReportingConfig};
use multiverse_frontend_tui::GridState;
use multiverse_graphql::{ApiClient, CachedClient, HttpClientBuilder};
use multiverse_view::{FanoutReporter, HttpReporter, HttpReporterConfig, Reporter, TracingReporter};
use terminal::{TerminalGuard, Tui};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let mut config = Config::discover(cli.config.as_deref()).context("failed to load configuration")?;
	config.apply_overrides(cli.overrides()).context("invalid command-line option")?;

	let filter = logging::default_filter(config.log.filter.as_deref(), cli.verbose);
	logging::setup_tracing(logging::log_dir(config.log.dir.as_deref()).as_deref(), &filter);
	terminal::install_panic_hook();

	let http = HttpClientBuilder::new(config.api.endpoint.as_str())
		.with_timeout(config.api.timeout())
		.with_user_agent(concat!("multiverse/", env!("CARGO_PKG_VERSION")))
		.build()
		.context("failed to build HTTP client")?;
	let client: Arc<dyn ApiClient> = Arc::new(CachedClient::new(http, config.api.cache_capacity));
	let reporter = build_reporter(&config.reporting)?;

	let mut app = App::new(
		client,
		reporter,
		AppOptions {
			start_page: Some(cli.start_page()),
			filter: cli.filter(),
		},
	);

	let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
	app.start();
	run(&mut app, guard.terminal()).await
}

fn build_reporter(config: &ReportingConfig) -> anyhow::Result<Arc<dyn Reporter>> {
	let fanout = FanoutReporter::new(vec![Arc::new(TracingReporter)]);
	let Some(endpoint) = &config.endpoint else {
		return Ok(Arc::new(fanout));
	};

	let mut http = HttpReporterConfig::new(endpoint.clone());
	http.environment = config.environment.clone();
	if let Some(release) = &config.release {
		http.release = release.clone();
	}
	let reporter = HttpReporter::new(http).context("failed to build error reporter")?;
	Ok(Arc::new(fanout.with(Arc::new(reporter))))
}

/// Redraws after every key press and every applied fetch until a quit key is pressed.
async fn run(app: &mut App, terminal: &mut Tui) -> anyhow::Result<()> {
	let mut events = EventStream::new();
	let mut grid = GridState::default();
	let mut shown_page = app.controller().page();

	loop {
		let view = app.view();
		terminal.draw(|frame| multiverse_frontend_tui::draw(frame, &view, &mut grid))?;

		tokio::select! {
			event = events.next() => {
				let Some(event) = event.transpose()? else {
					return Ok(());
				};
				let Event::Key(key) = event else {
					continue;
				};
				match keys::map_key(key, &view) {
					Some(Command::Quit) => return Ok(()),
					Some(Command::Dispatch(action)) => {
						debug!(?action, "term.dispatch");
						app.dispatch(action);
					}
					Some(Command::ScrollUp) => grid.scroll_up(),
					Some(Command::ScrollDown) => grid.scroll_down(),
					None => {}
				}
			}
			completion = app.next_completion() => {
				let Some(completion) = completion else {
					return Ok(());
				};
				app.apply(completion);
				app.drain_completions();
			}
		}

		if app.controller().page() != shown_page {
			shown_page = app.controller().page();
			grid.reset();
		}
	}
}
