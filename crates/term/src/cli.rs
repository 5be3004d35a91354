use std::path::PathBuf;

use clap::Parser;
use multiverse_config::Overrides;
use multiverse_episodes::{FilterEpisode, PageNumber};

#[derive(Parser, Debug)]
#[command(name = "multiverse")]
#[command(about = "Browse Rick and Morty episodes in the terminal")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// GraphQL endpoint (overrides `api.endpoint` from the config file)
	#[arg(long)]
	pub endpoint: Option<String>,

	/// Page to open first; clamped to the last page once the count is known
	#[arg(long, short = 'p', default_value_t = 1)]
	pub page: u32,

	/// Only list episodes whose title contains this text
	#[arg(long)]
	pub name: Option<String>,

	/// Only list episodes whose code contains this text (e.g. S02)
	#[arg(long)]
	pub episode: Option<String>,

	/// Config file to load instead of the default location
	#[arg(long, short = 'c')]
	pub config: Option<PathBuf>,

	/// Directory for log files (also MULTIVERSE_LOG_DIR)
	#[arg(long)]
	pub log_dir: Option<PathBuf>,

	/// Log at debug level
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Monitoring endpoint receiving render faults
	#[arg(long)]
	pub report_endpoint: Option<String>,
}

impl Cli {
	/// First page to show; zero means page 1.
	pub fn start_page(&self) -> PageNumber {
		PageNumber::saturating(self.page)
	}

	/// Episode filter from `--name` and `--episode`, if either is set.
	pub fn filter(&self) -> Option<FilterEpisode> {
		let filter = FilterEpisode {
			name: self.name.clone(),
			episode: self.episode.clone(),
		};
		(!filter.is_empty()).then_some(filter)
	}

	/// Values that override the config file.
	pub fn overrides(&self) -> Overrides {
		Overrides {
			endpoint: self.endpoint.clone(),
			report_endpoint: self.report_endpoint.clone(),
			log_dir: self.log_dir.clone(),
		}
	}
}
