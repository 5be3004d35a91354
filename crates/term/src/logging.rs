use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable naming the log directory.
pub const LOG_DIR_ENV: &str = "MULTIVERSE_LOG_DIR";

/// Log directory: `MULTIVERSE_LOG_DIR`, else the configured one.
pub fn log_dir(configured: Option<&Path>) -> Option<PathBuf> {
	std::env::var_os(LOG_DIR_ENV).map(PathBuf::from).or_else(|| configured.map(Path::to_path_buf))
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(configured: Option<&str>, verbose: bool) -> String {
	match (configured, verbose) {
		(_, true) => "multiverse=trace,debug".to_string(),
		(Some(filter), false) => filter.to_string(),
		(None, false) => "multiverse=debug,info".to_string(),
	}
}

/// Sends tracing output to `<dir>/multiverse.<pid>.log`.
///
/// The terminal belongs to the UI, so without a usable log directory nothing is logged.
pub fn setup_tracing(dir: Option<&Path>, filter: &str) -> Option<PathBuf> {
	let log_dir = dir.filter(|dir| std::fs::create_dir_all(dir).is_ok())?;
	let log_path = log_dir.join(format!("multiverse.{}.log", std::process::id()));
	let file = OpenOptions::new().create(true).append(true).open(&log_path).ok()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
	let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_target(true);

	tracing_subscriber::registry().with(filter).with(file_layer).init();

	tracing::info!(path = ?log_path, "tracing initialized");
	Some(log_path)
}
