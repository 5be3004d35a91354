//! Configuration for the episode browser.
//!
//! Configuration is written in TOML and has three optional sections:
//!
//! ```toml
//! [api]
//! endpoint = "https://rickandmortyapi.com/graphql"
//! timeout_secs = 30
//! cache_capacity = 64
//!
//! [reporting]
//! endpoint = "https://monitoring.example/events"
//! environment = "production"
//! release = "1.2.0"
//!
//! [log]
//! dir = "/tmp/multiverse"
//! filter = "multiverse=debug"
//! ```
//!
//! # Configuration Files
//!
//! [`Config::discover`] looks in these locations (in order):
//!
//! 1. An explicit path, usually from `--config`. A missing file is an error.
//! 2. `$XDG_CONFIG_HOME/multiverse/config.toml` (or the platform equivalent), if it exists.
//! 3. Built-in defaults.
//!
//! Command-line flags are layered on top with [`Config::apply_overrides`].

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Public Rick and Morty GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// GraphQL API settings.
	pub api: ApiConfig,
	/// Error reporting settings.
	pub reporting: ReportingConfig,
	/// Log output settings.
	pub log: LogConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
	/// GraphQL endpoint URL.
	pub endpoint: String,
	/// Per-request timeout in seconds.
	pub timeout_secs: u64,
	/// Number of responses kept in the in-memory cache.
	pub cache_capacity: usize,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			timeout_secs: 30,
			cache_capacity: 64,
		}
	}
}

impl ApiConfig {
	/// Request timeout.
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}

/// `[reporting]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportingConfig {
	/// Monitoring endpoint. Faults are only logged locally when unset.
	pub endpoint: Option<String>,
	/// Environment tag attached to reported events.
	pub environment: String,
	/// Release tag; the binary version when unset.
	pub release: Option<String>,
}

impl Default for ReportingConfig {
	fn default() -> Self {
		Self {
			endpoint: None,
			environment: "production".to_string(),
			release: None,
		}
	}
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// Directory receiving log files.
	pub dir: Option<PathBuf>,
	/// `tracing` filter directive.
	pub filter: Option<String>,
}

/// Values supplied on the command line. `None` leaves the file value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
	/// `--endpoint`.
	pub endpoint: Option<String>,
	/// `--report-endpoint`.
	pub report_endpoint: Option<String>,
	/// `--log-dir`.
	pub log_dir: Option<PathBuf>,
}

impl Config {
	/// Parse a TOML string into a [`Config`]. Missing keys take their defaults.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Default location of the config file, if the platform has a config directory.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("multiverse").join("config.toml"))
	}

	/// Loads `explicit` if given, else the default file if it exists, else defaults.
	pub fn discover(explicit: Option<&Path>) -> Result<Self> {
		match explicit {
			Some(path) => Self::load(path),
			None => Self::discover_in(Self::default_path().as_deref()),
		}
	}

	fn discover_in(default_path: Option<&Path>) -> Result<Self> {
		match default_path {
			Some(path) if path.is_file() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}

	/// Layers command-line values over this configuration and validates the result.
	pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<()> {
		if let Some(endpoint) = overrides.endpoint {
			self.api.endpoint = endpoint;
		}
		if let Some(endpoint) = overrides.report_endpoint {
			self.reporting.endpoint = Some(endpoint);
		}
		if let Some(dir) = overrides.log_dir {
			self.log.dir = Some(dir);
		}
		self.validate()
	}

	fn validate(&self) -> Result<()> {
		if self.api.endpoint.trim().is_empty() {
			return Err(ConfigError::Invalid {
				field: "api.endpoint",
				reason: "must not be empty".into(),
			});
		}
		if self.api.timeout_secs == 0 {
			return Err(ConfigError::Invalid {
				field: "api.timeout_secs",
				reason: "must be at least 1".into(),
			});
		}
		if self.api.cache_capacity == 0 {
			return Err(ConfigError::Invalid {
				field: "api.cache_capacity",
				reason: "must be at least 1".into(),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
