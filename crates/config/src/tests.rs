use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_input_yields_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
	assert_eq!(config.api.timeout(), Duration::from_secs(30));
	assert_eq!(config.reporting.environment, "production");
	assert!(config.reporting.endpoint.is_none());
}

#[test]
fn partial_sections_keep_other_defaults() {
	let config = Config::parse(
		r#"
[api]
cache_capacity = 8

[reporting]
endpoint = "http://localhost:9000/events"
release = "2.0.0"
"#,
	)
	.unwrap();

	assert_eq!(config.api.cache_capacity, 8);
	assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
	assert_eq!(config.reporting.endpoint.as_deref(), Some("http://localhost:9000/events"));
	assert_eq!(config.reporting.release.as_deref(), Some("2.0.0"));
	assert_eq!(config.reporting.environment, "production");
	assert_eq!(config.log, LogConfig::default());
}

#[test]
fn unknown_keys_are_rejected() {
	let err = Config::parse("[api]\nendpont = \"typo\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn zero_timeout_is_invalid() {
	let err = Config::parse("[api]\ntimeout_secs = 0\n").unwrap_err();
	assert!(matches!(err, ConfigError::Invalid { field: "api.timeout_secs", .. }), "{err}");
}

#[test]
fn blank_endpoint_is_invalid() {
	let err = Config::parse("[api]\nendpoint = \"  \"\n").unwrap_err();
	assert_eq!(err.to_string(), "invalid value for `api.endpoint`: must not be empty");
}

#[test]
fn overrides_replace_only_given_values() {
	let mut config = Config::parse("[log]\nfilter = \"debug\"\n").unwrap();
	config.apply_overrides(Overrides {
		endpoint: Some("http://localhost:4000/graphql".into()),
		report_endpoint: None,
		log_dir: Some(PathBuf::from("/tmp/logs")),
	})
	.unwrap();

	assert_eq!(config.api.endpoint, "http://localhost:4000/graphql");
	assert!(config.reporting.endpoint.is_none());
	assert_eq!(config.log.dir.as_deref(), Some(Path::new("/tmp/logs")));
	assert_eq!(config.log.filter.as_deref(), Some("debug"));
}

#[test]
fn blank_endpoint_override_is_invalid() {
	for endpoint in ["", "   "] {
		let mut config = Config::default();
		let err = config
			.apply_overrides(Overrides {
				endpoint: Some(endpoint.into()),
				..Overrides::default()
			})
			.unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { field: "api.endpoint", .. }), "{err}");
	}
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[api]\ntimeout_secs = 5").unwrap();

	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.api.timeout(), Duration::from_secs(5));
}

#[test]
fn explicit_missing_file_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");

	let err = Config::discover(Some(path.as_path())).unwrap_err();
	assert!(matches!(&err, ConfigError::Io { path: p, .. } if p == &path), "{err}");
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let config = Config::discover_in(Some(dir.path().join("config.toml").as_path())).unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(Config::discover_in(None).unwrap(), Config::default());
}

#[test]
fn existing_default_file_is_loaded() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("config.toml");
	std::fs::write(&path, "[reporting]\nenvironment = \"staging\"\n").unwrap();

	let config = Config::discover_in(Some(path.as_path())).unwrap();
	assert_eq!(config.reporting.environment, "staging");
}
