//! Forwarding of render faults to monitoring.
//!
//! Reporters are fire-and-forget: [`Reporter::report_exception`] returns nothing and
//! implementations log their own failures instead of surfacing them.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::RenderError;

/// Information accompanying a reported render fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
	/// Name of the boundary that caught the fault.
	pub boundary: &'static str,
	/// Components the error propagated through, innermost first.
	pub component_stack: Vec<&'static str>,
	/// When the boundary caught the fault.
	pub occurred_at: DateTime<Utc>,
	/// Faults caught by this boundary so far, this one included.
	pub fault_count: u64,
}

/// Sink for render faults.
pub trait Reporter: Send + Sync {
	/// Forwards one fault. Must not block rendering.
	fn report_exception(&self, error: &RenderError, context: &ErrorContext);
}

/// Logs faults through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
	fn report_exception(&self, err: &RenderError, context: &ErrorContext) {
		error!(
			boundary = context.boundary,
			component_stack = ?context.component_stack,
			kind = err.kind().as_str(),
			fault_count = context.fault_count,
			error = %err,
			"render fault"
		);
	}
}

/// Forwards each fault to every inner reporter.
#[derive(Clone, Default)]
pub struct FanoutReporter {
	reporters: Vec<Arc<dyn Reporter>>,
}

impl FanoutReporter {
	/// Creates a reporter forwarding to `reporters`.
	pub fn new(reporters: Vec<Arc<dyn Reporter>>) -> Self {
		Self { reporters }
	}

	/// Adds another target.
	#[must_use]
	pub fn with(mut self, reporter: Arc<dyn Reporter>) -> Self {
		self.reporters.push(reporter);
		self
	}
}

impl Reporter for FanoutReporter {
	fn report_exception(&self, error: &RenderError, context: &ErrorContext) {
		for reporter in &self.reporters {
			reporter.report_exception(error, context);
		}
	}
}

/// A fault captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFault {
	/// The reported error.
	pub error: RenderError,
	/// Its context.
	pub context: ErrorContext,
}

/// Keeps reported faults in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
	faults: Mutex<Vec<RecordedFault>>,
}

impl RecordingReporter {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Every fault reported so far.
	pub fn faults(&self) -> Vec<RecordedFault> {
		self.faults.lock().clone()
	}

	/// Number of faults reported so far.
	pub fn len(&self) -> usize {
		self.faults.lock().len()
	}

	/// Returns `true` when nothing was reported.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Reporter for RecordingReporter {
	fn report_exception(&self, error: &RenderError, context: &ErrorContext) {
		self.faults.lock().push(RecordedFault {
			error: error.clone(),
			context: context.clone(),
		});
	}
}

/// Failure delivering an event to the monitoring endpoint.
#[derive(Debug, Error)]
pub enum ReportError {
	/// Transport failure.
	#[error("transport error: {0}")]
	Http(#[from] reqwest::Error),
	/// Endpoint rejected the event.
	#[error("monitoring endpoint answered {0}")]
	Status(u16),
	/// No async runtime to send from.
	#[error("no async runtime available")]
	NoRuntime,
}

/// Event body posted by [`HttpReporter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEvent {
	/// Always `"error"`.
	pub level: &'static str,
	/// Error message.
	pub message: String,
	/// Error kind identifier.
	pub kind: &'static str,
	/// Catching boundary.
	pub boundary: &'static str,
	/// Components the error passed through, innermost first.
	pub component_stack: Vec<&'static str>,
	/// RFC 3339 timestamp.
	pub timestamp: String,
	/// Deployment environment.
	pub environment: String,
	/// Application release.
	pub release: String,
}

/// Settings for [`HttpReporter`].
#[derive(Debug, Clone)]
pub struct HttpReporterConfig {
	/// URL events are posted to.
	pub endpoint: String,
	/// Deployment environment attached to events.
	pub environment: String,
	/// Release attached to events.
	pub release: String,
	/// Per-event timeout.
	pub timeout: Duration,
}

impl HttpReporterConfig {
	/// Settings for `endpoint` with production defaults.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			environment: "production".to_string(),
			release: env!("CARGO_PKG_VERSION").to_string(),
			timeout: Duration::from_secs(5),
		}
	}
}

/// Posts faults as JSON to a monitoring endpoint from a background task.
#[derive(Debug, Clone)]
pub struct HttpReporter {
	http: reqwest::Client,
	config: Arc<HttpReporterConfig>,
}

impl HttpReporter {
	/// Creates a reporter.
	pub fn new(config: HttpReporterConfig) -> Result<Self, ReportError> {
		let http = reqwest::Client::builder().timeout(config.timeout).build()?;
		Ok(Self {
			http,
			config: Arc::new(config),
		})
	}

	/// Builds the event posted for a fault.
	pub fn event(&self, err: &RenderError, context: &ErrorContext) -> ErrorEvent {
		ErrorEvent {
			level: "error",
			message: err.to_string(),
			kind: err.kind().as_str(),
			boundary: context.boundary,
			component_stack: context.component_stack.clone(),
			timestamp: context.occurred_at.to_rfc3339(),
			environment: self.config.environment.clone(),
			release: self.config.release.clone(),
		}
	}

	/// Posts one event and waits for the answer.
	pub async fn send(&self, event: &ErrorEvent) -> Result<(), ReportError> {
		let response = self.http.post(&self.config.endpoint).json(event).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(ReportError::Status(status.as_u16()));
		}
		Ok(())
	}

	fn dispatch(&self, event: ErrorEvent) -> Result<(), ReportError> {
		let handle = tokio::runtime::Handle::try_current().map_err(|_| ReportError::NoRuntime)?;
		let reporter = self.clone();
		handle.spawn(async move {
			if let Err(err) = reporter.send(&event).await {
				warn!(endpoint = %reporter.config.endpoint, error = %err, "failed to deliver error event");
			}
		});
		Ok(())
	}
}

impl Reporter for HttpReporter {
	fn report_exception(&self, err: &RenderError, context: &ErrorContext) {
		if let Err(dispatch_err) = self.dispatch(self.event(err, context)) {
			warn!(error = %dispatch_err, "dropping error event");
		}
	}
}
