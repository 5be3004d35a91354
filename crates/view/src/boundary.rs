//! Error boundary: contains render failures of a subtree.
//!
//! A boundary wraps a render function returning `Result<View, RenderError>`. While
//! healthy it passes the subtree's view through untouched. An `Err` or a panic from
//! the subtree faults the boundary: the fault is reported once, and from then on the
//! fallback view replaces the subtree until [`ErrorBoundary::try_again`] is invoked.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::RenderError;
use crate::report::{ErrorContext, Reporter};
use crate::view::{Action, Button, Tone, View};

/// Name used by [`ErrorBoundary::new`].
pub const DEFAULT_BOUNDARY_NAME: &str = "App";

/// A caught render failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
	/// The error that faulted the boundary.
	pub error: RenderError,
	/// When it was caught.
	pub occurred_at: DateTime<Utc>,
}

/// Boundary state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoundaryState {
	/// Rendering the wrapped subtree.
	#[default]
	Healthy,
	/// Rendering the fallback.
	Faulted(Fault),
}

/// Wrapper that absorbs render failures of its subtree.
pub struct ErrorBoundary {
	name: &'static str,
	state: BoundaryState,
	reporter: Arc<dyn Reporter>,
	fault_count: u64,
}

impl ErrorBoundary {
	/// Creates a healthy boundary named [`DEFAULT_BOUNDARY_NAME`].
	pub fn new(reporter: Arc<dyn Reporter>) -> Self {
		Self::named(DEFAULT_BOUNDARY_NAME, reporter)
	}

	/// Creates a healthy boundary with a name used in reports.
	pub fn named(name: &'static str, reporter: Arc<dyn Reporter>) -> Self {
		Self {
			name,
			state: BoundaryState::Healthy,
			reporter,
			fault_count: 0,
		}
	}

	/// Current state.
	pub fn state(&self) -> &BoundaryState {
		&self.state
	}

	/// Returns `true` while the fallback is shown.
	pub fn is_faulted(&self) -> bool {
		matches!(self.state, BoundaryState::Faulted(_))
	}

	/// Number of faults caught over the boundary's lifetime.
	pub fn fault_count(&self) -> u64 {
		self.fault_count
	}

	/// Renders the subtree, or the fallback when faulted.
	///
	/// `subtree` is not invoked at all while faulted.
	pub fn render<F>(&mut self, subtree: F) -> View
	where
		F: FnOnce() -> Result<View, RenderError>,
	{
		if self.is_faulted() {
			return Self::fallback_view();
		}

		let error = match catch_unwind(AssertUnwindSafe(subtree)) {
			Ok(Ok(view)) => return view,
			Ok(Err(err)) => err,
			Err(payload) => RenderError::panicked(panic_message(payload.as_ref())),
		};

		self.fault(error);
		Self::fallback_view()
	}

	/// Leaves the faulted state; the next render runs the subtree again.
	///
	/// Returns `false` when the boundary was already healthy.
	pub fn try_again(&mut self) -> bool {
		if !self.is_faulted() {
			return false;
		}
		debug!(boundary = self.name, "error boundary reset");
		self.state = BoundaryState::Healthy;
		true
	}

	/// View shown in place of a faulted subtree.
	pub fn fallback_view() -> View {
		View::Stack(vec![
			View::Heading {
				text: "Oops, there is an error!".to_string(),
				tone: Tone::Error,
			},
			View::text("Something went wrong. Please try again later.", Tone::Muted),
			View::Controls(vec![Button::new("Try again?", Action::TryAgain)]),
		])
	}

	fn fault(&mut self, error: RenderError) {
		self.fault_count += 1;
		let occurred_at = Utc::now();
		let context = ErrorContext {
			boundary: self.name,
			component_stack: error.component_stack().to_vec(),
			occurred_at,
			fault_count: self.fault_count,
		};

		let reporter = &self.reporter;
		if let Err(payload) = catch_unwind(AssertUnwindSafe(|| reporter.report_exception(&error, &context))) {
			warn!(boundary = self.name, panic = %panic_message(payload.as_ref()), "error reporter panicked");
		}

		self.state = BoundaryState::Faulted(Fault { error, occurred_at });
	}
}

/// Extracts the message of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"non-string panic payload".to_string()
	}
}

#[cfg(test)]
mod tests;
