//! Render-phase failures.

use thiserror::Error;

/// What went wrong while producing a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderErrorKind {
	/// Data needed by a component was absent.
	#[error("missing `{field}` in response")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
	/// Data was present but unusable.
	#[error("{0}")]
	Invalid(String),
	/// A render function panicked.
	#[error("render panicked: {0}")]
	Panicked(String),
}

impl RenderErrorKind {
	/// Stable identifier for reporting.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::MissingField { .. } => "missing_field",
			Self::Invalid(_) => "invalid",
			Self::Panicked(_) => "panicked",
		}
	}
}

/// Failure raised by a render function, annotated with the components it passed through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct RenderError {
	kind: RenderErrorKind,
	component_stack: Vec<&'static str>,
}

impl RenderError {
	/// Creates an error raised by `component`.
	pub fn new(component: &'static str, kind: RenderErrorKind) -> Self {
		Self {
			kind,
			component_stack: vec![component],
		}
	}

	/// `component` could not find `field`.
	pub fn missing_field(component: &'static str, field: &'static str) -> Self {
		Self::new(component, RenderErrorKind::MissingField { field })
	}

	/// `component` rejected its input.
	pub fn invalid(component: &'static str, message: impl Into<String>) -> Self {
		Self::new(component, RenderErrorKind::Invalid(message.into()))
	}

	/// A panic caught at a boundary; the panicking component is unknown.
	pub fn panicked(message: impl Into<String>) -> Self {
		Self {
			kind: RenderErrorKind::Panicked(message.into()),
			component_stack: Vec::new(),
		}
	}

	/// Records that the error propagated out of `component`.
	#[must_use]
	pub fn within(mut self, component: &'static str) -> Self {
		self.component_stack.push(component);
		self
	}

	/// Failure kind.
	pub fn kind(&self) -> &RenderErrorKind {
		&self.kind
	}

	/// Components the error passed through, innermost first.
	pub fn component_stack(&self) -> &[&'static str] {
		&self.component_stack
	}
}
