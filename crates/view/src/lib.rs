//! Rendering building blocks shared by every frontend.
//!
//! * [`View`]: backend-neutral tree produced by components
//! * [`EpisodeCard`]: presentation leaf for one episode
//! * [`ErrorBoundary`]: absorbs render failures and reports them through a [`Reporter`]

#![warn(missing_docs)]

mod boundary;
mod card;
mod error;
mod report;
mod view;

pub use boundary::{BoundaryState, DEFAULT_BOUNDARY_NAME, ErrorBoundary, Fault, panic_message};
pub use card::EpisodeCard;
pub use error::{RenderError, RenderErrorKind};
pub use report::{
	ErrorContext, ErrorEvent, FanoutReporter, HttpReporter, HttpReporterConfig, RecordedFault, RecordingReporter, ReportError, Reporter, TracingReporter,
};
pub use view::{Action, Button, CardView, Tone, View};
