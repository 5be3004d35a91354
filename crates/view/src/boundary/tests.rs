use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::report::{RecordingReporter, Reporter};

fn boundary() -> (ErrorBoundary, Arc<RecordingReporter>) {
	let recorder = Arc::new(RecordingReporter::new());
	(ErrorBoundary::new(recorder.clone()), recorder)
}

fn healthy_view() -> View {
	View::heading("Rick and Morty Episodes")
}

#[test]
fn healthy_passes_subtree_through() {
	let (mut boundary, recorder) = boundary();
	assert_eq!(boundary.render(|| Ok(healthy_view())), healthy_view());
	assert!(!boundary.is_faulted());
	assert!(recorder.is_empty());
}

#[test]
fn err_faults_and_reports_once() {
	let (mut boundary, recorder) = boundary();
	let err = RenderError::missing_field("EpisodesPage", "info");

	let view = boundary.render(|| Err(err.clone()));
	assert_eq!(view, ErrorBoundary::fallback_view());
	assert!(boundary.is_faulted());

	let faults = recorder.faults();
	assert_eq!(faults.len(), 1);
	assert_eq!(faults[0].error, err);
	assert_eq!(faults[0].context.boundary, "App");
	assert_eq!(faults[0].context.component_stack, vec!["EpisodesPage"]);
}

#[test]
fn faulted_boundary_does_not_render_subtree() {
	let (mut boundary, recorder) = boundary();
	boundary.render(|| Err(RenderError::invalid("EpisodesPage", "bad")));

	let mut invoked = false;
	let view = boundary.render(|| {
		invoked = true;
		Ok(healthy_view())
	});
	assert!(!invoked);
	assert_eq!(view, ErrorBoundary::fallback_view());
	assert_eq!(recorder.len(), 1);
}

#[test]
fn panics_are_caught_as_faults() {
	let (mut boundary, recorder) = boundary();
	let view = boundary.render(|| panic!("results was undefined"));
	assert!(view.is_enabled(Action::TryAgain));

	let faults = recorder.faults();
	assert_eq!(faults.len(), 1);
	assert_eq!(faults[0].error.kind(), &crate::RenderErrorKind::Panicked("results was undefined".into()));
}

#[test]
fn try_again_recovers_and_refaults() {
	let (mut boundary, recorder) = boundary();
	boundary.render(|| Err(RenderError::invalid("EpisodesPage", "first")));
	assert!(boundary.try_again());
	assert!(!boundary.is_faulted());

	boundary.render(|| Err(RenderError::invalid("EpisodesPage", "second")));
	assert!(boundary.is_faulted());
	assert_eq!(recorder.len(), 2);
	assert_eq!(recorder.faults()[1].context.fault_count, 2);

	assert!(boundary.try_again());
	assert_eq!(boundary.render(|| Ok(healthy_view())), healthy_view());
	assert_eq!(recorder.len(), 2);
}

#[test]
fn try_again_while_healthy_is_noop() {
	let (mut boundary, _) = boundary();
	assert!(!boundary.try_again());
	assert_eq!(boundary.state(), &BoundaryState::Healthy);
}

struct PanickingReporter;

impl Reporter for PanickingReporter {
	fn report_exception(&self, _: &RenderError, _: &ErrorContext) {
		panic!("monitoring unavailable");
	}
}

#[test]
fn reporter_panic_does_not_escape() {
	let mut boundary = ErrorBoundary::named("Page", Arc::new(PanickingReporter));
	let view = boundary.render(|| Err(RenderError::invalid("EpisodesPage", "bad")));
	assert_eq!(view, ErrorBoundary::fallback_view());
	assert!(boundary.is_faulted());
	assert_eq!(boundary.fault_count(), 1);
}

#[rstest]
#[case::owned(Box::new(String::from("owned")), "owned")]
#[case::borrowed(Box::new("borrowed"), "borrowed")]
#[case::other(Box::new(7_u8), "non-string panic payload")]
fn panic_message_handles_payload_types(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
	assert_eq!(panic_message(payload.as_ref()), expected);
}
