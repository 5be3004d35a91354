use std::sync::Arc;
use std::time::Duration;

use multiverse_view::{ErrorBoundary, HttpReporter, HttpReporterConfig, RenderError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_requests(server: &MockServer, expected: usize) {
	for _ in 0..50 {
		if server.received_requests().await.is_some_and(|r| r.len() >= expected) {
			return;
		}
		tokio::time::sleep(Duration::from_millis(20)).await;
	}
	panic!("monitoring endpoint did not receive {expected} request(s)");
}

#[tokio::test(flavor = "multi_thread")]
async fn boundary_fault_is_posted_to_monitoring() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/events"))
		.and(body_partial_json(json!({
			"level": "error",
			"kind": "missing_field",
			"message": "missing `results` in response",
			"boundary": "App",
			"component_stack": ["EpisodesPage"],
			"environment": "test",
		})))
		.respond_with(ResponseTemplate::new(202))
		.expect(1)
		.mount(&server)
		.await;

	let mut config = HttpReporterConfig::new(format!("{}/events", server.uri()));
	config.environment = "test".to_string();
	let reporter = Arc::new(HttpReporter::new(config).unwrap());

	let mut boundary = ErrorBoundary::new(reporter);
	boundary.render(|| Err(RenderError::missing_field("EpisodesPage", "results")));
	assert!(boundary.is_faulted());

	wait_for_requests(&server, 1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_event_does_not_disturb_the_boundary() {
	let server = MockServer::start().await;
	Mock::given(method("POST")).respond_with(ResponseTemplate::new(500)).mount(&server).await;

	let reporter = Arc::new(HttpReporter::new(HttpReporterConfig::new(server.uri())).unwrap());
	let mut boundary = ErrorBoundary::new(reporter);
	boundary.render(|| Err(RenderError::invalid("EpisodesPage", "bad")));
	wait_for_requests(&server, 1).await;

	assert!(boundary.try_again());
	let view = boundary.render(|| Ok(multiverse_view::View::heading("ok")));
	assert_eq!(view.plain_text(), "ok");
}
