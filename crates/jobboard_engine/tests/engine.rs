use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use jobboard_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings, JobRecord, JobSource,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

struct CountingSource {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl JobSource for CountingSource {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

#[test]
fn engine_reports_each_fetch_command() {
    let source = Arc::new(CountingSource {
        calls: AtomicUsize::new(0),
    });
    let engine = EngineHandle::with_source(source.clone()).unwrap();
    assert!(engine.try_recv().is_none());

    engine.fetch_jobs();
    let event = engine.recv_timeout(WAIT).expect("engine event");

    assert_eq!(event, EngineEvent::JobsFetched { result: Ok(Vec::new()) });
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_fetches_from_http_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"jobs":[{"id":"x","status":"s","dataType":"d","requestID":"77",
                "requestStatusID":0,"tier":"t","missionID":5,"createdAt":"now"}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = Url::parse(&format!("{}/api/jobs", server.uri())).unwrap();
    let engine = EngineHandle::new(FetchSettings::with_endpoint(endpoint)).unwrap();
    engine.fetch_jobs();

    let event = tokio::task::spawn_blocking(move || engine.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("engine event");

    match event {
        EngineEvent::JobsFetched { result: Ok(jobs) } => {
            assert_eq!(jobs.len(), 1);
            assert_eq!(jobs[0].request_id, "77");
            assert_eq!(jobs[0].mission_id, 5);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let endpoint = Url::parse(&server.uri()).unwrap();
    let engine = EngineHandle::new(FetchSettings::with_endpoint(endpoint)).unwrap();
    engine.fetch_jobs();

    let event = tokio::task::spawn_blocking(move || engine.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("engine event");

    match event {
        EngineEvent::JobsFetched { result: Err(err) } => {
            assert_eq!(err.kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
