use std::time::{Duration, Instant};

use folio_viewport::{EmbedHandle, LoadOutcome, ProbeError, ProbeSettings, ViewportEvent};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn wait_for_event(handle: &EmbedHandle) -> ViewportEvent {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no event before deadline");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[tokio::test]
async fn observed_load_finishes_with_page_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/p"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><head><title>Work</title></head><body></body></html>",
            "text/html",
        ))
        .mount(&server)
        .await;

    let handle = EmbedHandle::new(ProbeSettings::default());
    handle.load(7, format!("{}/p", server.uri()));

    let event = tokio::task::spawn_blocking(move || wait_for_event(&handle))
        .await
        .expect("join");
    let ViewportEvent::LoadFinished { generation, outcome } = event;
    assert_eq!(generation, 7);
    assert_eq!(outcome.title(), Some("Work"));
}

#[tokio::test]
async fn unobservable_load_still_finishes_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let handle = EmbedHandle::new(ProbeSettings::default());
    handle.load(3, format!("{}/gone", server.uri()));

    let event = tokio::task::spawn_blocking(move || wait_for_event(&handle))
        .await
        .expect("join");
    let ViewportEvent::LoadFinished { generation, outcome } = event;
    assert_eq!(generation, 3);
    assert_eq!(
        outcome,
        LoadOutcome::Unobservable {
            reason: ProbeError::HttpStatus(500),
        }
    );
}

#[tokio::test]
async fn each_request_yields_exactly_one_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<title>A</title>", "text/html"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let handle = EmbedHandle::new(ProbeSettings::default());
    handle.load(1, format!("{}/a", server.uri()));
    handle.load(2, format!("{}/b", server.uri()));

    let events = tokio::task::spawn_blocking(move || {
        let first = wait_for_event(&handle);
        let second = wait_for_event(&handle);
        // Settle, then confirm nothing else arrives.
        std::thread::sleep(Duration::from_millis(100));
        assert!(handle.try_recv().is_none());
        [first, second]
    })
    .await
    .expect("join");

    let mut generations: Vec<u64> = events
        .iter()
        .map(|ViewportEvent::LoadFinished { generation, .. }| *generation)
        .collect();
    generations.sort_unstable();
    assert_eq!(generations, vec![1, 2]);
}
