//! Integration tests for the fetch pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! orchestrator over real HTTP.

use std::time::Duration;
use title_scout::config::{Config, FetchConfig};
use title_scout::crawler::{
    Fetcher, HttpFetcher, Orchestrator, PageError, TransportErrorKind,
};
use title_scout::output::{CollectingReporter, ConsoleReporter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on port 1 of the loopback interface
const UNREACHABLE: &str = "http://127.0.0.1:1/unreachable";

/// Creates a test configuration with short timeouts
fn create_test_config(urls: Vec<String>, worker_count: usize) -> Config {
    Config {
        urls,
        worker_count,
        deadline: Duration::from_secs(5),
        fetch: FetchConfig {
            user_agent: "TitleScoutTest/1.0".to_string(),
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(2),
        },
    }
}

async fn mount_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/title-present"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Present</title></head></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/no-title"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>No heading here</body></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_mixed_outcomes_two_workers() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let base = server.uri();

    let present = format!("{}/title-present", base);
    let no_title = format!("{}/no-title", base);
    let not_found = format!("{}/404", base);

    let config = create_test_config(
        vec![
            present.clone(),
            no_title.clone(),
            not_found.clone(),
            UNREACHABLE.to_string(),
        ],
        2,
    );

    let orchestrator = Orchestrator::new(config).expect("valid config");
    let mut reporter = CollectingReporter::default();
    let summary = orchestrator.run(&mut reporter).await.expect("run completes");

    assert_eq!(summary.total_results, 4);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.extraction_errors, 1);
    assert_eq!(summary.status_errors, 1);
    assert_eq!(summary.transport_errors, 1);
    assert!(!summary.cancelled);

    let find = |url: &str| {
        reporter
            .results
            .iter()
            .find(|r| r.url == url)
            .unwrap_or_else(|| panic!("missing result for {}", url))
    };

    assert_eq!(find(&present).title(), "Present");
    assert!(matches!(
        find(&no_title).error(),
        Some(PageError::Extraction(_))
    ));
    assert!(matches!(
        find(&not_found).error(),
        Some(PageError::Status { code: 404 })
    ));
    assert!(matches!(
        find(UNREACHABLE).error(),
        Some(PageError::Transport(_))
    ));
    assert_eq!(find(UNREACHABLE).title(), "");
}

#[tokio::test]
async fn test_console_report_format() {
    let server = MockServer::start().await;
    mount_pages(&server).await;

    let present = format!("{}/title-present", server.uri());
    let not_found = format!("{}/404", server.uri());
    let config = create_test_config(vec![present.clone(), not_found.clone()], 1);

    let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new());
    Orchestrator::new(config)
        .unwrap()
        .run(&mut reporter)
        .await
        .unwrap();

    let (out, diag) = reporter.into_inner();
    let out = String::from_utf8(out).unwrap();
    let diag = String::from_utf8(diag).unwrap();

    // A single worker reports in input order
    assert_eq!(
        out,
        format!(
            "URL: {}\nTitle: Present\nURL: {}\nTitle: \n",
            present, not_found
        )
    );
    assert!(diag.contains(&format!("{}: status: 404", not_found)));
    assert!(diag.contains("Done: 2 results"));
}

#[tokio::test]
async fn test_slow_server_hits_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>Late</title>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let urls = (0..4).map(|i| format!("{}/slow/{}", server.uri(), i)).collect();
    let mut config = create_test_config(urls, 2);
    config.deadline = Duration::from_millis(200);
    config.fetch.request_timeout = Duration::from_secs(10);

    let summary = Orchestrator::new(config)
        .unwrap()
        .run(&mut CollectingReporter::default())
        .await
        .unwrap();

    assert!(summary.cancelled);
    assert_eq!(summary.total_results, 0);
    assert_eq!(summary.workers_finished, 2);
    assert!(summary.elapsed < Duration::from_secs(3));
}

#[tokio::test]
async fn test_http_fetcher_streams_body() {
    let server = MockServer::start().await;
    let filler = "x".repeat(256 * 1024);
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html>{}<title>Deep</title></html>", filler)),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
    let response = fetcher
        .fetch(&format!("{}/big", server.uri()))
        .await
        .unwrap();

    assert!(response.status_ok());
    let title = title_scout::crawler::extract_title(response.body)
        .await
        .unwrap();
    assert_eq!(title, "Deep");
}

#[tokio::test]
async fn test_http_fetcher_connection_refused() {
    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
    let err = fetcher.fetch(UNREACHABLE).await.unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::Connect);
}
