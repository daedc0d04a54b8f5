use std::time::Duration;

use pretty_assertions::assert_eq;
use sunborn_engine::{FailureKind, FetchSettings, Fetcher, ListSource, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_list_bytes_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/allowlist-a.csv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("address\n0xAAA\n", "text/csv; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let source = ListSource::Url(format!("{}/allowlist-a.csv", server.uri()));

    let output = fetcher.fetch(&source).await.expect("fetch ok");
    assert_eq!(output.bytes, b"address\n0xAAA\n");
    assert!(output.content_type.unwrap().starts_with("text/csv"));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let source = ListSource::Url(format!("{}/missing.csv", server.uri()));

    let err = fetcher.fetch(&source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.csv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("0xAAA\n"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let source = ListSource::Url(format!("{}/slow.csv", server.uri()));

    let err = fetcher.fetch(&source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    let body = "0xAAA\n".repeat(100);
    Mock::given(method("GET"))
        .and(path("/large.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/csv"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 64,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let source = ListSource::Url(format!("{}/large.csv", server.uri()));

    let err = fetcher.fetch(&source).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { .. }));
}

#[tokio::test]
async fn fetcher_rejects_unsupported_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let source = ListSource::Url(format!("{}/page", server.uri()));

    let err = fetcher.fetch(&source).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let source = ListSource::Url("not a url".to_string());

    let err = fetcher.fetch(&source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetcher_reads_local_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("allowlist.csv");
    std::fs::write(&path, "wallet\n0xBBB\n").expect("write list");

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let output = fetcher
        .fetch(&ListSource::File(path))
        .await
        .expect("file fetch ok");

    assert_eq!(output.bytes, b"wallet\n0xBBB\n");
    assert_eq!(output.content_type, None);
}

#[tokio::test]
async fn fetcher_fails_on_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.csv");

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch(&ListSource::File(path)).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Io);
}
