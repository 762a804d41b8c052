//! End-to-end run: definitions file on disk, real transport against a local
//! stub server, console report captured in memory.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::Arc;

use apicheck_application::{
    DefinitionError, EvaluateTest, HttpTransport, LoadDefinitions, RunSuite,
};
use apicheck_domain::{HttpMethod, TransportCall};
use apicheck_infrastructure::{
    ConsoleReporter, FileDefinitionRepository, ReqwestTransport, SystemClock, TokioFileSystem,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn reply(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serves a small fixed API until aborted.
async fn spawn_api() -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind api");
    let addr = listener.local_addr().expect("api addr");
    let task = tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buffer = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(read) => buffer.extend_from_slice(&chunk[..read]),
                }
            }
            let request = String::from_utf8_lossy(&buffer);
            let response = if request.starts_with("GET /users/1 ") {
                reply("200 OK", r#"{"name":"ada","id":1}"#)
            } else if request.starts_with("GET /count ") {
                reply("200 OK", "7")
            } else {
                reply("500 Internal Server Error", "{}")
            };
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    (addr, task)
}

fn transport() -> ReqwestTransport {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build");
    ReqwestTransport::with_client(client)
}

#[tokio::test]
async fn runs_a_definitions_file_end_to_end() {
    let (addr, server) = spawn_api().await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("parameters.json");
    std::fs::write(
        &path,
        format!(
            r#"[
  {{"title": "user", "method": "get", "url": "http://{addr}/users/1", "expect": {{"id": 1, "name": "ada"}}}},
  {{"title": "count", "method": "GET", "url": "http://{addr}/count", "operator": "gte", "expect": "5"}},
  {{"title": "wrong", "method": "get", "url": "http://{addr}/count", "operator": "lt", "expect": 3}},
  {{"title": "broken", "method": "get", "url": "http://{addr}/broken"}},
  {{"title": "invalid", "method": "fetch", "url": "http://{addr}/count"}},
  {{"title": "open", "method": "get", "url": "http://{addr}/count"}}
]"#
        ),
    )
    .unwrap();

    let definitions = LoadDefinitions::new(FileDefinitionRepository::new(TokioFileSystem::new()))
        .execute(&path)
        .await
        .unwrap();
    let suite = RunSuite::new(
        EvaluateTest::new(Arc::new(transport())),
        Arc::new(SystemClock::new()),
    );
    let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new());

    let summary = suite.execute(&definitions, &mut reporter).await.unwrap();
    server.abort();

    assert_eq!(summary.total, 6);
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.request_errors, 1);
    assert_eq!(summary.aborted, 1);
    assert_eq!(summary.unverified, 1);
    assert_eq!(summary.exit_codes, 2);
    assert!(!summary.all_passed());

    let (out, err) = reporter.into_inner();
    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();

    assert!(out.contains("TEST #1 - user\nGET http://"));
    assert!(out.contains("TEST #6 - open"));
    assert!(out.contains("Response was [gte] to \"expect\" test."));
    assert!(err.contains("Expected response to be [lt] than :\n3\n\nGot :\n7\n"));
    assert!(err.contains("Request failed with status code 500"));
    assert!(err.contains("Test aborted!\n\nUnknown Method: fetch"));
    assert!(out.contains("6 tests: 2 matched, 1 unverified, 1 failed, 1 aborted, 1 request errors"));
}

#[tokio::test]
async fn missing_definitions_file_stops_before_running() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("parameters.json");

    let result = LoadDefinitions::new(FileDefinitionRepository::new(TokioFileSystem::new()))
        .execute(&path)
        .await;

    assert!(matches!(result, Err(DefinitionError::NotFound(p)) if p == path));
}

#[tokio::test]
async fn transport_is_usable_through_the_port() {
    let (addr, server) = spawn_api().await;
    let transport: Arc<dyn HttpTransport> = Arc::new(transport());

    let response = transport
        .send(&TransportCall::shape(
            HttpMethod::Get,
            format!("http://{addr}/count"),
            None,
            None,
        ))
        .await
        .unwrap();
    server.abort();

    assert_eq!(response.data, 7);
}
