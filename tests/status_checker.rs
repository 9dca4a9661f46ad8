use contact_status::probe::{Probe, ReqwestTransport, StatusChecker};
use std::sync::Arc;

fn checker_for(base_url: &str) -> StatusChecker {
    StatusChecker::with_base_url(Arc::new(ReqwestTransport::new()), base_url)
}

#[tokio::test]
async fn healthy_service_passes_all_checks() {
    let mut server = mockito::Server::new_async().await;
    let _health = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body("OK")
        .create_async()
        .await;
    let _token = server
        .mock("GET", "/form-token.js")
        .with_status(200)
        .with_body("window.__formToken = 'abc';")
        .create_async()
        .await;
    let cors = server
        .mock("OPTIONS", "/f/contact")
        .match_header("Origin", "https://connexxo.com")
        .with_status(204)
        .create_async()
        .await;

    let report = checker_for(&server.url()).run().await;

    assert!(report.health.success);
    assert_eq!(report.health.status, Some(200));
    assert_eq!(report.health.body.as_deref(), Some("OK"));
    assert!(report.token.success);
    assert_eq!(report.token.status, Some(200));
    assert!(report.cors.success);
    assert_eq!(report.cors.status, Some(204));
    assert!(!report.checked_at.is_empty());

    cors.assert_async().await;
}

#[tokio::test]
async fn unexpected_status_code_is_captured() {
    let mut server = mockito::Server::new_async().await;
    let _health = server
        .mock("GET", "/health")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let result = checker_for(&server.url())
        .check(&Probe::health(&server.url()))
        .await;

    assert!(!result.success);
    assert_eq!(result.status, Some(503));
    assert_eq!(result.body.as_deref(), Some("overloaded"));
    assert!(result.error.is_none());
}

#[tokio::test]
async fn cors_preflight_accepts_200() {
    let mut server = mockito::Server::new_async().await;
    let _cors = server
        .mock("OPTIONS", "/f/contact")
        .with_status(200)
        .create_async()
        .await;

    let result = checker_for(&server.url())
        .check(&Probe::cors_preflight(&server.url()))
        .await;

    assert!(result.success);
    assert_eq!(result.status, Some(200));
}

#[tokio::test]
async fn cors_preflight_rejects_other_codes() {
    let mut server = mockito::Server::new_async().await;
    let _cors = server
        .mock("OPTIONS", "/f/contact")
        .with_status(403)
        .create_async()
        .await;

    let result = checker_for(&server.url())
        .check(&Probe::cors_preflight(&server.url()))
        .await;

    assert!(!result.success);
    assert_eq!(result.status, Some(403));
}

#[tokio::test]
async fn redirects_are_not_followed() {
    let mut server = mockito::Server::new_async().await;
    let _health = server
        .mock("GET", "/health")
        .with_status(302)
        .with_header("Location", "/elsewhere")
        .create_async()
        .await;

    let result = checker_for(&server.url())
        .check(&Probe::health(&server.url()))
        .await;

    assert!(!result.success);
    assert_eq!(result.status, Some(302));
}

#[tokio::test]
async fn connection_refused_is_reported_as_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let base_url = format!("http://127.0.0.1:{port}");
    let result = checker_for(&base_url).check(&Probe::health(&base_url)).await;

    assert!(!result.success);
    assert_eq!(result.status, None);
    assert!(result.body.is_none());
    assert!(result.error.map(|err| !err.is_empty()).unwrap_or(false));
}
