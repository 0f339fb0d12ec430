use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_config() -> ServerConfig {
    ServerConfig { public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"), ..ServerConfig::default() }
}

async fn status_of(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    base_routes(&test_config()).oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn public_files_are_served() {
    assert_eq!(status_of("/placeholder.svg").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(status_of("/no-such-file.txt").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_renders_portfolio_sections() {
    let app = leptos_app(&test_config()).unwrap();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains(r#"id="projects""#), "gallery section missing");
    assert!(html.contains("Latest Blog Posts"), "blog section missing");
    assert!(html.contains("Send me a message"), "contact section missing");
}
