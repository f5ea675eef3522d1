use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, http::StatusCode, routing::get};
use ept_client::HttpTasksClient;
use ept_collector::PendingTasksCollector;
use ept_exporter::{DEFAULT_METRICS_PATH, router, serve};
use tokio::net::TcpListener;

async fn upstream(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route(
        "/_cluster/pending_tasks",
        get(move || async move { (status, body) }),
    );
    spawn(app).await
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, app, std::future::pending()).await.unwrap();
    });
    addr
}

async fn exporter(es: SocketAddr, metrics_path: &str) -> SocketAddr {
    let client = HttpTasksClient::new(format!("http://{es}"));
    let collector = Arc::new(PendingTasksCollector::new(client).unwrap());
    spawn(router(collector, metrics_path)).await
}

async fn scrape(exporter: SocketAddr, path: &str) -> (reqwest::StatusCode, String, String) {
    let response = reqwest::get(format!("http://{exporter}{path}")).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (status, content_type, response.text().await.unwrap())
}

#[tokio::test]
async fn exposes_grouped_totals() {
    let es = upstream(
        StatusCode::OK,
        r#"{"tasks":[
            {"executing":true,"priority":"URGENT","source":"shard-started"},
            {"executing":false,"priority":"urgent","source":"Shard-Started"},
            {"executing":true,"priority":"normal","source":"update-settings"}
        ]}"#,
    )
    .await;
    let addr = exporter(es, DEFAULT_METRICS_PATH).await;

    let (status, content_type, body) = scrape(addr, "/metrics").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert!(body.contains(
        r#"elasticsearch_pending_tasks_total{priority="urgent",source="shard-started"} 2"#
    ));
    assert!(body.contains(
        r#"elasticsearch_pending_tasks_total{priority="normal",source="update-settings"} 1"#
    ));
    assert!(body.contains("elasticsearch_pending_tasks_up 1"));
    assert!(body.contains("elasticsearch_pending_tasks_scrape_duration_seconds "));
}

#[tokio::test]
async fn upstream_outage_still_answers_scrape() {
    let es = upstream(StatusCode::SERVICE_UNAVAILABLE, "down").await;
    let addr = exporter(es, DEFAULT_METRICS_PATH).await;

    let (status, _, body) = scrape(addr, "/metrics").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(body.contains("elasticsearch_pending_tasks_up 0"));
    assert!(body.contains("elasticsearch_pending_tasks_scrape_duration_seconds "));
    assert!(!body.contains("elasticsearch_pending_tasks_total"));
}

#[tokio::test]
async fn empty_task_list_reports_up() {
    let es = upstream(StatusCode::OK, r#"{"tasks":[]}"#).await;
    let addr = exporter(es, DEFAULT_METRICS_PATH).await;

    let (_, _, body) = scrape(addr, "/metrics").await;
    assert!(body.contains("elasticsearch_pending_tasks_up 1"));
    assert!(!body.contains("elasticsearch_pending_tasks_total"));
}

#[tokio::test]
async fn invalid_json_reports_down() {
    let es = upstream(StatusCode::OK, "{not json").await;
    let addr = exporter(es, DEFAULT_METRICS_PATH).await;

    let (status, _, body) = scrape(addr, "/metrics").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(body.contains("elasticsearch_pending_tasks_up 0"));
    assert!(!body.contains("elasticsearch_pending_tasks_total"));
}

#[tokio::test]
async fn custom_path_and_landing_page() {
    let es = upstream(StatusCode::OK, r#"{"tasks":[]}"#).await;
    let addr = exporter(es, "/probe").await;

    let (status, _, body) = scrape(addr, "/probe").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(body.contains("elasticsearch_pending_tasks_up 1"));

    let (status, _, _) = scrape(addr, "/metrics").await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);

    let (status, content_type, body) = scrape(addr, "/").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains(r#"<a href="/probe">Metrics</a>"#));
}
