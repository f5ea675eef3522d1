use std::{future::Future, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use ept_client::TasksClient;
use ept_collector::{CONTENT_TYPE, PendingTasksCollector, encode_text};
use tokio::net::TcpListener;
use tracing::{error, info};

struct AppState<C> {
    collector: Arc<PendingTasksCollector<C>>,
    metrics_path: Arc<str>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            collector: Arc::clone(&self.collector),
            metrics_path: Arc::clone(&self.metrics_path),
        }
    }
}

/// Build the exporter router.
///
/// Routes:
/// - GET `/` - landing page
/// - GET `{metrics_path}` - one collection cycle rendered in the text format
pub fn router<C>(collector: Arc<PendingTasksCollector<C>>, metrics_path: &str) -> Router
where
    C: TasksClient,
{
    let state = AppState {
        collector,
        metrics_path: Arc::from(metrics_path),
    };

    Router::new()
        .route("/", get(landing::<C>))
        .route(metrics_path, get(metrics::<C>))
        .with_state(state)
}

/// Serve `app` on `listener` until `shutdown` completes.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "exporter listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("exporter received shutdown signal, stopping...");
        })
        .await
}

/// GET /{metrics_path}
async fn metrics<C>(State(state): State<AppState<C>>) -> Response
where
    C: TasksClient,
{
    let families = state.collector.collect().await;
    match encode_text(&families) {
        Ok(body) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /
async fn landing<C>(State(state): State<AppState<C>>) -> Html<String>
where
    C: TasksClient,
{
    Html(format!(
        "<html>\n\
         <head><title>Elasticsearch Pending Tasks Exporter</title></head>\n\
         <body>\n\
         <h1>Elasticsearch Pending Tasks Exporter</h1>\n\
         <p><a href=\"{path}\">Metrics</a></p>\n\
         </body>\n\
         </html>\n",
        path = state.metrics_path
    ))
}
