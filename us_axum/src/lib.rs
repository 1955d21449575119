pub mod request_id;

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use std::net::SocketAddr;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use request_id::RequestIdentifier;

/// Wraps a router with request-ID assignment, request-ID propagation and
/// request tracing.
///
/// An incoming `x-request-id` header is kept; otherwise a UUID is generated.
/// The same value is echoed back on the response and attached to the
/// request span.
pub fn with_request_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(request_id::X_REQUEST_ID)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();

            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id,
            )
        });

    // layers run outermost-last: the id is set before it is propagated or traced
    router
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(types::Response::error("not found")),
    )
}

#[tracing::instrument]
pub async fn health() -> impl IntoResponse {
    tracing::info!("health check");

    Json(json!({ "status": "UP" }))
}

/// Runs an Axum router in either local development mode or Lambda runtime mode.
///
/// In debug builds (`#[cfg(debug_assertions)]`), the router is served on
/// `addr` using a standard Axum server that shuts down gracefully on
/// Ctrl+C or SIGTERM.
///
/// In release builds, the router is wrapped with the Lambda runtime adapter
/// and executed as a Lambda function; `addr` is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The local server fails to bind to the address (debug mode)
/// - The Lambda runtime fails to start (release mode)
pub async fn run_app(app: Router, addr: SocketAddr) -> Result<(), axum::BoxError> {
    #[cfg(debug_assertions)]
    {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Starting local development server on http://{addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    #[cfg(not(debug_assertions))]
    {
        use lambda_http::tower;

        let _ = addr;

        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default().trim_stage())
            .service(app);

        lambda_http::run(app).await?;
    }

    Ok(())
}

#[cfg_attr(not(debug_assertions), allow(dead_code))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::warn!("signal received, starting graceful shutdown");
}
