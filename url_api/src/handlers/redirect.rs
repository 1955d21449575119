use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use types::Response as Envelope;
use us_axum::RequestIdentifier;

use crate::state::AppContext;
use crate::storage::StorageError;

/// Redirects to the URL stored under `alias` with `302 Found`.
#[tracing::instrument(
    skip(state, request_id, path),
    fields(op = "handlers.redirect", request_id = %request_id)
)]
pub async fn handler(
    State(state): State<AppContext>,
    request_id: RequestIdentifier,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let alias = match path {
        Ok(Path(alias)) => alias,
        Err(e) => {
            tracing::info!("failed to decode alias: {e}");

            return Json(Envelope::error("invalid request")).into_response();
        }
    };

    if alias.is_empty() {
        tracing::info!("alias is empty");

        return Json(Envelope::error("invalid request")).into_response();
    }

    match state.store.get_url(&alias).await {
        Ok(url) => {
            tracing::info!(url, "got url");

            (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
        }
        Err(StorageError::UrlNotFound) => {
            tracing::info!(alias, "url not found");

            Json(Envelope::error("not found")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to get url");

            Json(Envelope::error("internal error")).into_response()
        }
    }
}
