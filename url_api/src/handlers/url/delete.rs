use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use types::Response as Envelope;
use us_axum::RequestIdentifier;

use crate::state::AppContext;
use crate::storage::StorageError;

/// Deletes the record behind `alias`.
///
/// Every outcome answers `200 OK`. Success is the bare JSON string
/// `"url by alias: <alias> deleted"`; failures use the error envelope and
/// never expose the storage error.
#[tracing::instrument(
    skip(state, request_id, path),
    fields(op = "handlers.url.delete", request_id = %request_id)
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

    match state.store.delete_url(&alias).await {
        Ok(()) => {
            tracing::info!(alias, "url deleted");

            Json(format!("url by alias: {alias} deleted")).into_response()
        }
        Err(StorageError::UrlNotFound) => {
            tracing::info!(alias, "url not found");

            Json(Envelope::error("not found")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to delete url");

            Json(Envelope::error("internal error")).into_response()
        }
    }
}
