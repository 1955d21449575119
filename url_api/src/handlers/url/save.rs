use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use types::{Response as Envelope, SaveUrlRequest, SaveUrlResponse};
use us_axum::RequestIdentifier;

use crate::alias::{is_routable, random_alias};
use crate::state::AppContext;
use crate::storage::StorageError;

fn error(message: &str) -> Json<SaveUrlResponse> {
    Json(SaveUrlResponse {
        response: Envelope::error(message),
        alias: None,
    })
}

/// Validates the submitted URL and alias, returning the client-facing
/// message on failure.
fn validate(request: &SaveUrlRequest) -> Result<(), &'static str> {
    if request.url.is_empty() {
        return Err("field URL is a required field");
    }

    url::Url::parse(&request.url).map_err(|_| "field URL is not a valid URL")?;

    match request.alias.as_deref() {
        Some(alias) if !alias.is_empty() && !is_routable(alias) => {
            Err("invalid alias")
        }
        _ => Ok(()),
    }
}

/// Stores a new alias for a URL, generating the alias when the request
/// leaves it out.
#[tracing::instrument(
    skip(state, request_id, payload),
    fields(op = "handlers.url.save", request_id = %request_id)
)]
pub async fn handler(
    State(state): State<AppContext>,
    request_id: RequestIdentifier,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Json<SaveUrlResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::error!("failed to decode request body: {e}");

            return error("failed to decode request");
        }
    };

    tracing::info!(url = %request.url, "request body decoded");

    if let Err(message) = validate(&request) {
        tracing::error!("invalid request: {message}");

        return error(message);
    }

    let alias = match request.alias {
        Some(alias) if !alias.is_empty() => alias,
        _ => random_alias(state.config.alias_length.get()),
    };

    match state.store.save_url(&request.url, &alias).await {
        Ok(()) => {
            tracing::info!(alias, "url added");

            Json(SaveUrlResponse {
                response: Envelope::ok(),
                alias: Some(alias),
            })
        }
        Err(StorageError::UrlExists) => {
            tracing::info!(url = %request.url, "url already exists");

            error("url already exists")
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to add url");

            error("failed to add url")
        }
    }
}
