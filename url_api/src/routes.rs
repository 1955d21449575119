use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppContext;

/// Builds the service router.
///
/// `/{alias}` never matches an empty alias, so `DELETE /` and `GET /` land on
/// the 404 fallback.
pub fn create_router(app_context: AppContext) -> Router {
    let app = Router::new()
        .route("/health", get(us_axum::health))
        .route("/url", post(handlers::url::save::handler))
        .route(
            "/{alias}",
            get(handlers::redirect::handler).delete(handlers::url::delete::handler),
        )
        .fallback(us_axum::not_found)
        .with_state(app_context);

    us_axum::with_request_layers(app)
}
