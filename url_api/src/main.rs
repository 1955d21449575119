/**
 * This is the main entrypoint for the `url_api` service.
 *
 * It serves the URL shortener endpoints: saving an alias, redirecting
 * through it and deleting it.
 */
use url_api::{config::Config, routes::create_router, state::AppContext};

#[tokio::main]
async fn main() {
    // Initialize the application context (which also initializes tracing)
    let app_context = us_app::create_app_context::<AppContext, Config>()
        .await
        .expect("Failed to create app context");

    let listen_address = app_context.config.listen_address;

    let app = create_router(app_context);

    us_axum::run_app(app, listen_address)
        .await
        .expect("Failed to run app");
}
