//! Luxe Advisor: binary entrypoint.
//! Boots the Axum HTTP server with the three advisor panels and `/metrics`.

use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    luxe_advisor::telemetry::init_tracing();

    let router = luxe_advisor::app().await?;

    Ok(router.into())
}
