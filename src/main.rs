use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use triage::config::hypertension_labels_from_env_value;

/// Main entry point for the Pocket Doctor service
///
/// Resolves configuration once, then serves the REST API (with OpenAPI/Swagger UI).
///
/// # Environment Variables
/// - `POCKET_DOCTOR_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `POCKET_DOCTOR_HYPERTENSION_LABELS`: comma-separated condition labels that count as
///   hypertension (default: "Hipertensión leve")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the hypertension label list is present but contains no labels,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pocket_doctor_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("pocket_wire=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("POCKET_DOCTOR_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = hypertension_labels_from_env_value(
        std::env::var("POCKET_DOCTOR_HYPERTENSION_LABELS").ok(),
    )?;
    tracing::info!(
        labels = ?cfg.hypertension_labels(),
        "hypertension labels configured"
    );

    tracing::info!("++ Starting Pocket Doctor REST on {}", rest_addr);

    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
