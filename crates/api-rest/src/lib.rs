//! # API REST
//!
//! REST API implementation for Pocket Doctor.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Request bodies are backend-shaped JSON and go through `pocket-wire` before reaching the
//! `triage` engine. A body that cannot be translated is a `400 Bad Request`; the engine itself
//! never fails.
//!
//! Handlers take the raw body (`String`) rather than the `Json` extractor so that translation
//! errors name the failing path. As a consequence the `content-type` header is not checked.

#![warn(rust_2018_idioms)]

pub mod dto;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dto::{
    ClinicRes, ClinicSearchRes, HealthRes, RecommendationsRes, TriageReportRes, TriageRowRes,
    TriageSummaryRes,
};
use pocket_wire::{parse_clinic_search, parse_lab_result, parse_profile, WireError};
use triage::{filter_clinics, triage_report, SpecialtyRecommender, TriageConfig};

/// Application state for the REST API server
///
/// Holds the specialty rules, resolved once from configuration at startup.
#[derive(Clone)]
pub struct AppState {
    recommender: Arc<SpecialtyRecommender>,
}

impl AppState {
    pub fn new(cfg: TriageConfig) -> Self {
        Self {
            recommender: Arc::new(SpecialtyRecommender::new(cfg)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, triage_labs, recommend, search_clinics),
    components(schemas(
        HealthRes,
        TriageReportRes,
        TriageRowRes,
        TriageSummaryRes,
        RecommendationsRes,
        ClinicSearchRes,
        ClinicRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with CORS and the Swagger UI mounted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/triage/labs", post(triage_labs))
        .route("/triage/recommendations", post(recommend))
        .route("/clinics/search", post(search_clinics))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type HandlerError = (StatusCode, String);

fn bad_request(context: &str, err: WireError) -> HandlerError {
    tracing::error!("{context} error: {:?}", err);
    (StatusCode::BAD_REQUEST, err.to_string())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Pocket Doctor REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/triage/labs",
    request_body(
        content = String,
        content_type = "application/json",
        description = "OCR lab-result document: { text?, items: [...], pages_processed? }"
    ),
    responses(
        (status = 200, description = "Classified rows and summary", body = TriageReportRes),
        (status = 400, description = "Body is not a lab-result document")
    )
)]
/// Classify every item of an OCR lab result
///
/// # Errors
/// Returns `400 Bad Request` if the body cannot be translated into lab items.
#[axum::debug_handler]
async fn triage_labs(
    State(_state): State<AppState>,
    body: String,
) -> Result<Json<TriageReportRes>, HandlerError> {
    let result = parse_lab_result(&body).map_err(|e| bad_request("Lab result", e))?;
    let report = triage_report(&result.items);

    tracing::debug!(
        rows = report.summary.total,
        overall = report.summary.overall().as_str(),
        "triaged lab result"
    );

    Ok(Json(TriageReportRes::from(&report)))
}

#[utoipa::path(
    post,
    path = "/triage/recommendations",
    request_body(
        content = String,
        content_type = "application/json",
        description = "Patient profile with conditions, allergies and lab history"
    ),
    responses(
        (status = 200, description = "Recommended specialties, in rule order", body = RecommendationsRes),
        (status = 400, description = "Body is not a patient profile")
    )
)]
/// Recommend specialties for a patient profile
///
/// An empty list means no rule fired; the client decides whether to show a general-health note.
///
/// # Errors
/// Returns `400 Bad Request` if the body cannot be translated into a profile.
#[axum::debug_handler]
async fn recommend(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<RecommendationsRes>, HandlerError> {
    let profile = parse_profile(&body).map_err(|e| bad_request("Patient profile", e))?;
    let specialties = state.recommender.recommend(&profile);
    Ok(Json(RecommendationsRes { specialties }))
}

#[utoipa::path(
    post,
    path = "/clinics/search",
    request_body(
        content = String,
        content_type = "application/json",
        description = "{ clinics: [...], specialty?: string, query?: string }"
    ),
    responses(
        (status = 200, description = "Matching clinics, in directory order", body = ClinicSearchRes),
        (status = 400, description = "Body is not a clinic search")
    )
)]
/// Filter a clinic directory by specialty and free-text query
///
/// # Errors
/// Returns `400 Bad Request` if the body cannot be translated into a clinic search.
#[axum::debug_handler]
async fn search_clinics(
    State(_state): State<AppState>,
    body: String,
) -> Result<Json<ClinicSearchRes>, HandlerError> {
    let search = parse_clinic_search(&body).map_err(|e| bad_request("Clinic search", e))?;
    let clinics = filter_clinics(&search.clinics, search.specialty.as_deref(), &search.query)
        .into_iter()
        .map(ClinicRes::from)
        .collect();
    Ok(Json(ClinicSearchRes { clinics }))
}
