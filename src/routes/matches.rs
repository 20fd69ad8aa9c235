use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, ProvidersResponse};
use crate::services::{IntakeSubmission, ProviderCatalog, SubmissionStore};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProviderCatalog>,
    pub store: Arc<dyn SubmissionStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/providers", web::get().to(list_providers))
        .route("/providers/{id}", web::get().to(get_provider));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Submission store health check failed: {}", e);
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers: state.catalog.len(),
        store: state.store.backend().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "patient": { "injuryArea": "knee", "goal": "return-to-sport", ... },
///   "weights": { "injury": 30, "goal": 20, "style": 20, "logistics": 20, "availability": 10 },
///   "sessionId": "string"
/// }
/// ```
///
/// An empty `matches` list is a normal answer: no provider offers any of the
/// requested visit types.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request = req.into_inner();
    let weights = request.weights.unwrap_or_else(|| state.matcher.weights());
    let matcher = state.matcher.with_weights(weights);

    let ranking = matcher.rank(&request.patient, state.catalog.providers());

    let session_id = request
        .session_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    tracing::info!(
        "Returning {} matches for session {} ({} of {} providers eligible)",
        ranking.matches.len(),
        session_id,
        ranking.eligible_candidates,
        ranking.total_candidates
    );

    // Persistence never changes the ranking; failures are only logged
    let submission = IntakeSubmission::new(session_id.clone(), request.patient);
    if let Err(e) = state.store.save(&submission).await {
        tracing::warn!("Failed to store intake submission {}: {}", submission.id, e);
    }

    let weight_total = weights.total();

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: ranking.matches,
        session_id,
        weights,
        weight_total,
        weights_sum_to_100: (weight_total - 100.0).abs() < f64::EPSILON,
        total_candidates: ranking.total_candidates,
        eligible_candidates: ranking.eligible_candidates,
    })
}

/// List the provider catalog
///
/// GET /api/v1/providers
async fn list_providers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ProvidersResponse {
        providers: state.catalog.providers(),
        total: state.catalog.len(),
    })
}

/// Get a single provider profile
///
/// GET /api/v1/providers/{id}
async fn get_provider(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(provider) => HttpResponse::Ok().json(provider),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Provider not found".to_string(),
            message: format!("No provider with id {}", id),
            status_code: 404,
        }),
    }
}
