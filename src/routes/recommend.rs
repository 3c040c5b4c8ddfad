use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::Recommender;
use crate::errors::ApiError;
use crate::models::{
    AlgorithmMode, ArchetypeListResponse, AuditListResponse, HealthResponse, RecommendQuery,
    RecommendRequest, RecommendResponse,
};
use crate::services::{AuditLog, NewAuditRecord};
use serde_json::Value;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub audit: Arc<AuditLog>,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender,
            audit: Arc::new(AuditLog::new()),
        }
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/recommendations", web::get().to(list_recommendations))
        .route("/archetypes", web::get().to(list_archetypes));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.recommender.catalog().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend endpoint
///
/// POST /api/v1/recommend?algorithm=ml|rule
///
/// Request body:
/// ```json
/// {
///   "skills": ["sewing", "embroidery"],
///   "experience": "expert",
///   "location": "urban",
///   "education": "graduate",
///   "businessType": "goods",
///   "workEnvironment": "solo"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    query: web::Query<RecommendQuery>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let req = RecommendRequest::from_json(&body).map_err(|details| {
        tracing::info!("Rejected recommend request: {} invalid fields", details.len());
        ApiError::InvalidFields(details)
    })?;

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let request_id = uuid::Uuid::new_v4();
    let mode = AlgorithmMode::from_query(query.algorithm.as_deref());
    // Audit keeps the selector exactly as the caller sent it
    let requested = query.algorithm.as_deref().unwrap_or(mode.as_str());

    let profile = req.to_profile();

    tracing::info!(
        "Recommending for request {}: {} skills, mode={}",
        request_id,
        profile.skills.len(),
        mode.as_str()
    );

    let result = state.recommender.recommend(&profile, mode);

    let record = NewAuditRecord::from_parts(&req, requested, &result.recommendations)?;
    let stored = state.audit.append(record).await;

    tracing::info!(
        "Returning {} recommendations for request {} (from {} candidates, audit id {})",
        result.recommendations.len(),
        request_id,
        result.total_candidates,
        stored.id
    );

    Ok(HttpResponse::Ok().json(RecommendResponse {
        success: true,
        recommendations: result.recommendations,
        algorithm: result.algorithm,
    }))
}

/// Audit listing endpoint
///
/// GET /api/v1/recommendations
async fn list_recommendations(state: web::Data<AppState>) -> HttpResponse {
    let records = state.audit.list_all().await;

    HttpResponse::Ok().json(AuditListResponse {
        success: true,
        count: records.len(),
        records,
    })
}

/// Catalog listing endpoint, without enrichment
///
/// GET /api/v1/archetypes
async fn list_archetypes(state: web::Data<AppState>) -> HttpResponse {
    let archetypes = state.recommender.catalog().archetypes().to_vec();

    HttpResponse::Ok().json(ArchetypeListResponse {
        count: archetypes.len(),
        archetypes,
    })
}
