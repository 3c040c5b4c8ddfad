use serde::{Deserialize, Serialize};
use crate::models::domain::BusinessArchetype;
use crate::models::enrichment::{AlgorithmInfo, Recommendation};
use crate::services::AuditRecord;

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub algorithm: AlgorithmInfo,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Per-field detail of a rejected request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.to_string()),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// Audit log listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditListResponse {
    pub success: bool,
    pub count: usize,
    pub records: Vec<AuditRecord>,
}

/// Catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeListResponse {
    pub count: usize,
    pub archetypes: Vec<BusinessArchetype>,
}
