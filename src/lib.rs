//! Bizmatch Algo - business-idea recommendation service
//!
//! Scores a fixed catalog of small-business archetypes against a user's
//! skills, experience, location and business-type preference, and returns
//! the best matches with supporting guidance attached.

pub mod catalog;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::catalog::{Catalog, CatalogError};
pub use self::core::{Recommender, RecommendationResult};
pub use self::errors::ApiError;
pub use self::models::{AlgorithmMode, Recommendation, RecommendRequest, RecommendResponse, ScoringWeights, UserProfile};
pub use self::services::{AuditLog, RecommendationClient};
