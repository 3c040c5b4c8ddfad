// Service exports
pub mod audit;
pub mod client;

pub use audit::{AuditError, AuditLog, AuditRecord, NewAuditRecord};
pub use client::{ClientError, ClientOutcome, OutcomeSource, RecommendationClient};
