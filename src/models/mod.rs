// Model exports
pub mod domain;
pub mod enrichment;
pub mod requests;
pub mod responses;

pub use domain::{
    AlgorithmMode, BusinessArchetype, BusinessType, BusinessTypePreference, ExperienceLevel,
    LocationType, ScoreBreakdown, ScoredCandidate, ScoringWeights, UserProfile, WorkEnvironment,
};
pub use enrichment::{
    AlgorithmInfo, CaseStudy, EnrichmentBundle, FinancialPlan, Mentor, MentorAddress,
    MentorAvailability, MentorContact, MentorFees, MentorMode, Milestones, Recommendation,
    Resource, Testimonial, WorkforcePlan,
};
pub use requests::{RecommendQuery, RecommendRequest};
pub use responses::{
    ArchetypeListResponse, AuditListResponse, ErrorResponse, FieldError, HealthResponse,
    RecommendResponse,
};
