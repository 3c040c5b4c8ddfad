// Core algorithm exports
pub mod matching;
pub mod recommender;
pub mod scoring;
pub mod synonyms;

pub use matching::{best_match, match_terms, summarize_skills, MatchTier, SkillMatchSummary};
pub use recommender::{algorithm_info, RecommendationResult, Recommender, MAX_RECOMMENDATIONS, ML_SCORE_MULTIPLIER};
pub use scoring::{confidence_score, score_archetype};
pub use synonyms::are_synonyms;
