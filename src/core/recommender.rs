use std::sync::Arc;
use crate::catalog::Catalog;
use crate::core::scoring::score_archetype;
use crate::models::{
    AlgorithmInfo, AlgorithmMode, Recommendation, ScoredCandidate, ScoringWeights, UserProfile,
};

/// Number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Applied to the ranking score (never the confidence) in `ml` mode
pub const ML_SCORE_MULTIPLIER: f64 = 1.1;

const FEATURES: [&str; 4] = [
    "Skill Matching",
    "Experience Level",
    "Location Preference",
    "Business Type Alignment",
];

/// Result of one recommendation run
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub algorithm: AlgorithmInfo,
    pub total_candidates: usize,
}

/// Scores the catalog against a profile and returns the top matches
///
/// # Pipeline Stages
/// 1. Per-archetype weighted score and confidence
/// 2. Algorithm multiplier (ml mode only)
/// 3. Stable sort by score, catalog order breaks ties
/// 4. Truncate and attach enrichment
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn with_default_weights(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, ScoringWeights::default())
    }

    /// Engine for recomputing rankings locally when the service is unreachable
    pub fn degraded(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, ScoringWeights::degraded())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score and sort every archetype in the catalog
    pub fn rank(&self, profile: &UserProfile, mode: AlgorithmMode) -> Vec<ScoredCandidate<'_>> {
        let multiplier = match mode {
            AlgorithmMode::Ml => ML_SCORE_MULTIPLIER,
            AlgorithmMode::Rule | AlgorithmMode::Fallback => 1.0,
        };

        let mut candidates: Vec<ScoredCandidate<'_>> = self
            .catalog
            .archetypes()
            .iter()
            .map(|archetype| {
                let mut candidate = score_archetype(profile, archetype, &self.weights);
                candidate.score *= multiplier;

                tracing::debug!(
                    "Scored {}: score={:.4}, confidence={}, exact={}, synonym={}",
                    archetype.id,
                    candidate.score,
                    candidate.confidence_score,
                    candidate.exact_matches,
                    candidate.synonym_matches
                );

                candidate
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        candidates
    }

    /// Recommend the best archetypes for a profile
    pub fn recommend(&self, profile: &UserProfile, mode: AlgorithmMode) -> RecommendationResult {
        let mut ranked = self.rank(profile, mode);
        let total_candidates = ranked.len();
        ranked.truncate(MAX_RECOMMENDATIONS);

        let algorithm = algorithm_info(mode);

        let recommendations = ranked
            .into_iter()
            .map(|candidate| {
                Recommendation::new(
                    candidate.archetype,
                    candidate.confidence_score,
                    candidate.score,
                    self.catalog.enrichment_for(candidate.archetype),
                    algorithm.clone(),
                )
            })
            .collect();

        RecommendationResult {
            recommendations,
            algorithm,
            total_candidates,
        }
    }
}

/// Display descriptor for an algorithm mode
pub fn algorithm_info(mode: AlgorithmMode) -> AlgorithmInfo {
    let (model, training_data, accuracy) = match mode {
        AlgorithmMode::Ml => (
            "Machine Learning Model",
            "Business Profiles and Success Stories",
            "85-92%",
        ),
        AlgorithmMode::Rule => (
            "Rule-based Algorithm",
            "Business Profiles and Success Stories",
            "75-85%",
        ),
        AlgorithmMode::Fallback => (
            "Rule-based Fallback",
            "Business Profiles",
            "Based on user input matching",
        ),
    };

    AlgorithmInfo {
        model: model.to_string(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
        training_data: training_data.to_string(),
        accuracy: accuracy.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessTypePreference;

    fn recommender() -> Recommender {
        Recommender::with_default_weights(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_returns_three() {
        let profile = UserProfile::new(&["cooking"], "beginner", "urban", BusinessTypePreference::Goods);
        let result = recommender().recommend(&profile, AlgorithmMode::Rule);

        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result.total_candidates, Catalog::builtin().len());
    }

    #[test]
    fn test_sorted_by_score() {
        let profile = UserProfile::new(&["teaching", "communication"], "intermediate", "semi-urban", BusinessTypePreference::Service);
        let engine = recommender();
        let ranked = engine.rank(&profile, AlgorithmMode::Rule);

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ml_multiplier_only_touches_score() {
        let profile = UserProfile::new(&["baking"], "expert", "urban", BusinessTypePreference::Goods);
        let engine = recommender();

        let rule = engine.rank(&profile, AlgorithmMode::Rule);
        let ml = engine.rank(&profile, AlgorithmMode::Ml);

        for (r, m) in rule.iter().zip(ml.iter()) {
            assert_eq!(r.archetype.id, m.archetype.id);
            assert!((m.score - r.score * ML_SCORE_MULTIPLIER).abs() < 1e-9);
            assert_eq!(r.confidence_score, m.confidence_score);
        }
    }

    #[test]
    fn test_algorithm_info_labels() {
        assert_eq!(algorithm_info(AlgorithmMode::Ml).accuracy, "85-92%");
        assert_eq!(algorithm_info(AlgorithmMode::Rule).accuracy, "75-85%");
        assert_eq!(algorithm_info(AlgorithmMode::Fallback).model, "Rule-based Fallback");
        assert_eq!(algorithm_info(AlgorithmMode::Rule).features.len(), 4);
    }

    #[test]
    fn test_degraded_uses_reduced_weights() {
        let engine = Recommender::degraded(Arc::new(Catalog::builtin()));
        assert_eq!(engine.weights().skill, 0.4);

        let profile = UserProfile::new(&["sewing"], "expert", "urban", BusinessTypePreference::Goods);
        let result = engine.recommend(&profile, AlgorithmMode::Fallback);

        assert_eq!(result.recommendations[0].id, "tailoring");
        assert_eq!(result.algorithm.model, "Rule-based Fallback");
    }
}
