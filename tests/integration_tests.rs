// Integration tests for Bizmatch Algo

use bizmatch_algo::catalog::Catalog;
use bizmatch_algo::core::{Recommender, ML_SCORE_MULTIPLIER};
use bizmatch_algo::models::{
    AlgorithmMode, BusinessArchetype, BusinessType, BusinessTypePreference, ScoredCandidate,
    UserProfile,
};
use std::collections::HashMap;
use std::sync::Arc;

fn engine() -> Recommender {
    Recommender::with_default_weights(Arc::new(Catalog::builtin()))
}

fn archetype(id: &str, business_type: BusinessType, keywords: &[&str]) -> BusinessArchetype {
    BusinessArchetype {
        id: id.to_string(),
        name: format!("{} business", id),
        business_type,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: String::new(),
    }
}

fn score_of(ranked: &[ScoredCandidate<'_>], id: &str) -> f64 {
    ranked
        .iter()
        .find(|c| c.archetype.id == id)
        .map(|c| c.score)
        .unwrap()
}

fn sample_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::new(&["sewing", "embroidery"], "expert", "urban", BusinessTypePreference::Goods),
        UserProfile::new::<&str>(&[], "none", "rural", BusinessTypePreference::Unspecified),
        UserProfile::new(&["Teaching", "communication", "patience"], "intermediate", "semi-urban", BusinessTypePreference::Service),
        UserProfile::new(&["baking", "cooking", "decoration"], "beginner", "urban", BusinessTypePreference::Goods),
        UserProfile::new(&["social media", "photography", "editing"], "unknown", "mars", BusinessTypePreference::Service),
        UserProfile::new(&["welding"], "", "", BusinessTypePreference::Goods),
    ]
}

#[test]
fn test_integration_sewing_profile_ranks_tailoring_first() {
    let profile = UserProfile::new(&["sewing", "embroidery"], "expert", "urban", BusinessTypePreference::Goods);

    let result = engine().recommend(&profile, AlgorithmMode::Rule);

    let top = &result.recommendations[0];
    assert_eq!(top.id, "tailoring");
    assert!(top.confidence_score >= 80);
    assert!((top.ml_score - 1.0).abs() < 1e-9);
    assert_eq!(top.enrichment.mentors[0].id, "mentor_tailoring_001");
}

#[test]
fn test_integration_empty_profile_hits_confidence_floor() {
    let profile = UserProfile::new::<&str>(&[], "none", "rural", BusinessTypePreference::Unspecified);

    let result = engine().recommend(&profile, AlgorithmMode::Rule);

    assert_eq!(result.recommendations.len(), 3);
    for rec in &result.recommendations {
        assert_eq!(rec.confidence_score, 65);
        assert!((rec.ml_score - 0.25).abs() < 1e-9);
    }

    // All scores tie, so catalog order decides
    let ids: Vec<_> = result.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["tailoring", "cooking", "handicrafts"]);
}

#[test]
fn test_integration_deterministic() {
    let engine = engine();

    for profile in sample_profiles() {
        let first = engine.recommend(&profile, AlgorithmMode::Rule);
        let second = engine.recommend(&profile, AlgorithmMode::Rule);
        assert_eq!(first.recommendations, second.recommendations);
    }
}

#[test]
fn test_integration_confidence_bounds() {
    let engine = engine();

    for profile in sample_profiles() {
        for mode in [AlgorithmMode::Rule, AlgorithmMode::Ml] {
            for candidate in engine.rank(&profile, mode) {
                assert!((65..=98).contains(&candidate.confidence_score));
            }
        }
    }
}

#[test]
fn test_integration_ml_and_rule_share_order() {
    let engine = engine();

    for profile in sample_profiles() {
        let rule = engine.recommend(&profile, AlgorithmMode::Rule);
        let ml = engine.recommend(&profile, AlgorithmMode::Ml);

        for (r, m) in rule.recommendations.iter().zip(&ml.recommendations) {
            assert_eq!(r.id, m.id);
            assert_eq!(r.confidence_score, m.confidence_score);
            assert!((m.ml_score - r.ml_score * ML_SCORE_MULTIPLIER).abs() < 1e-9);
        }
        assert_eq!(ml.algorithm.accuracy, "85-92%");
        assert_eq!(rule.algorithm.accuracy, "75-85%");
    }
}

#[test]
fn test_integration_adding_exact_skill_never_lowers_score() {
    let engine = engine();
    let base = UserProfile::new(&["welding", "driving"], "beginner", "urban", BusinessTypePreference::Goods);

    for archetype in engine.catalog().archetypes() {
        let mut skills = base.skills.clone();
        skills.push(archetype.keywords[0].clone());
        let extended = UserProfile { skills, ..base.clone() };

        let before = engine.rank(&base, AlgorithmMode::Rule);
        let after = engine.rank(&extended, AlgorithmMode::Rule);

        assert!(
            score_of(&after, &archetype.id) >= score_of(&before, &archetype.id),
            "{}",
            archetype.id
        );
    }
}

#[test]
fn test_integration_cardinality_follows_small_catalog() {
    let catalog = Catalog::new(
        vec![
            archetype("pottery", BusinessType::Goods, &["pottery"]),
            archetype("yoga", BusinessType::Service, &["yoga"]),
        ],
        HashMap::new(),
    )
    .unwrap();
    let engine = Recommender::with_default_weights(Arc::new(catalog));

    let profile = UserProfile::new(&["yoga"], "expert", "urban", BusinessTypePreference::Service);
    let result = engine.recommend(&profile, AlgorithmMode::Rule);

    assert_eq!(result.recommendations.len(), 2);
    assert_eq!(result.recommendations[0].id, "yoga");
    // No stored enrichment, so the generic bundle is attached
    assert_eq!(result.recommendations[0].enrichment.resources[0].title, "yoga business Course");
}

#[test]
fn test_integration_ties_keep_catalog_order() {
    let catalog = Catalog::new(
        vec![
            archetype("first", BusinessType::Goods, &["knitting"]),
            archetype("second", BusinessType::Goods, &["knitting"]),
            archetype("third", BusinessType::Goods, &["knitting"]),
            archetype("fourth", BusinessType::Goods, &["knitting"]),
        ],
        HashMap::new(),
    )
    .unwrap();
    let engine = Recommender::with_default_weights(Arc::new(catalog));

    let profile = UserProfile::new(&["knitting"], "expert", "urban", BusinessTypePreference::Goods);
    let result = engine.recommend(&profile, AlgorithmMode::Ml);

    let ids: Vec<_> = result.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn test_integration_degraded_engine() {
    let engine = Recommender::degraded(Arc::new(Catalog::builtin()));
    let profile = UserProfile::new(&["teaching", "education"], "expert", "urban", BusinessTypePreference::Service);

    let result = engine.recommend(&profile, AlgorithmMode::Fallback);

    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(result.algorithm.model, "Rule-based Fallback");
    assert_eq!(result.recommendations[0].id, "tutoring");
}

#[test]
fn test_integration_catalog_from_json_file() {
    let path = std::env::temp_dir().join(format!("bizmatch-catalog-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"archetypes":[{"id":"candles","name":"Candle Making","type":"goods","keywords":["Candles","wax"],"description":"Scented candles"}]}"#,
    )
    .unwrap();

    let catalog = Catalog::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let engine = Recommender::with_default_weights(Arc::new(catalog));
    let profile = UserProfile::new(&["candles"], "beginner", "rural", BusinessTypePreference::Goods);
    let result = engine.recommend(&profile, AlgorithmMode::Rule);

    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(result.recommendations[0].id, "candles");
    assert!(result.recommendations[0].confidence_score >= 90);
}
