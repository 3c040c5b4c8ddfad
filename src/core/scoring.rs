use crate::core::matching::summarize_skills;
use crate::models::{
    BusinessArchetype, BusinessType, BusinessTypePreference, ExperienceLevel, LocationType, ScoreBreakdown,
    ScoredCandidate, ScoringWeights, UserProfile,
};

/// Lowest confidence ever shown to a user
pub const CONFIDENCE_FLOOR: i64 = 65;
/// Highest confidence ever shown to a user
pub const CONFIDENCE_CEILING: i64 = 98;

const DEFAULT_EXPERIENCE_FACTOR: f64 = 0.75;
const DEFAULT_LOCATION_FACTOR: f64 = 0.9;

/// Score one archetype for a profile
///
/// Scoring formula:
/// score = (
///     skill_score * 0.6 +          # best match per skill, averaged
///     type_score * 0.25 +          # 0.15 when no preference or archetype is "both"
///     experience_factor * 0.1 +    # none 0.6 .. expert 1.0
///     location_factor * 0.05       # urban 1.0, semi-urban 0.9, rural 0.8
/// )
///
/// The returned candidate's `score` is the unmultiplied base score.
pub fn score_archetype<'a>(
    profile: &UserProfile,
    archetype: &'a BusinessArchetype,
    weights: &ScoringWeights,
) -> ScoredCandidate<'a> {
    let skills = summarize_skills(&profile.skills, &archetype.keywords);

    let breakdown = ScoreBreakdown {
        skill: skills.score * weights.skill,
        business_type: business_type_score(profile.business_type_preference, archetype, weights),
        experience: experience_factor(profile.experience) * weights.experience,
        location: location_factor(profile.location) * weights.location,
    };

    let base_score = breakdown.total();

    ScoredCandidate {
        archetype,
        score: base_score,
        confidence_score: confidence_score(base_score, skills.exact_matches, skills.synonym_matches),
        exact_matches: skills.exact_matches,
        synonym_matches: skills.synonym_matches,
        breakdown,
    }
}

/// Weighted business-type alignment
#[inline]
pub fn business_type_score(
    preference: BusinessTypePreference,
    archetype: &BusinessArchetype,
    weights: &ScoringWeights,
) -> f64 {
    match preference.as_business_type() {
        Some(wanted) if wanted == archetype.business_type => weights.business_type,
        None => weights.business_type_partial,
        Some(_) if archetype.business_type == BusinessType::Both => weights.business_type_partial,
        Some(_) => 0.0,
    }
}

/// Experience factor (0-1), 0.75 when the level is unknown
#[inline]
pub fn experience_factor(experience: Option<ExperienceLevel>) -> f64 {
    match experience {
        Some(ExperienceLevel::None) => 0.6,
        Some(ExperienceLevel::Beginner) => 0.75,
        Some(ExperienceLevel::Intermediate) => 0.9,
        Some(ExperienceLevel::Expert) => 1.0,
        None => DEFAULT_EXPERIENCE_FACTOR,
    }
}

/// Location factor (0-1), 0.9 when the location is unknown
#[inline]
pub fn location_factor(location: Option<LocationType>) -> f64 {
    match location {
        Some(LocationType::Urban) => 1.0,
        Some(LocationType::SemiUrban) => 0.9,
        Some(LocationType::Rural) => 0.8,
        None => DEFAULT_LOCATION_FACTOR,
    }
}

/// Display confidence derived from the base score and match counts
///
/// Exact matches add 15 (two or more) or 10 (one); two or more synonym
/// matches add another 8. The result is clamped to [65, 98].
pub fn confidence_score(base_score: f64, exact_matches: usize, synonym_matches: usize) -> u8 {
    let mut confidence = (base_score * 100.0).round() as i64;

    if exact_matches >= 2 {
        confidence += 15;
    } else if exact_matches >= 1 {
        confidence += 10;
    }
    if synonym_matches >= 2 {
        confidence += 8;
    }

    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING) as u8
}
