use serde::{Deserialize, Serialize};

/// Coarse business type tag carried by every archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Goods,
    Service,
    Both,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Goods => "goods",
            BusinessType::Service => "service",
            BusinessType::Both => "both",
        }
    }
}

/// What the user asked for; an empty string on the wire means no preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BusinessTypePreference {
    #[serde(rename = "goods")]
    Goods,
    #[serde(rename = "service")]
    Service,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl BusinessTypePreference {
    /// The archetype type this preference asks for, if any
    pub fn as_business_type(&self) -> Option<BusinessType> {
        match self {
            BusinessTypePreference::Goods => Some(BusinessType::Goods),
            BusinessTypePreference::Service => Some(BusinessType::Service),
            BusinessTypePreference::Unspecified => None,
        }
    }
}

/// Preferred working setup, carried through to the audit log only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkEnvironment {
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "team")]
    Team,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    None,
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    /// Case-insensitive parse; unknown labels yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" => Some(ExperienceLevel::None),
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "expert" => Some(ExperienceLevel::Expert),
            _ => None,
        }
    }
}

/// Kind of place the business would operate in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationType {
    Urban,
    SemiUrban,
    Rural,
}

impl LocationType {
    /// Case-insensitive parse; unknown labels yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "urban" => Some(LocationType::Urban),
            "semi-urban" => Some(LocationType::SemiUrban),
            "rural" => Some(LocationType::Rural),
            _ => None,
        }
    }
}

/// Normalised profile the engine scores against
///
/// Skills are trimmed and lowercased, blank entries are dropped. Categorical
/// fields that did not parse stay `None` and score with the default weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub experience: Option<ExperienceLevel>,
    pub location: Option<LocationType>,
    #[serde(rename = "businessTypePreference")]
    pub business_type_preference: BusinessTypePreference,
}

impl UserProfile {
    pub fn new<S: AsRef<str>>(
        skills: &[S],
        experience: &str,
        location: &str,
        business_type_preference: BusinessTypePreference,
    ) -> Self {
        let skills = skills
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            skills,
            experience: ExperienceLevel::parse(experience),
            location: LocationType::parse(location),
            business_type_preference,
        }
    }
}

/// Catalog entry: one kind of small business that can be recommended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessArchetype {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub business_type: BusinessType,
    pub keywords: Vec<String>,
    pub description: String,
}

/// Weighted per-feature contributions of a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    #[serde(rename = "businessType")]
    pub business_type: f64,
    pub experience: f64,
    pub location: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.skill + self.business_type + self.experience + self.location
    }
}

/// Archetype plus everything scoring learned about it for one profile
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub archetype: &'a BusinessArchetype,
    /// Final ranking score, after any algorithm multiplier
    pub score: f64,
    pub confidence_score: u8,
    pub exact_matches: usize,
    pub synonym_matches: usize,
    pub breakdown: ScoreBreakdown,
}

/// Scoring weights
///
/// `business_type_partial` is the credit awarded when the user has no
/// preference or the archetype covers both goods and services.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub business_type: f64,
    pub business_type_partial: f64,
    pub experience: f64,
    pub location: f64,
}

impl ScoringWeights {
    /// Reduced weighting used when recomputing locally without the service
    pub fn degraded() -> Self {
        Self {
            skill: 0.4,
            business_type: 0.2,
            business_type_partial: 0.2,
            experience: 0.2,
            location: 0.2,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.6,
            business_type: 0.25,
            business_type_partial: 0.15,
            experience: 0.1,
            location: 0.05,
        }
    }
}

/// Which algorithm label the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmMode {
    Ml,
    #[default]
    Rule,
    Fallback,
}

impl AlgorithmMode {
    /// Anything other than `ml` selects the rule-based label
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "ml" => AlgorithmMode::Ml,
            _ => AlgorithmMode::Rule,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmMode::Ml => "ml",
            AlgorithmMode::Rule => "rule",
            AlgorithmMode::Fallback => "fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_normalises_skills() {
        let profile = UserProfile::new(
            &["  Sewing ", "", "EMBROIDERY", "   "],
            "Expert",
            "URBAN",
            BusinessTypePreference::Goods,
        );

        assert_eq!(profile.skills, vec!["sewing", "embroidery"]);
        assert_eq!(profile.experience, Some(ExperienceLevel::Expert));
        assert_eq!(profile.location, Some(LocationType::Urban));
    }

    #[test]
    fn test_unknown_categories_stay_unset() {
        let profile = UserProfile::new(&["cooking"], "guru", "suburban", BusinessTypePreference::Unspecified);

        assert_eq!(profile.experience, None);
        assert_eq!(profile.location, None);
    }

    #[test]
    fn test_semi_urban_parses() {
        assert_eq!(LocationType::parse("Semi-Urban"), Some(LocationType::SemiUrban));
    }

    #[test]
    fn test_algorithm_mode_from_query() {
        assert_eq!(AlgorithmMode::from_query(Some("ml")), AlgorithmMode::Ml);
        assert_eq!(AlgorithmMode::from_query(Some("ML")), AlgorithmMode::Ml);
        assert_eq!(AlgorithmMode::from_query(Some("rule")), AlgorithmMode::Rule);
        assert_eq!(AlgorithmMode::from_query(Some("default")), AlgorithmMode::Rule);
        assert_eq!(AlgorithmMode::from_query(None), AlgorithmMode::Rule);
    }

    #[test]
    fn test_preference_wire_format() {
        let pref: BusinessTypePreference = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(pref, BusinessTypePreference::Unspecified);

        let pref: BusinessTypePreference = serde_json::from_str(r#""goods""#).unwrap();
        assert_eq!(pref.as_business_type(), Some(BusinessType::Goods));

        assert!(serde_json::from_str::<BusinessTypePreference>(r#""both""#).is_err());
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.skill, 0.6);
        assert_eq!(weights.business_type, 0.25);
        assert_eq!(weights.business_type_partial, 0.15);
        assert_eq!(weights.experience, 0.1);
        assert_eq!(weights.location, 0.05);
    }
}
