use serde::{Deserialize, Serialize};
use crate::models::domain::{BusinessArchetype, BusinessType};

/// Learning resource shown alongside a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Three-step plan over the first year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestones {
    pub month3: String,
    pub month6: String,
    pub month12: String,
}

/// Indicative financial ranges, display strings only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPlan {
    pub investment: String,
    pub profit_margin: String,
    pub break_even: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational_expense: Option<String>,
    #[serde(rename = "initialSalesVolume")]
    pub initial_sales_volume: String,
    #[serde(rename = "scalingStrategy")]
    pub scaling_strategy: Milestones,
    #[serde(rename = "toolsNeeded")]
    pub tools_needed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub name: String,
    pub location: String,
    pub story: String,
    pub achievement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforcePlan {
    #[serde(rename = "initialTeamSize")]
    pub initial_team_size: u32,
    pub roles: Vec<String>,
    #[serde(rename = "growthPlan")]
    pub growth_plan: Milestones,
    #[serde(rename = "soloTips", default, skip_serializing_if = "Option::is_none")]
    pub solo_tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorFees {
    pub consultation: String,
    pub monthly: String,
    pub package: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorContact {
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorAddress {
    pub city: String,
    pub state: String,
    pub area: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorMode {
    Online,
    Offline,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorAvailability {
    pub mode: MentorMode,
    pub timings: Vec<String>,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub business: String,
    pub feedback: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    #[serde(rename = "profilePic")]
    pub profile_pic: String,
    pub specialization: Vec<String>,
    #[serde(rename = "businessType")]
    pub business_type: BusinessType,
    pub experience: String,
    pub rating: f32,
    #[serde(rename = "totalMentees")]
    pub total_mentees: u32,
    pub fees: MentorFees,
    pub contact: MentorContact,
    pub address: MentorAddress,
    pub availability: MentorAvailability,
    pub languages: Vec<String>,
    pub bio: String,
    pub achievements: Vec<String>,
    pub testimonials: Vec<Testimonial>,
}

/// Static supporting content attached to a recommended archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentBundle {
    pub resources: Vec<Resource>,
    pub financials: FinancialPlan,
    #[serde(rename = "caseStudies")]
    pub case_studies: Vec<CaseStudy>,
    #[serde(rename = "workforcePlan")]
    pub workforce_plan: WorkforcePlan,
    pub mentors: Vec<Mentor>,
    #[serde(rename = "dataSources")]
    pub data_sources: Vec<String>,
}

/// Display-only description of the algorithm that produced a ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub model: String,
    pub features: Vec<String>,
    #[serde(rename = "trainingData")]
    pub training_data: String,
    pub accuracy: String,
}

/// One ranked recommendation as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "businessType")]
    pub business_type: BusinessType,
    #[serde(rename = "confidenceScore")]
    pub confidence_score: u8,
    #[serde(rename = "mlScore")]
    pub ml_score: f64,
    #[serde(flatten)]
    pub enrichment: EnrichmentBundle,
    #[serde(rename = "algorithmInfo")]
    pub algorithm_info: AlgorithmInfo,
}

impl Recommendation {
    pub fn new(
        archetype: &BusinessArchetype,
        confidence_score: u8,
        ml_score: f64,
        enrichment: EnrichmentBundle,
        algorithm_info: AlgorithmInfo,
    ) -> Self {
        Self {
            id: archetype.id.clone(),
            name: archetype.name.clone(),
            description: archetype.description.clone(),
            business_type: archetype.business_type,
            confidence_score,
            ml_score,
            enrichment,
            algorithm_info,
        }
    }
}
