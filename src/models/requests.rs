use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};
use crate::models::domain::{BusinessTypePreference, UserProfile, WorkEnvironment};
use crate::models::responses::FieldError;

const MAX_SKILL_LENGTH: usize = 100;

/// Request to recommend business ideas for a profile
///
/// `education` and `workEnvironment` are accepted and audited but do not
/// influence scoring.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(max = 50), custom(function = "validate_skills"))]
    pub skills: Vec<String>,
    #[validate(length(max = 32))]
    pub experience: String,
    #[validate(length(max = 32))]
    pub location: String,
    #[validate(length(max = 64))]
    pub education: String,
    #[serde(rename = "businessType")]
    pub business_type: BusinessTypePreference,
    #[serde(rename = "workEnvironment")]
    pub work_environment: WorkEnvironment,
}

impl RecommendRequest {
    /// Decode a request body field by field
    ///
    /// Every missing or mistyped field is reported, not just the first one.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError {
                field: None,
                code: "invalid_type".to_string(),
                message: "request body must be a JSON object".to_string(),
            }]);
        };

        let mut errors = Vec::new();

        let skills = required_field(object, "skills", &mut errors);
        let experience = required_field(object, "experience", &mut errors);
        let location = required_field(object, "location", &mut errors);
        let education = required_field(object, "education", &mut errors);
        let business_type = required_field(object, "businessType", &mut errors);
        let work_environment = required_field(object, "workEnvironment", &mut errors);

        match (skills, experience, location, education, business_type, work_environment) {
            (Some(skills), Some(experience), Some(location), Some(education), Some(business_type), Some(work_environment)) => {
                Ok(Self {
                    skills,
                    experience,
                    location,
                    education,
                    business_type,
                    work_environment,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn to_profile(&self) -> UserProfile {
        UserProfile::new(
            &self.skills,
            &self.experience,
            &self.location,
            self.business_type,
        )
    }
}

fn required_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match object.get(name) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(name, "required", format!("{} is required", name)));
            None
        }
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                errors.push(FieldError::new(name, "invalid_type", e.to_string()));
                None
            }
        },
    }
}

fn validate_skills(skills: &[String]) -> Result<(), ValidationError> {
    if skills.iter().any(|s| s.chars().count() > MAX_SKILL_LENGTH) {
        let mut err = ValidationError::new("skill_too_long");
        err.message = Some(format!("each skill must be at most {} characters", MAX_SKILL_LENGTH).into());
        return Err(err);
    }
    Ok(())
}

/// Query string of the recommend endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendQuery {
    pub algorithm: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(skills: Vec<String>) -> RecommendRequest {
        RecommendRequest {
            skills,
            experience: "beginner".to_string(),
            location: "urban".to_string(),
            education: "graduate".to_string(),
            business_type: BusinessTypePreference::Service,
            work_environment: WorkEnvironment::Solo,
        }
    }

    #[test]
    fn test_valid_request() {
        let req = request(vec!["Teaching".to_string()]);
        assert!(req.validate().is_ok());

        let profile = req.to_profile();
        assert_eq!(profile.skills, vec!["teaching"]);
        assert_eq!(profile.business_type_preference, BusinessTypePreference::Service);
    }

    #[test]
    fn test_empty_skills_are_valid() {
        assert!(request(vec![]).validate().is_ok());
    }

    #[test]
    fn test_overlong_skill_rejected() {
        let req = request(vec!["x".repeat(MAX_SKILL_LENGTH + 1)]);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("skills"));
    }

    #[test]
    fn test_too_many_skills_rejected() {
        let req = request((0..51).map(|i| format!("skill {}", i)).collect());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "skills": ["Sewing"],
            "experience": "expert",
            "location": "urban",
            "education": "12th",
            "businessType": "goods",
            "workEnvironment": ""
        }"#;

        let req: RecommendRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.business_type, BusinessTypePreference::Goods);
        assert_eq!(req.work_environment, WorkEnvironment::Unspecified);
    }

    #[test]
    fn test_from_json_reports_every_missing_field() {
        let errors = RecommendRequest::from_json(&serde_json::json!({ "location": "urban" })).unwrap_err();

        let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, vec!["skills", "experience", "education", "businessType", "workEnvironment"]);
        assert!(errors.iter().all(|e| e.code == "required"));
    }

    #[test]
    fn test_from_json_reports_mistyped_fields() {
        let body = serde_json::json!({
            "skills": "sewing",
            "experience": "expert",
            "location": 3,
            "education": "",
            "businessType": "both",
            "workEnvironment": "remote"
        });

        let errors = RecommendRequest::from_json(&body).unwrap_err();
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, vec!["skills", "location", "businessType", "workEnvironment"]);
        assert!(errors.iter().all(|e| e.code == "invalid_type"));
    }

    #[test]
    fn test_from_json_accepts_valid_body() {
        let body = serde_json::json!({
            "skills": ["Sewing"],
            "experience": "expert",
            "location": "urban",
            "education": "",
            "businessType": "",
            "workEnvironment": "team"
        });

        let req = RecommendRequest::from_json(&body).unwrap();
        assert_eq!(req.business_type, BusinessTypePreference::Unspecified);
        assert_eq!(req.work_environment, WorkEnvironment::Team);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let errors = RecommendRequest::from_json(&serde_json::json!(["sewing"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].field.is_none());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{ "experience": "expert", "location": "urban" }"#;
        assert!(serde_json::from_str::<RecommendRequest>(json).is_err());
    }
}
