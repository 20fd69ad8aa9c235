use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::models::domain::{PatientInput, ScoringWeights, StyleDimension, MAX_STYLE, MIN_STYLE};

/// Request to rank providers for a patient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesRequest {
    #[validate(custom(function = "validate_patient"))]
    pub patient: PatientInput,
    /// Falls back to the configured weights when absent
    #[serde(default)]
    #[validate(custom(function = "validate_weights"))]
    pub weights: Option<ScoringWeights>,
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub session_id: Option<String>,
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Rejects intake records that are not complete enough to score
pub fn validate_patient(patient: &PatientInput) -> Result<(), ValidationError> {
    if patient.location.trim().is_empty() {
        return Err(invalid("location", "location is required"));
    }

    if patient.visit_types.is_empty() {
        return Err(invalid("visit_types", "at least one visit type is required"));
    }

    if !patient.injury_region.belongs_to(patient.injury_area) {
        return Err(invalid(
            "injury_region",
            format!(
                "region '{}' is not part of injury area '{}'",
                patient.injury_region.as_str(),
                patient.injury_area.as_str()
            ),
        ));
    }

    for dimension in StyleDimension::ALL {
        let value = patient.style_preferences.get(dimension);
        if !(MIN_STYLE..=MAX_STYLE).contains(&value) {
            return Err(invalid(
                "style_preferences",
                format!("{} preference must be between {MIN_STYLE} and {MAX_STYLE}, got {value}", dimension.name()),
            ));
        }
    }

    Ok(())
}

pub fn validate_weights(weights: &ScoringWeights) -> Result<(), ValidationError> {
    if !weights.is_valid() {
        return Err(invalid("weights", "weights must be finite and non-negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Goal, InjuryArea, InjuryRegion, InjurySide, Insurance, StylePreferences, VisitType};

    fn create_request() -> FindMatchesRequest {
        FindMatchesRequest {
            patient: PatientInput {
                injury_area: InjuryArea::Shoulder,
                injury_side: InjurySide::Right,
                injury_region: InjuryRegion::Front,
                injury_context: "Hurts when lifting overhead".to_string(),
                goal: Goal::Strengthen,
                style_preferences: StylePreferences::neutral(),
                location: "Oakland, CA 94612".to_string(),
                visit_types: vec![VisitType::InPerson],
                insurance: Insurance::Bcbs,
                availability: vec![],
            },
            weights: None,
            session_id: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_missing_location_rejected() {
        let mut request = create_request();
        request.patient.location = "   ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_visit_types_rejected() {
        let mut request = create_request();
        request.patient.visit_types.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_region_outside_area_rejected() {
        let mut request = create_request();
        request.patient.injury_region = InjuryRegion::Heel;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_style_out_of_range_rejected() {
        let mut request = create_request();
        request.patient.style_preferences.empathy_level = 6;
        assert!(request.validate().is_err());

        request.patient.style_preferences.empathy_level = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_weights_rejected() {
        let mut request = create_request();
        request.weights = Some(ScoringWeights {
            style: -5.0,
            ..ScoringWeights::default()
        });
        assert!(request.validate().is_err());

        // Non-100 sums are allowed
        request.weights = Some(ScoringWeights {
            style: 55.0,
            ..ScoringWeights::default()
        });
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_session_id_rejected() {
        let mut request = create_request();
        request.session_id = Some(String::new());
        assert!(request.validate().is_err());
    }
}
