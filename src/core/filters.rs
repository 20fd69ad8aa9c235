use crate::models::{Insurance, PatientInput, ProviderProfile, StyleDimension, TimeWindow, VisitType, NEUTRAL_STYLE};

/// Hard filter: the provider offers at least one visit type the patient accepts.
///
/// Providers failing this never reach the ranked output.
#[inline]
pub fn has_visit_type_overlap(patient_types: &[VisitType], provider_types: &[VisitType]) -> bool {
    patient_types.iter().any(|t| provider_types.contains(t))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceMatch {
    /// Provider accepts the patient's plan
    Exact,
    /// No exact match, but one side is self-pay
    SelfPay,
    None,
}

impl InsuranceMatch {
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            InsuranceMatch::Exact => 1.0,
            InsuranceMatch::SelfPay => 0.3,
            InsuranceMatch::None => 0.0,
        }
    }
}

pub fn insurance_match(patient: Insurance, accepted: &[Insurance]) -> InsuranceMatch {
    if accepted.contains(&patient) {
        InsuranceMatch::Exact
    } else if accepted.contains(&Insurance::SelfPay) || patient == Insurance::SelfPay {
        InsuranceMatch::SelfPay
    } else {
        InsuranceMatch::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    City,
    State,
    None,
}

impl LocationMatch {
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            LocationMatch::City => 1.0,
            LocationMatch::State => 0.5,
            LocationMatch::None => 0.0,
        }
    }
}

/// State abbreviation of a "City, ST" field, if it has one
pub fn provider_state(city: &str) -> Option<&str> {
    city.split(',')
        .nth(1)
        .map(str::trim)
        .filter(|state| !state.is_empty())
}

/// Text heuristic for "is this provider near the patient".
///
/// City match: the provider's city field contains the patient's location, or
/// the patient's location contains the provider's city name (case-insensitive).
/// State match: the patient's location contains the provider's state code.
/// A provider with no state segment always gets state credit.
pub fn location_match(patient_location: &str, provider_city: &str) -> LocationMatch {
    let location = patient_location.to_lowercase();
    let city = provider_city.to_lowercase();
    let city_name = city.split(',').next().unwrap_or_default();

    if city.contains(&location) || location.contains(city_name) {
        return LocationMatch::City;
    }

    match provider_state(provider_city) {
        Some(state) if !patient_location.contains(state) => LocationMatch::None,
        _ => LocationMatch::State,
    }
}

/// How many of the patient's windows the provider also offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityOverlap {
    pub matched: usize,
    pub requested: usize,
}

impl AvailabilityOverlap {
    /// Patient picked windows and the provider misses at least one of them
    pub fn is_partial(&self) -> bool {
        self.requested > 0 && self.matched < self.requested
    }
}

pub fn availability_overlap(patient: &[TimeWindow], provider: &[TimeWindow]) -> AvailabilityOverlap {
    let matched = patient.iter().filter(|window| provider.contains(window)).count();

    AvailabilityOverlap {
        matched,
        requested: patient.len(),
    }
}

/// Patient dial vs provider dial for one style dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleComparison {
    pub dimension: StyleDimension,
    pub patient: u8,
    pub provider: u8,
}

impl StyleComparison {
    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.patient == NEUTRAL_STYLE
    }

    #[inline]
    pub fn difference(&self) -> u8 {
        self.patient.abs_diff(self.provider)
    }

    /// Patient stated a preference and the provider is within one step of it
    pub fn is_aligned(&self) -> bool {
        !self.is_neutral() && self.difference() <= 1
    }

    pub fn is_mismatch(&self) -> bool {
        !self.is_neutral() && self.difference() >= 3
    }

    /// Label of the side of the dial the patient leans towards
    pub fn patient_label(&self) -> &'static str {
        if self.patient < NEUTRAL_STYLE {
            self.dimension.low_label()
        } else {
            self.dimension.high_label()
        }
    }

    pub fn provider_label(&self) -> &'static str {
        if self.provider <= 2 {
            self.dimension.low_label()
        } else if self.provider >= 4 {
            self.dimension.high_label()
        } else {
            "balanced"
        }
    }
}

pub fn compare_styles(patient: &PatientInput, provider: &ProviderProfile) -> [StyleComparison; 4] {
    StyleDimension::ALL.map(|dimension| StyleComparison {
        dimension,
        patient: patient.style_preferences.get(dimension),
        provider: provider.style_scores.get(dimension),
    })
}
