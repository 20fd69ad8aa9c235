use crate::core::adjacency::{goal_tier, injury_tier, FitTier};
use crate::core::filters::{
    availability_overlap, compare_styles, has_visit_type_overlap, insurance_match, location_match,
    AvailabilityOverlap, InsuranceMatch, LocationMatch, StyleComparison,
};
use crate::models::{PatientInput, ProviderProfile, ScoreBreakdown, ScoringWeights};

/// Logistics split: visit type / insurance / location
const VISIT_TYPE_SHARE: f64 = 0.4;
const INSURANCE_SHARE: f64 = 0.4;
const LOCATION_SHARE: f64 = 0.2;

/// Credit given when the patient picked no availability windows
const NO_AVAILABILITY_CREDIT: f64 = 0.5;

/// Everything the scorer looked at for one (patient, provider) pair.
///
/// Reasons are generated from these same signals so the text can never
/// disagree with the numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSignals {
    pub injury: FitTier,
    pub goal: FitTier,
    pub style: [StyleComparison; 4],
    pub visit_type_match: bool,
    pub insurance: InsuranceMatch,
    pub location: LocationMatch,
    pub availability: AvailabilityOverlap,
}

impl MatchSignals {
    pub fn collect(patient: &PatientInput, provider: &ProviderProfile) -> Self {
        Self {
            injury: injury_tier(patient.injury_area, &provider.injury_expertise),
            goal: goal_tier(patient.goal, &provider.goal_expertise),
            style: compare_styles(patient, provider),
            visit_type_match: has_visit_type_overlap(&patient.visit_types, &provider.visit_types),
            insurance: insurance_match(patient.insurance, &provider.insurance_accepted),
            location: location_match(&patient.location, &provider.city),
            availability: availability_overlap(&patient.availability, &provider.availability),
        }
    }
}

/// Unrounded sub-scores, each in `[0, weight]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitScores {
    pub injury: f64,
    pub goal: f64,
    pub style: f64,
    pub logistics: f64,
    pub availability: f64,
}

impl FitScores {
    pub fn from_signals(signals: &MatchSignals, weights: &ScoringWeights) -> Self {
        Self {
            injury: weights.injury * signals.injury.multiplier(),
            goal: weights.goal * signals.goal.multiplier(),
            style: style_score(&signals.style, weights.style),
            logistics: logistics_score(signals, weights.logistics),
            availability: availability_score(&signals.availability, weights.availability),
        }
    }

    pub fn total(&self) -> f64 {
        self.injury + self.goal + self.style + self.logistics + self.availability
    }

    /// Round for display; the total is rounded from the unrounded sum
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            injury_fit: round_score(self.injury),
            goal_fit: round_score(self.goal),
            style_fit: round_score(self.style),
            logistics_fit: round_score(self.logistics),
            availability_fit: round_score(self.availability),
            total: round_score(self.total()),
        }
    }
}

#[inline]
fn round_score(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Scored pair plus the hard-filter verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub signals: MatchSignals,
    pub scores: FitScores,
    pub breakdown: ScoreBreakdown,
}

impl Evaluation {
    pub fn passes_hard_filter(&self) -> bool {
        self.signals.visit_type_match
    }
}

/// Score one provider for one patient
pub fn evaluate(patient: &PatientInput, provider: &ProviderProfile, weights: &ScoringWeights) -> Evaluation {
    let signals = MatchSignals::collect(patient, provider);
    let scores = FitScores::from_signals(&signals, weights);

    tracing::trace!(
        "Scored {}: injury={:.2} goal={:.2} style={:.2} logistics={:.2} availability={:.2}",
        provider.id,
        scores.injury,
        scores.goal,
        scores.style,
        scores.logistics,
        scores.availability
    );

    Evaluation {
        signals,
        scores,
        breakdown: scores.breakdown(),
    }
}

/// Rounded breakdown and whether the provider survives the visit-type filter
pub fn score(patient: &PatientInput, provider: &ProviderProfile, weights: &ScoringWeights) -> (ScoreBreakdown, bool) {
    let evaluation = evaluate(patient, provider, weights);
    (evaluation.breakdown, evaluation.passes_hard_filter())
}

/// Style fit: weight split evenly across the dials.
///
/// A neutral patient dial earns its full share; otherwise credit decays
/// linearly from full at zero difference to nothing at a difference of 4.
fn style_score(comparisons: &[StyleComparison], max_score: f64) -> f64 {
    if comparisons.is_empty() {
        return 0.0;
    }

    let per_dimension = max_score / comparisons.len() as f64;

    comparisons
        .iter()
        .map(|cmp| {
            if cmp.is_neutral() {
                per_dimension
            } else {
                let ratio = 1.0 - f64::from(cmp.difference()) / 4.0;
                per_dimension * ratio.max(0.0)
            }
        })
        .sum()
}

fn logistics_score(signals: &MatchSignals, max_score: f64) -> f64 {
    let visit = if signals.visit_type_match { max_score * VISIT_TYPE_SHARE } else { 0.0 };
    let insurance = max_score * INSURANCE_SHARE * signals.insurance.multiplier();
    let location = max_score * LOCATION_SHARE * signals.location.multiplier();

    visit + insurance + location
}

fn availability_score(overlap: &AvailabilityOverlap, max_score: f64) -> f64 {
    if overlap.requested == 0 {
        return max_score * NO_AVAILABILITY_CREDIT;
    }

    max_score * overlap.matched as f64 / overlap.requested as f64
}
