use crate::models::{Goal, InjuryArea};

/// Match quality for injury and goal fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitTier {
    /// Provider treats exactly what the patient asked for
    Exact,
    /// Provider treats a neighbouring area or goal
    Related,
    /// No exact or related match; baseline credit
    Baseline,
}

impl FitTier {
    /// Share of the configured weight awarded for this tier
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            FitTier::Exact => 1.0,
            FitTier::Related => 0.5,
            FitTier::Baseline => 0.2,
        }
    }
}

/// Areas treated as related to `area`.
///
/// Each area lists its own neighbours; the table is not derived by symmetry.
pub fn related_injury_areas(area: InjuryArea) -> &'static [InjuryArea] {
    match area {
        InjuryArea::Neck => &[InjuryArea::Back, InjuryArea::Shoulder],
        InjuryArea::Shoulder => &[InjuryArea::Neck, InjuryArea::WristHand],
        InjuryArea::Back => &[InjuryArea::Hip, InjuryArea::Neck],
        InjuryArea::Hip => &[InjuryArea::Back, InjuryArea::Knee],
        InjuryArea::Knee => &[InjuryArea::Hip, InjuryArea::AnkleFoot],
        InjuryArea::AnkleFoot => &[InjuryArea::Knee],
        InjuryArea::WristHand => &[InjuryArea::Shoulder],
    }
}

pub fn related_goals(goal: Goal) -> &'static [Goal] {
    match goal {
        Goal::ReturnToSport => &[Goal::Strengthen],
        Goal::Strengthen => &[Goal::ReturnToSport, Goal::PostureMobility],
        Goal::ReducePain => &[Goal::PostureMobility],
        Goal::PostureMobility => &[Goal::ReducePain, Goal::Strengthen],
        Goal::PostOpRehab => &[Goal::Strengthen, Goal::ReturnToSport],
    }
}

/// Classify `offered` against the wanted value and its related set
#[inline]
pub fn classify<T: PartialEq>(wanted: &T, offered: &[T], related: &[T]) -> FitTier {
    if offered.contains(wanted) {
        FitTier::Exact
    } else if related.iter().any(|r| offered.contains(r)) {
        FitTier::Related
    } else {
        FitTier::Baseline
    }
}

pub fn injury_tier(area: InjuryArea, expertise: &[InjuryArea]) -> FitTier {
    classify(&area, expertise, related_injury_areas(area))
}

pub fn goal_tier(goal: Goal, expertise: &[Goal]) -> FitTier {
    classify(&goal, expertise, related_goals(goal))
}
