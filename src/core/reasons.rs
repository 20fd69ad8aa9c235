use crate::core::adjacency::FitTier;
use crate::core::filters::InsuranceMatch;
use crate::core::scoring::Evaluation;
use crate::models::{Goal, Insurance, MatchReason, PatientInput, ProviderProfile};

pub const MAX_POSITIVE_REASONS: usize = 3;
pub const MAX_TRADEOFF_REASONS: usize = 1;

/// Style phrases named in the combined style reason
const MAX_STYLE_PHRASES: usize = 2;

/// Build the explanation list for one scored provider.
///
/// Positives come first in fixed priority order (injury, goal, style,
/// insurance), then at most one tradeoff (insurance cost, style gap,
/// availability gap), first one that applies wins.
pub fn explain(patient: &PatientInput, provider: &ProviderProfile, evaluation: &Evaluation) -> Vec<MatchReason> {
    let signals = &evaluation.signals;

    let mut positives = Vec::with_capacity(4);

    if signals.injury == FitTier::Exact {
        positives.push(MatchReason::positive(format!(
            "Specializes in {} injuries",
            patient.injury_area.as_str().replacen('-', "/", 1)
        )));
    }

    if signals.goal == FitTier::Exact {
        positives.push(MatchReason::positive(format!(
            "Experienced with {} goals",
            humanize_goal(patient.goal).to_lowercase()
        )));
    }

    let style_matches: Vec<String> = signals
        .style
        .iter()
        .filter(|cmp| cmp.is_aligned())
        .map(|cmp| format!("{} {}", cmp.patient_label(), cmp.dimension.name()))
        .collect();

    if !style_matches.is_empty() {
        let named = &style_matches[..style_matches.len().min(MAX_STYLE_PHRASES)];
        positives.push(MatchReason::positive(format!(
            "Matches your {} preferences",
            named.join(" and ")
        )));
    }

    if signals.insurance == InsuranceMatch::Exact {
        positives.push(MatchReason::positive(format!(
            "Accepts your {} insurance",
            insurance_code(patient.insurance)
        )));
    }

    positives.truncate(MAX_POSITIVE_REASONS);

    let mut reasons = positives;
    reasons.extend(tradeoff(patient, provider, evaluation).into_iter().take(MAX_TRADEOFF_REASONS));
    reasons
}

fn tradeoff(patient: &PatientInput, provider: &ProviderProfile, evaluation: &Evaluation) -> Option<MatchReason> {
    let signals = &evaluation.signals;

    if signals.insurance != InsuranceMatch::Exact && patient.insurance != Insurance::SelfPay {
        return Some(MatchReason::tradeoff(format!(
            "Does not accept {} - would require self-pay at ${}/session",
            insurance_code(patient.insurance),
            provider.session_rate
        )));
    }

    if let Some(cmp) = signals.style.iter().find(|cmp| cmp.is_mismatch()) {
        return Some(MatchReason::tradeoff(format!(
            "Style difference: prefers {} {} vs your {} preference",
            cmp.provider_label(),
            cmp.dimension.name(),
            cmp.patient_label()
        )));
    }

    let availability = signals.availability;
    if availability.is_partial() {
        return Some(MatchReason::tradeoff(format!(
            "Limited availability overlap ({}/{} time windows match)",
            availability.matched, availability.requested
        )));
    }

    None
}

/// "return-to-sport" -> "Return To Sport"
pub fn humanize_goal(goal: Goal) -> String {
    goal.as_str()
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn insurance_code(insurance: Insurance) -> String {
    insurance.as_str().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::evaluate;
    use crate::models::{
        DayOfWeek, InjuryArea, InjuryRegion, InjurySide, ReasonKind, ScoringWeights, StylePreferences,
        TimeOfDay, TimeWindow, VisitType,
    };

    fn create_test_patient() -> PatientInput {
        PatientInput {
            injury_area: InjuryArea::AnkleFoot,
            injury_side: InjurySide::Both,
            injury_region: InjuryRegion::Heel,
            injury_context: String::new(),
            goal: Goal::ReturnToSport,
            style_preferences: StylePreferences::neutral(),
            location: "Brooklyn, NY 11201".to_string(),
            visit_types: vec![VisitType::InPerson],
            insurance: Insurance::Aetna,
            availability: vec![],
        }
    }

    fn create_test_provider() -> ProviderProfile {
        ProviderProfile {
            id: "pt-2".to_string(),
            name: "Jordan Reyes".to_string(),
            credentials: "PT, DPT, SCS".to_string(),
            clinic_name: String::new(),
            neighborhood: String::new(),
            city: "Brooklyn, NY".to_string(),
            zip_code: "11201".to_string(),
            bio: String::new(),
            approach: vec![],
            specialties: vec![],
            conditions_treated: vec![],
            injury_expertise: vec![InjuryArea::AnkleFoot],
            goal_expertise: vec![Goal::ReturnToSport],
            style_scores: StylePreferences::new(1, 5, 2, 4),
            visit_types: vec![VisitType::InPerson],
            insurance_accepted: vec![Insurance::Aetna],
            availability: vec![TimeWindow::new(DayOfWeek::Sat, TimeOfDay::Am)],
            next_available_slots: vec![],
            session_rate: 165.0,
            reviews: vec![],
            photo_placeholder: String::new(),
        }
    }

    fn explain_pair(patient: &PatientInput, provider: &ProviderProfile) -> Vec<MatchReason> {
        let evaluation = evaluate(patient, provider, &ScoringWeights::default());
        explain(patient, provider, &evaluation)
    }

    #[test]
    fn test_positive_reason_text() {
        let reasons = explain_pair(&create_test_patient(), &create_test_provider());

        assert_eq!(
            reasons,
            vec![
                MatchReason::positive("Specializes in ankle/foot injuries"),
                MatchReason::positive("Experienced with return to sport goals"),
                MatchReason::positive("Accepts your AETNA insurance"),
            ]
        );
    }

    #[test]
    fn test_style_reason_names_first_two_dimensions() {
        let mut patient = create_test_patient();
        patient.style_preferences = StylePreferences::new(1, 5, 1, 5);
        let reasons = explain_pair(&patient, &create_test_provider());

        assert_eq!(
            reasons[2],
            MatchReason::positive("Matches your technical communication and high-energy energy level preferences")
        );
        // Insurance positive is cut by the cap of three
        assert_eq!(reasons.iter().filter(|r| r.is_positive()).count(), 3);
    }

    #[test]
    fn test_insurance_tradeoff_wins() {
        let mut patient = create_test_patient();
        patient.insurance = Insurance::Bcbs;
        patient.style_preferences = StylePreferences::new(5, 3, 3, 3);
        patient.availability = vec![TimeWindow::new(DayOfWeek::Mon, TimeOfDay::Eve)];

        let reasons = explain_pair(&patient, &create_test_provider());
        let tradeoffs: Vec<_> = reasons.iter().filter(|r| r.kind == ReasonKind::Tradeoff).collect();

        assert_eq!(tradeoffs.len(), 1);
        assert_eq!(
            tradeoffs[0].text,
            "Does not accept BCBS - would require self-pay at $165/session"
        );
        assert_eq!(reasons.last().map(|r| r.kind), Some(ReasonKind::Tradeoff));
    }

    #[test]
    fn test_self_pay_patient_gets_no_cost_warning() {
        let mut patient = create_test_patient();
        patient.insurance = Insurance::SelfPay;

        let reasons = explain_pair(&patient, &create_test_provider());
        assert!(reasons.iter().all(|r| r.is_positive()));
    }

    #[test]
    fn test_style_mismatch_tradeoff() {
        let mut patient = create_test_patient();
        patient.style_preferences = StylePreferences::new(5, 3, 3, 3);

        let reasons = explain_pair(&patient, &create_test_provider());
        assert_eq!(
            reasons.last().map(|r| r.text.as_str()),
            Some("Style difference: prefers technical communication vs your simple preference")
        );
    }

    #[test]
    fn test_availability_tradeoff() {
        let mut patient = create_test_patient();
        patient.availability = vec![
            TimeWindow::new(DayOfWeek::Sat, TimeOfDay::Am),
            TimeWindow::new(DayOfWeek::Sun, TimeOfDay::Am),
        ];

        let reasons = explain_pair(&patient, &create_test_provider());
        assert_eq!(
            reasons.last(),
            Some(&MatchReason::tradeoff("Limited availability overlap (1/2 time windows match)"))
        );
    }

    #[test]
    fn test_related_tiers_produce_no_positives() {
        let mut provider = create_test_provider();
        provider.injury_expertise = vec![InjuryArea::Knee];
        provider.goal_expertise = vec![Goal::Strengthen];

        let reasons = explain_pair(&create_test_patient(), &provider);
        assert_eq!(reasons, vec![MatchReason::positive("Accepts your AETNA insurance")]);
    }

    #[test]
    fn test_humanize_goal() {
        assert_eq!(humanize_goal(Goal::ReturnToSport), "Return To Sport");
        assert_eq!(humanize_goal(Goal::PostOpRehab), "Post Op Rehab");
        assert_eq!(humanize_goal(Goal::Strengthen), "Strengthen");
    }
}
