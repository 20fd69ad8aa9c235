// Unit tests for AlignPT matching

use alignpt_match::core::{
    adjacency::{goal_tier, injury_tier, FitTier},
    filters::{availability_overlap, has_visit_type_overlap, insurance_match, location_match, InsuranceMatch, LocationMatch},
    reasons::humanize_goal,
};
use alignpt_match::models::{
    DayOfWeek, FindMatchesRequest, Goal, InjuryArea, InjuryRegion, Insurance, PatientInput, ScoringWeights,
    TimeOfDay, TimeWindow, VisitType,
};
use validator::Validate;

#[test]
fn test_injury_adjacency_pairs() {
    assert_eq!(injury_tier(InjuryArea::Neck, &[InjuryArea::Neck]), FitTier::Exact);
    assert_eq!(injury_tier(InjuryArea::Neck, &[InjuryArea::Back]), FitTier::Related);
    assert_eq!(injury_tier(InjuryArea::Neck, &[InjuryArea::Shoulder]), FitTier::Related);
    assert_eq!(injury_tier(InjuryArea::AnkleFoot, &[InjuryArea::Hip]), FitTier::Baseline);
    assert_eq!(injury_tier(InjuryArea::WristHand, &[]), FitTier::Baseline);
}

#[test]
fn test_adjacency_is_listed_per_key() {
    // Injury pairs are listed from both sides
    assert_eq!(injury_tier(InjuryArea::Back, &[InjuryArea::Hip]), FitTier::Related);
    assert_eq!(injury_tier(InjuryArea::Hip, &[InjuryArea::Back]), FitTier::Related);
    assert_eq!(injury_tier(InjuryArea::AnkleFoot, &[InjuryArea::Hip]), FitTier::Baseline);

    // post-op rehab lists return to sport, but not the other way round
    assert_eq!(goal_tier(Goal::PostOpRehab, &[Goal::ReturnToSport]), FitTier::Related);
    assert_eq!(goal_tier(Goal::ReturnToSport, &[Goal::PostOpRehab]), FitTier::Baseline);
}

#[test]
fn test_tier_multipliers() {
    assert_eq!(FitTier::Exact.multiplier(), 1.0);
    assert_eq!(FitTier::Related.multiplier(), 0.5);
    assert_eq!(FitTier::Baseline.multiplier(), 0.2);
}

#[test]
fn test_visit_type_overlap() {
    assert!(has_visit_type_overlap(
        &[VisitType::InPerson, VisitType::AtHome],
        &[VisitType::AtHome]
    ));
    assert!(!has_visit_type_overlap(&[VisitType::InPerson], &[VisitType::Telehealth]));
    assert!(!has_visit_type_overlap(&[], &VisitType::ALL));
}

#[test]
fn test_insurance_match_levels() {
    let accepted = [Insurance::Aetna, Insurance::SelfPay];

    assert_eq!(insurance_match(Insurance::Aetna, &accepted), InsuranceMatch::Exact);
    assert_eq!(insurance_match(Insurance::SelfPay, &accepted), InsuranceMatch::Exact);
    assert_eq!(insurance_match(Insurance::United, &accepted), InsuranceMatch::SelfPay);
    assert_eq!(insurance_match(Insurance::United, &[Insurance::Bcbs]), InsuranceMatch::None);
}

#[test]
fn test_location_city_match() {
    assert_eq!(location_match("Brooklyn, NY 11201", "Brooklyn, NY"), LocationMatch::City);
    assert_eq!(location_match("brooklyn", "Brooklyn, NY"), LocationMatch::City);
    assert_eq!(location_match("BROOKLYN HEIGHTS", "Brooklyn, NY"), LocationMatch::City);
}

#[test]
fn test_location_state_match() {
    assert_eq!(location_match("Queens, NY", "Brooklyn, NY"), LocationMatch::State);
    // State codes are compared as written
    assert_eq!(location_match("queens, ny", "Brooklyn, NY"), LocationMatch::None);
}

#[test]
fn test_location_without_state_gets_state_credit() {
    assert_eq!(location_match("Queens, NY", "Brooklyn"), LocationMatch::State);
    assert_eq!(location_match("Queens, NY", "Brooklyn, "), LocationMatch::State);
    assert_eq!(location_match("Queens, NY", "Brooklyn, NJ"), LocationMatch::None);
}

#[test]
fn test_availability_overlap_counts() {
    let patient = [
        TimeWindow::new(DayOfWeek::Mon, TimeOfDay::Am),
        TimeWindow::new(DayOfWeek::Tue, TimeOfDay::Pm),
        TimeWindow::new(DayOfWeek::Sat, TimeOfDay::Eve),
    ];
    let provider = [
        TimeWindow::new(DayOfWeek::Mon, TimeOfDay::Am),
        TimeWindow::new(DayOfWeek::Sat, TimeOfDay::Eve),
        TimeWindow::new(DayOfWeek::Sun, TimeOfDay::Am),
    ];

    let overlap = availability_overlap(&patient, &provider);
    assert_eq!(overlap.matched, 2);
    assert_eq!(overlap.requested, 3);
    assert!(overlap.is_partial());

    let none_requested = availability_overlap(&[], &provider);
    assert!(!none_requested.is_partial());
}

#[test]
fn test_humanize_goal() {
    assert_eq!(humanize_goal(Goal::ReturnToSport), "Return To Sport");
    assert_eq!(humanize_goal(Goal::PostOpRehab), "Post Op Rehab");
    assert_eq!(humanize_goal(Goal::Strengthen), "Strengthen");
}

#[test]
fn test_patient_rejects_unknown_values() {
    let json = r#"{
        "injuryArea": "elbow",
        "injurySide": "left",
        "injuryRegion": "front",
        "goal": "strengthen",
        "location": "Denver, CO",
        "visitTypes": ["in-person"],
        "insurance": "aetna"
    }"#;

    assert!(serde_json::from_str::<PatientInput>(json).is_err());
}

#[test]
fn test_request_validation() {
    let json = r#"{
        "patient": {
            "injuryArea": "knee",
            "injurySide": "left",
            "injuryRegion": "upper-neck",
            "goal": "strengthen",
            "location": "Denver, CO",
            "visitTypes": ["in-person"],
            "insurance": "aetna"
        }
    }"#;

    let mut request: FindMatchesRequest = serde_json::from_str(json).unwrap();
    // Region from a different area
    assert!(request.validate().is_err());

    request.patient.injury_region = InjuryRegion::FrontKneecap;
    assert!(request.validate().is_ok());

    request.weights = Some(ScoringWeights {
        injury: -1.0,
        ..ScoringWeights::default()
    });
    assert!(request.validate().is_err());
}
