use serde::{Deserialize, Serialize};
use std::fmt;

/// Body region the patient reports pain or injury in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryArea {
    Neck,
    Shoulder,
    Back,
    Hip,
    Knee,
    AnkleFoot,
    WristHand,
}

impl InjuryArea {
    pub const ALL: [InjuryArea; 7] = [
        InjuryArea::Neck,
        InjuryArea::Shoulder,
        InjuryArea::Back,
        InjuryArea::Hip,
        InjuryArea::Knee,
        InjuryArea::AnkleFoot,
        InjuryArea::WristHand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryArea::Neck => "neck",
            InjuryArea::Shoulder => "shoulder",
            InjuryArea::Back => "back",
            InjuryArea::Hip => "hip",
            InjuryArea::Knee => "knee",
            InjuryArea::AnkleFoot => "ankle-foot",
            InjuryArea::WristHand => "wrist-hand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InjuryArea::Neck => "Neck",
            InjuryArea::Shoulder => "Shoulder",
            InjuryArea::Back => "Back",
            InjuryArea::Hip => "Hip",
            InjuryArea::Knee => "Knee",
            InjuryArea::AnkleFoot => "Ankle/Foot",
            InjuryArea::WristHand => "Wrist/Hand",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjurySide {
    Left,
    Right,
    Both,
}

impl InjurySide {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjurySide::Left => "left",
            InjurySide::Right => "right",
            InjurySide::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InjurySide::Left => "Left",
            InjurySide::Right => "Right",
            InjurySide::Both => "Both",
        }
    }
}

/// Sub-region within an injury area.
///
/// A few wire names ("back", "side") are shared by more than one area, so a
/// region only makes sense next to the area it was picked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryRegion {
    // Neck
    UpperNeck,
    LowerNeck,
    RadiatesToArm,
    // Shoulder (and knee, for `Back`)
    Front,
    SideLateral,
    Back,
    TopAcJoint,
    // Back
    UpperBack,
    MidBack,
    LowerBack,
    // Hip
    FrontGroin,
    Side,
    BackGlute,
    // Knee
    FrontKneecap,
    InsideMedial,
    OutsideLateral,
    // Ankle/foot
    Ankle,
    Heel,
    Arch,
    BallOfFoot,
    Toes,
    // Wrist/hand
    Wrist,
    Palm,
    Thumb,
    Fingers,
}

impl InjuryRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryRegion::UpperNeck => "upper-neck",
            InjuryRegion::LowerNeck => "lower-neck",
            InjuryRegion::RadiatesToArm => "radiates-to-arm",
            InjuryRegion::Front => "front",
            InjuryRegion::SideLateral => "side-lateral",
            InjuryRegion::Back => "back",
            InjuryRegion::TopAcJoint => "top-ac-joint",
            InjuryRegion::UpperBack => "upper-back",
            InjuryRegion::MidBack => "mid-back",
            InjuryRegion::LowerBack => "lower-back",
            InjuryRegion::FrontGroin => "front-groin",
            InjuryRegion::Side => "side",
            InjuryRegion::BackGlute => "back-glute",
            InjuryRegion::FrontKneecap => "front-kneecap",
            InjuryRegion::InsideMedial => "inside-medial",
            InjuryRegion::OutsideLateral => "outside-lateral",
            InjuryRegion::Ankle => "ankle",
            InjuryRegion::Heel => "heel",
            InjuryRegion::Arch => "arch",
            InjuryRegion::BallOfFoot => "ball-of-foot",
            InjuryRegion::Toes => "toes",
            InjuryRegion::Wrist => "wrist",
            InjuryRegion::Palm => "palm",
            InjuryRegion::Thumb => "thumb",
            InjuryRegion::Fingers => "fingers",
        }
    }

    /// Regions offered for an injury area, in display order
    pub fn for_area(area: InjuryArea) -> &'static [InjuryRegion] {
        use InjuryRegion as R;
        match area {
            InjuryArea::Neck => &[R::UpperNeck, R::LowerNeck, R::RadiatesToArm],
            InjuryArea::Shoulder => &[R::Front, R::SideLateral, R::Back, R::TopAcJoint],
            InjuryArea::Back => &[R::UpperBack, R::MidBack, R::LowerBack],
            InjuryArea::Hip => &[R::FrontGroin, R::Side, R::BackGlute],
            InjuryArea::Knee => &[R::FrontKneecap, R::InsideMedial, R::OutsideLateral, R::Back],
            InjuryArea::AnkleFoot => &[R::Ankle, R::Heel, R::Arch, R::BallOfFoot, R::Toes],
            InjuryArea::WristHand => &[R::Wrist, R::Palm, R::Thumb, R::Fingers],
        }
    }

    pub fn belongs_to(&self, area: InjuryArea) -> bool {
        Self::for_area(area).contains(self)
    }
}

/// Treatment objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    ReturnToSport,
    ReducePain,
    Strengthen,
    PostureMobility,
    PostOpRehab,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::ReturnToSport,
        Goal::ReducePain,
        Goal::Strengthen,
        Goal::PostureMobility,
        Goal::PostOpRehab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::ReturnToSport => "return-to-sport",
            Goal::ReducePain => "reduce-pain",
            Goal::Strengthen => "strengthen",
            Goal::PostureMobility => "posture-mobility",
            Goal::PostOpRehab => "post-op-rehab",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::ReturnToSport => "Return to Sport",
            Goal::ReducePain => "Reduce Pain",
            Goal::Strengthen => "Strengthen",
            Goal::PostureMobility => "Posture/Mobility",
            Goal::PostOpRehab => "Post-Op Rehab",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitType {
    InPerson,
    Telehealth,
    AtHome,
}

impl VisitType {
    pub const ALL: [VisitType; 3] = [VisitType::InPerson, VisitType::Telehealth, VisitType::AtHome];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::InPerson => "in-person",
            VisitType::Telehealth => "telehealth",
            VisitType::AtHome => "at-home",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitType::InPerson => "In-Person",
            VisitType::Telehealth => "Telehealth",
            VisitType::AtHome => "At-Home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Insurance {
    Aetna,
    Bcbs,
    United,
    SelfPay,
}

impl Insurance {
    pub const ALL: [Insurance; 4] = [
        Insurance::Aetna,
        Insurance::Bcbs,
        Insurance::United,
        Insurance::SelfPay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Insurance::Aetna => "aetna",
            Insurance::Bcbs => "bcbs",
            Insurance::United => "united",
            Insurance::SelfPay => "self-pay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Insurance::Aetna => "Aetna",
            Insurance::Bcbs => "BCBS",
            Insurance::United => "United",
            Insurance::SelfPay => "Self-Pay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Mon",
            DayOfWeek::Tue => "Tue",
            DayOfWeek::Wed => "Wed",
            DayOfWeek::Thu => "Thu",
            DayOfWeek::Fri => "Fri",
            DayOfWeek::Sat => "Sat",
            DayOfWeek::Sun => "Sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Am,
    Pm,
    Eve,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Am, TimeOfDay::Pm, TimeOfDay::Eve];

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Am => "AM",
            TimeOfDay::Pm => "PM",
            TimeOfDay::Eve => "Eve",
        }
    }
}

/// One discrete weekly slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub day: DayOfWeek,
    pub time: TimeOfDay,
}

impl TimeWindow {
    pub fn new(day: DayOfWeek, time: TimeOfDay) -> Self {
        Self { day, time }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day.label(), self.time.label())
    }
}

/// Neutral dial value, meaning "no preference"
pub const NEUTRAL_STYLE: u8 = 3;
pub const MIN_STYLE: u8 = 1;
pub const MAX_STYLE: u8 = 5;

/// One of the four style dials shared by patients and providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDimension {
    Communication,
    Motivation,
    Empathy,
    TreatmentApproach,
}

impl StyleDimension {
    pub const ALL: [StyleDimension; 4] = [
        StyleDimension::Communication,
        StyleDimension::Motivation,
        StyleDimension::Empathy,
        StyleDimension::TreatmentApproach,
    ];

    /// Label for dial values at the low end (1-2)
    pub fn low_label(&self) -> &'static str {
        match self {
            StyleDimension::Communication => "technical",
            StyleDimension::Motivation => "calm",
            StyleDimension::Empathy => "direct",
            StyleDimension::TreatmentApproach => "hands-on",
        }
    }

    /// Label for dial values at the high end (4-5)
    pub fn high_label(&self) -> &'static str {
        match self {
            StyleDimension::Communication => "simple",
            StyleDimension::Motivation => "high-energy",
            StyleDimension::Empathy => "empathetic",
            StyleDimension::TreatmentApproach => "exercise-based",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StyleDimension::Communication => "communication",
            StyleDimension::Motivation => "energy level",
            StyleDimension::Empathy => "interaction style",
            StyleDimension::TreatmentApproach => "treatment approach",
        }
    }
}

/// Four style dials, each in `[1, 5]` where 3 means no preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreferences {
    /// technical (1) <-> simple (5)
    pub communication_style: u8,
    /// calm (1) <-> high-energy (5)
    pub motivation_level: u8,
    /// direct (1) <-> empathetic (5)
    pub empathy_level: u8,
    /// hands-on (1) <-> exercise-based (5)
    pub treatment_approach: u8,
}

impl StylePreferences {
    pub fn new(communication_style: u8, motivation_level: u8, empathy_level: u8, treatment_approach: u8) -> Self {
        Self {
            communication_style,
            motivation_level,
            empathy_level,
            treatment_approach,
        }
    }

    pub fn neutral() -> Self {
        Self::new(NEUTRAL_STYLE, NEUTRAL_STYLE, NEUTRAL_STYLE, NEUTRAL_STYLE)
    }

    pub fn get(&self, dimension: StyleDimension) -> u8 {
        match dimension {
            StyleDimension::Communication => self.communication_style,
            StyleDimension::Motivation => self.motivation_level,
            StyleDimension::Empathy => self.empathy_level,
            StyleDimension::TreatmentApproach => self.treatment_approach,
        }
    }
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self::neutral()
    }
}

/// A complete matching request from one patient.
///
/// Completeness (non-empty location, at least one visit type) is checked by
/// the request layer before a value ever reaches the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    pub injury_area: InjuryArea,
    pub injury_side: InjurySide,
    pub injury_region: InjuryRegion,
    /// Free text, informational only
    #[serde(default)]
    pub injury_context: String,
    pub goal: Goal,
    #[serde(default)]
    pub style_preferences: StylePreferences,
    pub location: String,
    pub visit_types: Vec<VisitType>,
    pub insurance: Insurance,
    #[serde(default)]
    pub availability: Vec<TimeWindow>,
}

/// Patient review shown on a provider's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderReview {
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

/// Catalog record for one physical therapist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub credentials: String,
    #[serde(default)]
    pub clinic_name: String,
    #[serde(default)]
    pub neighborhood: String,
    /// "City, ST"
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub approach: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub conditions_treated: Vec<String>,
    pub injury_expertise: Vec<InjuryArea>,
    pub goal_expertise: Vec<Goal>,
    pub style_scores: StylePreferences,
    pub visit_types: Vec<VisitType>,
    pub insurance_accepted: Vec<Insurance>,
    #[serde(default)]
    pub availability: Vec<TimeWindow>,
    #[serde(default)]
    pub next_available_slots: Vec<String>,
    pub session_rate: f64,
    #[serde(default)]
    pub reviews: Vec<ProviderReview>,
    #[serde(default)]
    pub photo_placeholder: String,
}

/// Maximum attainable value of each sub-score.
///
/// The defaults add up to 100 but nothing requires that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub injury: f64,
    pub goal: f64,
    pub style: f64,
    pub logistics: f64,
    pub availability: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.injury + self.goal + self.style + self.logistics + self.availability
    }

    pub fn is_valid(&self) -> bool {
        [self.injury, self.goal, self.style, self.logistics, self.availability]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            injury: 30.0,
            goal: 20.0,
            style: 20.0,
            logistics: 20.0,
            availability: 10.0,
        }
    }
}

/// Rounded, externally visible score for one provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub injury_fit: u32,
    pub goal_fit: u32,
    pub style_fit: u32,
    pub logistics_fit: u32,
    pub availability_fit: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonKind {
    Positive,
    Tradeoff,
}

/// One line of justification attached to a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReason {
    #[serde(rename = "type")]
    pub kind: ReasonKind,
    pub text: String,
}

impl MatchReason {
    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            kind: ReasonKind::Positive,
            text: text.into(),
        }
    }

    pub fn tradeoff(text: impl Into<String>) -> Self {
        Self {
            kind: ReasonKind::Tradeoff,
            text: text.into(),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.kind == ReasonKind::Positive
    }
}

/// Ranked result: the catalog entry, its score and why it was picked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderMatch<'a> {
    #[serde(rename = "pt")]
    pub provider: &'a ProviderProfile,
    pub score: ScoreBreakdown,
    pub reasons: Vec<MatchReason>,
}
