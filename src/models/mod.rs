// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DayOfWeek, Goal, InjuryArea, InjuryRegion, InjurySide, Insurance, MatchReason, PatientInput,
    ProviderMatch, ProviderProfile, ProviderReview, ReasonKind, ScoreBreakdown, ScoringWeights,
    StyleDimension, StylePreferences, TimeOfDay, TimeWindow, VisitType, NEUTRAL_STYLE,
};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, ProvidersResponse};
