// Core algorithm exports
pub mod adjacency;
pub mod filters;
pub mod matcher;
pub mod reasons;
pub mod scoring;

pub use adjacency::{goal_tier, injury_tier, FitTier};
pub use filters::{has_visit_type_overlap, insurance_match, location_match, InsuranceMatch, LocationMatch};
pub use matcher::{rank, Matcher, Ranking, MAX_RESULTS};
pub use reasons::explain;
pub use scoring::{evaluate, score, Evaluation, FitScores, MatchSignals};
