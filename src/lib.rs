//! AlignPT Match - patient to physical therapist matching service
//!
//! Scores every provider in the catalog against a completed patient intake,
//! explains each score in plain language and returns the best few. Providers
//! that offer none of the patient's visit types are never returned.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{explain, rank, score, Matcher, Ranking, MAX_RESULTS};
pub use models::{
    MatchReason, PatientInput, ProviderMatch, ProviderProfile, ScoreBreakdown, ScoringWeights,
    FindMatchesRequest, FindMatchesResponse,
};
