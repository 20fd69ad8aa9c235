use serde::{Deserialize, Serialize};
use crate::models::domain::{ProviderMatch, ProviderProfile, ScoringWeights};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse<'a> {
    pub matches: Vec<ProviderMatch<'a>>,
    pub session_id: String,
    pub weights: ScoringWeights,
    pub weight_total: f64,
    /// Display hint only, non-100 sums are still scored
    pub weights_sum_to_100: bool,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProvidersResponse<'a> {
    pub providers: &'a [ProviderProfile],
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub providers: usize,
    pub store: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
