use feruca::Collator;
use std::cmp::Ordering;

use crate::core::reasons::explain;
use crate::core::scoring::evaluate;
use crate::models::{PatientInput, ProviderMatch, ProviderProfile, ScoringWeights};

/// Upper bound on the number of ranked results
pub const MAX_RESULTS: usize = 5;

/// Result of the ranking process
#[derive(Debug)]
pub struct Ranking<'a> {
    pub matches: Vec<ProviderMatch<'a>>,
    pub total_candidates: usize,
    /// Candidates that passed the visit-type filter
    pub eligible_candidates: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Score every provider and apply the visit-type hard filter
/// 2. Explain each surviving provider
/// 3. Sort by total (descending), then by name
/// 4. Truncate
///
/// Holds no state besides its configuration, so the same inputs always
/// produce the same ranking.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: ScoringWeights,
    max_results: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            max_results: MAX_RESULTS,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Cap the result size; values above `MAX_RESULTS` are clamped
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.min(MAX_RESULTS);
        self
    }

    /// Same limit, different weights
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Rank the provider pool for a patient.
    ///
    /// # Arguments
    /// * `patient` - Complete, validated patient input
    /// * `providers` - The whole catalog, in any order
    ///
    /// # Returns
    /// Ranking whose matches borrow from `providers`. An empty match list means
    /// no provider offers any of the patient's visit types.
    pub fn rank<'a>(&self, patient: &PatientInput, providers: &'a [ProviderProfile]) -> Ranking<'a> {
        let total_candidates = providers.len();

        let mut matches: Vec<ProviderMatch<'a>> = providers
            .iter()
            .filter_map(|provider| {
                let evaluation = evaluate(patient, provider, &self.weights);

                if !evaluation.passes_hard_filter() {
                    tracing::debug!("Excluding {}: no shared visit type", provider.id);
                    return None;
                }

                Some(ProviderMatch {
                    provider,
                    score: evaluation.breakdown,
                    reasons: explain(patient, provider, &evaluation),
                })
            })
            .collect();

        let eligible_candidates = matches.len();

        let mut collator = Collator::default();
        matches.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| compare_names(&mut collator, &a.provider.name, &b.provider.name))
        });

        matches.truncate(self.max_results);

        Ranking {
            matches,
            total_candidates,
            eligible_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank with an explicit weight configuration, keeping only the matches
pub fn rank<'a>(
    patient: &PatientInput,
    providers: &'a [ProviderProfile],
    weights: &ScoringWeights,
) -> Vec<ProviderMatch<'a>> {
    Matcher::new(*weights).rank(patient, providers).matches
}

/// Name order for tied totals: Unicode collation (CLDR root), so accents sort
/// with their base letter and names differing only in case put lowercase first.
/// Strings that collate equal fall back to their bytes.
fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b)
}
