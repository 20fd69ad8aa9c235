use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

use crate::models::PatientInput;

/// Errors that can occur when persisting intake submissions
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// One completed intake, as stored for later analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub id: Uuid,
    pub session_id: String,
    pub patient: PatientInput,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl IntakeSubmission {
    pub fn new(session_id: impl Into<String>, patient: PatientInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id: session_id.into(),
            patient,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Persistence for intake submissions.
///
/// Passed into the application state at startup; scoring never reads from it.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save(&self, submission: &IntakeSubmission) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;

    /// Short backend name for health output
    fn backend(&self) -> &'static str;
}

/// Store used when no database is configured: accepts and drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSubmissionStore;

#[async_trait]
impl SubmissionStore for DisabledSubmissionStore {
    async fn save(&self, submission: &IntakeSubmission) -> Result<(), StoreError> {
        tracing::debug!("Submission store disabled, dropping submission {}", submission.id);
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

/// Process-local store, for development and tests
#[derive(Debug, Default)]
pub struct MemorySubmissionStore {
    submissions: Mutex<Vec<IntakeSubmission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<IntakeSubmission> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn save(&self, submission: &IntakeSubmission) -> Result<(), StoreError> {
        let mut guard = self
            .submissions
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        guard.push(submission.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(!self.submissions.is_poisoned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, InjuryArea, InjuryRegion, InjurySide, Insurance, StylePreferences, VisitType};

    fn create_patient() -> PatientInput {
        PatientInput {
            injury_area: InjuryArea::Neck,
            injury_side: InjurySide::Right,
            injury_region: InjuryRegion::UpperNeck,
            injury_context: "Desk job".to_string(),
            goal: Goal::PostureMobility,
            style_preferences: StylePreferences::neutral(),
            location: "Seattle, WA 98101".to_string(),
            visit_types: vec![VisitType::Telehealth],
            insurance: Insurance::SelfPay,
            availability: vec![],
        }
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemorySubmissionStore::new();
        let submission = IntakeSubmission::new("session-1", create_patient());

        store.save(&submission).await.unwrap();

        let saved = store.submissions();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].session_id, "session-1");
        assert_eq!(saved[0].patient, create_patient());
        assert!(store.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_disabled_store_accepts() {
        let store = DisabledSubmissionStore;
        let submission = IntakeSubmission::new("session-2", create_patient());

        assert!(store.save(&submission).await.is_ok());
        assert_eq!(store.backend(), "disabled");
    }
}
