use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use std::time::Duration;

use crate::services::submissions::{IntakeSubmission, StoreError, SubmissionStore};

/// PostgreSQL-backed store for intake submissions
///
/// Writes one row per completed intake into `intake_submissions`. The schema
/// is created by the bundled migrations when the pool is opened.
pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL submission store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    async fn save(&self, submission: &IntakeSubmission) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO intake_submissions (
                id, session_id, injury_area, injury_side, injury_region, injury_context, goal,
                style_communication_pref, style_motivation_pref, style_empathy_pref, style_treatment_pref,
                location, visit_types, insurance, availability, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        "#;

        let patient = &submission.patient;
        let style = &patient.style_preferences;
        let injury_context = Some(patient.injury_context.as_str()).filter(|c| !c.trim().is_empty());
        let visit_types: Vec<&str> = patient.visit_types.iter().map(|t| t.as_str()).collect();

        sqlx::query(query)
            .bind(submission.id)
            .bind(&submission.session_id)
            .bind(patient.injury_area.as_str())
            .bind(patient.injury_side.as_str())
            .bind(patient.injury_region.as_str())
            .bind(injury_context)
            .bind(patient.goal.as_str())
            .bind(i16::from(style.communication_style))
            .bind(i16::from(style.motivation_level))
            .bind(i16::from(style.empathy_level))
            .bind(i16::from(style.treatment_approach))
            .bind(&patient.location)
            .bind(visit_types)
            .bind(patient.insurance.as_str())
            .bind(Json(&patient.availability))
            .bind(submission.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Stored intake submission {} for session {}",
            submission.id,
            submission.session_id
        );

        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
