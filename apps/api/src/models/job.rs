use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    /// Display name of the hiring company. Denormalized by design: jobs
    /// reference companies by string, not by foreign key.
    pub company_name: String,
    pub location: String,
    pub category: String,
    pub employment_type: String,
    pub description: String,
    pub salary_range: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for posting a new job opening.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub category: String,
    pub employment_type: String,
    pub description: String,
    pub salary_range: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update payload: a present field replaces the stored one, an
/// absent field is left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    pub is_active: Option<bool>,
}

/// A job annotated with the number of applications received, matched on the
/// denormalized applicant `job_title`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobWithApplications {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub category: String,
    pub employment_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub application_count: i64,
}
