use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{JobApplicationRow, JobApplicationSummary, NewJobApplication};

const DUPLICATE_EMAIL: &str = "An application with this email already exists";

/// Persists a validated application. The email existence check is a fast
/// path for a friendlier message; the unique index on `email` rejects a
/// racing duplicate at insert time and is mapped to the same conflict.
pub async fn create(
    pool: &PgPool,
    app: &NewJobApplication,
) -> Result<JobApplicationRow, AppError> {
    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM job_applications WHERE email = $1")
            .bind(&app.email)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
    }

    let row: JobApplicationRow = sqlx::query_as(
        r#"
        INSERT INTO job_applications
            (id, applicant_name, email, phone, address, degree, institution,
             graduation_year, experience_years, previous_employer, job_title,
             resume_type, resume_file_name, resume_content_type, resume_data)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&app.applicant_name)
    .bind(&app.email)
    .bind(&app.phone)
    .bind(&app.address)
    .bind(&app.degree)
    .bind(&app.institution)
    .bind(&app.graduation_year)
    .bind(&app.experience_years)
    .bind(&app.previous_employer)
    .bind(&app.job_title)
    .bind(app.resume_type.as_str())
    .bind(&app.resume.file_name)
    .bind(&app.resume.content_type)
    .bind(&app.resume.data)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_EMAIL))?;

    info!(
        "Stored application from {} for '{}'",
        row.email, row.job_title
    );
    Ok(row)
}

/// Admin listing, newest first. The resume payload is not selected.
pub async fn list(pool: &PgPool) -> Result<Vec<JobApplicationSummary>, AppError> {
    Ok(sqlx::query_as::<_, JobApplicationSummary>(
        r#"
        SELECT id, applicant_name, email, phone, degree, job_title,
               resume_type, resume_file_name, created_at
        FROM job_applications
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?)
}
