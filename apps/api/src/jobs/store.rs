use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobRow, JobUpdate, JobWithApplications, NewJob};

/// Public listing: active openings only, newest first.
pub async fn list_active(pool: &PgPool) -> Result<Vec<JobRow>, AppError> {
    Ok(sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE is_active ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<JobRow, AppError> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
}

pub async fn create(pool: &PgPool, req: &NewJob) -> Result<JobRow, AppError> {
    let row: JobRow = sqlx::query_as(
        r#"
        INSERT INTO jobs
            (id, title, company_name, location, category, employment_type,
             description, salary_range, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.title)
    .bind(&req.company_name)
    .bind(&req.location)
    .bind(&req.category)
    .bind(&req.employment_type)
    .bind(&req.description)
    .bind(&req.salary_range)
    .bind(req.is_active)
    .fetch_one(pool)
    .await?;

    info!("Posted job '{}' at {}", row.title, row.company_name);
    Ok(row)
}

/// Replaces the named fields of a job; absent fields keep their stored value.
/// Returns the updated row, or not-found without writing anything.
pub async fn update(pool: &PgPool, id: Uuid, req: &JobUpdate) -> Result<JobRow, AppError> {
    sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs SET
            title = COALESCE($2, title),
            company_name = COALESCE($3, company_name),
            location = COALESCE($4, location),
            category = COALESCE($5, category),
            employment_type = COALESCE($6, employment_type),
            description = COALESCE($7, description),
            salary_range = COALESCE($8, salary_range),
            is_active = COALESCE($9, is_active),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.company_name)
    .bind(&req.location)
    .bind(&req.category)
    .bind(&req.employment_type)
    .bind(&req.description)
    .bind(&req.salary_range)
    .bind(req.is_active)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<JobRow, AppError> {
    let deleted = sqlx::query_as::<_, JobRow>("DELETE FROM jobs WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    info!("Deleted job '{}' ({})", deleted.title, deleted.id);
    Ok(deleted)
}

/// Admin view: every job annotated with how many applications name it.
/// Applications reference jobs by title string, so the join is on the
/// denormalized `job_title` column.
pub async fn list_with_application_counts(
    pool: &PgPool,
) -> Result<Vec<JobWithApplications>, AppError> {
    Ok(sqlx::query_as::<_, JobWithApplications>(
        r#"
        SELECT j.id, j.title, j.company_name, j.location, j.category,
               j.employment_type, j.is_active, j.created_at,
               COUNT(a.id) AS application_count
        FROM jobs j
        LEFT JOIN job_applications a ON a.job_title = j.title
        GROUP BY j.id
        ORDER BY j.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?)
}
