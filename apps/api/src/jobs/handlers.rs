use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store;
use crate::models::job::{JobRow, JobUpdate, JobWithApplications, NewJob};
use crate::state::AppState;

/// GET /jobs
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = store::list_active(&state.db).await?;
    Ok(Json(jobs))
}

/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<NewJob>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let job = store::create(&state.db, &req).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = store::fetch(&state.db, id).await?;
    Ok(Json(job))
}

/// PUT /jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<JobUpdate>,
) -> Result<Json<JobRow>, AppError> {
    let job = store::update(&state.db, id, &req).await?;
    Ok(Json(job))
}

/// DELETE /jobs/:id
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = store::delete(&state.db, id).await?;
    Ok(Json(job))
}

/// GET /jobs/with-applications
pub async fn jobs_with_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobWithApplications>>, AppError> {
    let jobs = store::list_with_application_counts(&state.db).await?;
    Ok(Json(jobs))
}
