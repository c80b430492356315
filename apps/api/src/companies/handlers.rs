use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::companies::store;
use crate::errors::AppError;
use crate::models::company::{CompanyRow, NewCompany};
use crate::state::AppState;

/// POST /company
pub async fn create_company(
    State(state): State<AppState>,
    Json(req): Json<NewCompany>,
) -> Result<(StatusCode, Json<CompanyRow>), AppError> {
    let row = store::create(&state.db, &req).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /company/:id
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyRow>, AppError> {
    let row = store::fetch(&state.db, id).await?;
    Ok(Json(row))
}
