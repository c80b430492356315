use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::masters::store::{self, MasterKind};
use crate::models::master::{NewDegree, NewPosition};
use crate::state::AppState;

/// GET /educationMaster
pub async fn list_degrees(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = store::list(&state.db, MasterKind::EducationDegree).await?;
    Ok(Json(
        rows.into_iter()
            .map(|r| json!({ "id": r.id, "degree": r.value, "createdAt": r.created_at }))
            .collect(),
    ))
}

/// POST /educationMaster
pub async fn create_degree(
    State(state): State<AppState>,
    Json(req): Json<NewDegree>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let row = store::create(&state.db, MasterKind::EducationDegree, &req.degree).await?;
    Ok((StatusCode::CREATED, Json(json!({ "degree": row.value }))))
}

/// GET /jobPositionMaster
pub async fn list_positions(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = store::list(&state.db, MasterKind::JobPosition).await?;
    Ok(Json(
        rows.into_iter()
            .map(|r| json!({ "id": r.id, "position": r.value, "createdAt": r.created_at }))
            .collect(),
    ))
}

/// POST /jobPositionMaster
pub async fn create_position(
    State(state): State<AppState>,
    Json(req): Json<NewPosition>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let row = store::create(&state.db, MasterKind::JobPosition, &req.position).await?;
    Ok((StatusCode::CREATED, Json(json!({ "position": row.value }))))
}
