use axum::{extract::State, http::StatusCode, Json};

use crate::blog::store;
use crate::errors::AppError;
use crate::models::blog::{BlogPostRow, NewBlogPost};
use crate::state::AppState;

/// GET /blog
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPostRow>>, AppError> {
    let posts = store::list(&state.db).await?;
    Ok(Json(posts))
}

/// POST /blog
pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<NewBlogPost>,
) -> Result<(StatusCode, Json<BlogPostRow>), AppError> {
    let post = store::create(&state.db, &req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}
