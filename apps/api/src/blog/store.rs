use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::{require_field, AppError};
use crate::models::blog::{BlogPostRow, NewBlogPost};

pub async fn list(pool: &PgPool) -> Result<Vec<BlogPostRow>, AppError> {
    Ok(
        sqlx::query_as::<_, BlogPostRow>("SELECT * FROM blog_posts ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn create(pool: &PgPool, req: &NewBlogPost) -> Result<BlogPostRow, AppError> {
    let title = require_field("title", &req.title)?;
    let author = require_field("author", &req.author)?;
    let content = require_field("content", &req.content)?;

    let row: BlogPostRow = sqlx::query_as(
        r#"
        INSERT INTO blog_posts (id, title, author, content, cover_image_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&title)
    .bind(&author)
    .bind(&content)
    .bind(&req.cover_image_url)
    .fetch_one(pool)
    .await?;

    info!("Published blog post '{}'", row.title);
    Ok(row)
}
