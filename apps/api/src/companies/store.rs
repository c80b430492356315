use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::{require_field, AppError};
use crate::models::company::{CompanyRow, NewCompany};

pub async fn create(pool: &PgPool, req: &NewCompany) -> Result<CompanyRow, AppError> {
    let name = require_field("name", &req.name)?;
    let address = require_field("address", &req.address)?;
    let email = require_field("email", &req.email)?;
    let phone = require_field("phone", &req.phone)?;
    let company_type = require_field("companyType", &req.company_type)?;

    let row: CompanyRow = sqlx::query_as(
        r#"
        INSERT INTO companies (id, name, address, email, phone, company_type)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(&address)
    .bind(&email)
    .bind(&phone)
    .bind(&company_type)
    .fetch_one(pool)
    .await?;

    info!("Registered company '{}'", row.name);
    Ok(row)
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<CompanyRow, AppError> {
    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
}
