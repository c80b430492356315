//! Master data — small reference lookup tables populated by admins and
//! referenced by display string elsewhere. Both tables follow the same
//! create-if-absent-by-key contract, so the operation is implemented once
//! and parameterized by `MasterKind`.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::master::MasterRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterKind {
    EducationDegree,
    JobPosition,
}

impl MasterKind {
    fn table(&self) -> &'static str {
        match self {
            MasterKind::EducationDegree => "education_degrees",
            MasterKind::JobPosition => "job_positions",
        }
    }

    fn key_column(&self) -> &'static str {
        match self {
            MasterKind::EducationDegree => "degree",
            MasterKind::JobPosition => "position",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            MasterKind::EducationDegree => "Degree",
            MasterKind::JobPosition => "Position",
        }
    }

    fn conflict_message(&self) -> String {
        format!("{} already exists", self.noun())
    }
}

/// Trims a candidate key, rejecting empty or whitespace-only input.
pub fn normalize_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns all rows for a master table, ordered by key ascending.
pub async fn list(pool: &PgPool, kind: MasterKind) -> Result<Vec<MasterRow>, AppError> {
    let sql = format!(
        "SELECT id, {key} AS value, created_at FROM {table} ORDER BY {key} ASC",
        key = kind.key_column(),
        table = kind.table(),
    );
    Ok(sqlx::query_as::<_, MasterRow>(&sql).fetch_all(pool).await?)
}

/// Inserts a new master value if the (trimmed) key is not already present.
///
/// The SELECT is a fast path for a friendlier conflict message; two racing
/// submissions can both pass it. The unique index rejects the loser at
/// insert time, and that failure is mapped to the same conflict.
pub async fn create(pool: &PgPool, kind: MasterKind, raw: &str) -> Result<MasterRow, AppError> {
    let value = normalize_key(raw)
        .ok_or_else(|| AppError::Validation(format!("{} is required", kind.noun())))?;

    let select_sql = format!(
        "SELECT id, {key} AS value, created_at FROM {table} WHERE {key} = $1",
        key = kind.key_column(),
        table = kind.table(),
    );
    let existing: Option<MasterRow> = sqlx::query_as(&select_sql)
        .bind(&value)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(kind.conflict_message()));
    }

    let insert_sql = format!(
        "INSERT INTO {table} (id, {key}) VALUES ($1, $2) \
         RETURNING id, {key} AS value, created_at",
        key = kind.key_column(),
        table = kind.table(),
    );
    let row: MasterRow = sqlx::query_as(&insert_sql)
        .bind(Uuid::new_v4())
        .bind(&value)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, &kind.conflict_message()))?;

    info!("Created {} '{}'", kind.noun().to_lowercase(), row.value);
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_key("  B.Sc  "), Some("B.Sc".to_string()));
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize_key(""), None);
    }

    #[test]
    fn normalize_rejects_whitespace_only() {
        assert_eq!(normalize_key("   \t "), None);
    }

    #[test]
    fn normalize_keeps_interior_whitespace() {
        assert_eq!(
            normalize_key(" Senior Engineer "),
            Some("Senior Engineer".to_string())
        );
    }

    #[test]
    fn kinds_address_their_own_tables() {
        assert_eq!(MasterKind::EducationDegree.table(), "education_degrees");
        assert_eq!(MasterKind::EducationDegree.key_column(), "degree");
        assert_eq!(MasterKind::JobPosition.table(), "job_positions");
        assert_eq!(MasterKind::JobPosition.key_column(), "position");
    }

    #[test]
    fn conflict_messages_match_wire_format() {
        assert_eq!(
            MasterKind::EducationDegree.conflict_message(),
            "Degree already exists"
        );
        assert_eq!(
            MasterKind::JobPosition.conflict_message(),
            "Position already exists"
        );
    }
}
