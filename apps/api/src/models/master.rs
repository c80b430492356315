use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A lookup-table row. Both master tables (education degrees, job positions)
/// share this shape; the key column is aliased to `value` in queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MasterRow {
    pub id: Uuid,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewDegree {
    pub degree: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPosition {
    pub position: String,
}
