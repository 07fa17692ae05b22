//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour and are
//! serialized as-is in API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// department
// ---------------------------------------------------------------------------

/// A persisted department row.
///
/// `name` carries no uniqueness constraint; duplicate department names are
/// representable and name lookups resolve to an arbitrary matching row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

// ---------------------------------------------------------------------------
// employee
// ---------------------------------------------------------------------------

/// A persisted employee row.
///
/// `department_id` is a nullable foreign key; an employee without a
/// department is a legal state.  `updated_at` is refreshed by the store on
/// every successful update and is never earlier than `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub department_id: Option<i32>,
}
