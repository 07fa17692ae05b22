//! Department read operations.

use sqlx::PgPool;

use crate::{models::DepartmentRow, DbError};

/// Return all departments.  No ordering guarantee.
pub async fn list_departments(pool: &PgPool) -> Result<Vec<DepartmentRow>, DbError> {
    let rows = sqlx::query_as::<_, DepartmentRow>("SELECT id, name FROM department")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Resolve a department name to its primary key.
///
/// Returns `None` when no department carries that name.  Names are not
/// unique; when several rows match, an arbitrary one wins.
pub async fn find_department_id(pool: &PgPool, name: &str) -> Result<Option<i32>, DbError> {
    let id = sqlx::query_scalar::<_, i32>("SELECT id FROM department WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(id)
}
