//! Employee CRUD operations.

use sqlx::PgPool;

use crate::{models::EmployeeRow, DbError};

/// Return all employees.  No ordering guarantee.
pub async fn list_employees(pool: &PgPool) -> Result<Vec<EmployeeRow>, DbError> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        r#"SELECT id, name, created_at, updated_at, department_id FROM employee"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new employee and return the created row, including the
/// generated id and timestamps.
///
/// `department_id` must already be resolved from a department name (or be
/// `None` for an employee without a department).
pub async fn create_employee(
    pool: &PgPool,
    name: &str,
    department_id: Option<i32>,
) -> Result<EmployeeRow, DbError> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        INSERT INTO employee (name, department_id)
        VALUES ($1, $2)
        RETURNING id, name, created_at, updated_at, department_id
        "#,
    )
    .bind(name)
    .bind(department_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Update an employee's name and department, refreshing `updated_at`.
///
/// Returns `Ok(None)` when no row matches `id`; the caller decides whether
/// that is an error.
pub async fn update_employee(
    pool: &PgPool,
    id: i32,
    name: &str,
    department_id: Option<i32>,
) -> Result<Option<EmployeeRow>, DbError> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        UPDATE employee
        SET name = $1, department_id = $2, updated_at = now()
        WHERE id = $3
        RETURNING id, name, created_at, updated_at, department_id
        "#,
    )
    .bind(name)
    .bind(department_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Delete an employee by primary key.
///
/// Returns the number of rows deleted (0 or 1); deleting a missing id is
/// not an error at this layer.
pub async fn delete_employee(pool: &PgPool, id: i32) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM employee WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
