use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use db::models::EmployeeRow;
use db::repository::{departments as dept_repo, employees as emp_repo};

use crate::error::ApiError;
use crate::{AppState, LookupMode};

/// Request body for employee create and update.
///
/// Both fields are optional at the wire level so that missing or null
/// values reach the validation below instead of a generic deserialization
/// rejection.
#[derive(Debug, serde::Deserialize)]
pub struct EmployeeDto {
    pub name: Option<String>,
    pub department_name: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeRow>>, ApiError> {
    let rows = emp_repo::list_employees(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeDto>,
) -> Result<Json<EmployeeRow>, ApiError> {
    let name = require_name(&payload)?;
    let department_id = resolve_department(&state, payload.department_name.as_deref()).await?;

    let row = emp_repo::create_employee(&state.pool, name, department_id).await?;
    Ok(Json(row))
}

pub async fn update(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<EmployeeDto>,
) -> Result<Json<Option<EmployeeRow>>, ApiError> {
    let name = require_name(&payload)?;
    let department_id = resolve_department(&state, payload.department_name.as_deref()).await?;

    let row = emp_repo::update_employee(&state.pool, id, name, department_id).await?;
    match (row, state.lookup_mode) {
        (None, LookupMode::Strict) => Err(ApiError::NotFound(format!("no employee with id {id}"))),
        // Permissive mode serializes a missing row as a JSON null body.
        (row, _) => Ok(Json(row)),
    }
}

pub async fn delete(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let deleted = emp_repo::delete_employee(&state.pool, id).await?;
    if deleted == 0 && state.lookup_mode == LookupMode::Strict {
        return Err(ApiError::NotFound(format!("no employee with id {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Reject a missing, null, or blank employee name before any SQL runs.
fn require_name(payload: &EmployeeDto) -> Result<&str, ApiError> {
    match payload.name.as_deref() {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ApiError::Validation("employee name is required".into())),
    }
}

/// Resolve an optional department name to its id.
///
/// An absent name always means "no department".  A present name that
/// matches no row is either stored as null (permissive) or rejected
/// (strict).
async fn resolve_department(
    state: &AppState,
    department_name: Option<&str>,
) -> Result<Option<i32>, ApiError> {
    let Some(name) = department_name else {
        return Ok(None);
    };

    match dept_repo::find_department_id(&state.pool, name).await? {
        Some(id) => Ok(Some(id)),
        None if state.lookup_mode == LookupMode::Strict => Err(ApiError::Validation(format!(
            "unknown department: {name}"
        ))),
        None => Ok(None),
    }
}
