use axum::extract::State;
use axum::Json;

use db::models::DepartmentRow;
use db::repository::departments as dept_repo;

use crate::error::ApiError;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DepartmentRow>>, ApiError> {
    let rows = dept_repo::list_departments(&state.pool).await?;
    Ok(Json(rows))
}
