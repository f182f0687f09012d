use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::employee_dto::EmployeeListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::app_state::AppState;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::domain::employee::dto::EmployeeUpsertRequest;
use crate::errors::AppError;

pub struct EmployeeController;

impl EmployeeController {
    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<EmployeeUpsertRequest>,
    ) -> Result<(StatusCode, Json<EmployeeEntity>), AppError> {
        let employee = state.employee_service.create(payload)?;
        Ok((StatusCode::CREATED, Json(employee)))
    }

    pub async fn list(
        State(state): State<AppState>,
        Query(query): Query<EmployeeListQuery>,
    ) -> Result<Json<PaginatedResponse<EmployeeEntity>>, AppError> {
        let page = state.employee_service.list(query)?;
        Ok(Json(page.into()))
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<EmployeeEntity>, AppError> {
        Ok(Json(state.employee_service.get(id)?))
    }

    pub async fn update(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<EmployeeUpsertRequest>,
    ) -> Result<Json<EmployeeEntity>, AppError> {
        Ok(Json(state.employee_service.update(id, payload)?))
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, AppError> {
        state.employee_service.delete(id)?;
        Ok(StatusCode::NO_CONTENT)
    }
}
