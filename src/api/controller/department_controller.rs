use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::department_dto::DepartmentListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::app_state::AppState;
use crate::core::persistence::department::department_entity::DepartmentEntity;
use crate::domain::department::dto::DepartmentUpsertRequest;
use crate::errors::AppError;

pub struct DepartmentController;

impl DepartmentController {
    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<DepartmentUpsertRequest>,
    ) -> Result<(StatusCode, Json<DepartmentEntity>), AppError> {
        let department = state.department_service.create(payload)?;
        Ok((StatusCode::CREATED, Json(department)))
    }

    pub async fn list(
        State(state): State<AppState>,
        Query(query): Query<DepartmentListQuery>,
    ) -> Result<Json<PaginatedResponse<DepartmentEntity>>, AppError> {
        let page = state.department_service.list(query)?;
        Ok(Json(page.into()))
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<DepartmentEntity>, AppError> {
        Ok(Json(state.department_service.get(id)?))
    }

    pub async fn update(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<DepartmentUpsertRequest>,
    ) -> Result<Json<DepartmentEntity>, AppError> {
        Ok(Json(state.department_service.update(id, payload)?))
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, AppError> {
        state.department_service.delete(id)?;
        Ok(StatusCode::NO_CONTENT)
    }
}
