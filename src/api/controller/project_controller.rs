use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::project_dto::ProjectListQuery;
use crate::app_state::AppState;
use crate::core::persistence::project::project_entity::{ProjectDetails, ProjectEntity};
use crate::domain::project::dto::ProjectUpsertRequest;
use crate::errors::AppError;

pub struct ProjectController;

impl ProjectController {
    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<ProjectUpsertRequest>,
    ) -> Result<(StatusCode, Json<ProjectEntity>), AppError> {
        let project = state.project_service.create(payload)?;
        Ok((StatusCode::CREATED, Json(project)))
    }

    pub async fn list(
        State(state): State<AppState>,
        Query(query): Query<ProjectListQuery>,
    ) -> Result<Json<PaginatedResponse<ProjectDetails>>, AppError> {
        let page = state.project_service.list(query)?;
        Ok(Json(page.into()))
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ProjectDetails>, AppError> {
        Ok(Json(state.project_service.get(id)?))
    }

    pub async fn update(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<ProjectUpsertRequest>,
    ) -> Result<Json<ProjectDetails>, AppError> {
        Ok(Json(state.project_service.update(id, payload)?))
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, AppError> {
        state.project_service.delete(id)?;
        Ok(StatusCode::NO_CONTENT)
    }
}
