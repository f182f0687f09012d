use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::timesheet_dto::TimesheetListQuery;
use crate::app_state::AppState;
use crate::core::persistence::timesheet::timesheet_entity::{TimesheetDetails, TimesheetEntity};
use crate::domain::timesheet::dto::TimesheetUpsertRequest;
use crate::errors::AppError;

pub struct TimesheetController;

impl TimesheetController {
    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<TimesheetUpsertRequest>,
    ) -> Result<(StatusCode, Json<TimesheetEntity>), AppError> {
        let timesheet = state.timesheet_service.create(payload)?;
        Ok((StatusCode::CREATED, Json(timesheet)))
    }

    pub async fn list(
        State(state): State<AppState>,
        Query(query): Query<TimesheetListQuery>,
    ) -> Result<Json<PaginatedResponse<TimesheetDetails>>, AppError> {
        let page = state.timesheet_service.list(query)?;
        Ok(Json(page.into()))
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<TimesheetDetails>, AppError> {
        Ok(Json(state.timesheet_service.get(id)?))
    }

    pub async fn update(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<TimesheetUpsertRequest>,
    ) -> Result<Json<TimesheetEntity>, AppError> {
        Ok(Json(state.timesheet_service.update(id, payload)?))
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, AppError> {
        state.timesheet_service.delete(id)?;
        Ok(StatusCode::NO_CONTENT)
    }
}
