use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::controller::timesheet_controller::TimesheetController;
use crate::app_state::AppState;

pub fn timesheet_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(TimesheetController::create))
        .route("/getAll", get(TimesheetController::list))
        .route("/get/{id}", get(TimesheetController::get))
        .route("/update/{id}", put(TimesheetController::update))
        .route("/delete/{id}", delete(TimesheetController::delete))
}
