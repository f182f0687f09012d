use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::controller::department_controller::DepartmentController;
use crate::app_state::AppState;

pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(DepartmentController::create))
        .route("/getAll", get(DepartmentController::list))
        .route("/get/{id}", get(DepartmentController::get))
        .route("/update/{id}", put(DepartmentController::update))
        .route("/delete/{id}", delete(DepartmentController::delete))
}
