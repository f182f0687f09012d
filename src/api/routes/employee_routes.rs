use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::controller::employee_controller::EmployeeController;
use crate::app_state::AppState;

// The employee router kept its historical path names (`getAllData`,
// `getData`) in the original API; preserved for compatibility.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(EmployeeController::create))
        .route("/getAllData", get(EmployeeController::list))
        .route("/getData/{id}", get(EmployeeController::get))
        .route("/update/{id}", put(EmployeeController::update))
        .route("/delete/{id}", delete(EmployeeController::delete))
}
