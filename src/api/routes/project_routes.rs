use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::controller::project_controller::ProjectController;
use crate::app_state::AppState;

pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(ProjectController::create))
        .route("/getAll", get(ProjectController::list))
        .route("/get/{id}", get(ProjectController::get))
        .route("/update/{id}", put(ProjectController::update))
        .route("/delete/{id}", delete(ProjectController::delete))
}
