use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::api::routes::auth_routes::auth_routes;
use crate::api::routes::department_routes::department_routes;
use crate::api::routes::employee_routes::employee_routes;
use crate::api::routes::project_routes::project_routes;
use crate::api::routes::timesheet_routes::timesheet_routes;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Root route
        .route("/", get(root))
        .nest("/auth", auth_routes(state.clone()))
        .nest("/departments", department_routes())
        .nest("/employees", employee_routes())
        .nest("/projects", project_routes())
        .nest("/timesheets", timesheet_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

// Handler for root
async fn root() -> &'static str {
    "Hello from server"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
