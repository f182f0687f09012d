use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::controller::auth_controller::AuthController;
use crate::api::middleware::authenticate;
use crate::app_state::AppState;

pub fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(AuthController::me))
        .route_layer(middleware::from_fn_with_state(state, authenticate));

    Router::new()
        .route("/signup", post(AuthController::signup))
        .route("/login", post(AuthController::login))
        .merge(protected)
}
