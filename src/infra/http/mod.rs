pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;

pub use error::ApiError;
pub use state::HttpState;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/from-calendly", post(handlers::webhook::from_calendly))
        .route("/api/v1/users", post(handlers::users::create_user))
        .route("/api/v1/users/{id}", get(handlers::users::get_user))
        .route(
            "/api/v1/appointments",
            get(handlers::appointments::list_appointments)
                .post(handlers::appointments::create_appointment),
        )
        .route("/api/v1/render", post(handlers::render::render_markup))
        .route("/healthz", get(handlers::health::healthz))
        .with_state(state)
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .layer(axum_middleware::from_fn(middleware::set_request_context))
}
