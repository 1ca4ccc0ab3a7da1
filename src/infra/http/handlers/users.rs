use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::users::{RegisterUserCommand, UserError};
use crate::infra::http::models::CreateUserRequest;
use crate::infra::http::{ApiError, HttpState};

const SOURCE: &str = "infra::http::users";

pub async fn create_user(
    State(state): State<HttpState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .users
        .register(RegisterUserCommand {
            name: request.name,
            email: request.email,
            password: request.password,
            google_id: request.google_id,
        })
        .await
        .map_err(|err| match err {
            UserError::MissingEmail => ApiError::bad_request(SOURCE, "Email is required"),
            UserError::DuplicateEmail { .. } => {
                ApiError::conflict(SOURCE, "Email is already registered")
            }
            UserError::Repo(err) => ApiError::internal(SOURCE, &err),
        })?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_user(
    State(state): State<HttpState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .users
        .find(id)
        .await
        .map_err(|err| ApiError::internal(SOURCE, &err))?
        .ok_or_else(|| ApiError::not_found(SOURCE, "User not found"))?;

    Ok(Json(record))
}
