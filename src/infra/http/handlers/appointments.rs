use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::appointments::{AppointmentError, BookAppointmentCommand};
use crate::infra::http::models::{CreateAppointmentRequest, ListAppointmentsQuery};
use crate::infra::http::{ApiError, HttpState};

const SOURCE: &str = "infra::http::appointments";

fn appointment_error(err: AppointmentError) -> ApiError {
    match err {
        AppointmentError::UnknownUser { .. } => ApiError::bad_request(SOURCE, "Unknown user"),
        AppointmentError::Repo(err) => ApiError::internal(SOURCE, &err),
    }
}

pub async fn create_appointment(
    State(state): State<HttpState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .appointments
        .book(BookAppointmentCommand {
            user_id: request.user_id,
            city: request.city,
            micro_market: request.micro_market,
            property_type: request.property_type,
            budget_range: request.budget_range,
            appointment_date: request.appointment_date,
        })
        .await
        .map_err(appointment_error)?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_appointments(
    State(state): State<HttpState>,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .appointments
        .list_for_user(query.user_id)
        .await
        .map_err(appointment_error)?;

    Ok(Json(records))
}
