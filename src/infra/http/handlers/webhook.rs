//! Calendly webhook intake.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::infra::http::models::WebhookAck;
use crate::infra::http::{ApiError, HttpState};

const SOURCE: &str = "infra::http::webhook";

/// The provider wraps the actual delivery under a `calendly` key; anything
/// else in the envelope is ignored.
#[derive(Debug, Deserialize)]
pub struct CalendlyWebhookRequest {
    #[serde(default)]
    pub calendly: Option<Value>,
}

pub async fn from_calendly(
    State(state): State<HttpState>,
    Json(request): Json<CalendlyWebhookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(payload) = request.calendly else {
        return Err(ApiError::bad_request(SOURCE, "Missing calendly payload"));
    };

    let record = state
        .ingest
        .ingest_calendly(payload)
        .await
        .map_err(|err| ApiError::internal(SOURCE, &err))?;

    Ok((
        StatusCode::OK,
        Json(WebhookAck {
            ok: true,
            id: record.id,
        }),
    ))
}
