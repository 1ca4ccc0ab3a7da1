use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::markup::Block;

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub ok: bool,
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    pub password: Option<String>,
    pub google_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub user_id: Uuid,
    pub city: Option<String>,
    pub micro_market: Option<String>,
    pub property_type: Option<String>,
    pub budget_range: Option<String>,
    pub appointment_date: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub blocks: Vec<Block>,
}
