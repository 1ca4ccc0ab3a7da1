//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    /// Stored hash or provider-managed credential; never serialized out.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub google_id: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub city: Option<String>,
    pub micro_market: Option<String>,
    pub property_type: Option<String>,
    pub budget_range: Option<String>,
    pub appointment_date: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// One webhook delivery captured verbatim. Kept separate from
/// [`AppointmentRecord`]: the upstream payload is an opaque provider shape,
/// not a confirmed booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookEventRecord {
    pub id: Uuid,
    pub event_type: String,
    pub raw_payload: Value,
    pub status: String,
    pub contact_email: String,
    pub created_at: OffsetDateTime,
}
