//! Calendly webhook capture.
//!
//! Deliveries are stored verbatim. The upstream payload is treated as an
//! opaque, schema-less value; only a handful of named fields are read via
//! optional access with fallbacks, never assuming the provider shape.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::application::repos::{NewWebhookEvent, RepoError, WebhookEventsRepo};
use crate::domain::entities::WebhookEventRecord;

/// Status stamped on every captured delivery. Nothing downgrades or
/// advances it yet; it exists so replay tooling can mark processed events.
pub const STATUS_RECEIVED: &str = "received";

const DEFAULT_EVENT_TYPE: &str = "calendly.webhook";

pub struct IngestService {
    events: Arc<dyn WebhookEventsRepo>,
}

impl IngestService {
    pub fn new(events: Arc<dyn WebhookEventsRepo>) -> Self {
        Self { events }
    }

    /// Persist one webhook delivery. Intentionally not idempotent: the
    /// provider's retries produce one record per delivery so nothing is
    /// ever silently dropped.
    pub async fn ingest_calendly(&self, payload: Value) -> Result<WebhookEventRecord, RepoError> {
        let event_type = payload
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_EVENT_TYPE)
            .to_string();
        let contact_email = contact_email(&payload);

        let record = self
            .events
            .insert_event(NewWebhookEvent {
                event_type,
                raw_payload: payload,
                status: STATUS_RECEIVED.to_string(),
                contact_email,
            })
            .await?;

        info!(
            target = "attimo::ingest",
            id = %record.id,
            event_type = %record.event_type,
            "captured calendly webhook"
        );

        Ok(record)
    }
}

fn contact_email(payload: &Value) -> String {
    payload
        .get("email")
        .and_then(Value::as_str)
        .or_else(|| payload.pointer("/invitee/email").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn contact_email_prefers_top_level_field() {
        let payload = json!({
            "email": "top@example.com",
            "invitee": { "email": "nested@example.com" }
        });
        assert_eq!(contact_email(&payload), "top@example.com");
    }

    #[test]
    fn contact_email_falls_back_to_invitee() {
        let payload = json!({ "invitee": { "email": "nested@example.com" } });
        assert_eq!(contact_email(&payload), "nested@example.com");
    }

    #[test]
    fn contact_email_defaults_to_empty() {
        assert_eq!(contact_email(&json!({})), "");
        assert_eq!(contact_email(&json!({ "email": 42 })), "");
        assert_eq!(contact_email(&json!("just a string")), "");
    }
}
