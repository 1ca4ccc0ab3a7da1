use async_trait::async_trait;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{NewWebhookEvent, RepoError, WebhookEventsRepo};
use crate::domain::entities::WebhookEventRecord;

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct WebhookEventRow {
    id: Uuid,
    event_type: String,
    raw_payload: Value,
    status: String,
    contact_email: String,
    created_at: OffsetDateTime,
}

impl From<WebhookEventRow> for WebhookEventRecord {
    fn from(row: WebhookEventRow) -> Self {
        Self {
            id: row.id,
            event_type: row.event_type,
            raw_payload: row.raw_payload,
            status: row.status,
            contact_email: row.contact_email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WebhookEventsRepo for PostgresRepositories {
    async fn insert_event(
        &self,
        event: NewWebhookEvent,
    ) -> Result<WebhookEventRecord, RepoError> {
        let row = sqlx::query_as::<_, WebhookEventRow>(
            "INSERT INTO webhook_events \
             (id, event_type, raw_payload, status, contact_email, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, event_type, raw_payload, status, contact_email, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(event.event_type)
        .bind(event.raw_payload)
        .bind(event.status)
        .bind(event.contact_email)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }
}
