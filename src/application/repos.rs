//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::entities::{AppointmentRecord, UserRecord, WebhookEventRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    pub password: Option<String>,
    pub google_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: Uuid,
    pub city: Option<String>,
    pub micro_market: Option<String>,
    pub property_type: Option<String>,
    pub budget_range: Option<String>,
    pub appointment_date: Option<OffsetDateTime>,
}

#[derive(Debug, Clone)]
pub struct NewWebhookEvent {
    pub event_type: String,
    pub raw_payload: Value,
    pub status: String,
    pub contact_email: String,
}

#[async_trait]
pub trait UsersRepo: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, RepoError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>, RepoError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepoError>;
}

#[async_trait]
pub trait AppointmentsRepo: Send + Sync {
    async fn insert_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<AppointmentRecord, RepoError>;

    /// Appointments for one user, newest first.
    async fn list_appointments_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>, RepoError>;
}

#[async_trait]
pub trait WebhookEventsRepo: Send + Sync {
    async fn insert_event(&self, event: NewWebhookEvent)
    -> Result<WebhookEventRecord, RepoError>;
}

#[async_trait]
pub trait Health: Send + Sync {
    async fn ping(&self) -> Result<(), RepoError>;
}
