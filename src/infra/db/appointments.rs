use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{AppointmentsRepo, NewAppointment, RepoError};
use crate::domain::entities::AppointmentRecord;

use super::{PostgresRepositories, map_sqlx_error};

const APPOINTMENT_COLUMNS: &str =
    "id, user_id, city, micro_market, property_type, budget_range, appointment_date, created_at";

#[derive(sqlx::FromRow)]
struct AppointmentRow {
    id: Uuid,
    user_id: Uuid,
    city: Option<String>,
    micro_market: Option<String>,
    property_type: Option<String>,
    budget_range: Option<String>,
    appointment_date: Option<OffsetDateTime>,
    created_at: OffsetDateTime,
}

impl From<AppointmentRow> for AppointmentRecord {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            city: row.city,
            micro_market: row.micro_market,
            property_type: row.property_type,
            budget_range: row.budget_range,
            appointment_date: row.appointment_date,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AppointmentsRepo for PostgresRepositories {
    async fn insert_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<AppointmentRecord, RepoError> {
        let sql = format!(
            "INSERT INTO appointments \
             (id, user_id, city, micro_market, property_type, budget_range, appointment_date, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {APPOINTMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(appointment.user_id)
            .bind(appointment.city)
            .bind(appointment.micro_market)
            .bind(appointment.property_type)
            .bind(appointment.budget_range)
            .bind(appointment.appointment_date)
            .bind(OffsetDateTime::now_utc())
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn list_appointments_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>, RepoError> {
        let sql = format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(user_id)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(AppointmentRecord::from).collect())
    }
}
