//! Appointment booking against registered users.

use std::sync::Arc;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::application::repos::{AppointmentsRepo, NewAppointment, RepoError, UsersRepo};
use crate::domain::entities::AppointmentRecord;

#[derive(Debug, Error)]
pub enum AppointmentError {
    #[error("user `{user_id}` does not exist")]
    UnknownUser { user_id: Uuid },
    #[error(transparent)]
    Repo(RepoError),
}

#[derive(Debug, Clone)]
pub struct BookAppointmentCommand {
    pub user_id: Uuid,
    pub city: Option<String>,
    pub micro_market: Option<String>,
    pub property_type: Option<String>,
    pub budget_range: Option<String>,
    pub appointment_date: Option<OffsetDateTime>,
}

pub struct AppointmentService {
    users: Arc<dyn UsersRepo>,
    appointments: Arc<dyn AppointmentsRepo>,
}

impl AppointmentService {
    pub fn new(users: Arc<dyn UsersRepo>, appointments: Arc<dyn AppointmentsRepo>) -> Self {
        Self {
            users,
            appointments,
        }
    }

    pub async fn book(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentRecord, AppointmentError> {
        let user_id = command.user_id;
        let user = self
            .users
            .find_user(user_id)
            .await
            .map_err(AppointmentError::Repo)?;
        if user.is_none() {
            return Err(AppointmentError::UnknownUser { user_id });
        }

        let appointment = NewAppointment {
            user_id,
            city: command.city,
            micro_market: command.micro_market,
            property_type: command.property_type,
            budget_range: command.budget_range,
            appointment_date: command.appointment_date,
        };

        match self.appointments.insert_appointment(appointment).await {
            Ok(record) => {
                info!(
                    target = "attimo::appointments",
                    id = %record.id,
                    user_id = %record.user_id,
                    "booked appointment"
                );
                Ok(record)
            }
            // The existence check above can race with a user deletion done
            // directly in the database; surface the FK rejection the same way.
            Err(RepoError::InvalidInput { .. }) => {
                Err(AppointmentError::UnknownUser { user_id })
            }
            Err(err) => Err(AppointmentError::Repo(err)),
        }
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>, AppointmentError> {
        self.appointments
            .list_appointments_for_user(user_id)
            .await
            .map_err(AppointmentError::Repo)
    }
}
