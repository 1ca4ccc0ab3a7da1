use std::sync::Arc;

use crate::application::appointments::AppointmentService;
use crate::application::ingest::IngestService;
use crate::application::repos::Health;
use crate::application::users::UserService;

#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<UserService>,
    pub appointments: Arc<AppointmentService>,
    pub ingest: Arc<IngestService>,
    pub health: Arc<dyn Health>,
}
