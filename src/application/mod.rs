//! Application services layer.

pub mod appointments;
pub mod error;
pub mod ingest;
pub mod repos;
pub mod users;
