pub mod appointments;
pub mod health;
pub mod render;
pub mod users;
pub mod webhook;
