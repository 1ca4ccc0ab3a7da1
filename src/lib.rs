//! Attimo is a small self-hosted appointment intake service. It renders the
//! lightweight markdown-like conventions used in booking notes, keeps user
//! and appointment records in Postgres, and captures Calendly webhook
//! deliveries verbatim for later inspection.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
