// crates/core/src/lib.rs

//! Smoke checks for the dashboard's `api.php` actions.

pub mod action_client;
pub mod envelope;
pub mod runner;
pub mod types;
