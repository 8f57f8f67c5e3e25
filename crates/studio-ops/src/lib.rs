//! Workflow library for the audiobook studio production desk.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
