//! Risk & Compliance career fit assessment: question bank, scoring engine and
//! the service plumbing around it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
