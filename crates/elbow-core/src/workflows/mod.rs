//! # Workflows
//!
//! Validated, configuration-driven procedures over the forearm lever model.
//!
//! - [`calculate`] evaluates every quantity at one elbow angle, after checking the
//!   posture is anatomically valid.
//! - [`sweep`] evaluates the torque, muscle force and joint reaction curves over the
//!   allowed elbow range and exports them as CSV.

pub mod calculate;
pub mod config;
pub mod error;
pub mod sweep;
pub mod validation;
