//! # Core Module
//!
//! The forearm lever model and the pieces it is built from.
//!
//! - [`units`] - Physical constants, anthropometric fractions and angle conversion
//! - [`model`] - The [`model::ForearmLeverModel`] and its parameter report
//! - [`error`] - Errors raised by guarded model construction

pub mod error;
pub mod model;
pub mod units;
