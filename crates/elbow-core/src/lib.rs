//! # Elbow Lever Statics
//!
//! A static lever model of the human forearm. Given a subject's body mass and forearm
//! length, the library computes the elbow joint torque, the force carried by the biceps
//! tendon and the reaction force inside the elbow joint, as functions of the elbow and
//! shoulder flexion angles and of a weight held in the hand.
//!
//! ## Layout
//!
//! - **[`core`]: The Model.** The closed-form physics of the forearm lever
//!   ([`core::model::ForearmLeverModel`]), its constants and its construction errors.
//!
//! - **[`workflows`]: The Public API.** Validated, configuration-driven procedures built
//!   on the model: a single-point calculation and a sweep over the anatomically valid
//!   flexion range, with CSV export.

pub mod core;
pub mod workflows;
