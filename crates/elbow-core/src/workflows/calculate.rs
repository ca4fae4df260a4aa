use super::config::SessionConfig;
use super::error::WorkflowError;
use super::validation::validate_posture;
use crate::core::model::{ForearmLeverModel, ModelParameters};
use nalgebra::Vector2;
use tracing::debug;

/// Every quantity of the lever model at one elbow angle.
#[derive(Debug, Clone, PartialEq)]
pub struct PointReport {
    pub parameters: ModelParameters,
    pub elbow_angle_deg: f64,
    pub torque: f64,
    pub muscle_force_magnitude: f64,
    pub joint_reaction_magnitude: f64,
    pub muscle_force: Vector2<f64>,
    pub joint_reaction: Vector2<f64>,
}

impl PointReport {
    pub fn evaluate(model: &ForearmLeverModel, elbow_angle_deg: f64) -> Self {
        Self {
            parameters: model.describe(),
            elbow_angle_deg,
            torque: model.torque(elbow_angle_deg),
            muscle_force_magnitude: model.muscle_force_magnitude(elbow_angle_deg),
            joint_reaction_magnitude: model.joint_reaction_magnitude(elbow_angle_deg),
            muscle_force: model.muscle_force_vector(elbow_angle_deg),
            joint_reaction: model.joint_reaction_vector(elbow_angle_deg),
        }
    }
}

/// Validates the posture, then evaluates the model at `elbow_angle_deg`.
///
/// Nothing is computed when validation fails.
///
/// # Errors
///
/// - [`WorkflowError::Validation`] for a negative shoulder angle, an elbow angle below
///   10° or a combined flexion of 180° or more.
/// - [`WorkflowError::Model`] for a non-positive body mass or forearm length.
pub fn run(config: &SessionConfig, elbow_angle_deg: f64) -> Result<PointReport, WorkflowError> {
    validate_posture(config.posture.shoulder_angle_deg, elbow_angle_deg)?;
    let model = config.build_model()?;
    debug!(
        "Evaluating lever model at elbow {}° (shoulder {}°, load {} kg).",
        elbow_angle_deg,
        model.shoulder_angle_deg(),
        model.load_mass()
    );
    Ok(PointReport::evaluate(&model, elbow_angle_deg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::config::SessionConfigBuilder;
    use crate::workflows::validation::ValidationError;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn config(shoulder: f64, load: f64) -> SessionConfig {
        SessionConfigBuilder::new()
            .body_mass(70.0)
            .forearm_length(0.3)
            .shoulder_angle_deg(shoulder)
            .load_mass(load)
            .build()
            .unwrap()
    }

    #[test]
    fn run_reports_reference_scenario() {
        let report = run(&config(0.0, 0.0), 90.0).unwrap();

        assert_eq!(report.elbow_angle_deg, 90.0);
        assert!(f64_approx_equal(report.torque, 2.5725));
        assert!(f64_approx_equal(report.muscle_force_magnitude, 68.6));
        assert!(f64_approx_equal(report.muscle_force.x, 0.0));
        assert!(f64_approx_equal(report.muscle_force.y, 68.6));
        assert!(f64_approx_equal(report.joint_reaction.y, 1.75 * 9.8 - 68.6));
        assert!(f64_approx_equal(
            report.joint_reaction_magnitude,
            (68.6 - 1.75 * 9.8_f64).abs()
        ));
        assert_eq!(report.parameters.body_mass, 70.0);
    }

    #[test]
    fn run_matches_model_queries() {
        let cfg = config(30.0, 2.0);
        let report = run(&cfg, 75.0).unwrap();
        let model = cfg.build_model().unwrap();

        assert_eq!(report.torque, model.torque(75.0));
        assert_eq!(report.muscle_force, model.muscle_force_vector(75.0));
        assert_eq!(report.joint_reaction, model.joint_reaction_vector(75.0));
    }

    #[test]
    fn run_rejects_invalid_posture_before_building_model() {
        let mut cfg = config(100.0, 0.0);
        cfg.subject.body_mass = -1.0;

        let result = run(&cfg, 85.0);
        assert!(matches!(
            result,
            Err(WorkflowError::Validation(
                ValidationError::CombinedAngleOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn run_rejects_invalid_subject() {
        let mut cfg = config(0.0, 0.0);
        cfg.subject.forearm_length = 0.0;
        assert!(matches!(run(&cfg, 90.0), Err(WorkflowError::Model(_))));
    }
}
