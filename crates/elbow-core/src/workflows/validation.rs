use crate::core::model::{COMBINED_FLEXION_LIMIT_DEG, MIN_ELBOW_ANGLE_DEG};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("shoulder flexion angle must be non-negative, got {0}°")]
    NegativeShoulderAngle(f64),

    #[error("elbow flexion angle must be at least {min}°, got {angle}°")]
    ElbowAngleBelowMinimum { angle: f64, min: u32 },

    #[error("shoulder and elbow flexion must sum to less than {limit}°, got {shoulder}° + {elbow}°")]
    CombinedAngleOutOfRange {
        shoulder: f64,
        elbow: f64,
        limit: f64,
    },
}

/// Checks that a shoulder/elbow posture is one the model can be asked about.
///
/// NaN angles fail the same checks as out-of-range ones.
pub fn validate_posture(
    shoulder_angle_deg: f64,
    elbow_angle_deg: f64,
) -> Result<(), ValidationError> {
    if shoulder_angle_deg.is_nan() || shoulder_angle_deg < 0.0 {
        return Err(ValidationError::NegativeShoulderAngle(shoulder_angle_deg));
    }
    if elbow_angle_deg.is_nan() || elbow_angle_deg < f64::from(MIN_ELBOW_ANGLE_DEG) {
        return Err(ValidationError::ElbowAngleBelowMinimum {
            angle: elbow_angle_deg,
            min: MIN_ELBOW_ANGLE_DEG,
        });
    }
    if shoulder_angle_deg + elbow_angle_deg >= COMBINED_FLEXION_LIMIT_DEG {
        return Err(ValidationError::CombinedAngleOutOfRange {
            shoulder: shoulder_angle_deg,
            elbow: elbow_angle_deg,
            limit: COMBINED_FLEXION_LIMIT_DEG,
        });
    }
    Ok(())
}
