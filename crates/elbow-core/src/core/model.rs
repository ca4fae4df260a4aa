use super::error::ModelError;
use super::units::{
    CENTER_OF_MASS_FRACTION, FOREARM_HAND_MASS_FRACTION, GRAVITY, TENDON_MOMENT_ARM_FRACTION,
    deg_to_rad,
};
use nalgebra::Vector2;
use std::fmt;

/// Smallest elbow flexion angle, in degrees, that the model treats as valid.
///
/// Below this angle the tendon moment arm's sine term approaches zero and the muscle
/// force diverges.
pub const MIN_ELBOW_ANGLE_DEG: u32 = 10;

/// Largest elbow flexion angle, in degrees, used while the shoulder is below
/// [`SHOULDER_RESTRICTION_THRESHOLD_DEG`].
pub const MAX_ELBOW_ANGLE_DEG: u32 = 135;

/// Shoulder flexion angle from which the combined-flexion limit governs the elbow range.
pub const SHOULDER_RESTRICTION_THRESHOLD_DEG: f64 = 45.0;

/// Upper bound (exclusive) on shoulder + elbow flexion, in degrees.
pub const COMBINED_FLEXION_LIMIT_DEG: f64 = 180.0;

/// A static lever model of the forearm, hinged at the elbow and held by the biceps tendon.
///
/// The anatomical constants are derived once from body mass and forearm length and never
/// change afterwards. Only the shoulder flexion angle and the load held in the hand can be
/// reconfigured, through [`set_shoulder_angle`](Self::set_shoulder_angle) and
/// [`set_load`](Self::set_load).
///
/// All angles in the public API are in degrees. Forces are in newtons, torques in
/// newton-meters.
///
/// # Singularities
///
/// [`muscle_force_magnitude`](Self::muscle_force_magnitude) divides by the sine of the
/// elbow angle. The model does not guard against a zero sine: the result follows IEEE-754
/// division, so a non-zero torque yields a signed infinity and a zero torque yields NaN.
/// The range returned by [`allowed_angles`](Self::allowed_angles) never reaches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForearmLeverModel {
    body_mass: f64,
    forearm_length: f64,
    forearm_hand_mass: f64,
    tendon_moment_arm: f64,
    center_of_mass_distance: f64,
    shoulder_angle_deg: f64,
    load_mass: f64,
}

impl ForearmLeverModel {
    /// Creates a model for a subject of `body_mass` kg with a forearm of `forearm_length` m.
    ///
    /// The inputs are not checked; use [`try_new`](Self::try_new) when they come from
    /// an untrusted source. Shoulder angle and load both start at zero.
    pub fn new(body_mass: f64, forearm_length: f64) -> Self {
        Self {
            body_mass,
            forearm_length,
            forearm_hand_mass: FOREARM_HAND_MASS_FRACTION * body_mass,
            tendon_moment_arm: TENDON_MOMENT_ARM_FRACTION * forearm_length,
            center_of_mass_distance: CENTER_OF_MASS_FRACTION * forearm_length,
            shoulder_angle_deg: 0.0,
            load_mass: 0.0,
        }
    }

    /// Creates a model, rejecting a body mass or forearm length that is not a positive,
    /// finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParameter`] naming the first offending input.
    pub fn try_new(body_mass: f64, forearm_length: f64) -> Result<Self, ModelError> {
        ensure_positive("body_mass", body_mass)?;
        ensure_positive("forearm_length", forearm_length)?;
        Ok(Self::new(body_mass, forearm_length))
    }

    pub fn body_mass(&self) -> f64 {
        self.body_mass
    }

    pub fn forearm_length(&self) -> f64 {
        self.forearm_length
    }

    /// Mass of the forearm and hand, in kg.
    pub fn forearm_hand_mass(&self) -> f64 {
        self.forearm_hand_mass
    }

    /// Distance from the elbow axis to the biceps tendon insertion, in m.
    pub fn tendon_moment_arm(&self) -> f64 {
        self.tendon_moment_arm
    }

    /// Distance from the elbow axis to the forearm+hand center of mass, in m.
    pub fn center_of_mass_distance(&self) -> f64 {
        self.center_of_mass_distance
    }

    pub fn shoulder_angle_deg(&self) -> f64 {
        self.shoulder_angle_deg
    }

    pub fn load_mass(&self) -> f64 {
        self.load_mass
    }

    pub fn set_shoulder_angle(&mut self, angle_deg: f64) {
        self.shoulder_angle_deg = angle_deg;
    }

    pub fn set_load(&mut self, mass_kg: f64) {
        self.load_mass = mass_kg;
    }

    /// Rotational-axis component of the elbow joint torque, in Nm.
    pub fn torque(&self, elbow_angle_deg: f64) -> f64 {
        let moment = self.forearm_hand_mass * self.center_of_mass_distance
            + self.load_mass * self.forearm_length;
        GRAVITY
            * moment
            * (deg_to_rad(self.shoulder_angle_deg) + deg_to_rad(elbow_angle_deg)).sin()
    }

    /// Magnitude of the biceps/brachialis tendon force, in N.
    pub fn muscle_force_magnitude(&self, elbow_angle_deg: f64) -> f64 {
        self.torque(elbow_angle_deg)
            / (self.tendon_moment_arm * deg_to_rad(elbow_angle_deg).sin())
    }

    pub fn muscle_force_x(&self, elbow_angle_deg: f64) -> f64 {
        -self.muscle_force_magnitude(elbow_angle_deg) * deg_to_rad(self.shoulder_angle_deg).sin()
    }

    pub fn muscle_force_y(&self, elbow_angle_deg: f64) -> f64 {
        self.muscle_force_magnitude(elbow_angle_deg) * deg_to_rad(self.shoulder_angle_deg).cos()
    }

    /// Tendon force as `[x, y]`, in N.
    pub fn muscle_force_vector(&self, elbow_angle_deg: f64) -> Vector2<f64> {
        Vector2::new(
            self.muscle_force_x(elbow_angle_deg),
            self.muscle_force_y(elbow_angle_deg),
        )
    }

    /// Horizontal joint reaction. The tendon is the only other horizontal force on the
    /// forearm, so this is its exact opposite.
    pub fn joint_reaction_x(&self, elbow_angle_deg: f64) -> f64 {
        -self.muscle_force_x(elbow_angle_deg)
    }

    /// Vertical joint reaction: the weight of forearm, hand and load minus the vertical
    /// tendon component.
    pub fn joint_reaction_y(&self, elbow_angle_deg: f64) -> f64 {
        (self.forearm_hand_mass + self.load_mass) * GRAVITY - self.muscle_force_y(elbow_angle_deg)
    }

    pub fn joint_reaction_magnitude(&self, elbow_angle_deg: f64) -> f64 {
        self.joint_reaction_x(elbow_angle_deg)
            .hypot(self.joint_reaction_y(elbow_angle_deg))
    }

    /// Joint reaction force as `[x, y]`, in N.
    pub fn joint_reaction_vector(&self, elbow_angle_deg: f64) -> Vector2<f64> {
        Vector2::new(
            self.joint_reaction_x(elbow_angle_deg),
            self.joint_reaction_y(elbow_angle_deg),
        )
    }

    /// Applies a scalar query to every angle in `angles`, preserving order and length.
    ///
    /// ```
    /// use elbowmech::core::model::ForearmLeverModel;
    ///
    /// let model = ForearmLeverModel::new(70.0, 0.3);
    /// let torques = model.evaluate(&[30.0, 60.0, 90.0], ForearmLeverModel::torque);
    /// assert_eq!(torques.len(), 3);
    /// ```
    pub fn evaluate<F>(&self, angles: &[f64], quantity: F) -> Vec<f64>
    where
        F: Fn(&Self, f64) -> f64,
    {
        angles.iter().map(|&angle| quantity(self, angle)).collect()
    }

    pub fn torques(&self, angles: &[f64]) -> Vec<f64> {
        self.evaluate(angles, Self::torque)
    }

    pub fn muscle_force_magnitudes(&self, angles: &[f64]) -> Vec<f64> {
        self.evaluate(angles, Self::muscle_force_magnitude)
    }

    pub fn joint_reaction_magnitudes(&self, angles: &[f64]) -> Vec<f64> {
        self.evaluate(angles, Self::joint_reaction_magnitude)
    }

    /// Integer elbow flexion angles, in ascending order, that are anatomically valid for
    /// the current shoulder angle.
    ///
    /// With the shoulder below 45° this is `10..=135`. From 45° on, shoulder and elbow
    /// flexion together must stay below 180°, so the range is every integer `n >= 10`
    /// with `n < 180 - shoulder`. An empty range is a valid result.
    pub fn allowed_angles(&self) -> Vec<u32> {
        if self.shoulder_angle_deg < SHOULDER_RESTRICTION_THRESHOLD_DEG {
            return (MIN_ELBOW_ANGLE_DEG..=MAX_ELBOW_ANGLE_DEG).collect();
        }

        let upper = (COMBINED_FLEXION_LIMIT_DEG - self.shoulder_angle_deg).ceil() - 1.0;
        if upper.is_nan() || upper < f64::from(MIN_ELBOW_ANGLE_DEG) {
            return Vec::new();
        }
        (MIN_ELBOW_ANGLE_DEG..=upper as u32).collect()
    }

    /// Snapshot of the parameters worth showing to a user.
    pub fn describe(&self) -> ModelParameters {
        ModelParameters {
            body_mass: self.body_mass,
            forearm_hand_mass: self.forearm_hand_mass,
            forearm_length: self.forearm_length,
            shoulder_angle_deg: self.shoulder_angle_deg,
            load_mass: self.load_mass,
        }
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter { name, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub body_mass: f64,
    pub forearm_hand_mass: f64,
    pub forearm_length: f64,
    pub shoulder_angle_deg: f64,
    pub load_mass: f64,
}

impl fmt::Display for ModelParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Body mass         : {} [kg]", self.body_mass)?;
        writeln!(f, "Forearm+hand mass : {} [kg]", self.forearm_hand_mass)?;
        writeln!(f, "Forearm length    : {} [m]", self.forearm_length)?;
        writeln!(f, "Shoulder angle    : {} [degrees]", self.shoulder_angle_deg)?;
        write!(f, "Load              : {} [kg]", self.load_mass)
    }
}
