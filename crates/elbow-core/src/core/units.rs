/// Gravitational acceleration used throughout the model, in m/s².
pub const GRAVITY: f64 = 9.8;

/// Fraction of body mass carried by the forearm and hand.
pub const FOREARM_HAND_MASS_FRACTION: f64 = 0.025;

/// Distance from the elbow axis to the biceps tendon insertion, as a fraction of forearm length.
pub const TENDON_MOMENT_ARM_FRACTION: f64 = 0.125;

/// Distance from the elbow axis to the forearm+hand center of mass, as a fraction of
/// forearm length.
pub const CENTER_OF_MASS_FRACTION: f64 = 0.5;

/// Converts an angle in degrees to radians.
///
/// Every trigonometric call in the model goes through this function; the public API
/// speaks degrees only.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}
