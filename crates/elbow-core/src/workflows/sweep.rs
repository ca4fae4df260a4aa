use super::config::SessionConfig;
use super::error::WorkflowError;
use crate::core::model::{ForearmLeverModel, ModelParameters};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

/// The three curves a sweep is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Torque,
    MuscleForce,
    JointReaction,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Self::Torque, Self::MuscleForce, Self::JointReaction];

    pub fn label(self) -> &'static str {
        match self {
            Self::Torque => "Moment of force around elbow",
            Self::MuscleForce => "Force of forearm muscle",
            Self::JointReaction => "Reaction force of elbow",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Torque => "Nm",
            Self::MuscleForce | Self::JointReaction => "N",
        }
    }

    fn of(self, sample: &SweepSample) -> f64 {
        match self {
            Self::Torque => sample.torque_nm,
            Self::MuscleForce => sample.muscle_force_n,
            Self::JointReaction => sample.joint_reaction_n,
        }
    }
}

/// One row of a sweep. Field names double as CSV column headers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSample {
    pub elbow_angle_deg: u32,
    pub torque_nm: f64,
    pub muscle_force_n: f64,
    pub joint_reaction_n: f64,
    pub muscle_force_x_n: f64,
    pub muscle_force_y_n: f64,
    pub joint_reaction_x_n: f64,
    pub joint_reaction_y_n: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub elbow_angle_deg: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub parameters: ModelParameters,
    pub samples: Vec<SweepSample>,
}

impl SweepReport {
    /// Evaluates the model at each of its allowed elbow angles.
    pub fn evaluate(model: &ForearmLeverModel) -> Self {
        let allowed = model.allowed_angles();
        let angles: Vec<f64> = allowed.iter().copied().map(f64::from).collect();

        let torques = model.torques(&angles);
        let muscle_forces = model.muscle_force_magnitudes(&angles);
        let reactions = model.joint_reaction_magnitudes(&angles);
        let muscle_x = model.evaluate(&angles, ForearmLeverModel::muscle_force_x);
        let muscle_y = model.evaluate(&angles, ForearmLeverModel::muscle_force_y);
        let reaction_x = model.evaluate(&angles, ForearmLeverModel::joint_reaction_x);
        let reaction_y = model.evaluate(&angles, ForearmLeverModel::joint_reaction_y);

        let samples = allowed
            .iter()
            .enumerate()
            .map(|(i, &angle)| SweepSample {
                elbow_angle_deg: angle,
                torque_nm: torques[i],
                muscle_force_n: muscle_forces[i],
                joint_reaction_n: reactions[i],
                muscle_force_x_n: muscle_x[i],
                muscle_force_y_n: muscle_y[i],
                joint_reaction_x_n: reaction_x[i],
                joint_reaction_y_n: reaction_y[i],
            })
            .collect();

        Self {
            parameters: model.describe(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The x axis of every curve, in degrees.
    pub fn angles(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.elbow_angle_deg).collect()
    }

    /// The y values of one curve, in sample order.
    pub fn curve(&self, quantity: Quantity) -> Vec<f64> {
        self.samples.iter().map(|s| quantity.of(s)).collect()
    }

    /// Largest value of a curve and the angle where it occurs. The first angle wins ties.
    pub fn peak(&self, quantity: Quantity) -> Option<Peak> {
        self.samples
            .iter()
            .map(|s| Peak {
                elbow_angle_deg: s.elbow_angle_deg,
                value: quantity.of(s),
            })
            .reduce(|best, p| if p.value.total_cmp(&best.value).is_gt() { p } else { best })
    }

    /// Writes one header row and one row per sample.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        if self.samples.is_empty() {
            wtr.write_record([
                "elbow_angle_deg",
                "torque_nm",
                "muscle_force_n",
                "joint_reaction_n",
                "muscle_force_x_n",
                "muscle_force_y_n",
                "joint_reaction_x_n",
                "joint_reaction_y_n",
            ])?;
        }
        for sample in &self.samples {
            wtr.serialize(sample)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Builds the configured model and sweeps it over its allowed elbow range.
///
/// # Errors
///
/// Returns [`WorkflowError::Model`] for a non-positive body mass or forearm length.
pub fn run(config: &SessionConfig) -> Result<SweepReport, WorkflowError> {
    let model = config.build_model()?;
    let report = SweepReport::evaluate(&model);
    if report.is_empty() {
        warn!(
            "No elbow angle is valid with the shoulder at {}°.",
            model.shoulder_angle_deg()
        );
    } else {
        debug!(
            "Swept {} elbow angles from {}° to {}°.",
            report.len(),
            report.samples[0].elbow_angle_deg,
            report.samples[report.len() - 1].elbow_angle_deg
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::config::SessionConfigBuilder;

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
    fn run_samples_every_allowed_angle() {
        let report = run(&config(0.0, 0.0)).unwrap();
        assert_eq!(report.len(), 126);
        assert_eq!(report.angles(), (10..=135).collect::<Vec<u32>>());

        let report = run(&config(50.0, 0.0)).unwrap();
        assert_eq!(report.angles(), (10..=129).collect::<Vec<u32>>());
    }

    #[test]
    fn run_with_no_valid_angles_is_empty_not_an_error() {
        let report = run(&config(170.0, 0.0)).unwrap();
        assert!(report.is_empty());
        assert!(report.peak(Quantity::Torque).is_none());
    }

    #[test]
    fn samples_agree_with_model_queries() {
        let cfg = config(20.0, 3.0);
        let model = cfg.build_model().unwrap();
        let report = run(&cfg).unwrap();

        for sample in &report.samples {
            let theta = f64::from(sample.elbow_angle_deg);
            assert_eq!(sample.torque_nm, model.torque(theta));
            assert_eq!(sample.muscle_force_n, model.muscle_force_magnitude(theta));
            assert_eq!(sample.joint_reaction_n, model.joint_reaction_magnitude(theta));
            assert_eq!(sample.joint_reaction_x_n, -sample.muscle_force_x_n);
        }
    }

    #[test]
    fn curve_returns_values_in_angle_order() {
        let report = run(&config(0.0, 1.0)).unwrap();
        let torques = report.curve(Quantity::Torque);
        assert_eq!(torques.len(), report.len());
        assert_eq!(torques[0], report.samples[0].torque_nm);
    }

    #[test]
    fn torque_peaks_at_right_angle_with_shoulder_at_rest() {
        let report = run(&config(0.0, 2.0)).unwrap();
        let peak = report.peak(Quantity::Torque).unwrap();
        assert_eq!(peak.elbow_angle_deg, 90);
    }

    #[test]
    fn muscle_force_peaks_at_smallest_angle_with_raised_shoulder() {
        // F grows with cot(theta) once the shoulder is raised.
        let report = run(&config(30.0, 2.0)).unwrap();
        let peak = report.peak(Quantity::MuscleForce).unwrap();
        assert_eq!(peak.elbow_angle_deg, 10);
    }

    #[test]
    fn write_csv_emits_header_and_one_row_per_sample() {
        let report = run(&config(50.0, 1.0)).unwrap();
        let mut buffer = Vec::new();
        report.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), report.len() + 1);
        assert_eq!(
            lines[0],
            "elbow_angle_deg,torque_nm,muscle_force_n,joint_reaction_n,\
             muscle_force_x_n,muscle_force_y_n,joint_reaction_x_n,joint_reaction_y_n"
        );
        assert!(lines[1].starts_with("10,"));
        assert!(lines[lines.len() - 1].starts_with("129,"));
    }

    #[test]
    fn write_csv_of_empty_sweep_still_has_header() {
        let report = run(&config(175.0, 0.0)).unwrap();
        let mut buffer = Vec::new();
        report.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("elbow_angle_deg,"));
    }

    #[test]
    fn quantity_labels_carry_units() {
        assert_eq!(Quantity::Torque.unit(), "Nm");
        assert_eq!(Quantity::MuscleForce.unit(), "N");
        assert_eq!(Quantity::ALL.len(), 3);
        assert!(Quantity::JointReaction.label().contains("elbow"));
    }
}
