use elbowmech::core::model::ForearmLeverModel;
use elbowmech::workflows::config::SessionConfigBuilder;
use elbowmech::workflows::sweep::{self, Quantity};
use elbowmech::workflows::{calculate, error::WorkflowError};

const TOLERANCE: f64 = 1e-9;

fn f64_approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[test]
fn single_point_and_sweep_agree_at_shared_angles() {
    let config = SessionConfigBuilder::new()
        .body_mass(82.0)
        .forearm_length(0.28)
        .shoulder_angle_deg(60.0)
        .load_mass(4.0)
        .build()
        .unwrap();

    let report = sweep::run(&config).unwrap();
    assert_eq!(report.len(), 110);

    for angle in [10u32, 55, 119] {
        let point = calculate::run(&config, f64::from(angle)).unwrap();
        let sample = report
            .samples
            .iter()
            .find(|s| s.elbow_angle_deg == angle)
            .unwrap();
        assert_eq!(point.torque, sample.torque_nm);
        assert_eq!(point.muscle_force_magnitude, sample.muscle_force_n);
        assert_eq!(point.joint_reaction_magnitude, sample.joint_reaction_n);
    }
}

#[test]
fn doubling_the_load_lever_scales_torque_linearly() {
    let mut model = ForearmLeverModel::new(70.0, 0.3);
    let unloaded = model.torque(90.0);
    model.set_load(1.0);
    let one_kg = model.torque(90.0);
    model.set_load(2.0);
    let two_kg = model.torque(90.0);

    assert!(f64_approx_equal(two_kg - one_kg, one_kg - unloaded));
    assert!(f64_approx_equal(one_kg - unloaded, 9.8 * 0.3));
}

#[test]
fn static_equilibrium_holds_across_the_sweep() {
    let config = SessionConfigBuilder::new()
        .body_mass(65.0)
        .forearm_length(0.26)
        .shoulder_angle_deg(20.0)
        .load_mass(3.0)
        .build()
        .unwrap();
    let model = config.build_model().unwrap();
    let weight = (model.forearm_hand_mass() + model.load_mass()) * 9.8;

    for sample in sweep::run(&config).unwrap().samples {
        let net_x = sample.muscle_force_x_n + sample.joint_reaction_x_n;
        let net_y = sample.muscle_force_y_n + sample.joint_reaction_y_n - weight;
        assert_eq!(net_x, 0.0);
        assert!(net_y.abs() < 1e-9 * weight.max(sample.muscle_force_n.abs()));
    }
}

#[test]
fn sweep_peaks_are_reported_for_every_curve() {
    let config = SessionConfigBuilder::new()
        .body_mass(70.0)
        .forearm_length(0.3)
        .build()
        .unwrap();
    let report = sweep::run(&config).unwrap();
    for quantity in Quantity::ALL {
        assert!(report.peak(quantity).is_some());
    }
}

#[test]
fn invalid_subject_surfaces_as_model_error() {
    let config = SessionConfigBuilder::new()
        .body_mass(0.0)
        .forearm_length(0.3)
        .build()
        .unwrap();
    assert!(matches!(sweep::run(&config), Err(WorkflowError::Model(_))));
}
