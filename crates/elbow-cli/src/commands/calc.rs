use super::{input_source, load_session};
use crate::cli::CalcArgs;
use crate::config::resolve_required;
use crate::error::Result;
use elbowmech::workflows::calculate::{self, PointReport};
use std::io::{self, Write};
use tracing::info;

pub fn run(args: CalcArgs) -> Result<()> {
    let mut ask = input_source(&args.session);
    let config = load_session(&args.session, &mut ask)?;
    let elbow_angle = resolve_required(
        args.elbow_angle,
        "elbow_angle",
        "Elbow flexion angle [degrees]",
        &mut ask,
    )?;

    info!("Calculating lever statics at elbow angle {}°.", elbow_angle);
    let report = calculate::run(&config, elbow_angle)?;

    let mut stdout = io::stdout().lock();
    render(&report, &mut stdout)?;
    Ok(())
}

fn render(report: &PointReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "------------------")?;
    writeln!(out, "{}", report.parameters)?;
    writeln!(out, "Elbow angle       : {} [degrees]", report.elbow_angle_deg)?;
    writeln!(out, "------------------")?;
    writeln!(out, "Results")?;
    writeln!(out, "Elbow torque (rotational axis) [Nm]: {}", report.torque)?;
    writeln!(out, "Muscle force magnitude [N]: {}", report.muscle_force_magnitude)?;
    writeln!(out, "Joint reaction magnitude [N]: {}", report.joint_reaction_magnitude)?;
    writeln!(
        out,
        "Muscle force vector [N]: [{}, {}]",
        report.muscle_force.x, report.muscle_force.y
    )?;
    writeln!(
        out,
        "Joint reaction vector [N]: [{}, {}]",
        report.joint_reaction.x, report.joint_reaction.y
    )
}
