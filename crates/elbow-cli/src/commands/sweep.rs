use super::{input_source, load_session};
use crate::cli::SweepArgs;
use crate::error::{CliError, Result};
use elbowmech::workflows::error::WorkflowError;
use elbowmech::workflows::sweep::{self, Quantity, SweepReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: SweepArgs) -> Result<()> {
    let mut ask = input_source(&args.session);
    let config = load_session(&args.session, &mut ask)?;

    info!("Sweeping lever statics over the allowed elbow range...");
    let report = sweep::run(&config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", report.parameters)?;
    writeln!(stdout, "------------------")?;
    if report.is_empty() {
        warn!("Sweep produced no samples.");
        writeln!(
            stdout,
            "No elbow angle is valid with the shoulder at {}°.",
            report.parameters.shoulder_angle_deg
        )?;
    } else {
        if !args.no_table {
            render_table(&report, &mut stdout)?;
            writeln!(stdout, "------------------")?;
        }
        render_peaks(&report, &mut stdout)?;
    }

    if let Some(path) = &args.output {
        export_csv(&report, path)?;
        writeln!(
            stdout,
            "Sweep of {} angle(s) written to: {}",
            report.len(),
            path.display()
        )?;
    }
    Ok(())
}

fn export_csv(report: &SweepReport, path: &Path) -> Result<()> {
    info!("Writing sweep CSV to {:?}", path);
    let file = File::create(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    report
        .write_csv(BufWriter::new(file))
        .map_err(WorkflowError::from)?;
    Ok(())
}

fn render_table(report: &SweepReport, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{:>16}", "Elbow [degrees]")?;
    for quantity in Quantity::ALL {
        write!(out, " {:>36}", header(quantity))?;
    }
    writeln!(out)?;

    for sample in &report.samples {
        write!(out, "{:>16}", sample.elbow_angle_deg)?;
        for value in [
            sample.torque_nm,
            sample.muscle_force_n,
            sample.joint_reaction_n,
        ] {
            write!(out, " {:>36.4}", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_peaks(report: &SweepReport, out: &mut impl Write) -> io::Result<()> {
    for quantity in Quantity::ALL {
        if let Some(peak) = report.peak(quantity) {
            writeln!(
                out,
                "Peak {}: {:.4} at {}°",
                header(quantity),
                peak.value,
                peak.elbow_angle_deg
            )?;
        }
    }
    Ok(())
}

fn header(quantity: Quantity) -> String {
    format!("{} [{}]", quantity.label(), quantity.unit())
}
