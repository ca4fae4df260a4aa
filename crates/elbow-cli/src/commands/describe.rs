use super::{input_source, load_session};
use crate::cli::SessionArgs;
use crate::error::Result;
use elbowmech::core::model::ForearmLeverModel;
use elbowmech::workflows::error::WorkflowError;
use std::io::{self, Write};

pub fn run(args: SessionArgs) -> Result<()> {
    let mut ask = input_source(&args);
    let model = load_session(&args, &mut ask)?
        .build_model()
        .map_err(WorkflowError::from)?;

    let mut stdout = io::stdout().lock();
    render(&model, &mut stdout)?;
    Ok(())
}

fn render(model: &ForearmLeverModel, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", model.describe())?;
    let angles = model.allowed_angles();
    match (angles.first(), angles.last()) {
        (Some(first), Some(last)) => writeln!(
            out,
            "Allowed elbow angles: {}..={} [degrees] ({} angles)",
            first,
            last,
            angles.len()
        ),
        _ => writeln!(out, "Allowed elbow angles: none for this shoulder angle"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_parameters_and_allowed_range() {
        let mut model = ForearmLeverModel::new(70.0, 0.3);
        model.set_shoulder_angle(50.0);

        let mut buffer = Vec::new();
        render(&model, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Forearm length    : 0.3 [m]"));
        assert!(text.contains("Allowed elbow angles: 10..=129 [degrees] (120 angles)"));
    }

    #[test]
    fn render_reports_empty_range() {
        let mut model = ForearmLeverModel::new(70.0, 0.3);
        model.set_shoulder_angle(170.0);

        let mut buffer = Vec::new();
        render(&model, &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("none for this shoulder angle"));
    }
}
