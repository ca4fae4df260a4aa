use crate::cli::SessionArgs;
use crate::error::{CliError, Result};
use crate::utils::prompt::Ask;
use elbowmech::workflows::config::{SessionConfig, SessionConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSubjectConfig {
    #[serde(rename = "body-mass")]
    body_mass: Option<f64>,
    #[serde(rename = "forearm-length")]
    forearm_length: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPostureConfig {
    #[serde(rename = "shoulder-angle")]
    shoulder_angle: Option<f64>,
    load: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSessionConfig {
    subject: Option<PartialSubjectConfig>,
    posture: Option<PartialPostureConfig>,
}

impl PartialSessionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the config file named in `args`, if any, and applies its `--set` overrides.
    pub fn load(args: &SessionArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_set_values(&args.set_values)?;
        Ok(config)
    }

    /// Resolves every session input as: CLI flag, then file (with `--set` applied), then
    /// `ask`. Inputs are asked for in the order body mass, forearm length, load, shoulder
    /// angle.
    pub fn merge_with_cli(
        mut self,
        args: &SessionArgs,
        ask: &mut impl Ask,
    ) -> Result<SessionConfig> {
        let subject = self.subject.take().unwrap_or_default();
        let posture = self.posture.take().unwrap_or_default();

        let mut builder = SessionConfigBuilder::new();
        if let Some(kg) = resolve(args.body_mass, subject.body_mass, "Body mass [kg]", ask)? {
            builder = builder.body_mass(kg);
        }
        if let Some(m) = resolve(
            args.forearm_length,
            subject.forearm_length,
            "Forearm length [m]",
            ask,
        )? {
            builder = builder.forearm_length(m);
        }
        if let Some(kg) = resolve(args.load, posture.load, "Load mass [kg]", ask)? {
            builder = builder.load_mass(kg);
        }
        if let Some(deg) = resolve(
            args.shoulder_angle,
            posture.shoulder_angle,
            "Shoulder flexion angle [degrees]",
            ask,
        )? {
            builder = builder.shoulder_angle_deg(deg);
        }

        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        debug!("Resolved session configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let value: f64 = value_str.trim().parse().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })?;

            match key.trim() {
                "subject.body-mass" => {
                    self.subject.get_or_insert_with(Default::default).body_mass = Some(value);
                }
                "subject.forearm-length" => {
                    self.subject
                        .get_or_insert_with(Default::default)
                        .forearm_length = Some(value);
                }
                "posture.shoulder-angle" => {
                    self.posture
                        .get_or_insert_with(Default::default)
                        .shoulder_angle = Some(value);
                }
                "posture.load" => {
                    self.posture.get_or_insert_with(Default::default).load = Some(value);
                }
                other => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        other
                    )));
                }
            }
        }
        Ok(())
    }
}

fn resolve(
    cli_value: Option<f64>,
    file_value: Option<f64>,
    question: &str,
    ask: &mut impl Ask,
) -> Result<Option<f64>> {
    match cli_value.or(file_value) {
        Some(value) => Ok(Some(value)),
        None => ask.ask_f64(question),
    }
}

/// Resolves a value that only ever comes from the command line or a prompt.
pub fn resolve_required(
    cli_value: Option<f64>,
    name: &'static str,
    question: &str,
    ask: &mut impl Ask,
) -> Result<f64> {
    resolve(cli_value, None, question, ask)?
        .ok_or_else(|| CliError::Config(format!("Missing required parameter: {}", name)))
}
