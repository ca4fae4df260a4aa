use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "elbow - static torque, biceps force and joint reaction of the forearm lever.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute torque, muscle force and joint reaction at a single elbow angle.
    Calc(CalcArgs),
    /// Evaluate the torque, muscle force and joint reaction curves over the allowed elbow range.
    Sweep(SweepArgs),
    /// Print the model parameters for a subject and posture.
    Describe(SessionArgs),
}

/// Inputs shared by every subcommand. Values missing here are prompted for on stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Path to a session configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Body mass of the subject in kilograms.
    #[arg(short = 'm', long, value_name = "KG")]
    pub body_mass: Option<f64>,

    /// Forearm length of the subject in meters.
    #[arg(short = 'l', long, value_name = "M")]
    pub forearm_length: Option<f64>,

    /// Mass of the weight held in the hand, in kilograms.
    #[arg(short = 'w', long, value_name = "KG")]
    pub load: Option<f64>,

    /// Shoulder flexion angle in degrees.
    #[arg(short = 'b', long, value_name = "DEG", allow_negative_numbers = true)]
    pub shoulder_angle: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S posture.load=2.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Fail on missing values instead of prompting for them.
    /// Shoulder angle and load then default to 0.
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for the `calc` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CalcArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Elbow flexion angle in degrees.
    #[arg(short = 'e', long, value_name = "DEG", allow_negative_numbers = true)]
    pub elbow_angle: Option<f64>,
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Write every sample of the sweep to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip printing the table of curves; only peaks are shown.
    #[arg(long)]
    pub no_table: bool,
}
