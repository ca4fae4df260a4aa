pub mod calc;
pub mod describe;
pub mod sweep;

use crate::cli::SessionArgs;
use crate::config::PartialSessionConfig;
use crate::error::Result;
use crate::utils::prompt::{Ask, NoPrompt, Prompter};
use elbowmech::workflows::config::SessionConfig;
use tracing::info;

/// Picks where missing inputs come from: the terminal, or nowhere with `--no-prompt`.
pub(crate) fn input_source(args: &SessionArgs) -> Box<dyn Ask> {
    if args.no_prompt {
        Box::new(NoPrompt)
    } else {
        Box::new(Prompter::stdio())
    }
}

pub(crate) fn load_session(args: &SessionArgs, ask: &mut impl Ask) -> Result<SessionConfig> {
    info!("Merging configuration from file and CLI arguments...");
    PartialSessionConfig::load(args)?.merge_with_cli(args, ask)
}
