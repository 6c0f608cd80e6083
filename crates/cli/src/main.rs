use std::process::ExitCode;

use clap::Parser;

mod commands;
mod prompt;

use commands::TimelineArgs;
use timeliner_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Create a timeline of the files in a folder"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: TimelineArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::timeline::run(cli.args)
}
