use crate::commands::{run_approve, run_levels, run_prompt, ApproveArgs, LevelsArgs};
use clap::{Parser, Subcommand};
use loan_approval::config::AppConfig;
use loan_approval::error::AppError;
use loan_approval::telemetry;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "loan-approval",
    about = "Route a loan request through the bank's approval chain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for an amount on stdin and run it through the chain (default command)
    Prompt,
    /// Submit an amount given on the command line
    Approve(ApproveArgs),
    /// Show the configured approval levels and accepted range
    Levels(LevelsArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let chain = config.chain.build_chain()?;
    let range = config.chain.loan_range;
    info!(
        ?config.environment,
        levels = chain.len(),
        min = range.min(),
        max = range.max(),
        "loan approval chain assembled"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Prompt) {
        Command::Prompt => run_prompt(&chain, &range, io::stdin().lock(), &mut out),
        Command::Approve(args) => run_approve(args, &chain, &range, &mut out),
        Command::Levels(args) => run_levels(args, &chain, &range, &mut out),
    }
}
