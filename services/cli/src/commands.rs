use crate::render::{render_decision, render_levels, OutputFormat};
use clap::Args;
use loan_approval::approval::{parse_amount, ApprovalChain, LoanRange, Request};
use loan_approval::error::AppError;
use std::io::{BufRead, Write};

#[derive(Args, Debug)]
pub(crate) struct ApproveArgs {
    /// Loan amount to submit
    #[arg(long)]
    pub(crate) amount: String,
    /// Output format for the decision
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct LevelsArgs {
    /// Output format for the level listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_prompt<R, W>(
    chain: &ApprovalChain,
    range: &LoanRange,
    mut input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "please input the amount of loan({}~{}):", range.min(), range.max())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    submit(chain, range, &line, OutputFormat::Text, out)
}

pub(crate) fn run_approve<W: Write>(
    args: ApproveArgs,
    chain: &ApprovalChain,
    range: &LoanRange,
    out: &mut W,
) -> Result<(), AppError> {
    submit(chain, range, &args.amount, args.format, out)
}

pub(crate) fn run_levels<W: Write>(
    args: LevelsArgs,
    chain: &ApprovalChain,
    range: &LoanRange,
    out: &mut W,
) -> Result<(), AppError> {
    render_levels(chain, range, args.format, out)
}

fn submit<W: Write>(
    chain: &ApprovalChain,
    range: &LoanRange,
    raw: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let amount = range.check(parse_amount(raw)?)?;
    let request = Request::loan(amount);
    let response = chain.handle(Some(&request));

    render_decision(&request, &response, format, out)
}
