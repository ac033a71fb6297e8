use clap::ValueEnum;
use loan_approval::approval::{
    ApprovalChain, ApprovalLevel, ApprovalResult, LoanRange, Request, Response,
};
use loan_approval::error::AppError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct DecisionView<'a> {
    business_type: &'static str,
    loan_amount: u32,
    result: ApprovalResult,
    result_code: u8,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ChainView<'a> {
    min_amount: u32,
    max_amount: u32,
    levels: &'a [ApprovalLevel],
}

pub(crate) fn render_decision<W: Write>(
    request: &Request,
    response: &Response,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "loan amount is {}, result is {}, {}",
                request.loan_amount(),
                response.result().code(),
                response.message()
            )?;
        }
        OutputFormat::Json => {
            let view = DecisionView {
                business_type: request.business_type().label(),
                loan_amount: request.loan_amount(),
                result: response.result(),
                result_code: response.result().code(),
                message: response.message(),
            };
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub(crate) fn render_levels<W: Write>(
    chain: &ApprovalChain,
    range: &LoanRange,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "Approval chain ({} levels), accepted amounts {}~{}",
                chain.len(),
                range.min(),
                range.max()
            )?;
            for (index, level) in chain.levels().iter().enumerate() {
                writeln!(out, "{}. {} up to {}", index + 1, level.label, level.limit)?;
            }
            if chain.max_limit() < range.max() {
                writeln!(
                    out,
                    "note: amounts above {} will reach the end of the chain",
                    chain.max_limit()
                )?;
            }
        }
        OutputFormat::Json => {
            let view = ChainView {
                min_amount: range.min(),
                max_amount: range.max(),
                levels: chain.levels(),
            };
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
