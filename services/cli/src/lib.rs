mod cli;
mod commands;
mod render;

use loan_approval::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
