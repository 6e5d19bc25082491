mod cli;
mod commands;
mod infra;

use interview_board::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
