//! Specture - lightweight planning documents for software teams

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = specture_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
